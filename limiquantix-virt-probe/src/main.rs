//! # limiquantix Virt Probe
//!
//! Loads the libvirt libraries the way the node agents do and reports which
//! of them are usable on this host, optionally opening a read-only
//! connection.
//!
//! ## Usage
//! ```bash
//! limiquantix-virt-probe --uri qemu:///system --symbol qemu:virDomainQemuAgentCommand
//! LIMIQUANTIX_LIBVIRT_CORE=/opt/libvirt/lib/libvirt.so.0 limiquantix-virt-probe
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use limiquantix_common::{init_logging, init_logging_json};
use limiquantix_virt::{configure, ConfigError, LoaderConfig};

mod cli;
mod probe;

use cli::Args;

const DEFAULT_CONFIG_PATH: &str = "/etc/limiquantix/virt.yaml";

fn main() -> Result<()> {
    let args = Args::parse();

    if args.log_json {
        init_logging_json(&args.log_level)?;
    } else {
        init_logging(&args.log_level)?;
    }

    info!(version = env!("CARGO_PKG_VERSION"), "Starting limiquantix Virt Probe");

    let config = load_config(&args)?;
    info!(config = ?config, "Loader configured");

    let symbols = args
        .symbols
        .iter()
        .map(|s| probe::parse_symbol(s))
        .collect::<Result<Vec<_>>>()?;

    let lv = configure(config).context("failed to configure libvirt binding")?;
    let report = probe::run(lv, args.uri.as_deref(), &symbols);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", probe::render_text(&report));
    }

    if report.libraries.iter().any(|s| !s.loaded && !s.library.is_optional()) {
        error!("Core libvirt library is not available");
        std::process::exit(1);
    }
    Ok(())
}

/// Explicit config file, then the default location, then defaults. Environment
/// variables override whichever was used.
fn load_config(args: &Args) -> Result<LoaderConfig> {
    let config = match &args.config {
        Some(path) => LoaderConfig::load(path)
            .map_err(|e| {
                error!(error = %e, path = %path, "Failed to load configuration");
                e
            })
            .with_context(|| format!("failed to load {path}"))?,
        None => match LoaderConfig::load(DEFAULT_CONFIG_PATH) {
            Ok(config) => {
                info!(config_path = %DEFAULT_CONFIG_PATH, "Configuration loaded from default location");
                config
            }
            Err(ConfigError::NotFound(_)) => {
                info!("No config file found, using defaults");
                LoaderConfig::default()
            }
            Err(e) => return Err(e).context("failed to load default configuration"),
        },
    };

    Ok(config.with_env_overrides())
}
