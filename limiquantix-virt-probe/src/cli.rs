//! Command-line argument parsing.

use clap::Parser;

/// limiquantix Virt Probe - Reports libvirt availability on this host
#[derive(Parser, Debug)]
#[command(name = "limiquantix-virt-probe")]
#[command(about = "limiquantix Virt Probe - Reports libvirt availability on this host")]
#[command(version)]
pub struct Args {
    /// Path to loader configuration file (YAML)
    #[arg(short, long, env = "LIMIQUANTIX_VIRT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Open a read-only connection to this URI and report on it
    #[arg(long)]
    pub uri: Option<String>,

    /// Check that a symbol is exported, as NAME or LIBRARY:NAME
    /// (library is one of core, qemu, lxc, admin)
    #[arg(short, long = "symbol")]
    pub symbols: Vec<String>,
}
