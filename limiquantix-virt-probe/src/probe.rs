//! Host probing through the runtime-loaded binding.

use std::ffi::{CStr, CString};
use std::fmt::Write as _;
use std::os::raw::{c_int, c_ulong};
use std::ptr;

use anyhow::{bail, Result};

use limiquantix_virt::{Library, Libvirt, VirError};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Everything the probe found out.
#[derive(Debug, Serialize)]
pub struct Report {
    pub libraries: Vec<LibraryStatus>,
    /// Version of the core library, as `major.minor.release`.
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub symbols: Vec<SymbolStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionReport>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SymbolStatus {
    pub library: Library,
    pub symbol: String,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct LibraryStatus {
    pub library: Library,
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct ConnectionReport {
    pub uri: String,
    pub connected: bool,
    pub hypervisor: Option<String>,
    pub hypervisor_version: Option<String>,
    pub active_domains: Option<i32>,
    pub inactive_domains: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run every probe. The connection is only attempted when `uri` is given.
pub fn run(lv: &Libvirt, uri: Option<&str>, symbols: &[(Library, String)]) -> Report {
    Report {
        libraries: libraries(lv),
        version: library_version(lv),
        symbols: symbols
            .iter()
            .map(|(library, symbol)| SymbolStatus {
                library: *library,
                symbol: symbol.clone(),
                available: lv.symbol_available(*library, symbol),
            })
            .collect(),
        connection: uri.map(|uri| connection(lv, uri)),
    }
}

/// Parse `NAME` (a core symbol) or `LIBRARY:NAME`.
pub fn parse_symbol(arg: &str) -> Result<(Library, String)> {
    let (library, name) = match arg.split_once(':') {
        Some((prefix, name)) => {
            let library = Library::ALL
                .into_iter()
                .find(|l| format!("{l:?}").eq_ignore_ascii_case(prefix));
            match library {
                Some(library) => (library, name),
                None => bail!("unknown library {prefix:?} in {arg:?}"),
            }
        }
        None => (Library::Core, arg),
    };

    if name.is_empty() {
        bail!("empty symbol name in {arg:?}");
    }
    Ok((library, name.to_string()))
}

/// Plain-text rendering for terminals.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "libvirt version: {}", report.version.as_deref().unwrap_or("unavailable"));

    for status in &report.libraries {
        match &status.error {
            None => {
                let _ = writeln!(out, "  {:<14} loaded", status.library.name());
            }
            Some(e) => {
                let _ = writeln!(out, "  {:<14} missing ({e})", status.library.name());
            }
        }
    }

    for status in &report.symbols {
        let state = if status.available { "present" } else { "missing" };
        let _ = writeln!(out, "  {}:{} {state}", status.library.name(), status.symbol);
    }

    if let Some(conn) = &report.connection {
        let _ = writeln!(out, "connection {}:", conn.uri);
        if conn.connected {
            let _ = writeln!(
                out,
                "  hypervisor {} {}",
                conn.hypervisor.as_deref().unwrap_or("?"),
                conn.hypervisor_version.as_deref().unwrap_or("?")
            );
            let _ = writeln!(
                out,
                "  domains: {} active, {} inactive",
                display_count(conn.active_domains),
                display_count(conn.inactive_domains)
            );
        }
        if let Some(e) = &conn.error {
            let _ = writeln!(out, "  error: {e}");
        }
    }
    out
}

fn display_count(n: Option<i32>) -> String {
    n.map_or_else(|| "?".to_string(), |n| n.to_string())
}

/// Try to open each native library.
pub fn libraries(lv: &Libvirt) -> Vec<LibraryStatus> {
    Library::ALL
        .iter()
        .map(|&library| match lv.library_status(library) {
            Ok(()) => {
                info!(library = %library, "Library available");
                LibraryStatus {
                    library,
                    loaded: true,
                    error: None,
                }
            }
            Err(e) => {
                if library.is_optional() {
                    debug!(library = %library, error = %e, "Optional library unavailable");
                } else {
                    warn!(library = %library, error = %e, "Core library unavailable");
                }
                LibraryStatus {
                    library,
                    loaded: false,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect()
}

/// Version of the loaded core library.
pub fn library_version(lv: &Libvirt) -> Option<String> {
    let mut err = VirError::default();
    let mut version: c_ulong = 0;
    let rc = unsafe { lv.virGetVersion(&mut version, ptr::null(), ptr::null_mut(), &mut err) };
    if rc < 0 {
        debug!(error = %err, "virGetVersion failed");
        return None;
    }
    Some(format_version(version))
}

/// Open `uri` read-only and gather a few facts about the hypervisor.
pub fn connection(lv: &Libvirt, uri: &str) -> ConnectionReport {
    let mut report = ConnectionReport {
        uri: uri.to_string(),
        ..ConnectionReport::default()
    };

    let c_uri = match CString::new(uri) {
        Ok(c_uri) => c_uri,
        Err(_) => {
            report.error = Some("URI contains a NUL byte".to_string());
            return report;
        }
    };

    let mut err = VirError::default();
    let conn = unsafe { lv.virConnectOpenReadOnly(c_uri.as_ptr(), &mut err) };
    if conn.is_null() {
        warn!(uri = %uri, error = %err, "Failed to connect");
        report.error = Some(if err.is_set() {
            err.to_string()
        } else {
            "virConnectOpenReadOnly is unavailable".to_string()
        });
        return report;
    }
    report.connected = true;
    info!(uri = %uri, "Connected");

    // SAFETY: `conn` is a live connection until the close below.
    unsafe {
        let hv_type = lv.virConnectGetType(conn, &mut err);
        if !hv_type.is_null() {
            report.hypervisor = Some(CStr::from_ptr(hv_type).to_string_lossy().into_owned());
        }

        let mut hv_version: c_ulong = 0;
        if lv.virConnectGetVersion(conn, &mut hv_version, &mut err) >= 0 {
            report.hypervisor_version = Some(format_version(hv_version));
        }

        report.active_domains = count(lv.virConnectNumOfDomains(conn, &mut err));
        report.inactive_domains = count(lv.virConnectNumOfDefinedDomains(conn, &mut err));

        if lv.virConnectClose(conn, &mut err) < 0 {
            warn!(uri = %uri, error = %err, "Failed to close connection");
        }
    }

    if err.is_set() {
        report.error = Some(err.to_string());
    }
    report
}

fn count(n: c_int) -> Option<i32> {
    (n >= 0).then_some(n)
}

/// Render libvirt's `major * 1_000_000 + minor * 1_000 + release` encoding.
pub fn format_version(version: c_ulong) -> String {
    let version = version as u64;
    format!(
        "{}.{}.{}",
        version / 1_000_000,
        (version / 1_000) % 1_000,
        version % 1_000
    )
}
