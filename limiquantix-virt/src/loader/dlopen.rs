//! [`SymbolSource`] backed by the platform dynamic loader.

use std::ffi::c_void;
use std::path::PathBuf;
use std::ptr::NonNull;

use once_cell::sync::OnceCell;
use tracing::{debug, error, info, warn};

use super::{Library, SymbolSource};
use crate::config::LoaderConfig;
use crate::error::{LoadError, Result};

type Handle = std::result::Result<libloading::Library, LoadError>;

/// Opens the libvirt libraries with `dlopen` (or `LoadLibrary` on Windows).
///
/// Each library is opened on first use and kept open for the life of this
/// value. A failed open is remembered; the same error is returned to every
/// later caller without retrying.
pub struct DlopenSource {
    config: LoaderConfig,
    core: OnceCell<Handle>,
    qemu: OnceCell<Handle>,
    lxc: OnceCell<Handle>,
    admin: OnceCell<Handle>,
}

impl DlopenSource {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            core: OnceCell::new(),
            qemu: OnceCell::new(),
            lxc: OnceCell::new(),
            admin: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    fn cell(&self, library: Library) -> &OnceCell<Handle> {
        match library {
            Library::Core => &self.core,
            Library::Qemu => &self.qemu,
            Library::Lxc => &self.lxc,
            Library::Admin => &self.admin,
        }
    }

    fn handle(&self, library: Library) -> &Handle {
        self.cell(library).get_or_init(|| open(library, self.config.candidates(library)))
    }
}

impl Default for DlopenSource {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

impl SymbolSource for DlopenSource {
    fn load(&self, library: Library) -> Result<()> {
        self.handle(library).as_ref().map(|_| ()).map_err(Clone::clone)
    }

    fn resolve(&self, library: Library, symbol: &str) -> Result<NonNull<c_void>> {
        let lib = self.handle(library).as_ref().map_err(Clone::clone)?;

        let missing = |reason: String| LoadError::SymbolMissing {
            library,
            symbol: symbol.to_string(),
            reason,
        };

        // SAFETY: the address is only reinterpreted by callers that know the
        // symbol's real type; here it is treated as an opaque pointer.
        let addr = unsafe {
            lib.get::<*mut c_void>(symbol.as_bytes())
                .map(|sym| *sym)
                .map_err(|e| missing(e.to_string()))?
        };

        debug!(library = %library, symbol = %symbol, "Resolved native symbol");
        NonNull::new(addr).ok_or_else(|| missing("symbol resolved to a null address".to_string()))
    }
}

fn open(library: Library, candidates: Vec<PathBuf>) -> Handle {
    let mut last_error = String::from("no candidate paths");

    for path in &candidates {
        // SAFETY: libvirt's initializers only set up internal state.
        match unsafe { libloading::Library::new(path) } {
            Ok(lib) => {
                info!(library = %library, path = %path.display(), "Loaded native library");
                return Ok(lib);
            }
            Err(e) => {
                debug!(library = %library, path = %path.display(), error = %e, "Candidate failed");
                last_error = e.to_string();
            }
        }
    }

    let err = LoadError::LibraryUnavailable {
        library,
        candidates: candidates.iter().map(|p| p.display().to_string()).collect(),
        reason: last_error,
    };

    if library.is_optional() {
        warn!(library = %library, error = %err, "Optional native library unavailable");
    } else {
        error!(library = %library, error = %err, "Native library unavailable");
    }

    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> LoaderConfig {
        LoaderConfig {
            core: Some(PathBuf::from("/nonexistent/limiquantix/libvirt.so.0")),
            qemu: Some(PathBuf::from("/nonexistent/limiquantix/libvirt-qemu.so.0")),
            ..LoaderConfig::default()
        }
    }

    #[test]
    fn test_missing_library_is_reported() {
        let source = DlopenSource::new(unreachable_config());

        let err = source.load(Library::Core).unwrap_err();
        match err {
            LoadError::LibraryUnavailable { library, candidates, .. } => {
                assert_eq!(library, Library::Core);
                assert_eq!(candidates, vec!["/nonexistent/limiquantix/libvirt.so.0".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_failed_open_is_cached() {
        let source = DlopenSource::new(unreachable_config());

        let first = source.load(Library::Qemu).unwrap_err();
        let second = source.resolve(Library::Qemu, "virDomainQemuMonitorCommand").unwrap_err();
        assert_eq!(first, second);
    }
}
