//! In-process symbol source for testing.
//!
//! [`MockSource`] serves plain Rust `extern "C"` functions in place of the
//! native libraries, so wrappers, error propagation and callback dispatch can
//! be exercised on machines without libvirt installed.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::ffi::{c_void, CString};
use std::os::raw::c_int;
use std::ptr::NonNull;
use std::sync::{Mutex, RwLock};

use tracing::debug;

use crate::error::{LoadError, Result};
use crate::ffi::*;
use crate::loader::{Library, SymbolSource};

/// Symbol source backed by an in-memory table.
///
/// Every library is considered loaded unless removed with
/// [`without_library`](MockSource::without_library). Symbols not defined with
/// [`with_symbol`](MockSource::with_symbol) or [`define`](MockSource::define)
/// are reported missing.
#[derive(Default)]
pub struct MockSource {
    symbols: RwLock<HashMap<(Library, String), usize>>,
    unavailable: RwLock<HashSet<Library>>,
    resolutions: Mutex<HashMap<String, usize>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export `name` from `library` at `address`.
    ///
    /// `address` is normally a function item cast with `as *const () as usize`.
    pub fn with_symbol(self, library: Library, name: &str, address: usize) -> Self {
        self.define(library, name, address);
        self
    }

    /// Make `library` fail to load.
    pub fn without_library(self, library: Library) -> Self {
        if let Ok(mut unavailable) = self.unavailable.write() {
            unavailable.insert(library);
        }
        self
    }

    /// Export the error-reporting entry points backed by a thread-local record
    /// that tests set with [`set_last_error`].
    pub fn with_error_reporting(self) -> Self {
        self.with_symbol(Library::Core, "virCopyLastError", mock_copy_last_error as *const () as usize)
            .with_symbol(Library::Core, "virResetLastError", mock_reset_last_error as *const () as usize)
            .with_symbol(Library::Core, "virResetError", mock_reset_error as *const () as usize)
    }

    /// Export `name` from `library` at `address` on an existing source.
    pub fn define(&self, library: Library, name: &str, address: usize) {
        if let Ok(mut symbols) = self.symbols.write() {
            symbols.insert((library, name.to_string()), address);
        }
    }

    /// How many times `name` has been looked up.
    pub fn resolution_count(&self, name: &str) -> usize {
        self.resolutions
            .lock()
            .map(|counts| counts.get(name).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl SymbolSource for MockSource {
    fn load(&self, library: Library) -> Result<()> {
        let unavailable = self
            .unavailable
            .read()
            .map(|set| set.contains(&library))
            .unwrap_or(false);

        if unavailable {
            return Err(LoadError::LibraryUnavailable {
                library,
                candidates: Vec::new(),
                reason: "library disabled in mock".to_string(),
            });
        }
        Ok(())
    }

    fn resolve(&self, library: Library, symbol: &str) -> Result<NonNull<c_void>> {
        if let Ok(mut counts) = self.resolutions.lock() {
            *counts.entry(symbol.to_string()).or_insert(0) += 1;
        }
        self.load(library)?;

        let found = self
            .symbols
            .read()
            .ok()
            .and_then(|symbols| symbols.get(&(library, symbol.to_string())).copied())
            .and_then(|address| NonNull::new(address as *mut c_void));

        match found {
            Some(address) => {
                debug!(library = %library, symbol = %symbol, "Resolved mock symbol");
                Ok(address)
            }
            None => Err(LoadError::SymbolMissing {
                library,
                symbol: symbol.to_string(),
                reason: "not defined in mock".to_string(),
            }),
        }
    }
}

struct PendingError {
    code: c_int,
    domain: c_int,
    message: String,
}

thread_local! {
    static LAST_ERROR: RefCell<Option<PendingError>> = const { RefCell::new(None) };
}

/// Set the error the mock error-reporting functions report on this thread.
pub fn set_last_error(code: c_int, domain: c_int, message: &str) {
    LAST_ERROR.with(|last| {
        *last.borrow_mut() = Some(PendingError {
            code,
            domain,
            message: message.to_string(),
        })
    });
}

/// Whether this thread has an error that has not been reset yet.
pub fn has_last_error() -> bool {
    LAST_ERROR.with(|last| last.borrow().is_some())
}

unsafe extern "C" fn mock_copy_last_error(to: virErrorPtr) -> c_int {
    if to.is_null() {
        return -1;
    }
    LAST_ERROR.with(|last| match &*last.borrow() {
        Some(pending) => {
            let message = CString::new(pending.message.as_str()).unwrap_or_default();
            *to = virError {
                code: pending.code,
                domain: pending.domain,
                message: message.into_raw(),
                level: VIR_ERR_ERROR,
                ..virError::default()
            };
            pending.code
        }
        None => 0,
    })
}

unsafe extern "C" fn mock_reset_last_error() {
    LAST_ERROR.with(|last| *last.borrow_mut() = None);
}

unsafe extern "C" fn mock_reset_error(err: virErrorPtr) {
    if err.is_null() {
        return;
    }
    if !(*err).message.is_null() {
        drop(CString::from_raw((*err).message));
    }
    *err = virError::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    extern "C" fn answer() -> c_int {
        42
    }

    #[test]
    fn test_resolves_defined_symbols_and_counts_lookups() {
        let mock = MockSource::new().with_symbol(Library::Core, "virAnswer", answer as *const () as usize);

        assert!(mock.resolve(Library::Core, "virAnswer").is_ok());
        assert!(mock.resolve(Library::Core, "virAnswer").is_ok());
        assert_eq!(mock.resolution_count("virAnswer"), 2);
        assert_eq!(mock.resolution_count("virOther"), 0);
    }

    #[test]
    fn test_symbol_in_other_library_is_missing() {
        let mock = MockSource::new().with_symbol(Library::Qemu, "virAnswer", answer as *const () as usize);

        let err = mock.resolve(Library::Core, "virAnswer").unwrap_err();
        assert!(matches!(err, LoadError::SymbolMissing { library: Library::Core, .. }));
    }

    extern "C" fn other_answer() -> c_int {
        7
    }

    #[test]
    fn test_same_name_in_two_libraries() {
        let mock = MockSource::new()
            .with_symbol(Library::Core, "virAnswer", answer as *const () as usize)
            .with_symbol(Library::Qemu, "virAnswer", other_answer as *const () as usize);

        let core = mock.resolve(Library::Core, "virAnswer").unwrap();
        let qemu = mock.resolve(Library::Qemu, "virAnswer").unwrap();
        assert_eq!(core.as_ptr() as usize, answer as *const () as usize);
        assert_eq!(qemu.as_ptr() as usize, other_answer as *const () as usize);
        assert!(mock.resolve(Library::Lxc, "virAnswer").is_err());
    }

    #[test]
    fn test_unavailable_library() {
        let mock = MockSource::new()
            .with_symbol(Library::Admin, "virAnswer", answer as *const () as usize)
            .without_library(Library::Admin);

        assert!(mock.load(Library::Core).is_ok());
        assert!(matches!(
            mock.resolve(Library::Admin, "virAnswer"),
            Err(LoadError::LibraryUnavailable { library: Library::Admin, .. })
        ));
    }

    #[test]
    fn test_error_record_round_trip() {
        set_last_error(VIR_ERR_NO_DOMAIN, VIR_FROM_QEMU, "no such domain");
        assert!(has_last_error());

        let mut raw = virError::default();
        unsafe {
            assert_eq!(mock_copy_last_error(&mut raw), VIR_ERR_NO_DOMAIN);
            assert_eq!(raw.domain, VIR_FROM_QEMU);
            assert!(!raw.message.is_null());
            mock_reset_last_error();
            mock_reset_error(&mut raw);
        }
        assert!(raw.message.is_null());
        assert!(!has_last_error());
    }
}
