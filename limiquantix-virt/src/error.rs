//! Error types for the binding layer.
//!
//! Two kinds of failure exist:
//! - [`LoadError`]: a native library or one of its symbols is unavailable.
//!   Wrappers never hand this to callers; they log it and return the
//!   sentinel for their return type.
//! - [`VirError`]: the error record a native call left behind, copied into the
//!   caller-supplied record when the call reports failure.

use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::PathBuf;

use thiserror::Error;

use crate::ffi;
use crate::loader::Library;

/// Errors that can occur while loading native libraries or resolving symbols.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// None of the candidate file names for a library could be opened.
    #[error("Failed to load {library} library (tried {candidates:?}): {reason}")]
    LibraryUnavailable {
        library: Library,
        candidates: Vec<String>,
        reason: String,
    },

    /// The library loaded but does not export the symbol.
    #[error("Symbol {symbol} not found in {library} library: {reason}")]
    SymbolMissing {
        library: Library,
        symbol: String,
        reason: String,
    },

    /// The process-wide binding was already built before `configure` ran.
    #[error("The process-wide libvirt binding is already initialized")]
    AlreadyInitialized,
}

/// Errors raised while reading loader configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Owned copy of a native libvirt error record.
///
/// Callers pass one of these to every wrapper. It is written only when the
/// native call reports failure; on success (and when the symbol could not be
/// resolved at all) it is left exactly as the caller supplied it.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} (code {code}, domain {domain})", .message.as_deref().unwrap_or("unknown libvirt error"))]
pub struct VirError {
    /// `virErrorNumber` value.
    pub code: i32,
    /// `virErrorDomain` value (the subsystem that raised the error).
    pub domain: i32,
    pub message: Option<String>,
    /// `virErrorLevel` value.
    pub level: i32,
    pub str1: Option<String>,
    pub str2: Option<String>,
    pub str3: Option<String>,
    pub int1: i32,
    pub int2: i32,
}

impl VirError {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a native error has been copied into this record.
    pub fn is_set(&self) -> bool {
        self.code != ffi::VIR_ERR_OK || self.message.is_some()
    }

    /// Reset to the empty state so the record can be reused.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build an owned record from a native one.
    ///
    /// # Safety
    /// All string members of `raw` must be null or valid NUL-terminated strings.
    pub unsafe fn from_raw(raw: &ffi::virError) -> Self {
        Self {
            code: raw.code,
            domain: raw.domain,
            message: owned_string(raw.message),
            level: raw.level,
            str1: owned_string(raw.str1),
            str2: owned_string(raw.str2),
            str3: owned_string(raw.str3),
            int1: raw.int1,
            int2: raw.int2,
        }
    }

    /// An internal error raised by this crate rather than by libvirt.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ffi::VIR_ERR_INTERNAL_ERROR,
            domain: ffi::VIR_FROM_NONE,
            message: Some(message.into()),
            level: ffi::VIR_ERR_ERROR,
            ..Self::default()
        }
    }

    /// Record used when the library's own error retrieval is unavailable.
    pub(crate) fn unretrievable(symbol: &str) -> Self {
        Self::internal(format!(
            "native call failed but its error could not be retrieved: {} is unavailable",
            symbol
        ))
    }
}

unsafe fn owned_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_from_raw_copies_strings() {
        let message = CString::new("Domain not found").unwrap();
        let str1 = CString::new("vm-1").unwrap();
        let raw = ffi::virError {
            code: 42,
            domain: 10,
            message: message.as_ptr() as *mut c_char,
            level: ffi::VIR_ERR_ERROR,
            str1: str1.as_ptr() as *mut c_char,
            int1: 7,
            ..ffi::virError::default()
        };

        let err = unsafe { VirError::from_raw(&raw) };
        assert_eq!(err.code, 42);
        assert_eq!(err.domain, 10);
        assert_eq!(err.message.as_deref(), Some("Domain not found"));
        assert_eq!(err.str1.as_deref(), Some("vm-1"));
        assert_eq!(err.str2, None);
        assert_eq!(err.int1, 7);
        assert!(err.is_set());
        assert_eq!(err.to_string(), "Domain not found (code 42, domain 10)");
    }

    #[test]
    fn test_empty_record() {
        let mut err = VirError::new();
        assert!(!err.is_set());

        err = VirError::unretrievable("virCopyLastError");
        assert!(err.is_set());
        assert!(err.message.unwrap().contains("virCopyLastError"));
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::SymbolMissing {
            library: Library::Qemu,
            symbol: "virDomainQemuMonitorCommand".to_string(),
            reason: "undefined symbol".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Symbol virDomainQemuMonitorCommand not found in libvirt-qemu library: undefined symbol"
        );
    }
}
