//! Runtime library loading and symbol resolution.
//!
//! Native libraries are opened lazily. A [`SymbolSource`] opens them and looks
//! up addresses; a [`SymbolSlot`] caches the outcome of one lookup for the
//! lifetime of the process, so every symbol is resolved at most once no matter
//! how many threads race to call it first.

mod dlopen;

pub use dlopen::DlopenSource;

use std::ffi::c_void;
use std::fmt;
use std::ptr::NonNull;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;

/// The native libraries the binding knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    /// `libvirt`: connections, domains, networks, storage and everything else.
    Core,
    /// `libvirt-qemu`: QEMU monitor and guest agent passthrough.
    Qemu,
    /// `libvirt-lxc`: container namespace helpers.
    Lxc,
    /// `libvirt-admin`: daemon administration.
    Admin,
}

impl Library {
    pub const ALL: [Library; 4] = [Library::Core, Library::Qemu, Library::Lxc, Library::Admin];

    /// Short name used in logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Library::Core => "libvirt",
            Library::Qemu => "libvirt-qemu",
            Library::Lxc => "libvirt-lxc",
            Library::Admin => "libvirt-admin",
        }
    }

    /// Only the core library is required for the binding to be useful.
    pub fn is_optional(self) -> bool {
        !matches!(self, Library::Core)
    }

    /// Platform file names tried, in order, when no explicit path is configured.
    pub fn file_names(self) -> &'static [&'static str] {
        #[cfg(target_os = "macos")]
        {
            match self {
                Library::Core => &["libvirt.0.dylib", "libvirt.dylib"],
                Library::Qemu => &["libvirt-qemu.0.dylib", "libvirt-qemu.dylib"],
                Library::Lxc => &["libvirt-lxc.0.dylib", "libvirt-lxc.dylib"],
                Library::Admin => &["libvirt-admin.0.dylib", "libvirt-admin.dylib"],
            }
        }
        #[cfg(windows)]
        {
            match self {
                Library::Core => &["libvirt-0.dll"],
                Library::Qemu => &["libvirt-qemu-0.dll"],
                Library::Lxc => &["libvirt-lxc-0.dll"],
                Library::Admin => &["libvirt-admin-0.dll"],
            }
        }
        #[cfg(not(any(target_os = "macos", windows)))]
        {
            match self {
                Library::Core => &["libvirt.so.0", "libvirt.so"],
                Library::Qemu => &["libvirt-qemu.so.0", "libvirt-qemu.so"],
                Library::Lxc => &["libvirt-lxc.so.0", "libvirt-lxc.so"],
                Library::Admin => &["libvirt-admin.so.0", "libvirt-admin.so"],
            }
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that can open native libraries and look up exported symbols.
///
/// The production implementation is [`DlopenSource`]. Tests use
/// [`MockSource`](crate::mock::MockSource), which serves plain Rust functions.
pub trait SymbolSource: Send + Sync {
    /// Open `library` if it is not open yet.
    ///
    /// Implementations must attempt the open at most once and report the
    /// cached outcome afterwards.
    fn load(&self, library: Library) -> Result<()>;

    /// Look up the address of `symbol` in `library`, opening it if needed.
    fn resolve(&self, library: Library, symbol: &str) -> Result<NonNull<c_void>>;
}

/// Lazily resolved function pointer of type `F`.
///
/// The first call to [`SymbolSlot::resolve`] performs the lookup; concurrent
/// callers block until it is done and then all observe the same outcome.
/// A failed lookup is cached as well and never retried.
pub struct SymbolSlot<F> {
    cell: OnceCell<Option<F>>,
}

impl<F: Copy> SymbolSlot<F> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the resolved function, resolving it on first use.
    ///
    /// # Safety
    /// `F` must be a function pointer type whose signature matches the native
    /// definition of `symbol`.
    pub unsafe fn resolve(
        &self,
        source: &dyn SymbolSource,
        library: Library,
        symbol: &str,
    ) -> Option<F> {
        *self.cell.get_or_init(|| match source.resolve(library, symbol) {
            Ok(addr) => {
                debug_assert_eq!(std::mem::size_of::<F>(), std::mem::size_of::<*mut c_void>());
                Some(std::mem::transmute_copy::<*mut c_void, F>(&addr.as_ptr()))
            }
            Err(e) => {
                warn!(library = %library, symbol = %symbol, error = %e, "Native symbol unavailable");
                None
            }
        })
    }

    /// Whether a lookup has already happened, successful or not.
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<F: Copy> Default for SymbolSlot<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// How a native function reports failure through its return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Any negative value; `-1` is returned when the symbol is missing.
    Negative,
    /// A null pointer.
    Null,
    /// Zero.
    Zero,
    /// All bits set, used by unsigned identifiers such as domain IDs.
    AllOnes,
    /// The function cannot fail (it returns `void`).
    Never,
}

/// Return types wrappers know how to produce sentinels for and test for failure.
pub trait NativeReturn: Copy {
    /// Value returned when the native function could not be resolved.
    fn sentinel(failure: Failure) -> Self;

    /// Whether this return value signals a failed call.
    fn is_failure(self, failure: Failure) -> bool;
}

macro_rules! signed_return {
    ($($ty:ty),*) => {$(
        impl NativeReturn for $ty {
            fn sentinel(failure: Failure) -> Self {
                match failure {
                    Failure::Negative | Failure::AllOnes => -1,
                    Failure::Zero | Failure::Null | Failure::Never => 0,
                }
            }

            fn is_failure(self, failure: Failure) -> bool {
                match failure {
                    Failure::Negative => self < 0,
                    Failure::AllOnes => self == -1,
                    Failure::Zero | Failure::Null => self == 0,
                    Failure::Never => false,
                }
            }
        }
    )*};
}

macro_rules! unsigned_return {
    ($($ty:ty),*) => {$(
        impl NativeReturn for $ty {
            fn sentinel(failure: Failure) -> Self {
                match failure {
                    Failure::AllOnes | Failure::Negative => <$ty>::MAX,
                    Failure::Zero | Failure::Null | Failure::Never => 0,
                }
            }

            fn is_failure(self, failure: Failure) -> bool {
                match failure {
                    Failure::AllOnes | Failure::Negative => self == <$ty>::MAX,
                    Failure::Zero | Failure::Null => self == 0,
                    Failure::Never => false,
                }
            }
        }
    )*};
}

signed_return!(i8, i16, i32, i64, isize);
unsigned_return!(u8, u16, u32, u64, usize);

impl<T> NativeReturn for *mut T {
    fn sentinel(_failure: Failure) -> Self {
        std::ptr::null_mut()
    }

    fn is_failure(self, failure: Failure) -> bool {
        matches!(failure, Failure::Null | Failure::Zero) && self.is_null()
    }
}

impl<T> NativeReturn for *const T {
    fn sentinel(_failure: Failure) -> Self {
        std::ptr::null()
    }

    fn is_failure(self, failure: Failure) -> bool {
        matches!(failure, Failure::Null | Failure::Zero) && self.is_null()
    }
}

impl NativeReturn for () {
    fn sentinel(_failure: Failure) -> Self {}

    fn is_failure(self, _failure: Failure) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::raw::{c_char, c_int, c_uint, c_ulonglong};

    #[test]
    fn test_sentinels() {
        assert_eq!(c_int::sentinel(Failure::Negative), -1);
        assert_eq!(c_uint::sentinel(Failure::AllOnes), u32::MAX);
        assert_eq!(c_ulonglong::sentinel(Failure::Zero), 0);
        assert!(<*mut c_char>::sentinel(Failure::Null).is_null());
        assert!(<*const c_char>::sentinel(Failure::Null).is_null());
    }

    #[test]
    fn test_failure_detection() {
        assert!((-1 as c_int).is_failure(Failure::Negative));
        assert!((-5 as c_int).is_failure(Failure::Negative));
        assert!(!(0 as c_int).is_failure(Failure::Negative));
        assert!(u32::MAX.is_failure(Failure::AllOnes));
        assert!(!7u32.is_failure(Failure::AllOnes));
        assert!(0u64.is_failure(Failure::Zero));
        assert!(std::ptr::null_mut::<c_char>().is_failure(Failure::Null));
        assert!(!(1 as c_int).is_failure(Failure::Never));
    }

    #[test]
    fn test_library_names() {
        assert_eq!(Library::Core.to_string(), "libvirt");
        assert!(!Library::Core.is_optional());
        assert!(Library::Qemu.is_optional());
        assert!(Library::Lxc.is_optional());
        assert!(Library::Admin.is_optional());
        for library in Library::ALL {
            assert!(!library.file_names().is_empty());
        }
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_linux_file_names() {
        assert_eq!(Library::Core.file_names()[0], "libvirt.so.0");
        assert_eq!(Library::Qemu.file_names()[0], "libvirt-qemu.so.0");
        assert_eq!(Library::Lxc.file_names()[0], "libvirt-lxc.so.0");
    }
}
