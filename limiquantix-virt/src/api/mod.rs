//! Lazily resolved wrappers for every libvirt entry point.
//!
//! Each wrapper is an `unsafe` method on [`Libvirt`] named exactly like the
//! native function. Arguments are forwarded untouched; the only additions are
//! the trailing `err` record and the sentinel returned when the symbol cannot
//! be resolved:
//!
//! | Native result         | Failure signal        | Missing-symbol return |
//! |-----------------------|-----------------------|-----------------------|
//! | `int` status or count | negative              | `-1`                  |
//! | pointer or handle     | `NULL`                | `NULL`                |
//! | unsigned identifier   | all bits set          | all bits set          |
//! | unsigned amount       | `0`                   | `0`                   |
//! | `void`                | never fails           | nothing               |
//!
//! The error record is written only when the native call itself reports
//! failure. It is left alone on success and when the symbol is unavailable.

#[macro_use]
mod macros;

mod admin;
mod checkpoint;
mod connect;
mod domain;
mod error;
mod event;
mod interface;
mod lxc;
mod network;
mod nodedev;
mod nwfilter;
mod params;
mod qemu;
mod secret;
mod snapshot;
mod storage;
mod stream;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::LoaderConfig;
use crate::error::{LoadError, Result, VirError};
use crate::ffi;
use crate::loader::{DlopenSource, Library, SymbolSource};

/// The lazily loaded libvirt binding.
///
/// Most programs use the process-wide instance returned by [`libvirt()`].
/// Separate instances are useful in tests, where each one can be backed by its
/// own [`MockSource`](crate::mock::MockSource).
pub struct Libvirt {
    source: Arc<dyn SymbolSource>,
    errors: error::ErrorSymbols,
    params: params::ParamSymbols,
    connect: connect::ConnectSymbols,
    domain: domain::DomainSymbols,
    snapshot: snapshot::SnapshotSymbols,
    checkpoint: checkpoint::CheckpointSymbols,
    network: network::NetworkSymbols,
    interface: interface::InterfaceSymbols,
    nwfilter: nwfilter::NwFilterSymbols,
    nodedev: nodedev::NodeDeviceSymbols,
    secret: secret::SecretSymbols,
    storage: storage::StorageSymbols,
    stream: stream::StreamSymbols,
    event: event::EventSymbols,
    qemu: qemu::QemuSymbols,
    lxc: lxc::LxcSymbols,
    admin: admin::AdminSymbols,
    auth_default: OnceCell<Option<usize>>,
    /// Close callback installed per connection, keyed by handle address, so
    /// unregistering passes libvirt the exact pointer it was given.
    close_callbacks: Mutex<HashMap<usize, ffi::virConnectCloseFunc>>,
}

impl Libvirt {
    /// Create a binding that resolves symbols through `source`.
    pub fn new(source: Arc<dyn SymbolSource>) -> Self {
        Self {
            source,
            errors: Default::default(),
            params: Default::default(),
            connect: Default::default(),
            domain: Default::default(),
            snapshot: Default::default(),
            checkpoint: Default::default(),
            network: Default::default(),
            interface: Default::default(),
            nwfilter: Default::default(),
            nodedev: Default::default(),
            secret: Default::default(),
            storage: Default::default(),
            stream: Default::default(),
            event: Default::default(),
            qemu: Default::default(),
            lxc: Default::default(),
            admin: Default::default(),
            auth_default: OnceCell::new(),
            close_callbacks: Mutex::new(HashMap::new()),
        }
    }

    /// Create a binding that opens the real libraries as described by `config`.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self::new(Arc::new(DlopenSource::new(config)))
    }

    /// The source symbols are resolved through.
    pub fn source(&self) -> &Arc<dyn SymbolSource> {
        &self.source
    }

    /// Open `library` now instead of on first use and report the outcome.
    pub fn library_status(&self, library: Library) -> Result<()> {
        self.source.load(library)
    }

    /// Whether `symbol` is exported by `library`.
    ///
    /// This asks the source directly and does not fill any wrapper's cache.
    pub fn symbol_available(&self, library: Library, symbol: &str) -> bool {
        self.source.resolve(library, symbol).is_ok()
    }

    /// Value of the exported `virConnectAuthPtrDefault` variable.
    ///
    /// Returns null when the core library or the variable is unavailable.
    ///
    /// # Safety
    /// The symbol source must map `virConnectAuthPtrDefault` to the address of
    /// a readable, initialized `virConnectAuthPtr`. The real library always
    /// does; a [`MockSource`](crate::mock::MockSource) entry must point at such
    /// a variable rather than at a function.
    #[allow(non_snake_case)]
    pub unsafe fn virConnectAuthPtrDefault(&self) -> ffi::virConnectAuthPtr {
        let addr = self.auth_default.get_or_init(|| {
            match self.source.resolve(Library::Core, "virConnectAuthPtrDefault") {
                Ok(addr) => Some(addr.as_ptr() as usize),
                Err(e) => {
                    warn!(error = %e, "Native symbol unavailable");
                    None
                }
            }
        });

        match addr {
            // SAFETY: the caller guarantees the address holds a
            // `virConnectAuthPtr`.
            Some(addr) => *(*addr as *const ffi::virConnectAuthPtr),
            None => {
                debug!(symbol = "virConnectAuthPtrDefault", "Returning null for unavailable symbol");
                std::ptr::null_mut()
            }
        }
    }

    pub(crate) fn remember_close_callback(&self, conn: ffi::virConnectPtr, cb: ffi::virConnectCloseFunc) {
        if let Ok(mut callbacks) = self.close_callbacks.lock() {
            callbacks.insert(conn as usize, cb);
        }
    }

    pub(crate) fn forget_close_callback(&self, conn: ffi::virConnectPtr) -> Option<ffi::virConnectCloseFunc> {
        self.close_callbacks
            .lock()
            .ok()
            .and_then(|mut callbacks| callbacks.remove(&(conn as usize)))
    }

    /// Copy the calling thread's last native error into `err` and clear it.
    ///
    /// # Safety
    /// Must run on the thread that made the failed call.
    pub(crate) unsafe fn copy_last_error(&self, err: &mut VirError) {
        let mut raw = ffi::virError::default();

        if self.virCopyLastError(&mut raw) < 0 {
            *err = VirError::unretrievable("virCopyLastError");
            return;
        }
        self.virResetLastError();

        *err = VirError::from_raw(&raw);
        self.virResetError(&mut raw);
    }
}

impl fmt::Debug for Libvirt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Libvirt").finish_non_exhaustive()
    }
}

static GLOBAL: OnceCell<Libvirt> = OnceCell::new();

/// The process-wide binding.
///
/// Built on first use from [`configure`]'s configuration if one was given,
/// otherwise from [`LoaderConfig::from_env`].
pub fn libvirt() -> &'static Libvirt {
    GLOBAL.get_or_init(|| Libvirt::with_config(LoaderConfig::from_env()))
}

/// Set the configuration of the process-wide binding.
///
/// Only effective before the first call to [`libvirt()`]; afterwards the
/// binding already exists and [`LoadError::AlreadyInitialized`] is returned.
pub fn configure(config: LoaderConfig) -> Result<&'static Libvirt> {
    let mut fresh = false;
    let lv = GLOBAL.get_or_init(|| {
        fresh = true;
        Libvirt::with_config(config)
    });

    if fresh {
        Ok(lv)
    } else {
        Err(LoadError::AlreadyInitialized)
    }
}
