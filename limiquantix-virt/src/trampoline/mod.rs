//! Adapters from libvirt's C callback shapes to [`EventHooks`].
//!
//! libvirt hands every callback an opaque `void *` chosen at registration
//! time. The helpers in [`crate::helpers`] store a [`CallbackId`] there, and
//! the `extern "C"` adapters in this module turn it back into an integer and
//! forward the call to the matching hook of `H`. Adapters hold no state: the
//! embedding program owns the mapping from IDs to its own callbacks.
//!
//! ```ignore
//! struct Hooks;
//!
//! impl EventHooks for Hooks {
//!     fn domain_event_lifecycle(
//!         _conn: virConnectPtr,
//!         _dom: virDomainPtr,
//!         event: c_int,
//!         detail: c_int,
//!         id: CallbackId,
//!     ) {
//!         registry().dispatch(id, event, detail);
//!     }
//! }
//!
//! let cb = domain_event_callback::<Hooks>(VIR_DOMAIN_EVENT_ID_LIFECYCLE);
//! ```

/// Generate adapters whose opaque is a plain [`CallbackId`] and whose hook has
/// the same name as the adapter.
macro_rules! hook_adapters {
    ($( $(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?; )*) => {$(
        $(#[$meta])*
        pub extern "C" fn $name<H: EventHooks>($($arg: $ty,)* opaque: *mut c_void) $(-> $ret)? {
            H::$name($($arg,)* id_from_opaque(opaque))
        }
    )*};
}

mod connect;
mod domain;
mod event_loop;
mod object;
mod stream;

pub use connect::*;
pub use domain::*;
pub use event_loop::*;
pub use object::*;
pub use stream::*;

use std::os::raw::{c_char, c_int, c_longlong, c_uint, c_ulonglong, c_void};

use crate::ffi::*;

/// Caller-chosen integer identifying a registered callback.
///
/// Pointer-sized, so every value survives the trip through a native opaque
/// pointer on both 32-bit and 64-bit targets.
pub type CallbackId = isize;

/// Encode `id` as a native opaque pointer.
pub fn opaque_from_id(id: CallbackId) -> *mut c_void {
    id as *mut c_void
}

/// Recover the ID stored by [`opaque_from_id`].
pub fn id_from_opaque(opaque: *mut c_void) -> CallbackId {
    opaque as CallbackId
}

/// Callback IDs bundled for whole-stream transfers.
///
/// A pointer to this struct is the opaque of the stream source and sink
/// adapters. Plain transfers use only `callback`, hole-aware receives add
/// `hole`, and hole-aware sends use all three.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamCallbackIds {
    pub callback: CallbackId,
    pub hole: CallbackId,
    pub skip: CallbackId,
}

/// Receiver of every native callback.
///
/// Each hook gets the native arguments unchanged plus the [`CallbackId`]
/// recovered from the opaque pointer. Unimplemented hooks ignore the call;
/// those that return a status report failure (`-1`).
#[allow(unused_variables)]
pub trait EventHooks: 'static {
    // Domain events

    fn domain_event_lifecycle(
        conn: virConnectPtr,
        dom: virDomainPtr,
        event: c_int,
        detail: c_int,
        id: CallbackId,
    ) {
    }

    /// Events without a payload: reboot and control error.
    fn domain_event_generic(conn: virConnectPtr, dom: virDomainPtr, id: CallbackId) {}

    fn domain_event_rtc_change(
        conn: virConnectPtr,
        dom: virDomainPtr,
        utcoffset: c_longlong,
        id: CallbackId,
    ) {
    }

    fn domain_event_watchdog(conn: virConnectPtr, dom: virDomainPtr, action: c_int, id: CallbackId) {}

    fn domain_event_io_error(
        conn: virConnectPtr,
        dom: virDomainPtr,
        src_path: *const c_char,
        dev_alias: *const c_char,
        action: c_int,
        id: CallbackId,
    ) {
    }

    #[allow(clippy::too_many_arguments)]
    fn domain_event_graphics(
        conn: virConnectPtr,
        dom: virDomainPtr,
        phase: c_int,
        local: *const virDomainEventGraphicsAddress,
        remote: *const virDomainEventGraphicsAddress,
        auth_scheme: *const c_char,
        subject: *const virDomainEventGraphicsSubject,
        id: CallbackId,
    ) {
    }

    #[allow(clippy::too_many_arguments)]
    fn domain_event_io_error_reason(
        conn: virConnectPtr,
        dom: virDomainPtr,
        src_path: *const c_char,
        dev_alias: *const c_char,
        action: c_int,
        reason: *const c_char,
        id: CallbackId,
    ) {
    }

    /// Both `BLOCK_JOB` (disk path) and `BLOCK_JOB_2` (disk target).
    fn domain_event_block_job(
        conn: virConnectPtr,
        dom: virDomainPtr,
        disk: *const c_char,
        job_type: c_int,
        status: c_int,
        id: CallbackId,
    ) {
    }

    #[allow(clippy::too_many_arguments)]
    fn domain_event_disk_change(
        conn: virConnectPtr,
        dom: virDomainPtr,
        old_src_path: *const c_char,
        new_src_path: *const c_char,
        dev_alias: *const c_char,
        reason: c_int,
        id: CallbackId,
    ) {
    }

    fn domain_event_tray_change(
        conn: virConnectPtr,
        dom: virDomainPtr,
        dev_alias: *const c_char,
        reason: c_int,
        id: CallbackId,
    ) {
    }

    fn domain_event_pm_wakeup(conn: virConnectPtr, dom: virDomainPtr, reason: c_int, id: CallbackId) {}

    fn domain_event_pm_suspend(conn: virConnectPtr, dom: virDomainPtr, reason: c_int, id: CallbackId) {}

    fn domain_event_pm_suspend_disk(
        conn: virConnectPtr,
        dom: virDomainPtr,
        reason: c_int,
        id: CallbackId,
    ) {
    }

    fn domain_event_balloon_change(
        conn: virConnectPtr,
        dom: virDomainPtr,
        actual: c_ulonglong,
        id: CallbackId,
    ) {
    }

    fn domain_event_device_removed(
        conn: virConnectPtr,
        dom: virDomainPtr,
        dev_alias: *const c_char,
        id: CallbackId,
    ) {
    }

    /// `params` is only valid for the duration of the call; see
    /// [`crate::typed_params::decode`].
    fn domain_event_tunable(
        conn: virConnectPtr,
        dom: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        id: CallbackId,
    ) {
    }

    fn domain_event_agent_lifecycle(
        conn: virConnectPtr,
        dom: virDomainPtr,
        state: c_int,
        reason: c_int,
        id: CallbackId,
    ) {
    }

    fn domain_event_device_added(
        conn: virConnectPtr,
        dom: virDomainPtr,
        dev_alias: *const c_char,
        id: CallbackId,
    ) {
    }

    fn domain_event_migration_iteration(
        conn: virConnectPtr,
        dom: virDomainPtr,
        iteration: c_int,
        id: CallbackId,
    ) {
    }

    fn domain_event_job_completed(
        conn: virConnectPtr,
        dom: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        id: CallbackId,
    ) {
    }

    fn domain_event_device_removal_failed(
        conn: virConnectPtr,
        dom: virDomainPtr,
        dev_alias: *const c_char,
        id: CallbackId,
    ) {
    }

    fn domain_event_metadata_change(
        conn: virConnectPtr,
        dom: virDomainPtr,
        metadata_type: c_int,
        nsuri: *const c_char,
        id: CallbackId,
    ) {
    }

    #[allow(clippy::too_many_arguments)]
    fn domain_event_block_threshold(
        conn: virConnectPtr,
        dom: virDomainPtr,
        dev: *const c_char,
        path: *const c_char,
        threshold: c_ulonglong,
        excess: c_ulonglong,
        id: CallbackId,
    ) {
    }

    fn domain_event_memory_failure(
        conn: virConnectPtr,
        dom: virDomainPtr,
        recipient: c_int,
        action: c_int,
        flags: c_uint,
        id: CallbackId,
    ) {
    }

    #[allow(clippy::too_many_arguments)]
    fn domain_qemu_monitor_event(
        conn: virConnectPtr,
        dom: virDomainPtr,
        event: *const c_char,
        seconds: c_longlong,
        micros: c_uint,
        details: *const c_char,
        id: CallbackId,
    ) {
    }

    // Other object events

    fn network_event_lifecycle(
        conn: virConnectPtr,
        net: virNetworkPtr,
        event: c_int,
        detail: c_int,
        id: CallbackId,
    ) {
    }

    fn node_device_event_lifecycle(
        conn: virConnectPtr,
        dev: virNodeDevicePtr,
        event: c_int,
        detail: c_int,
        id: CallbackId,
    ) {
    }

    fn node_device_event_generic(conn: virConnectPtr, dev: virNodeDevicePtr, id: CallbackId) {}

    fn secret_event_lifecycle(
        conn: virConnectPtr,
        secret: virSecretPtr,
        event: c_int,
        detail: c_int,
        id: CallbackId,
    ) {
    }

    fn secret_event_generic(conn: virConnectPtr, secret: virSecretPtr, id: CallbackId) {}

    fn storage_pool_event_lifecycle(
        conn: virConnectPtr,
        pool: virStoragePoolPtr,
        event: c_int,
        detail: c_int,
        id: CallbackId,
    ) {
    }

    fn storage_pool_event_generic(conn: virConnectPtr, pool: virStoragePoolPtr, id: CallbackId) {}

    // Connections

    /// Fill in `ncred` credentials. Return `0` on success, `-1` on failure.
    fn connect_auth(cred: virConnectCredentialPtr, ncred: c_uint, id: CallbackId) -> c_int {
        -1
    }

    fn connect_close(conn: virConnectPtr, reason: c_int, id: CallbackId) {}

    /// libvirt no longer references `id`; the callback behind it can be dropped.
    fn free_callback_id(id: CallbackId) {}

    // Event loop

    fn event_handle(watch: c_int, fd: c_int, events: c_int, id: CallbackId) {}

    fn event_timeout(timer: c_int, id: CallbackId) {}

    /// Watch `fd` for a loop registered through `event_register_impl`.
    ///
    /// `callback`, `opaque` and `freecb` are native addresses to hand back via
    /// [`crate::helpers::invoke_event_handle_callback`] and
    /// [`crate::helpers::invoke_event_free_callback`]. Returns the watch number.
    fn event_add_handle(fd: c_int, event: c_int, callback: usize, opaque: usize, freecb: usize) -> c_int {
        -1
    }

    fn event_update_handle(watch: c_int, event: c_int) {}

    fn event_remove_handle(watch: c_int) -> c_int {
        -1
    }

    /// Returns the timer number.
    fn event_add_timeout(freq: c_int, callback: usize, opaque: usize, freecb: usize) -> c_int {
        -1
    }

    fn event_update_timeout(timer: c_int, freq: c_int) {}

    fn event_remove_timeout(timer: c_int) -> c_int {
        -1
    }

    // Streams

    /// Produce up to `nbytes` into `data`. Returns bytes written, `0` at end of
    /// stream, `-1` on error.
    fn stream_source(st: virStreamPtr, data: *mut c_char, nbytes: usize, id: CallbackId) -> c_int {
        -1
    }

    fn stream_source_hole(
        st: virStreamPtr,
        in_data: *mut c_int,
        length: *mut c_longlong,
        id: CallbackId,
    ) -> c_int {
        -1
    }

    fn stream_source_skip(st: virStreamPtr, length: c_longlong, id: CallbackId) -> c_int {
        -1
    }

    /// Consume `nbytes` from `data`. Returns bytes consumed or `-1`.
    fn stream_sink(st: virStreamPtr, data: *const c_char, nbytes: usize, id: CallbackId) -> c_int {
        -1
    }

    fn stream_sink_hole(st: virStreamPtr, length: c_longlong, id: CallbackId) -> c_int {
        -1
    }

    fn stream_event(st: virStreamPtr, events: c_int, id: CallbackId) {}
}
