//! Entry points that assemble callback plumbing before calling a wrapper.
//!
//! Each helper installs the [`trampoline`](crate::trampoline) adapter for `H`
//! and stores the caller's [`CallbackId`] where libvirt will hand it back, then
//! delegates to the matching wrapper on [`Libvirt`]. Registrations that keep
//! the ID beyond the call also install [`free_callback`], so
//! [`EventHooks::free_callback_id`] runs once libvirt lets go of it.
//!
//! All helpers share the safety contract of the wrappers they call: handles
//! must be valid and string arguments NUL-terminated.

use std::os::raw::{c_char, c_int, c_uint, c_void};

use tracing::debug;

use crate::api::Libvirt;
use crate::error::VirError;
use crate::ffi::*;
use crate::trampoline::*;

#[allow(clippy::missing_safety_doc)]
impl Libvirt {
    /// `virConnectOpenAuth` with credentials requested from
    /// [`EventHooks::connect_auth`] under `id`.
    pub unsafe fn connect_open_auth<H: EventHooks>(
        &self,
        name: *const c_char,
        credtype: *mut c_int,
        ncredtype: c_uint,
        id: CallbackId,
        flags: c_uint,
        err: &mut VirError,
    ) -> virConnectPtr {
        // The auth callback only runs inside virConnectOpenAuth, so a stack
        // slot outlives every use of it.
        let mut id = id;
        let mut auth = virConnectAuth {
            credtype,
            ncredtype,
            cb: Some(connect_auth::<H>),
            cbdata: &mut id as *mut CallbackId as *mut c_void,
        };

        self.virConnectOpenAuth(name, &mut auth, flags, err)
    }

    /// `virConnectOpenAuth` with libvirt's default console authenticator.
    pub unsafe fn connect_open_auth_default(
        &self,
        name: *const c_char,
        flags: c_uint,
        err: &mut VirError,
    ) -> virConnectPtr {
        // The real core library exports the variable this reads.
        let auth = self.virConnectAuthPtrDefault();
        if auth.is_null() {
            debug!("virConnectAuthPtrDefault unavailable, opening without authentication callback");
        }
        self.virConnectOpenAuth(name, auth, flags, err)
    }

    pub unsafe fn connect_register_close_callback<H: EventHooks>(
        &self,
        conn: virConnectPtr,
        id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        let cb: virConnectCloseFunc = Some(connect_close::<H>);
        let rc = self.virConnectRegisterCloseCallback(
            conn,
            cb,
            opaque_from_id(id),
            Some(free_callback::<H>),
            err,
        );
        if rc >= 0 {
            self.remember_close_callback(conn, cb);
        }
        rc
    }

    /// Unregister the close callback installed by
    /// [`connect_register_close_callback`](Self::connect_register_close_callback)
    /// with the same `H`.
    ///
    /// libvirt matches the callback by address. The pointer recorded at
    /// registration is passed back, since instantiating `connect_close::<H>`
    /// again is not guaranteed to yield the same address across codegen
    /// units. Without a recorded registration the fresh instantiation is used.
    pub unsafe fn connect_unregister_close_callback<H: EventHooks>(
        &self,
        conn: virConnectPtr,
        err: &mut VirError,
    ) -> c_int {
        let registered = self.forget_close_callback(conn);
        if registered.is_none() {
            debug!("No recorded close callback for connection, unregistering a fresh adapter");
        }
        let cb: virConnectCloseFunc = registered.unwrap_or(Some(connect_close::<H>));

        let rc = self.virConnectUnregisterCloseCallback(conn, cb, err);
        if rc < 0 {
            if let Some(cb) = registered {
                self.remember_close_callback(conn, cb);
            }
        }
        rc
    }

    /// Register `cb` (usually from [`domain_event_callback`]) for `event_id`.
    ///
    /// Returns the libvirt callback ID used to deregister, or `-1`.
    pub unsafe fn domain_event_register_any<H: EventHooks>(
        &self,
        conn: virConnectPtr,
        dom: virDomainPtr,
        event_id: c_int,
        cb: virConnectDomainEventGenericCallback,
        id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        self.virConnectDomainEventRegisterAny(
            conn,
            dom,
            event_id,
            cb,
            opaque_from_id(id),
            Some(free_callback::<H>),
            err,
        )
    }

    pub unsafe fn network_event_register_any<H: EventHooks>(
        &self,
        conn: virConnectPtr,
        net: virNetworkPtr,
        event_id: c_int,
        cb: virConnectNetworkEventGenericCallback,
        id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        self.virConnectNetworkEventRegisterAny(
            conn,
            net,
            event_id,
            cb,
            opaque_from_id(id),
            Some(free_callback::<H>),
            err,
        )
    }

    pub unsafe fn node_device_event_register_any<H: EventHooks>(
        &self,
        conn: virConnectPtr,
        dev: virNodeDevicePtr,
        event_id: c_int,
        cb: virConnectNodeDeviceEventGenericCallback,
        id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        self.virConnectNodeDeviceEventRegisterAny(
            conn,
            dev,
            event_id,
            cb,
            opaque_from_id(id),
            Some(free_callback::<H>),
            err,
        )
    }

    pub unsafe fn secret_event_register_any<H: EventHooks>(
        &self,
        conn: virConnectPtr,
        secret: virSecretPtr,
        event_id: c_int,
        cb: virConnectSecretEventGenericCallback,
        id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        self.virConnectSecretEventRegisterAny(
            conn,
            secret,
            event_id,
            cb,
            opaque_from_id(id),
            Some(free_callback::<H>),
            err,
        )
    }

    pub unsafe fn storage_pool_event_register_any<H: EventHooks>(
        &self,
        conn: virConnectPtr,
        pool: virStoragePoolPtr,
        event_id: c_int,
        cb: virConnectStoragePoolEventGenericCallback,
        id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        self.virConnectStoragePoolEventRegisterAny(
            conn,
            pool,
            event_id,
            cb,
            opaque_from_id(id),
            Some(free_callback::<H>),
            err,
        )
    }

    /// Subscribe to QEMU monitor events named `event` (all events when null).
    pub unsafe fn domain_qemu_monitor_event_register<H: EventHooks>(
        &self,
        conn: virConnectPtr,
        dom: virDomainPtr,
        event: *const c_char,
        id: CallbackId,
        flags: c_uint,
        err: &mut VirError,
    ) -> c_int {
        self.virConnectDomainQemuMonitorEventRegister(
            conn,
            dom,
            event,
            Some(domain_qemu_monitor_event::<H>),
            opaque_from_id(id),
            Some(free_callback::<H>),
            flags,
            err,
        )
    }

    /// Watch `fd` on libvirt's default event loop. Returns the watch number.
    pub unsafe fn event_add_handle<H: EventHooks>(
        &self,
        fd: c_int,
        events: c_int,
        id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        self.virEventAddHandle(fd, events, Some(event_handle::<H>), opaque_from_id(id), None, err)
    }

    /// Add a timer to libvirt's default event loop. Returns the timer number.
    pub unsafe fn event_add_timeout<H: EventHooks>(
        &self,
        timeout: c_int,
        id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        self.virEventAddTimeout(timeout, Some(event_timeout::<H>), opaque_from_id(id), None, err)
    }

    /// Make libvirt use the embedding program's event loop, reached through
    /// the `event_*` hooks of `H`.
    pub unsafe fn event_register_impl<H: EventHooks>(&self, err: &mut VirError) {
        self.virEventRegisterImpl(
            Some(event_add_handle_impl::<H>),
            Some(event_update_handle_impl::<H>),
            Some(event_remove_handle_impl::<H>),
            Some(event_add_timeout_impl::<H>),
            Some(event_update_timeout_impl::<H>),
            Some(event_remove_timeout_impl::<H>),
            err,
        )
    }

    /// Receive a whole stream through [`EventHooks::stream_sink`].
    pub unsafe fn stream_recv_all<H: EventHooks>(
        &self,
        stream: virStreamPtr,
        id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        let mut ids = StreamCallbackIds {
            callback: id,
            ..StreamCallbackIds::default()
        };
        self.virStreamRecvAll(stream, Some(stream_sink::<H>), ids_opaque(&mut ids), err)
    }

    /// Receive a whole sparse stream; holes go to [`EventHooks::stream_sink_hole`]
    /// under `hole_id`.
    pub unsafe fn stream_sparse_recv_all<H: EventHooks>(
        &self,
        stream: virStreamPtr,
        id: CallbackId,
        hole_id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        let mut ids = StreamCallbackIds {
            callback: id,
            hole: hole_id,
            ..StreamCallbackIds::default()
        };
        self.virStreamSparseRecvAll(
            stream,
            Some(stream_sink::<H>),
            Some(stream_sink_hole::<H>),
            ids_opaque(&mut ids),
            err,
        )
    }

    /// Send a whole stream produced by [`EventHooks::stream_source`].
    pub unsafe fn stream_send_all<H: EventHooks>(
        &self,
        stream: virStreamPtr,
        id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        let mut ids = StreamCallbackIds {
            callback: id,
            ..StreamCallbackIds::default()
        };
        self.virStreamSendAll(stream, Some(stream_source::<H>), ids_opaque(&mut ids), err)
    }

    /// Send a whole sparse stream. Data, hole queries and skips are dispatched
    /// under `id`, `hole_id` and `skip_id` respectively.
    pub unsafe fn stream_sparse_send_all<H: EventHooks>(
        &self,
        stream: virStreamPtr,
        id: CallbackId,
        hole_id: CallbackId,
        skip_id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        let mut ids = StreamCallbackIds {
            callback: id,
            hole: hole_id,
            skip: skip_id,
        };
        self.virStreamSparseSendAll(
            stream,
            Some(stream_source::<H>),
            Some(stream_source_hole::<H>),
            Some(stream_source_skip::<H>),
            ids_opaque(&mut ids),
            err,
        )
    }

    pub unsafe fn stream_event_add_callback<H: EventHooks>(
        &self,
        stream: virStreamPtr,
        events: c_int,
        id: CallbackId,
        err: &mut VirError,
    ) -> c_int {
        self.virStreamEventAddCallback(
            stream,
            events,
            Some(stream_event::<H>),
            opaque_from_id(id),
            None,
            err,
        )
    }
}

fn ids_opaque(ids: &mut StreamCallbackIds) -> *mut c_void {
    ids as *mut StreamCallbackIds as *mut c_void
}

/// Fire a handle callback received by [`EventHooks::event_add_handle`].
///
/// # Safety
/// `callback` and `opaque` must be the values libvirt passed to the hook.
pub unsafe fn invoke_event_handle_callback(
    watch: c_int,
    fd: c_int,
    events: c_int,
    callback: usize,
    opaque: usize,
) {
    if callback == 0 {
        return;
    }
    let cb: unsafe extern "C" fn(c_int, c_int, c_int, *mut c_void) = std::mem::transmute(callback);
    cb(watch, fd, events, opaque as *mut c_void)
}

/// Fire a timer callback received by [`EventHooks::event_add_timeout`].
///
/// # Safety
/// `callback` and `opaque` must be the values libvirt passed to the hook.
pub unsafe fn invoke_event_timeout_callback(timer: c_int, callback: usize, opaque: usize) {
    if callback == 0 {
        return;
    }
    let cb: unsafe extern "C" fn(c_int, *mut c_void) = std::mem::transmute(callback);
    cb(timer, opaque as *mut c_void)
}

/// Release the opaque of a removed watch or timer.
///
/// # Safety
/// `callback` and `opaque` must be the `freecb` and `opaque` values libvirt
/// passed to the add hook, and must be released only once.
pub unsafe fn invoke_event_free_callback(callback: usize, opaque: usize) {
    if callback == 0 {
        return;
    }
    let cb: unsafe extern "C" fn(*mut c_void) = std::mem::transmute(callback);
    cb(opaque as *mut c_void)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static FIRED: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "C" fn on_timer(timer: c_int, opaque: *mut c_void) {
        FIRED.store(timer as usize * 1000 + opaque as usize, Ordering::SeqCst);
    }

    #[test]
    fn test_invoke_timeout_callback() {
        unsafe { invoke_event_timeout_callback(3, on_timer as *const () as usize, 7) };
        assert_eq!(FIRED.load(Ordering::SeqCst), 3007);
    }

    #[test]
    fn test_invoke_with_null_callback_is_noop() {
        unsafe {
            invoke_event_handle_callback(1, 2, 3, 0, 0);
            invoke_event_free_callback(0, 0);
        }
    }
}
