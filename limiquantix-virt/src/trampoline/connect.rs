//! Connection authentication, close and free adapters.

use std::os::raw::{c_int, c_uint, c_void};

use super::{id_from_opaque, CallbackId, EventHooks};
use crate::ffi::*;

/// `virConnectAuth::cb` adapter. `cbdata` points at a [`CallbackId`] that
/// lives for the duration of the `virConnectOpenAuth` call.
pub extern "C" fn connect_auth<H: EventHooks>(
    cred: virConnectCredentialPtr,
    ncred: c_uint,
    cbdata: *mut c_void,
) -> c_int {
    if cbdata.is_null() {
        return -1;
    }
    // SAFETY: `connect_open_auth` always passes a pointer to a live ID.
    let id = unsafe { *(cbdata as *const CallbackId) };
    H::connect_auth(cred, ncred, id)
}

hook_adapters! {
    fn connect_close(conn: virConnectPtr, reason: c_int);
}

/// Free callback handed to every registration that carries a [`CallbackId`].
pub extern "C" fn free_callback<H: EventHooks>(opaque: *mut c_void) {
    H::free_callback_id(id_from_opaque(opaque))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicIsize, Ordering};

    static LAST: AtomicIsize = AtomicIsize::new(0);

    struct Auth;

    impl EventHooks for Auth {
        fn connect_auth(_cred: virConnectCredentialPtr, ncred: c_uint, id: CallbackId) -> c_int {
            LAST.store(id * 100 + ncred as CallbackId, Ordering::SeqCst);
            0
        }
    }

    #[test]
    fn test_auth_reads_id_through_pointer() {
        let mut id: CallbackId = 17;
        let rc = connect_auth::<Auth>(std::ptr::null_mut(), 2, &mut id as *mut CallbackId as *mut c_void);
        assert_eq!(rc, 0);
        assert_eq!(LAST.load(Ordering::SeqCst), 1702);
    }

    #[test]
    fn test_auth_without_data_fails() {
        assert_eq!(connect_auth::<Auth>(std::ptr::null_mut(), 0, std::ptr::null_mut()), -1);
    }
}
