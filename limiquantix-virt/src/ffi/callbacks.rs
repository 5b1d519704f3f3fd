//! Native callback signatures.
//!
//! Every callback is nullable on the C side, hence the `Option` wrappers.

use std::os::raw::{c_char, c_int, c_longlong, c_uint, c_ulonglong, c_void};

use super::types::*;

pub type virFreeCallback = Option<unsafe extern "C" fn(opaque: *mut c_void)>;

pub type virConnectAuthCallbackPtr = Option<
    unsafe extern "C" fn(cred: virConnectCredentialPtr, ncred: c_uint, cbdata: *mut c_void) -> c_int,
>;

pub type virConnectCloseFunc =
    Option<unsafe extern "C" fn(conn: virConnectPtr, reason: c_int, opaque: *mut c_void)>;

pub type virAdmConnectCloseFunc =
    Option<unsafe extern "C" fn(conn: virAdmConnectPtr, reason: c_int, opaque: *mut c_void)>;

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

pub type virEventHandleCallback =
    Option<unsafe extern "C" fn(watch: c_int, fd: c_int, events: c_int, opaque: *mut c_void)>;

pub type virEventTimeoutCallback = Option<unsafe extern "C" fn(timer: c_int, opaque: *mut c_void)>;

pub type virEventAddHandleFunc = Option<
    unsafe extern "C" fn(
        fd: c_int,
        event: c_int,
        cb: virEventHandleCallback,
        opaque: *mut c_void,
        ff: virFreeCallback,
    ) -> c_int,
>;

pub type virEventUpdateHandleFunc = Option<unsafe extern "C" fn(watch: c_int, event: c_int)>;

pub type virEventRemoveHandleFunc = Option<unsafe extern "C" fn(watch: c_int) -> c_int>;

pub type virEventAddTimeoutFunc = Option<
    unsafe extern "C" fn(
        timeout: c_int,
        cb: virEventTimeoutCallback,
        opaque: *mut c_void,
        ff: virFreeCallback,
    ) -> c_int,
>;

pub type virEventUpdateTimeoutFunc = Option<unsafe extern "C" fn(timer: c_int, timeout: c_int)>;

pub type virEventRemoveTimeoutFunc = Option<unsafe extern "C" fn(timer: c_int) -> c_int>;

// ---------------------------------------------------------------------------
// Streams
// ---------------------------------------------------------------------------

pub type virStreamEventCallback =
    Option<unsafe extern "C" fn(stream: virStreamPtr, events: c_int, opaque: *mut c_void)>;

pub type virStreamSourceFunc = Option<
    unsafe extern "C" fn(st: virStreamPtr, data: *mut c_char, nbytes: usize, opaque: *mut c_void) -> c_int,
>;

pub type virStreamSourceHoleFunc = Option<
    unsafe extern "C" fn(
        st: virStreamPtr,
        in_data: *mut c_int,
        length: *mut c_longlong,
        opaque: *mut c_void,
    ) -> c_int,
>;

pub type virStreamSourceSkipFunc =
    Option<unsafe extern "C" fn(st: virStreamPtr, length: c_longlong, opaque: *mut c_void) -> c_int>;

pub type virStreamSinkFunc = Option<
    unsafe extern "C" fn(st: virStreamPtr, data: *const c_char, nbytes: usize, opaque: *mut c_void) -> c_int,
>;

pub type virStreamSinkHoleFunc =
    Option<unsafe extern "C" fn(st: virStreamPtr, length: c_longlong, opaque: *mut c_void) -> c_int>;

// ---------------------------------------------------------------------------
// Object events
// ---------------------------------------------------------------------------

/// Legacy lifecycle-only domain event registration.
pub type virConnectDomainEventCallback = Option<
    unsafe extern "C" fn(
        conn: virConnectPtr,
        dom: virDomainPtr,
        event: c_int,
        detail: c_int,
        opaque: *mut c_void,
    ) -> c_int,
>;

pub type virConnectDomainEventGenericCallback =
    Option<unsafe extern "C" fn(conn: virConnectPtr, dom: virDomainPtr, opaque: *mut c_void)>;

pub type virConnectNetworkEventGenericCallback =
    Option<unsafe extern "C" fn(conn: virConnectPtr, net: virNetworkPtr, opaque: *mut c_void)>;

pub type virConnectNodeDeviceEventGenericCallback =
    Option<unsafe extern "C" fn(conn: virConnectPtr, dev: virNodeDevicePtr, opaque: *mut c_void)>;

pub type virConnectSecretEventGenericCallback =
    Option<unsafe extern "C" fn(conn: virConnectPtr, secret: virSecretPtr, opaque: *mut c_void)>;

pub type virConnectStoragePoolEventGenericCallback =
    Option<unsafe extern "C" fn(conn: virConnectPtr, pool: virStoragePoolPtr, opaque: *mut c_void)>;

pub type virConnectDomainQemuMonitorEventCallback = Option<
    unsafe extern "C" fn(
        conn: virConnectPtr,
        dom: virDomainPtr,
        event: *const c_char,
        seconds: c_longlong,
        micros: c_uint,
        details: *const c_char,
        opaque: *mut c_void,
    ),
>;

/// Typed payload shapes of the specific domain events. These are cast to
/// [`virConnectDomainEventGenericCallback`] when registered.
pub type virConnectDomainEventLifecycleCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, c_int, c_int, *mut c_void);
pub type virConnectDomainEventRTCChangeCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, c_longlong, *mut c_void);
pub type virConnectDomainEventWatchdogCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, c_int, *mut c_void);
pub type virConnectDomainEventIOErrorCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, *const c_char, *const c_char, c_int, *mut c_void);
pub type virConnectDomainEventGraphicsCallback = unsafe extern "C" fn(
    virConnectPtr,
    virDomainPtr,
    c_int,
    *const virDomainEventGraphicsAddress,
    *const virDomainEventGraphicsAddress,
    *const c_char,
    *const virDomainEventGraphicsSubject,
    *mut c_void,
);
pub type virConnectDomainEventIOErrorReasonCallback = unsafe extern "C" fn(
    virConnectPtr,
    virDomainPtr,
    *const c_char,
    *const c_char,
    c_int,
    *const c_char,
    *mut c_void,
);
pub type virConnectDomainEventBlockJobCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, *const c_char, c_int, c_int, *mut c_void);
pub type virConnectDomainEventDiskChangeCallback = unsafe extern "C" fn(
    virConnectPtr,
    virDomainPtr,
    *const c_char,
    *const c_char,
    *const c_char,
    c_int,
    *mut c_void,
);
pub type virConnectDomainEventTrayChangeCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, *const c_char, c_int, *mut c_void);
pub type virConnectDomainEventReasonCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, c_int, *mut c_void);
pub type virConnectDomainEventBalloonChangeCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, c_ulonglong, *mut c_void);
pub type virConnectDomainEventDeviceAliasCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, *const c_char, *mut c_void);
pub type virConnectDomainEventParamsCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, virTypedParameterPtr, c_int, *mut c_void);
pub type virConnectDomainEventAgentLifecycleCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, c_int, c_int, *mut c_void);
pub type virConnectDomainEventMetadataChangeCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, c_int, *const c_char, *mut c_void);
pub type virConnectDomainEventBlockThresholdCallback = unsafe extern "C" fn(
    virConnectPtr,
    virDomainPtr,
    *const c_char,
    *const c_char,
    c_ulonglong,
    c_ulonglong,
    *mut c_void,
);
pub type virConnectDomainEventMemoryFailureCallback =
    unsafe extern "C" fn(virConnectPtr, virDomainPtr, c_int, c_int, c_uint, *mut c_void);

pub type virConnectNetworkEventLifecycleCallback =
    unsafe extern "C" fn(virConnectPtr, virNetworkPtr, c_int, c_int, *mut c_void);
pub type virConnectNodeDeviceEventLifecycleCallback =
    unsafe extern "C" fn(virConnectPtr, virNodeDevicePtr, c_int, c_int, *mut c_void);
pub type virConnectSecretEventLifecycleCallback =
    unsafe extern "C" fn(virConnectPtr, virSecretPtr, c_int, c_int, *mut c_void);
pub type virConnectStoragePoolEventLifecycleCallback =
    unsafe extern "C" fn(virConnectPtr, virStoragePoolPtr, c_int, c_int, *mut c_void);

pub type virErrorFunc = Option<unsafe extern "C" fn(user_data: *mut c_void, error: virErrorPtr)>;
