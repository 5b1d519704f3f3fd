//! Integration tests for the binding layer.
//!
//! Native libraries are replaced by a `MockSource` serving Rust functions, so
//! these run on hosts without libvirt.

use std::ffi::{c_void, CStr};
use std::os::raw::{c_char, c_int, c_longlong, c_uint, c_ulong, c_ulonglong};
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use limiquantix_virt::ffi::*;
use limiquantix_virt::mock::{has_last_error, set_last_error};
use limiquantix_virt::trampoline::{
    domain_event_callback, network_event_callback, node_device_event_callback, secret_event_callback,
    storage_pool_event_callback, CallbackId,
};
use limiquantix_virt::{
    invoke_event_handle_callback, invoke_event_timeout_callback, EventHooks, Library, Libvirt,
    MockSource, TypedParamValue, TypedParams, VirError,
};

fn binding(mock: MockSource) -> (Libvirt, Arc<MockSource>) {
    let mock = Arc::new(mock);
    (Libvirt::new(mock.clone()), mock)
}

fn marked_error() -> VirError {
    VirError {
        code: 77,
        message: Some("caller supplied".to_string()),
        ..VirError::default()
    }
}

// =============================================================================
// Native stand-ins
// =============================================================================

extern "C" fn num_of_domains_ok(_conn: virConnectPtr) -> c_int {
    3
}

extern "C" fn num_of_domains_failing(_conn: virConnectPtr) -> c_int {
    set_last_error(VIR_ERR_OPERATION_FAILED, VIR_FROM_QEMU, "monitor unreachable");
    -1
}

extern "C" fn get_version(lib_ver: *mut c_ulong, _type: *const c_char, _type_ver: *mut c_ulong) -> c_int {
    unsafe { *lib_ver = 9_000_000 };
    0
}

extern "C" fn domain_get_id_failing(_dom: virDomainPtr) -> c_uint {
    set_last_error(VIR_ERR_NO_DOMAIN, VIR_FROM_DOM, "domain is not running");
    c_uint::MAX
}

extern "C" fn free_memory_failing(_conn: virConnectPtr) -> c_ulonglong {
    set_last_error(VIR_ERR_OPERATION_FAILED, VIR_FROM_NONE, "cannot read meminfo");
    0
}

extern "C" fn free_memory_ok(_conn: virConnectPtr) -> c_ulonglong {
    1 << 30
}

extern "C" fn domain_get_name(_dom: virDomainPtr) -> *const c_char {
    b"guest-01\0".as_ptr() as *const c_char
}

// =============================================================================
// Wrappers and error propagation
// =============================================================================

#[test]
fn test_missing_library_returns_sentinels() {
    let (lv, _mock) = binding(MockSource::new().with_error_reporting().without_library(Library::Core));
    let mut err = marked_error();

    unsafe {
        assert_eq!(lv.virConnectNumOfDomains(ptr::null_mut(), &mut err), -1);
        assert!(lv.virDomainGetName(ptr::null_mut(), &mut err).is_null());
        assert_eq!(lv.virDomainGetID(ptr::null_mut(), &mut err), c_uint::MAX);
        assert_eq!(lv.virDomainGetMaxMemory(ptr::null_mut(), &mut err), 0);
    }
    assert_eq!(err, marked_error());
}

#[test]
fn test_missing_optional_library_keeps_core_working() {
    let (lv, _mock) = binding(
        MockSource::new()
            .with_symbol(Library::Core, "virConnectNumOfDomains", num_of_domains_ok as *const () as usize)
            .without_library(Library::Qemu),
    );
    let mut err = VirError::default();

    let cmd = b"{}\0".as_ptr() as *const c_char;
    let rc = unsafe { lv.virDomainQemuMonitorCommand(ptr::null_mut(), cmd, ptr::null_mut(), 0, &mut err) };
    assert_eq!(rc, -1);
    assert_eq!(unsafe { lv.virConnectNumOfDomains(ptr::null_mut(), &mut err) }, 3);
    assert!(lv.library_status(Library::Core).is_ok());
    assert!(lv.library_status(Library::Qemu).is_err());
    assert!(!err.is_set());
}

#[test]
fn test_success_passes_result_through() {
    let (lv, _mock) = binding(
        MockSource::new()
            .with_error_reporting()
            .with_symbol(Library::Core, "virGetVersion", get_version as *const () as usize)
            .with_symbol(Library::Core, "virDomainGetName", domain_get_name as *const () as usize),
    );
    let mut err = marked_error();
    let mut version: c_ulong = 0;

    let rc = unsafe { lv.virGetVersion(&mut version, ptr::null(), ptr::null_mut(), &mut err) };
    assert_eq!(rc, 0);
    assert_eq!(version, 9_000_000);

    let name = unsafe { lv.virDomainGetName(ptr::null_mut(), &mut err) };
    assert_eq!(unsafe { CStr::from_ptr(name) }.to_str().unwrap(), "guest-01");

    assert_eq!(err, marked_error());
}

#[test]
fn test_failure_fills_error_record() {
    let (lv, _mock) = binding(
        MockSource::new()
            .with_error_reporting()
            .with_symbol(Library::Core, "virConnectNumOfDomains", num_of_domains_failing as *const () as usize),
    );
    let mut err = VirError::default();

    let rc = unsafe { lv.virConnectNumOfDomains(ptr::null_mut(), &mut err) };

    assert_eq!(rc, -1);
    assert_eq!(err.code, VIR_ERR_OPERATION_FAILED);
    assert_eq!(err.domain, VIR_FROM_QEMU);
    assert_eq!(err.level, VIR_ERR_ERROR);
    assert_eq!(err.message.as_deref(), Some("monitor unreachable"));
    assert!(err.to_string().contains("monitor unreachable"));
    assert!(!has_last_error(), "the thread's native error must be reset");
}

#[test]
fn test_all_ones_identifier_is_a_failure() {
    let (lv, _mock) = binding(
        MockSource::new()
            .with_error_reporting()
            .with_symbol(Library::Core, "virDomainGetID", domain_get_id_failing as *const () as usize),
    );
    let mut err = VirError::default();

    let id = unsafe { lv.virDomainGetID(ptr::null_mut(), &mut err) };

    assert_eq!(id, c_uint::MAX);
    assert_eq!(err.code, VIR_ERR_NO_DOMAIN);
    assert_eq!(err.message.as_deref(), Some("domain is not running"));
}

#[test]
fn test_failure_without_error_retrieval() {
    let (lv, _mock) = binding(
        MockSource::new().with_symbol(Library::Core, "virConnectNumOfDomains", num_of_domains_failing as *const () as usize),
    );
    let mut err = VirError::default();

    assert_eq!(unsafe { lv.virConnectNumOfDomains(ptr::null_mut(), &mut err) }, -1);
    assert_eq!(err.code, VIR_ERR_INTERNAL_ERROR);
    assert!(err.message.as_deref().unwrap_or_default().contains("virCopyLastError"));
}

/// An unsigned amount of 0 is the failure signal; anything else is a value.
#[test]
fn test_zero_amount_is_a_failure() {
    let (lv, _mock) = binding(
        MockSource::new()
            .with_error_reporting()
            .with_symbol(Library::Core, "virNodeGetFreeMemory", free_memory_failing as *const () as usize),
    );
    let mut err = VirError::default();

    assert_eq!(unsafe { lv.virNodeGetFreeMemory(ptr::null_mut(), &mut err) }, 0);
    assert_eq!(err.code, VIR_ERR_OPERATION_FAILED);
    assert_eq!(err.message.as_deref(), Some("cannot read meminfo"));
    assert!(!has_last_error());
}

#[test]
fn test_nonzero_amount_leaves_error_alone() {
    let (lv, _mock) = binding(
        MockSource::new()
            .with_error_reporting()
            .with_symbol(Library::Core, "virNodeGetFreeMemory", free_memory_ok as *const () as usize),
    );
    let mut err = marked_error();

    assert_eq!(unsafe { lv.virNodeGetFreeMemory(ptr::null_mut(), &mut err) }, 1 << 30);
    assert_eq!(err, marked_error());
}

// =============================================================================
// Resolution caching
// =============================================================================

#[test]
fn test_symbol_resolved_once() {
    let (lv, mock) = binding(
        MockSource::new().with_symbol(Library::Core, "virConnectNumOfDomains", num_of_domains_ok as *const () as usize),
    );
    let mut err = VirError::default();

    for _ in 0..10 {
        assert_eq!(unsafe { lv.virConnectNumOfDomains(ptr::null_mut(), &mut err) }, 3);
    }
    assert_eq!(mock.resolution_count("virConnectNumOfDomains"), 1);
}

#[test]
fn test_missing_symbol_resolved_once() {
    let (lv, mock) = binding(MockSource::new());
    let mut err = VirError::default();

    for _ in 0..5 {
        assert_eq!(unsafe { lv.virConnectNumOfDomains(ptr::null_mut(), &mut err) }, -1);
    }
    assert_eq!(mock.resolution_count("virConnectNumOfDomains"), 1);
}

#[test]
fn test_concurrent_first_calls_resolve_once() {
    let (lv, mock) = binding(
        MockSource::new().with_symbol(Library::Core, "virConnectNumOfDomains", num_of_domains_ok as *const () as usize),
    );
    let total = AtomicUsize::new(0);

    std::thread::scope(|s| {
        for _ in 0..20 {
            s.spawn(|| {
                let mut err = VirError::default();
                for _ in 0..50 {
                    let n = unsafe { lv.virConnectNumOfDomains(ptr::null_mut(), &mut err) };
                    total.fetch_add(n as usize, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(total.load(Ordering::SeqCst), 3000);
    assert_eq!(mock.resolution_count("virConnectNumOfDomains"), 1);
}

// =============================================================================
// Domain event dispatch
// =============================================================================

struct Registration {
    cb: virConnectDomainEventGenericCallback,
    opaque: usize,
    freecb: virFreeCallback,
}

static REGISTERED: Mutex<Option<Registration>> = Mutex::new(None);

extern "C" fn domain_event_register_any(
    _conn: virConnectPtr,
    _dom: virDomainPtr,
    _event_id: c_int,
    cb: virConnectDomainEventGenericCallback,
    opaque: *mut c_void,
    freecb: virFreeCallback,
) -> c_int {
    *REGISTERED.lock().unwrap() = Some(Registration {
        cb,
        opaque: opaque as usize,
        freecb,
    });
    1
}

static LIFECYCLE_SEEN: Mutex<Vec<(c_int, c_int, CallbackId)>> = Mutex::new(Vec::new());
static FREED: Mutex<Vec<CallbackId>> = Mutex::new(Vec::new());

struct DomainWatcher;

impl EventHooks for DomainWatcher {
    fn domain_event_lifecycle(
        _conn: virConnectPtr,
        _dom: virDomainPtr,
        event: c_int,
        detail: c_int,
        id: CallbackId,
    ) {
        LIFECYCLE_SEEN.lock().unwrap().push((event, detail, id));
    }

    fn free_callback_id(id: CallbackId) {
        FREED.lock().unwrap().push(id);
    }
}

#[test]
fn test_domain_event_reaches_hook_with_callback_id() {
    let (lv, _mock) = binding(MockSource::new().with_symbol(
        Library::Core,
        "virConnectDomainEventRegisterAny",
        domain_event_register_any as *const () as usize,
    ));
    let mut err = VirError::default();

    let cb = domain_event_callback::<DomainWatcher>(VIR_DOMAIN_EVENT_ID_LIFECYCLE);
    let rc = unsafe {
        lv.domain_event_register_any::<DomainWatcher>(
            ptr::null_mut(),
            ptr::null_mut(),
            VIR_DOMAIN_EVENT_ID_LIFECYCLE,
            cb,
            42,
            &mut err,
        )
    };
    assert_eq!(rc, 1);

    // Fire the event the way libvirt would.
    let registration = REGISTERED.lock().unwrap().take().unwrap();
    let generic = registration.cb.unwrap();
    let lifecycle: virConnectDomainEventLifecycleCallback = unsafe { std::mem::transmute(generic) };
    unsafe {
        lifecycle(ptr::null_mut(), ptr::null_mut(), 2, 0, registration.opaque as *mut c_void);
        registration.freecb.unwrap()(registration.opaque as *mut c_void);
    }

    assert_eq!(*LIFECYCLE_SEEN.lock().unwrap(), vec![(2, 0, 42)]);
    assert_eq!(*FREED.lock().unwrap(), vec![42]);
}

// =============================================================================
// Sparse stream dispatch
// =============================================================================

static STREAM_CALLS: Mutex<Vec<(&'static str, CallbackId)>> = Mutex::new(Vec::new());

struct SparseCopy;

impl EventHooks for SparseCopy {
    fn stream_sink(_st: virStreamPtr, _data: *const c_char, nbytes: usize, id: CallbackId) -> c_int {
        STREAM_CALLS.lock().unwrap().push(("sink", id));
        nbytes as c_int
    }

    fn stream_sink_hole(_st: virStreamPtr, _length: c_longlong, id: CallbackId) -> c_int {
        STREAM_CALLS.lock().unwrap().push(("sink_hole", id));
        0
    }

    fn stream_source(_st: virStreamPtr, _data: *mut c_char, _nbytes: usize, id: CallbackId) -> c_int {
        STREAM_CALLS.lock().unwrap().push(("source", id));
        0
    }

    fn stream_source_hole(
        _st: virStreamPtr,
        in_data: *mut c_int,
        length: *mut c_longlong,
        id: CallbackId,
    ) -> c_int {
        STREAM_CALLS.lock().unwrap().push(("source_hole", id));
        unsafe {
            *in_data = 0;
            *length = 4096;
        }
        0
    }

    fn stream_source_skip(_st: virStreamPtr, _length: c_longlong, id: CallbackId) -> c_int {
        STREAM_CALLS.lock().unwrap().push(("source_skip", id));
        0
    }
}

extern "C" fn sparse_recv_all(
    st: virStreamPtr,
    handler: virStreamSinkFunc,
    hole_handler: virStreamSinkHoleFunc,
    opaque: *mut c_void,
) -> c_int {
    let data = [0 as c_char; 16];
    unsafe {
        if handler.unwrap()(st, data.as_ptr(), data.len(), opaque) != 16 {
            return -1;
        }
        hole_handler.unwrap()(st, 1 << 20, opaque)
    }
}

extern "C" fn sparse_send_all(
    st: virStreamPtr,
    handler: virStreamSourceFunc,
    hole_handler: virStreamSourceHoleFunc,
    skip_handler: virStreamSourceSkipFunc,
    opaque: *mut c_void,
) -> c_int {
    let mut in_data: c_int = 1;
    let mut length: c_longlong = 0;
    let mut buf = [0 as c_char; 16];
    unsafe {
        hole_handler.unwrap()(st, &mut in_data, &mut length, opaque);
        if in_data == 0 {
            skip_handler.unwrap()(st, length, opaque);
        }
        handler.unwrap()(st, buf.as_mut_ptr(), buf.len(), opaque)
    }
}

#[test]
fn test_sparse_stream_callbacks_get_their_own_ids() {
    let (lv, _mock) = binding(
        MockSource::new()
            .with_symbol(Library::Core, "virStreamSparseRecvAll", sparse_recv_all as *const () as usize)
            .with_symbol(Library::Core, "virStreamSparseSendAll", sparse_send_all as *const () as usize),
    );
    let mut err = VirError::default();

    unsafe {
        assert_eq!(lv.stream_sparse_recv_all::<SparseCopy>(ptr::null_mut(), 1, 2, &mut err), 0);
        assert_eq!(
            lv.stream_sparse_send_all::<SparseCopy>(ptr::null_mut(), 1, 2, 3, &mut err),
            0
        );
    }

    assert_eq!(
        *STREAM_CALLS.lock().unwrap(),
        vec![
            ("sink", 1),
            ("sink_hole", 2),
            ("source_hole", 2),
            ("source_skip", 3),
            ("source", 1),
        ]
    );
}

// =============================================================================
// Typed parameters
// =============================================================================

#[test]
fn test_typed_params_report_missing_helpers() {
    let (lv, _mock) = binding(MockSource::new());

    let mut params = TypedParams::new(&lv);
    let err = params.add("vcpus", TypedParamValue::Int(4)).unwrap_err();

    assert_eq!(err.code, VIR_ERR_INTERNAL_ERROR);
    assert!(params.is_empty());
    assert!(params.to_vec().is_empty());
}

#[test]
fn test_typed_params_reject_interior_nul() {
    let (lv, mock) = binding(MockSource::new());

    let mut params = TypedParams::new(&lv);
    assert!(params.add("bad\0name", TypedParamValue::UInt(1)).is_err());
    assert_eq!(mock.resolution_count("virTypedParamsAddUInt"), 0);
}

#[test]
fn test_typed_params_error_is_printable() {
    let (lv, _mock) = binding(MockSource::new());

    let mut params = TypedParams::new(&lv);
    let shown = format!("{:?}", params.add("weight", TypedParamValue::UInt(100)));

    assert!(shown.starts_with("Err("));
    assert!(format!("{params:?}").contains("nparams: 0"));
}

// =============================================================================
// Callback registration helpers
// =============================================================================

/// Raw values a mock native received for a registration.
#[derive(Debug, Clone, Copy)]
struct Captured {
    cb: usize,
    opaque: usize,
    freecb: usize,
}

static CAPTURED: Mutex<Vec<(&'static str, Captured)>> = Mutex::new(Vec::new());

fn capture(name: &'static str, cb: usize, opaque: *mut c_void, freecb: usize) {
    CAPTURED.lock().unwrap().push((
        name,
        Captured {
            cb,
            opaque: opaque as usize,
            freecb,
        },
    ));
}

fn captured(name: &str) -> Captured {
    let captured = CAPTURED.lock().unwrap();
    captured
        .iter()
        .rev()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
        .unwrap_or_else(|| panic!("nothing registered under {name}"))
}

/// Hook calls as `(hook, id, value)`. Every test uses its own IDs.
static HOOK_CALLS: Mutex<Vec<(&'static str, CallbackId, i64)>> = Mutex::new(Vec::new());

fn record(hook: &'static str, id: CallbackId, value: i64) {
    HOOK_CALLS.lock().unwrap().push((hook, id, value));
}

fn calls_for(id: CallbackId) -> Vec<(&'static str, i64)> {
    HOOK_CALLS
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, i, _)| *i == id)
        .map(|(hook, _, value)| (*hook, *value))
        .collect()
}

struct Recorder;

impl EventHooks for Recorder {
    fn connect_auth(_cred: virConnectCredentialPtr, ncred: c_uint, id: CallbackId) -> c_int {
        record("auth", id, ncred as i64);
        0
    }

    fn connect_close(_conn: virConnectPtr, reason: c_int, id: CallbackId) {
        record("close", id, reason as i64);
    }

    fn free_callback_id(id: CallbackId) {
        record("free", id, 0);
    }

    fn network_event_lifecycle(
        _conn: virConnectPtr,
        _net: virNetworkPtr,
        event: c_int,
        detail: c_int,
        id: CallbackId,
    ) {
        record("network", id, (event * 10 + detail) as i64);
    }

    fn node_device_event_lifecycle(
        _conn: virConnectPtr,
        _dev: virNodeDevicePtr,
        event: c_int,
        detail: c_int,
        id: CallbackId,
    ) {
        record("node_device", id, (event * 10 + detail) as i64);
    }

    fn secret_event_lifecycle(
        _conn: virConnectPtr,
        _secret: virSecretPtr,
        event: c_int,
        detail: c_int,
        id: CallbackId,
    ) {
        record("secret", id, (event * 10 + detail) as i64);
    }

    fn storage_pool_event_lifecycle(
        _conn: virConnectPtr,
        _pool: virStoragePoolPtr,
        event: c_int,
        detail: c_int,
        id: CallbackId,
    ) {
        record("storage_pool", id, (event * 10 + detail) as i64);
    }

    fn domain_qemu_monitor_event(
        _conn: virConnectPtr,
        _dom: virDomainPtr,
        event: *const c_char,
        seconds: c_longlong,
        micros: c_uint,
        _details: *const c_char,
        id: CallbackId,
    ) {
        let name = unsafe { CStr::from_ptr(event) }.to_str().unwrap_or_default();
        let hook = if name == "SHUTDOWN" { "qemu_shutdown" } else { "qemu_other" };
        record(hook, id, seconds * 1_000_000 + micros as i64);
    }

    fn event_handle(_watch: c_int, fd: c_int, events: c_int, id: CallbackId) {
        record("handle", id, (fd * 100 + events) as i64);
    }

    fn event_timeout(timer: c_int, id: CallbackId) {
        record("timeout", id, timer as i64);
    }

    fn stream_event(_st: virStreamPtr, events: c_int, id: CallbackId) {
        record("stream_event", id, events as i64);
    }

    fn stream_sink(_st: virStreamPtr, _data: *const c_char, nbytes: usize, id: CallbackId) -> c_int {
        record("sink", id, nbytes as i64);
        nbytes as c_int
    }

    fn stream_source(_st: virStreamPtr, _data: *mut c_char, nbytes: usize, id: CallbackId) -> c_int {
        record("source", id, nbytes as i64);
        0
    }
}

fn fake_conn() -> virConnectPtr {
    ptr::NonNull::dangling().as_ptr()
}

// Native stand-ins that keep what they were given.

extern "C" fn open_auth(_name: *const c_char, auth: virConnectAuthPtr, _flags: c_uint) -> virConnectPtr {
    capture("open_auth", 0, auth as *mut c_void, 0);
    if auth.is_null() {
        return ptr::null_mut();
    }
    let auth = unsafe { &*auth };
    match auth.cb {
        Some(cb) if unsafe { cb(ptr::null_mut(), auth.ncredtype, auth.cbdata) } < 0 => ptr::null_mut(),
        _ => fake_conn(),
    }
}

extern "C" fn register_close(
    _conn: virConnectPtr,
    cb: virConnectCloseFunc,
    opaque: *mut c_void,
    freecb: virFreeCallback,
) -> c_int {
    capture("close", cb.map_or(0, |f| f as usize), opaque, freecb.map_or(0, |f| f as usize));
    0
}

/// Succeeds only for the exact pointer given at registration, as libvirt does.
extern "C" fn unregister_close(_conn: virConnectPtr, cb: virConnectCloseFunc) -> c_int {
    if cb.map_or(0, |f| f as usize) == captured("close").cb {
        0
    } else {
        -1
    }
}

macro_rules! register_any_stand_in {
    ($name:ident, $key:literal, $obj:ty, $cb:ty) => {
        extern "C" fn $name(
            _conn: virConnectPtr,
            _obj: $obj,
            _event_id: c_int,
            cb: $cb,
            opaque: *mut c_void,
            freecb: virFreeCallback,
        ) -> c_int {
            capture($key, cb.map_or(0, |f| f as usize), opaque, freecb.map_or(0, |f| f as usize));
            4
        }
    };
}

register_any_stand_in!(network_register_any, "network", virNetworkPtr, virConnectNetworkEventGenericCallback);
register_any_stand_in!(
    node_device_register_any,
    "node_device",
    virNodeDevicePtr,
    virConnectNodeDeviceEventGenericCallback
);
register_any_stand_in!(secret_register_any, "secret", virSecretPtr, virConnectSecretEventGenericCallback);
register_any_stand_in!(
    storage_pool_register_any,
    "storage_pool",
    virStoragePoolPtr,
    virConnectStoragePoolEventGenericCallback
);

extern "C" fn qemu_monitor_register(
    _conn: virConnectPtr,
    _dom: virDomainPtr,
    _event: *const c_char,
    cb: virConnectDomainQemuMonitorEventCallback,
    opaque: *mut c_void,
    freecb: virFreeCallback,
    _flags: c_uint,
) -> c_int {
    capture("qemu_monitor", cb.map_or(0, |f| f as usize), opaque, freecb.map_or(0, |f| f as usize));
    5
}

extern "C" fn add_handle(
    _fd: c_int,
    _events: c_int,
    cb: virEventHandleCallback,
    opaque: *mut c_void,
    ff: virFreeCallback,
) -> c_int {
    capture("handle", cb.map_or(0, |f| f as usize), opaque, ff.map_or(0, |f| f as usize));
    3
}

extern "C" fn add_timeout(
    _timeout: c_int,
    cb: virEventTimeoutCallback,
    opaque: *mut c_void,
    ff: virFreeCallback,
) -> c_int {
    capture("timeout", cb.map_or(0, |f| f as usize), opaque, ff.map_or(0, |f| f as usize));
    6
}

extern "C" fn stream_event_add(
    _st: virStreamPtr,
    _events: c_int,
    cb: virStreamEventCallback,
    opaque: *mut c_void,
    ff: virFreeCallback,
) -> c_int {
    capture("stream_event", cb.map_or(0, |f| f as usize), opaque, ff.map_or(0, |f| f as usize));
    0
}

extern "C" fn recv_all(st: virStreamPtr, handler: virStreamSinkFunc, opaque: *mut c_void) -> c_int {
    let data = [0 as c_char; 8];
    let consumed = unsafe { handler.unwrap()(st, data.as_ptr(), data.len(), opaque) };
    if consumed == 8 {
        0
    } else {
        -1
    }
}

extern "C" fn send_all(st: virStreamPtr, handler: virStreamSourceFunc, opaque: *mut c_void) -> c_int {
    let mut buf = [0 as c_char; 32];
    unsafe { handler.unwrap()(st, buf.as_mut_ptr(), buf.len(), opaque) }
}

#[test]
fn test_open_auth_hands_id_to_auth_hook() {
    let (lv, _mock) = binding(MockSource::new().with_symbol(
        Library::Core,
        "virConnectOpenAuth",
        open_auth as *const () as usize,
    ));
    let mut err = VirError::default();
    let mut credtype = [VIR_CRED_AUTHNAME, VIR_CRED_PASSPHRASE];
    let uri = b"qemu+tcp://node-1/system\0".as_ptr() as *const c_char;

    let conn = unsafe {
        lv.connect_open_auth::<Recorder>(uri, credtype.as_mut_ptr(), credtype.len() as c_uint, 101, 0, &mut err)
    };

    assert!(!conn.is_null());
    assert_eq!(calls_for(101), vec![("auth", 2)]);
    assert!(!err.is_set());
}

#[test]
fn test_open_auth_default_passes_exported_authenticator() {
    let auth: &'static mut virConnectAuth = Box::leak(Box::new(virConnectAuth {
        credtype: ptr::null_mut(),
        ncredtype: 0,
        cb: None,
        cbdata: ptr::null_mut(),
    }));
    let auth_ptr: virConnectAuthPtr = auth;
    let slot: &'static mut virConnectAuthPtr = Box::leak(Box::new(auth_ptr));

    let (lv, _mock) = binding(
        MockSource::new()
            .with_symbol(Library::Core, "virConnectAuthPtrDefault", slot as *mut virConnectAuthPtr as usize)
            .with_symbol(Library::Core, "virConnectOpenAuth", open_auth as *const () as usize),
    );
    let mut err = VirError::default();

    assert_eq!(unsafe { lv.virConnectAuthPtrDefault() }, auth_ptr);
    let conn = unsafe { lv.connect_open_auth_default(ptr::null(), 0, &mut err) };
    assert!(!conn.is_null());
    assert_eq!(captured("open_auth").opaque, auth_ptr as usize);
}

#[test]
fn test_missing_default_authenticator_is_null() {
    let (lv, mock) = binding(MockSource::new());

    for _ in 0..3 {
        assert!(unsafe { lv.virConnectAuthPtrDefault() }.is_null());
    }
    assert_eq!(mock.resolution_count("virConnectAuthPtrDefault"), 1);
}

#[test]
fn test_close_callback_register_fire_and_unregister() {
    let (lv, _mock) = binding(
        MockSource::new()
            .with_symbol(Library::Core, "virConnectRegisterCloseCallback", register_close as *const () as usize)
            .with_symbol(
                Library::Core,
                "virConnectUnregisterCloseCallback",
                unregister_close as *const () as usize,
            ),
    );
    let mut err = VirError::default();
    let conn = fake_conn();

    assert_eq!(unsafe { lv.connect_register_close_callback::<Recorder>(conn, 102, &mut err) }, 0);

    let registration = captured("close");
    assert_ne!(registration.freecb, 0);
    let close: unsafe extern "C" fn(virConnectPtr, c_int, *mut c_void) =
        unsafe { std::mem::transmute(registration.cb) };
    unsafe { close(conn, 1, registration.opaque as *mut c_void) };

    assert_eq!(unsafe { lv.connect_unregister_close_callback::<Recorder>(conn, &mut err) }, 0);
    let free: unsafe extern "C" fn(*mut c_void) = unsafe { std::mem::transmute(registration.freecb) };
    unsafe { free(registration.opaque as *mut c_void) };

    assert_eq!(calls_for(102), vec![("close", 1), ("free", 0)]);
    assert!(!err.is_set());
}

#[test]
fn test_object_event_registrations_reach_hooks() {
    let (lv, _mock) = binding(
        MockSource::new()
            .with_symbol(Library::Core, "virConnectNetworkEventRegisterAny", network_register_any as *const () as usize)
            .with_symbol(
                Library::Core,
                "virConnectNodeDeviceEventRegisterAny",
                node_device_register_any as *const () as usize,
            )
            .with_symbol(Library::Core, "virConnectSecretEventRegisterAny", secret_register_any as *const () as usize)
            .with_symbol(
                Library::Core,
                "virConnectStoragePoolEventRegisterAny",
                storage_pool_register_any as *const () as usize,
            ),
    );
    let mut err = VirError::default();
    let conn = fake_conn();

    unsafe {
        let cb = network_event_callback::<Recorder>(VIR_NETWORK_EVENT_ID_LIFECYCLE);
        assert_eq!(
            lv.network_event_register_any::<Recorder>(conn, ptr::null_mut(), VIR_NETWORK_EVENT_ID_LIFECYCLE, cb, 111, &mut err),
            4
        );
        let cb = node_device_event_callback::<Recorder>(VIR_NODE_DEVICE_EVENT_ID_LIFECYCLE);
        assert_eq!(
            lv.node_device_event_register_any::<Recorder>(
                conn,
                ptr::null_mut(),
                VIR_NODE_DEVICE_EVENT_ID_LIFECYCLE,
                cb,
                112,
                &mut err
            ),
            4
        );
        let cb = secret_event_callback::<Recorder>(VIR_SECRET_EVENT_ID_LIFECYCLE);
        assert_eq!(
            lv.secret_event_register_any::<Recorder>(conn, ptr::null_mut(), VIR_SECRET_EVENT_ID_LIFECYCLE, cb, 113, &mut err),
            4
        );
        let cb = storage_pool_event_callback::<Recorder>(VIR_STORAGE_POOL_EVENT_ID_LIFECYCLE);
        assert_eq!(
            lv.storage_pool_event_register_any::<Recorder>(
                conn,
                ptr::null_mut(),
                VIR_STORAGE_POOL_EVENT_ID_LIFECYCLE,
                cb,
                114,
                &mut err
            ),
            4
        );
    }

    // Every lifecycle callback shares one native shape apart from the object type.
    for (key, id) in [("network", 111), ("node_device", 112), ("secret", 113), ("storage_pool", 114)] {
        let registration = captured(key);
        assert_ne!(registration.cb, 0, "{key}");
        let lifecycle: unsafe extern "C" fn(virConnectPtr, *mut c_void, c_int, c_int, *mut c_void) =
            unsafe { std::mem::transmute(registration.cb) };
        let free: unsafe extern "C" fn(*mut c_void) = unsafe { std::mem::transmute(registration.freecb) };
        unsafe {
            lifecycle(conn, ptr::null_mut(), 1, 2, registration.opaque as *mut c_void);
            free(registration.opaque as *mut c_void);
        }
        assert_eq!(calls_for(id), vec![(key, 12), ("free", 0)]);
    }
}

#[test]
fn test_qemu_monitor_event_reaches_hook() {
    let (lv, _mock) = binding(MockSource::new().with_symbol(
        Library::Qemu,
        "virConnectDomainQemuMonitorEventRegister",
        qemu_monitor_register as *const () as usize,
    ));
    let mut err = VirError::default();
    let event = b"SHUTDOWN\0".as_ptr() as *const c_char;

    let rc = unsafe {
        lv.domain_qemu_monitor_event_register::<Recorder>(fake_conn(), ptr::null_mut(), event, 121, 0, &mut err)
    };
    assert_eq!(rc, 5);

    let registration = captured("qemu_monitor");
    let monitor: unsafe extern "C" fn(
        virConnectPtr,
        virDomainPtr,
        *const c_char,
        c_longlong,
        c_uint,
        *const c_char,
        *mut c_void,
    ) = unsafe { std::mem::transmute(registration.cb) };
    let details = b"{\"guest\":true}\0".as_ptr() as *const c_char;
    unsafe {
        monitor(fake_conn(), ptr::null_mut(), event, 3, 250, details, registration.opaque as *mut c_void);
    }

    assert_ne!(registration.freecb, 0);
    assert_eq!(calls_for(121), vec![("qemu_shutdown", 3_000_250)]);
}

#[test]
fn test_default_loop_handle_and_timeout_reach_hooks() {
    let (lv, _mock) = binding(
        MockSource::new()
            .with_symbol(Library::Core, "virEventAddHandle", add_handle as *const () as usize)
            .with_symbol(Library::Core, "virEventAddTimeout", add_timeout as *const () as usize),
    );
    let mut err = VirError::default();

    unsafe {
        assert_eq!(lv.event_add_handle::<Recorder>(9, VIR_EVENT_HANDLE_READABLE, 131, &mut err), 3);
        assert_eq!(lv.event_add_timeout::<Recorder>(500, 132, &mut err), 6);
    }

    let handle = captured("handle");
    let timeout = captured("timeout");
    // Neither registration hands libvirt a free callback.
    assert_eq!(handle.freecb, 0);
    assert_eq!(timeout.freecb, 0);

    unsafe {
        invoke_event_handle_callback(3, 9, VIR_EVENT_HANDLE_READABLE, handle.cb, handle.opaque);
        invoke_event_timeout_callback(6, timeout.cb, timeout.opaque);
    }

    assert_eq!(calls_for(131), vec![("handle", 901)]);
    assert_eq!(calls_for(132), vec![("timeout", 6)]);
}

#[test]
fn test_stream_event_callback_reaches_hook() {
    let (lv, _mock) = binding(MockSource::new().with_symbol(
        Library::Core,
        "virStreamEventAddCallback",
        stream_event_add as *const () as usize,
    ));
    let mut err = VirError::default();
    let events = VIR_STREAM_EVENT_READABLE | VIR_STREAM_EVENT_HANGUP;

    assert_eq!(
        unsafe { lv.stream_event_add_callback::<Recorder>(ptr::null_mut(), events, 141, &mut err) },
        0
    );

    let registration = captured("stream_event");
    assert_eq!(registration.freecb, 0);
    let fire: unsafe extern "C" fn(virStreamPtr, c_int, *mut c_void) =
        unsafe { std::mem::transmute(registration.cb) };
    unsafe { fire(ptr::null_mut(), events, registration.opaque as *mut c_void) };

    assert_eq!(calls_for(141), vec![("stream_event", events as i64)]);
}

#[test]
fn test_whole_stream_transfers_use_callback_id() {
    let (lv, _mock) = binding(
        MockSource::new()
            .with_symbol(Library::Core, "virStreamRecvAll", recv_all as *const () as usize)
            .with_symbol(Library::Core, "virStreamSendAll", send_all as *const () as usize),
    );
    let mut err = VirError::default();

    unsafe {
        assert_eq!(lv.stream_recv_all::<Recorder>(ptr::null_mut(), 151, &mut err), 0);
        assert_eq!(lv.stream_send_all::<Recorder>(ptr::null_mut(), 152, &mut err), 0);
    }

    assert_eq!(calls_for(151), vec![("sink", 8)]);
    assert_eq!(calls_for(152), vec![("source", 32)]);
    assert!(!err.is_set());
}
