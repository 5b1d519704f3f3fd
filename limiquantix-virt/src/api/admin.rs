//! Daemon administration (`libvirt-admin`).
//!
//! These wrappers resolve from the admin library, which is optional. When it
//! is not installed they all return their sentinels.

use std::os::raw::{c_char, c_int, c_longlong, c_uint, c_ulonglong, c_void};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct AdminSymbols => admin, Admin;

    fn virAdmClientClose(client: virAdmClientPtr, flags: c_uint) -> c_int [Negative];
    fn virAdmClientFree(client: virAdmClientPtr) -> c_int [Negative];
    fn virAdmClientGetID(client: virAdmClientPtr) -> c_ulonglong [AllOnes];
    fn virAdmClientGetInfo(
        client: virAdmClientPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmClientGetTimestamp(client: virAdmClientPtr) -> c_longlong [Negative];
    fn virAdmClientGetTransport(client: virAdmClientPtr) -> c_int [Negative];
    fn virAdmConnectClose(conn: virAdmConnectPtr) -> c_int [Negative];
    fn virAdmConnectDaemonShutdown(conn: virAdmConnectPtr, flags: c_uint) -> c_int [Negative];
    fn virAdmConnectGetLibVersion(
        conn: virAdmConnectPtr,
        lib_ver: *mut c_ulonglong,
    ) -> c_int [Negative];
    fn virAdmConnectGetLoggingFilters(
        conn: virAdmConnectPtr,
        filters: *mut *mut c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmConnectGetLoggingOutputs(
        conn: virAdmConnectPtr,
        outputs: *mut *mut c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmConnectGetURI(conn: virAdmConnectPtr) -> *mut c_char [Null];
    fn virAdmConnectIsAlive(conn: virAdmConnectPtr) -> c_int [Negative];
    fn virAdmConnectListServers(
        conn: virAdmConnectPtr,
        servers: *mut *mut virAdmServerPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmConnectLookupServer(
        conn: virAdmConnectPtr,
        name: *const c_char,
        flags: c_uint,
    ) -> virAdmServerPtr [Null];
    fn virAdmConnectOpen(name: *const c_char, flags: c_uint) -> virAdmConnectPtr [Null];
    fn virAdmConnectRef(conn: virAdmConnectPtr) -> c_int [Negative];
    fn virAdmConnectRegisterCloseCallback(
        conn: virAdmConnectPtr,
        cb: virAdmConnectCloseFunc,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int [Negative];
    fn virAdmConnectSetDaemonTimeout(
        conn: virAdmConnectPtr,
        timeout: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmConnectSetLoggingFilters(
        conn: virAdmConnectPtr,
        filters: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmConnectSetLoggingOutputs(
        conn: virAdmConnectPtr,
        outputs: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmConnectUnregisterCloseCallback(
        conn: virAdmConnectPtr,
        cb: virAdmConnectCloseFunc,
    ) -> c_int [Negative];
    fn virAdmGetVersion(lib_ver: *mut c_ulonglong) -> c_int [Negative];
    fn virAdmInitialize() -> c_int [Negative];
    fn virAdmServerFree(srv: virAdmServerPtr) -> c_int [Negative];
    fn virAdmServerGetClientLimits(
        srv: virAdmServerPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmServerGetName(srv: virAdmServerPtr) -> *const c_char [Null];
    fn virAdmServerGetThreadPoolParameters(
        srv: virAdmServerPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmServerListClients(
        srv: virAdmServerPtr,
        clients: *mut *mut virAdmClientPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmServerLookupClient(
        srv: virAdmServerPtr,
        id: c_ulonglong,
        flags: c_uint,
    ) -> virAdmClientPtr [Null];
    fn virAdmServerSetClientLimits(
        srv: virAdmServerPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmServerSetThreadPoolParameters(
        srv: virAdmServerPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virAdmServerUpdateTlsFiles(srv: virAdmServerPtr, flags: c_uint) -> c_int [Negative];
}
