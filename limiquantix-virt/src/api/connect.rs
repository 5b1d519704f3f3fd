//! Connections and host (node) information.

use std::os::raw::{c_char, c_int, c_uchar, c_uint, c_ulong, c_ulonglong, c_void};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct ConnectSymbols => connect, Core;

    fn virConnectBaselineCPU(
        conn: virConnectPtr,
        xml_cp_us: *mut *const c_char,
        ncpus: c_uint,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virConnectBaselineHypervisorCPU(
        conn: virConnectPtr,
        emulator: *const c_char,
        arch: *const c_char,
        machine: *const c_char,
        virttype: *const c_char,
        xml_cp_us: *mut *const c_char,
        ncpus: c_uint,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virConnectClose(conn: virConnectPtr) -> c_int [Negative];
    fn virConnectCompareCPU(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectCompareHypervisorCPU(
        conn: virConnectPtr,
        emulator: *const c_char,
        arch: *const c_char,
        machine: *const c_char,
        virttype: *const c_char,
        xml_cpu: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectGetCPUModelNames(
        conn: virConnectPtr,
        arch: *const c_char,
        models: *mut *mut *mut c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectGetCapabilities(conn: virConnectPtr) -> *mut c_char [Null];
    fn virConnectGetHostname(conn: virConnectPtr) -> *mut c_char [Null];
    fn virConnectGetLibVersion(conn: virConnectPtr, lib_ver: *mut c_ulong) -> c_int [Negative];
    fn virConnectGetMaxVcpus(conn: virConnectPtr, type_: *const c_char) -> c_int [Negative];
    fn virConnectGetSysinfo(conn: virConnectPtr, flags: c_uint) -> *mut c_char [Null];
    fn virConnectGetType(conn: virConnectPtr) -> *const c_char [Null];
    fn virConnectGetURI(conn: virConnectPtr) -> *mut c_char [Null];
    fn virConnectGetVersion(conn: virConnectPtr, hv_ver: *mut c_ulong) -> c_int [Negative];
    fn virConnectIsAlive(conn: virConnectPtr) -> c_int [Negative];
    fn virConnectIsEncrypted(conn: virConnectPtr) -> c_int [Negative];
    fn virConnectIsSecure(conn: virConnectPtr) -> c_int [Negative];
    fn virConnectOpen(name: *const c_char) -> virConnectPtr [Null];
    fn virConnectOpenAuth(
        name: *const c_char,
        auth: virConnectAuthPtr,
        flags: c_uint,
    ) -> virConnectPtr [Null];
    fn virConnectOpenReadOnly(name: *const c_char) -> virConnectPtr [Null];
    fn virConnectRef(conn: virConnectPtr) -> c_int [Negative];
    fn virConnectRegisterCloseCallback(
        conn: virConnectPtr,
        cb: virConnectCloseFunc,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int [Negative];
    fn virConnectSetIdentity(
        conn: virConnectPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectSetKeepAlive(
        conn: virConnectPtr,
        interval: c_int,
        count: c_uint,
    ) -> c_int [Negative];
    fn virConnectUnregisterCloseCallback(
        conn: virConnectPtr,
        cb: virConnectCloseFunc,
    ) -> c_int [Negative];
    fn virGetVersion(
        lib_ver: *mut c_ulong,
        type_: *const c_char,
        type_ver: *mut c_ulong,
    ) -> c_int [Negative];
    fn virInitialize() -> c_int [Negative];
    fn virNodeAllocPages(
        conn: virConnectPtr,
        npages: c_uint,
        page_sizes: *mut c_uint,
        page_counts: *mut c_ulonglong,
        start_cell: c_int,
        cell_count: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNodeGetCPUMap(
        conn: virConnectPtr,
        cpumap: *mut *mut c_uchar,
        online: *mut c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNodeGetCPUStats(
        conn: virConnectPtr,
        cpu_num: c_int,
        params: virNodeCPUStatsPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNodeGetCellsFreeMemory(
        conn: virConnectPtr,
        free_mems: *mut c_ulonglong,
        start_cell: c_int,
        max_cells: c_int,
    ) -> c_int [Negative];
    fn virNodeGetFreeMemory(conn: virConnectPtr) -> c_ulonglong [Zero];
    fn virNodeGetFreePages(
        conn: virConnectPtr,
        npages: c_uint,
        pages: *mut c_uint,
        start_cell: c_int,
        cell_count: c_uint,
        counts: *mut c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNodeGetInfo(conn: virConnectPtr, info: virNodeInfoPtr) -> c_int [Negative];
    fn virNodeGetMemoryParameters(
        conn: virConnectPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNodeGetMemoryStats(
        conn: virConnectPtr,
        cell_num: c_int,
        params: virNodeMemoryStatsPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNodeGetSEVInfo(
        conn: virConnectPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNodeGetSecurityModel(
        conn: virConnectPtr,
        secmodel: virSecurityModelPtr,
    ) -> c_int [Negative];
    fn virNodeSetMemoryParameters(
        conn: virConnectPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNodeSuspendForDuration(
        conn: virConnectPtr,
        target: c_uint,
        duration: c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
}
