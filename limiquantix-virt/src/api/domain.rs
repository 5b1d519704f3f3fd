//! Domain lifecycle, configuration, devices, statistics and migration.

use std::os::raw::{c_char, c_int, c_longlong, c_uchar, c_uint, c_ulong, c_ulonglong, c_void};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct DomainSymbols => domain, Core;

    fn virConnectDomainEventDeregister(
        conn: virConnectPtr,
        cb: virConnectDomainEventCallback,
    ) -> c_int [Negative];
    fn virConnectDomainEventDeregisterAny(
        conn: virConnectPtr,
        callback_id: c_int,
    ) -> c_int [Negative];
    fn virConnectDomainEventRegister(
        conn: virConnectPtr,
        cb: virConnectDomainEventCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int [Negative];
    fn virConnectDomainEventRegisterAny(
        conn: virConnectPtr,
        dom: virDomainPtr,
        event_id: c_int,
        cb: virConnectDomainEventGenericCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int [Negative];
    fn virConnectDomainXMLFromNative(
        conn: virConnectPtr,
        native_format: *const c_char,
        native_config: *const c_char,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virConnectDomainXMLToNative(
        conn: virConnectPtr,
        native_format: *const c_char,
        domain_xml: *const c_char,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virConnectGetAllDomainStats(
        conn: virConnectPtr,
        stats: c_uint,
        ret_stats: *mut *mut virDomainStatsRecordPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectGetDomainCapabilities(
        conn: virConnectPtr,
        emulatorbin: *const c_char,
        arch: *const c_char,
        machine: *const c_char,
        virttype: *const c_char,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virConnectListAllDomains(
        conn: virConnectPtr,
        domains: *mut *mut virDomainPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectListDefinedDomains(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int [Negative];
    fn virConnectListDomains(
        conn: virConnectPtr,
        ids: *mut c_int,
        maxids: c_int,
    ) -> c_int [Negative];
    fn virConnectNumOfDefinedDomains(conn: virConnectPtr) -> c_int [Negative];
    fn virConnectNumOfDomains(conn: virConnectPtr) -> c_int [Negative];
    fn virDomainAbortJob(domain: virDomainPtr) -> c_int [Negative];
    fn virDomainAbortJobFlags(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainAddIOThread(
        domain: virDomainPtr,
        iothread_id: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainAgentSetResponseTimeout(
        domain: virDomainPtr,
        timeout: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainAttachDevice(domain: virDomainPtr, xml: *const c_char) -> c_int [Negative];
    fn virDomainAttachDeviceFlags(
        domain: virDomainPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainAuthorizedSSHKeysGet(
        domain: virDomainPtr,
        user: *const c_char,
        keys: *mut *mut *mut c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainAuthorizedSSHKeysSet(
        domain: virDomainPtr,
        user: *const c_char,
        keys: *mut *const c_char,
        nkeys: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainBackupBegin(
        domain: virDomainPtr,
        backup_xml: *const c_char,
        checkpoint_xml: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainBackupGetXMLDesc(domain: virDomainPtr, flags: c_uint) -> *mut c_char [Null];
    fn virDomainBlockCommit(
        dom: virDomainPtr,
        disk: *const c_char,
        base: *const c_char,
        top: *const c_char,
        bandwidth: c_ulong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainBlockCopy(
        dom: virDomainPtr,
        disk: *const c_char,
        destxml: *const c_char,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainBlockJobAbort(
        dom: virDomainPtr,
        disk: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainBlockJobSetSpeed(
        dom: virDomainPtr,
        disk: *const c_char,
        bandwidth: c_ulong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainBlockPeek(
        dom: virDomainPtr,
        disk: *const c_char,
        offset: c_ulonglong,
        size: usize,
        buffer: *mut c_void,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainBlockPull(
        dom: virDomainPtr,
        disk: *const c_char,
        bandwidth: c_ulong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainBlockRebase(
        dom: virDomainPtr,
        disk: *const c_char,
        base: *const c_char,
        bandwidth: c_ulong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainBlockResize(
        dom: virDomainPtr,
        disk: *const c_char,
        size: c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainBlockStats(
        dom: virDomainPtr,
        disk: *const c_char,
        stats: virDomainBlockStatsPtr,
        size: usize,
    ) -> c_int [Negative];
    fn virDomainBlockStatsFlags(
        dom: virDomainPtr,
        disk: *const c_char,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainCoreDump(
        domain: virDomainPtr,
        to: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainCoreDumpWithFormat(
        domain: virDomainPtr,
        to: *const c_char,
        dumpformat: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainCreate(domain: virDomainPtr) -> c_int [Negative];
    fn virDomainCreateLinux(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virDomainPtr [Null];
    fn virDomainCreateWithFiles(
        domain: virDomainPtr,
        nfiles: c_uint,
        files: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainCreateWithFlags(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainCreateXML(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virDomainPtr [Null];
    fn virDomainCreateXMLWithFiles(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        nfiles: c_uint,
        files: *mut c_int,
        flags: c_uint,
    ) -> virDomainPtr [Null];
    fn virDomainDefineXML(conn: virConnectPtr, xml: *const c_char) -> virDomainPtr [Null];
    fn virDomainDefineXMLFlags(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virDomainPtr [Null];
    fn virDomainDelIOThread(
        domain: virDomainPtr,
        iothread_id: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainDelThrottleGroup(
        dom: virDomainPtr,
        group: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainDestroy(domain: virDomainPtr) -> c_int [Negative];
    fn virDomainDestroyFlags(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainDetachDevice(domain: virDomainPtr, xml: *const c_char) -> c_int [Negative];
    fn virDomainDetachDeviceAlias(
        domain: virDomainPtr,
        alias: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainDetachDeviceFlags(
        domain: virDomainPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainFDAssociate(
        domain: virDomainPtr,
        name: *const c_char,
        nfds: c_uint,
        fds: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainFSFreeze(
        dom: virDomainPtr,
        mountpoints: *mut *const c_char,
        nmountpoints: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainFSInfoFree(info: virDomainFSInfoPtr) -> () [Never];
    fn virDomainFSThaw(
        dom: virDomainPtr,
        mountpoints: *mut *const c_char,
        nmountpoints: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainFSTrim(
        dom: virDomainPtr,
        mount_point: *const c_char,
        minimum: c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainFree(domain: virDomainPtr) -> c_int [Negative];
    fn virDomainGetAutostart(domain: virDomainPtr, autostart: *mut c_int) -> c_int [Negative];
    fn virDomainGetAutostartOnce(domain: virDomainPtr, autostart: *mut c_int) -> c_int [Negative];
    fn virDomainGetBlkioParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetBlockInfo(
        domain: virDomainPtr,
        disk: *const c_char,
        info: virDomainBlockInfoPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetBlockIoTune(
        dom: virDomainPtr,
        disk: *const c_char,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetBlockJobInfo(
        dom: virDomainPtr,
        disk: *const c_char,
        info: virDomainBlockJobInfoPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetCPUStats(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_uint,
        start_cpu: c_int,
        ncpus: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetConnect(dom: virDomainPtr) -> virConnectPtr [Null];
    fn virDomainGetControlInfo(
        domain: virDomainPtr,
        info: virDomainControlInfoPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetDiskErrors(
        dom: virDomainPtr,
        errors: virDomainDiskErrorPtr,
        maxerrors: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetEmulatorPinInfo(
        domain: virDomainPtr,
        cpumap: *mut c_uchar,
        maplen: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetFSInfo(
        dom: virDomainPtr,
        info: *mut *mut virDomainFSInfoPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetGuestInfo(
        domain: virDomainPtr,
        types: c_uint,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetGuestVcpus(
        domain: virDomainPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetHostname(domain: virDomainPtr, flags: c_uint) -> *mut c_char [Null];
    fn virDomainGetID(domain: virDomainPtr) -> c_uint [AllOnes];
    fn virDomainGetIOThreadInfo(
        dom: virDomainPtr,
        info: *mut *mut virDomainIOThreadInfoPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetInfo(domain: virDomainPtr, info: virDomainInfoPtr) -> c_int [Negative];
    fn virDomainGetInterfaceParameters(
        domain: virDomainPtr,
        device: *const c_char,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetJobInfo(domain: virDomainPtr, info: virDomainJobInfoPtr) -> c_int [Negative];
    fn virDomainGetJobStats(
        domain: virDomainPtr,
        type_: *mut c_int,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetLaunchSecurityInfo(
        domain: virDomainPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetMaxMemory(domain: virDomainPtr) -> c_ulong [Zero];
    fn virDomainGetMaxVcpus(domain: virDomainPtr) -> c_int [Negative];
    fn virDomainGetMemoryParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetMessages(
        domain: virDomainPtr,
        msgs: *mut *mut *mut c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetMetadata(
        domain: virDomainPtr,
        type_: c_int,
        uri: *const c_char,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virDomainGetName(domain: virDomainPtr) -> *const c_char [Null];
    fn virDomainGetNumaParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetOSType(domain: virDomainPtr) -> *mut c_char [Null];
    fn virDomainGetPerfEvents(
        domain: virDomainPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetSchedulerParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
    ) -> c_int [Negative];
    fn virDomainGetSchedulerParametersFlags(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetSchedulerType(domain: virDomainPtr, nparams: *mut c_int) -> *mut c_char [Null];
    fn virDomainGetSecurityLabel(
        domain: virDomainPtr,
        seclabel: virSecurityLabelPtr,
    ) -> c_int [Negative];
    fn virDomainGetSecurityLabelList(
        domain: virDomainPtr,
        seclabels: *mut virSecurityLabelPtr,
    ) -> c_int [Negative];
    fn virDomainGetState(
        domain: virDomainPtr,
        state: *mut c_int,
        reason: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetTime(
        dom: virDomainPtr,
        seconds: *mut c_longlong,
        nseconds: *mut c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetUUID(domain: virDomainPtr, uuid: *mut c_uchar) -> c_int [Negative];
    fn virDomainGetUUIDString(domain: virDomainPtr, buf: *mut c_char) -> c_int [Negative];
    fn virDomainGetVcpuPinInfo(
        domain: virDomainPtr,
        ncpumaps: c_int,
        cpumaps: *mut c_uchar,
        maplen: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainGetVcpus(
        domain: virDomainPtr,
        info: virVcpuInfoPtr,
        maxinfo: c_int,
        cpumaps: *mut c_uchar,
        maplen: c_int,
    ) -> c_int [Negative];
    fn virDomainGetVcpusFlags(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainGetXMLDesc(domain: virDomainPtr, flags: c_uint) -> *mut c_char [Null];
    fn virDomainGraphicsReload(
        domain: virDomainPtr,
        type_: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainHasManagedSaveImage(dom: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainIOThreadInfoFree(info: virDomainIOThreadInfoPtr) -> () [Never];
    fn virDomainInjectNMI(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainInterfaceAddresses(
        dom: virDomainPtr,
        ifaces: *mut *mut virDomainInterfacePtr,
        source: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainInterfaceFree(iface: virDomainInterfacePtr) -> () [Never];
    fn virDomainInterfaceStats(
        dom: virDomainPtr,
        device: *const c_char,
        stats: virDomainInterfaceStatsPtr,
        size: usize,
    ) -> c_int [Negative];
    fn virDomainIsActive(dom: virDomainPtr) -> c_int [Negative];
    fn virDomainIsPersistent(dom: virDomainPtr) -> c_int [Negative];
    fn virDomainIsUpdated(dom: virDomainPtr) -> c_int [Negative];
    fn virDomainListGetStats(
        doms: *mut virDomainPtr,
        stats: c_uint,
        ret_stats: *mut *mut virDomainStatsRecordPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainLookupByID(conn: virConnectPtr, id: c_int) -> virDomainPtr [Null];
    fn virDomainLookupByName(conn: virConnectPtr, name: *const c_char) -> virDomainPtr [Null];
    fn virDomainLookupByUUID(conn: virConnectPtr, uuid: *const c_uchar) -> virDomainPtr [Null];
    fn virDomainLookupByUUIDString(
        conn: virConnectPtr,
        uuidstr: *const c_char,
    ) -> virDomainPtr [Null];
    fn virDomainManagedSave(dom: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainManagedSaveDefineXML(
        domain: virDomainPtr,
        dxml: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainManagedSaveGetXMLDesc(domain: virDomainPtr, flags: c_uint) -> *mut c_char [Null];
    fn virDomainManagedSaveRemove(dom: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainMemoryPeek(
        dom: virDomainPtr,
        start: c_ulonglong,
        size: usize,
        buffer: *mut c_void,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainMemoryStats(
        dom: virDomainPtr,
        stats: virDomainMemoryStatPtr,
        nr_stats: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainMigrate(
        domain: virDomainPtr,
        dconn: virConnectPtr,
        flags: c_ulong,
        dname: *const c_char,
        uri: *const c_char,
        bandwidth: c_ulong,
    ) -> virDomainPtr [Null];
    fn virDomainMigrate2(
        domain: virDomainPtr,
        dconn: virConnectPtr,
        dxml: *const c_char,
        flags: c_ulong,
        dname: *const c_char,
        uri: *const c_char,
        bandwidth: c_ulong,
    ) -> virDomainPtr [Null];
    fn virDomainMigrate3(
        domain: virDomainPtr,
        dconn: virConnectPtr,
        params: virTypedParameterPtr,
        nparams: c_uint,
        flags: c_uint,
    ) -> virDomainPtr [Null];
    fn virDomainMigrateGetCompressionCache(
        domain: virDomainPtr,
        cache_size: *mut c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainMigrateGetMaxDowntime(
        domain: virDomainPtr,
        downtime: *mut c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainMigrateGetMaxSpeed(
        domain: virDomainPtr,
        bandwidth: *mut c_ulong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainMigrateSetCompressionCache(
        domain: virDomainPtr,
        cache_size: c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainMigrateSetMaxDowntime(
        domain: virDomainPtr,
        downtime: c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainMigrateSetMaxSpeed(
        domain: virDomainPtr,
        bandwidth: c_ulong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainMigrateStartPostCopy(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainMigrateToURI(
        domain: virDomainPtr,
        duri: *const c_char,
        flags: c_ulong,
        dname: *const c_char,
        bandwidth: c_ulong,
    ) -> c_int [Negative];
    fn virDomainMigrateToURI2(
        domain: virDomainPtr,
        dconnuri: *const c_char,
        miguri: *const c_char,
        dxml: *const c_char,
        flags: c_ulong,
        dname: *const c_char,
        bandwidth: c_ulong,
    ) -> c_int [Negative];
    fn virDomainMigrateToURI3(
        domain: virDomainPtr,
        dconnuri: *const c_char,
        params: virTypedParameterPtr,
        nparams: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainOpenChannel(
        dom: virDomainPtr,
        name: *const c_char,
        st: virStreamPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainOpenConsole(
        dom: virDomainPtr,
        dev_name: *const c_char,
        st: virStreamPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainOpenGraphics(
        dom: virDomainPtr,
        idx: c_uint,
        fd: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainOpenGraphicsFD(dom: virDomainPtr, idx: c_uint, flags: c_uint) -> c_int [Negative];
    fn virDomainPMSuspendForDuration(
        dom: virDomainPtr,
        target: c_uint,
        duration: c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainPMWakeup(dom: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainPinEmulator(
        domain: virDomainPtr,
        cpumap: *mut c_uchar,
        maplen: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainPinIOThread(
        domain: virDomainPtr,
        iothread_id: c_uint,
        cpumap: *mut c_uchar,
        maplen: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainPinVcpu(
        domain: virDomainPtr,
        vcpu: c_uint,
        cpumap: *mut c_uchar,
        maplen: c_int,
    ) -> c_int [Negative];
    fn virDomainPinVcpuFlags(
        domain: virDomainPtr,
        vcpu: c_uint,
        cpumap: *mut c_uchar,
        maplen: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainReboot(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainRef(domain: virDomainPtr) -> c_int [Negative];
    fn virDomainRename(
        dom: virDomainPtr,
        new_name: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainReset(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainRestore(conn: virConnectPtr, from: *const c_char) -> c_int [Negative];
    fn virDomainRestoreFlags(
        conn: virConnectPtr,
        from: *const c_char,
        dxml: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainRestoreParams(
        conn: virConnectPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainResume(domain: virDomainPtr) -> c_int [Negative];
    fn virDomainSave(domain: virDomainPtr, to: *const c_char) -> c_int [Negative];
    fn virDomainSaveFlags(
        domain: virDomainPtr,
        to: *const c_char,
        dxml: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSaveImageDefineXML(
        conn: virConnectPtr,
        file: *const c_char,
        dxml: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSaveImageGetXMLDesc(
        conn: virConnectPtr,
        file: *const c_char,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virDomainSaveParams(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainScreenshot(
        domain: virDomainPtr,
        stream: virStreamPtr,
        screen: c_uint,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virDomainSendKey(
        domain: virDomainPtr,
        codeset: c_uint,
        holdtime: c_uint,
        keycodes: *mut c_uint,
        nkeycodes: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSendProcessSignal(
        domain: virDomainPtr,
        pid_value: c_longlong,
        signum: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetAutostart(domain: virDomainPtr, autostart: c_int) -> c_int [Negative];
    fn virDomainSetAutostartOnce(domain: virDomainPtr, autostart: c_int) -> c_int [Negative];
    fn virDomainSetBlkioParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetBlockIoTune(
        dom: virDomainPtr,
        disk: *const c_char,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetBlockThreshold(
        domain: virDomainPtr,
        dev: *const c_char,
        threshold: c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetGuestVcpus(
        domain: virDomainPtr,
        cpumap: *const c_char,
        state: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetIOThreadParams(
        domain: virDomainPtr,
        iothread_id: c_uint,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetInterfaceParameters(
        domain: virDomainPtr,
        device: *const c_char,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetLaunchSecurityState(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetLifecycleAction(
        domain: virDomainPtr,
        type_: c_uint,
        action: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetMaxMemory(domain: virDomainPtr, memory: c_ulong) -> c_int [Negative];
    fn virDomainSetMemory(domain: virDomainPtr, memory: c_ulong) -> c_int [Negative];
    fn virDomainSetMemoryFlags(
        domain: virDomainPtr,
        memory: c_ulong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetMemoryParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetMemoryStatsPeriod(
        domain: virDomainPtr,
        period: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetMetadata(
        domain: virDomainPtr,
        type_: c_int,
        metadata: *const c_char,
        key: *const c_char,
        uri: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetNumaParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetPerfEvents(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetSchedulerParameters(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
    ) -> c_int [Negative];
    fn virDomainSetSchedulerParametersFlags(
        domain: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetThrottleGroup(
        dom: virDomainPtr,
        group: *const c_char,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetTime(
        dom: virDomainPtr,
        seconds: c_longlong,
        nseconds: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetUserPassword(
        dom: virDomainPtr,
        user: *const c_char,
        password: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetVcpu(
        domain: virDomainPtr,
        vcpumap: *const c_char,
        state: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSetVcpus(domain: virDomainPtr, nvcpus: c_uint) -> c_int [Negative];
    fn virDomainSetVcpusFlags(
        domain: virDomainPtr,
        nvcpus: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainShutdown(domain: virDomainPtr) -> c_int [Negative];
    fn virDomainShutdownFlags(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainStartDirtyRateCalc(
        domain: virDomainPtr,
        seconds: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainStatsRecordListFree(stats: *mut virDomainStatsRecordPtr) -> () [Never];
    fn virDomainSuspend(domain: virDomainPtr) -> c_int [Negative];
    fn virDomainUndefine(domain: virDomainPtr) -> c_int [Negative];
    fn virDomainUndefineFlags(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainUpdateDeviceFlags(
        domain: virDomainPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
}
