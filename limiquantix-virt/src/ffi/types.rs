//! Native libvirt handle and record layouts.
//!
//! Handles are opaque: the library allocates and frees them and this crate
//! only moves the pointers around. Records mirror the public C structs
//! byte for byte.

use std::os::raw::{c_char, c_double, c_int, c_longlong, c_uchar, c_uint, c_ulong, c_ulonglong, c_ushort, c_void};

macro_rules! opaque_handles {
    ($($handle:ident => $ptr:ident;)*) => {
        $(
            #[repr(C)]
            pub struct $handle {
                _private: [u8; 0],
                _marker: std::marker::PhantomData<(*mut u8, std::marker::PhantomPinned)>,
            }

            pub type $ptr = *mut $handle;
        )*
    };
}

opaque_handles! {
    virConnect => virConnectPtr;
    virDomain => virDomainPtr;
    virDomainSnapshot => virDomainSnapshotPtr;
    virDomainCheckpoint => virDomainCheckpointPtr;
    virNetwork => virNetworkPtr;
    virNetworkPort => virNetworkPortPtr;
    virInterface => virInterfacePtr;
    virNWFilter => virNWFilterPtr;
    virNWFilterBinding => virNWFilterBindingPtr;
    virNodeDevice => virNodeDevicePtr;
    virSecret => virSecretPtr;
    virStoragePool => virStoragePoolPtr;
    virStorageVol => virStorageVolPtr;
    virStream => virStreamPtr;
    virAdmConnect => virAdmConnectPtr;
    virAdmServer => virAdmServerPtr;
    virAdmClient => virAdmClientPtr;
}

/// Length of the `field` member of typed parameters and node stats.
pub const VIR_TYPED_PARAM_FIELD_LENGTH: usize = 80;
pub const VIR_NODE_CPU_STATS_FIELD_LENGTH: usize = 80;
pub const VIR_NODE_MEMORY_STATS_FIELD_LENGTH: usize = 80;
pub const VIR_SECURITY_LABEL_BUFLEN: usize = 4096 + 1;
pub const VIR_SECURITY_MODEL_BUFLEN: usize = 256 + 1;
pub const VIR_SECURITY_DOI_BUFLEN: usize = 256 + 1;
pub const VIR_UUID_BUFLEN: usize = 16;
pub const VIR_UUID_STRING_BUFLEN: usize = 36 + 1;

/// Error record filled by `virCopyLastError`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct virError {
    pub code: c_int,
    pub domain: c_int,
    pub message: *mut c_char,
    pub level: c_int,
    pub conn: virConnectPtr,
    pub dom: virDomainPtr,
    pub str1: *mut c_char,
    pub str2: *mut c_char,
    pub str3: *mut c_char,
    pub int1: c_int,
    pub int2: c_int,
    pub net: virNetworkPtr,
}

pub type virErrorPtr = *mut virError;

impl Default for virError {
    fn default() -> Self {
        Self {
            code: 0,
            domain: 0,
            message: std::ptr::null_mut(),
            level: 0,
            conn: std::ptr::null_mut(),
            dom: std::ptr::null_mut(),
            str1: std::ptr::null_mut(),
            str2: std::ptr::null_mut(),
            str3: std::ptr::null_mut(),
            int1: 0,
            int2: 0,
            net: std::ptr::null_mut(),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union virTypedParameterValue {
    pub i: c_int,
    pub ui: c_uint,
    pub l: c_longlong,
    pub ul: c_ulonglong,
    pub d: c_double,
    pub b: c_char,
    pub s: *mut c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct virTypedParameter {
    pub field: [c_char; VIR_TYPED_PARAM_FIELD_LENGTH],
    pub type_: c_int,
    pub value: virTypedParameterValue,
}

pub type virTypedParameterPtr = *mut virTypedParameter;

#[repr(C)]
#[derive(Debug)]
pub struct virConnectCredential {
    pub type_: c_int,
    pub prompt: *const c_char,
    pub challenge: *const c_char,
    pub defresult: *const c_char,
    pub result: *mut c_char,
    pub resultlen: c_uint,
}

pub type virConnectCredentialPtr = *mut virConnectCredential;

#[repr(C)]
pub struct virConnectAuth {
    pub credtype: *mut c_int,
    pub ncredtype: c_uint,
    pub cb: super::callbacks::virConnectAuthCallbackPtr,
    pub cbdata: *mut c_void,
}

pub type virConnectAuthPtr = *mut virConnectAuth;

#[repr(C)]
#[derive(Debug)]
pub struct virDomainEventGraphicsAddress {
    pub family: c_int,
    pub node: *mut c_char,
    pub service: *mut c_char,
}

#[repr(C)]
#[derive(Debug)]
pub struct virDomainEventGraphicsSubjectIdentity {
    pub type_: *mut c_char,
    pub name: *mut c_char,
}

#[repr(C)]
#[derive(Debug)]
pub struct virDomainEventGraphicsSubject {
    pub nidentity: c_int,
    pub identities: *mut virDomainEventGraphicsSubjectIdentity,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct virDomainInfo {
    pub state: c_uchar,
    pub max_mem: c_ulong,
    pub memory: c_ulong,
    pub nr_virt_cpu: c_ushort,
    pub cpu_time: c_ulonglong,
}

pub type virDomainInfoPtr = *mut virDomainInfo;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct virNodeInfo {
    pub model: [c_char; 32],
    pub memory: c_ulong,
    pub cpus: c_uint,
    pub mhz: c_uint,
    pub nodes: c_uint,
    pub sockets: c_uint,
    pub cores: c_uint,
    pub threads: c_uint,
}

pub type virNodeInfoPtr = *mut virNodeInfo;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct virNodeCPUStats {
    pub field: [c_char; VIR_NODE_CPU_STATS_FIELD_LENGTH],
    pub value: c_ulonglong,
}

pub type virNodeCPUStatsPtr = *mut virNodeCPUStats;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct virNodeMemoryStats {
    pub field: [c_char; VIR_NODE_MEMORY_STATS_FIELD_LENGTH],
    pub value: c_ulonglong,
}

pub type virNodeMemoryStatsPtr = *mut virNodeMemoryStats;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct virDomainBlockStatsStruct {
    pub rd_req: c_longlong,
    pub rd_bytes: c_longlong,
    pub wr_req: c_longlong,
    pub wr_bytes: c_longlong,
    pub errs: c_longlong,
}

pub type virDomainBlockStatsPtr = *mut virDomainBlockStatsStruct;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct virDomainInterfaceStatsStruct {
    pub rx_bytes: c_longlong,
    pub rx_packets: c_longlong,
    pub rx_errs: c_longlong,
    pub rx_drop: c_longlong,
    pub tx_bytes: c_longlong,
    pub tx_packets: c_longlong,
    pub tx_errs: c_longlong,
    pub tx_drop: c_longlong,
}

pub type virDomainInterfaceStatsPtr = *mut virDomainInterfaceStatsStruct;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct virDomainMemoryStatStruct {
    pub tag: c_int,
    pub val: c_ulonglong,
}

pub type virDomainMemoryStatPtr = *mut virDomainMemoryStatStruct;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct virDomainBlockInfo {
    pub capacity: c_ulonglong,
    pub allocation: c_ulonglong,
    pub physical: c_ulonglong,
}

pub type virDomainBlockInfoPtr = *mut virDomainBlockInfo;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct virDomainJobInfo {
    pub type_: c_int,
    pub time_elapsed: c_ulonglong,
    pub time_remaining: c_ulonglong,
    pub data_total: c_ulonglong,
    pub data_processed: c_ulonglong,
    pub data_remaining: c_ulonglong,
    pub mem_total: c_ulonglong,
    pub mem_processed: c_ulonglong,
    pub mem_remaining: c_ulonglong,
    pub file_total: c_ulonglong,
    pub file_processed: c_ulonglong,
    pub file_remaining: c_ulonglong,
}

pub type virDomainJobInfoPtr = *mut virDomainJobInfo;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct virDomainControlInfo {
    pub state: c_uint,
    pub details: c_uint,
    pub state_time: c_ulonglong,
}

pub type virDomainControlInfoPtr = *mut virDomainControlInfo;

#[repr(C)]
#[derive(Debug)]
pub struct virDomainDiskError {
    pub disk: *mut c_char,
    pub error: c_int,
}

pub type virDomainDiskErrorPtr = *mut virDomainDiskError;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct virDomainBlockJobInfo {
    pub type_: c_int,
    pub bandwidth: c_ulong,
    pub cur: c_ulonglong,
    pub end: c_ulonglong,
}

pub type virDomainBlockJobInfoPtr = *mut virDomainBlockJobInfo;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct virVcpuInfo {
    pub number: c_uint,
    pub state: c_int,
    pub cpu_time: c_ulonglong,
    pub cpu: c_int,
}

pub type virVcpuInfoPtr = *mut virVcpuInfo;

#[repr(C)]
pub struct virSecurityLabel {
    pub label: [c_char; VIR_SECURITY_LABEL_BUFLEN],
    pub enforcing: c_int,
}

pub type virSecurityLabelPtr = *mut virSecurityLabel;

#[repr(C)]
pub struct virSecurityModel {
    pub model: [c_char; VIR_SECURITY_MODEL_BUFLEN],
    pub doi: [c_char; VIR_SECURITY_DOI_BUFLEN],
}

pub type virSecurityModelPtr = *mut virSecurityModel;

#[repr(C)]
#[derive(Debug)]
pub struct virDomainFSInfo {
    pub mountpoint: *mut c_char,
    pub name: *mut c_char,
    pub fstype: *mut c_char,
    pub ndev_alias: usize,
    pub dev_alias: *mut *mut c_char,
}

pub type virDomainFSInfoPtr = *mut virDomainFSInfo;

#[repr(C)]
#[derive(Debug)]
pub struct virDomainIPAddress {
    pub type_: c_int,
    pub addr: *mut c_char,
    pub prefix: c_uint,
}

#[repr(C)]
#[derive(Debug)]
pub struct virDomainInterface {
    pub name: *mut c_char,
    pub hwaddr: *mut c_char,
    pub naddrs: c_uint,
    pub addrs: *mut virDomainIPAddress,
}

pub type virDomainInterfacePtr = *mut virDomainInterface;

#[repr(C)]
#[derive(Debug)]
pub struct virDomainIOThreadInfo {
    pub iothread_id: c_uint,
    pub cpumap: *mut c_uchar,
    pub cpumaplen: c_int,
}

pub type virDomainIOThreadInfoPtr = *mut virDomainIOThreadInfo;

#[repr(C)]
pub struct virDomainStatsRecord {
    pub dom: virDomainPtr,
    pub params: virTypedParameterPtr,
    pub nparams: c_int,
}

pub type virDomainStatsRecordPtr = *mut virDomainStatsRecord;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct virStoragePoolInfo {
    pub state: c_int,
    pub capacity: c_ulonglong,
    pub allocation: c_ulonglong,
    pub available: c_ulonglong,
}

pub type virStoragePoolInfoPtr = *mut virStoragePoolInfo;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct virStorageVolInfo {
    pub type_: c_int,
    pub capacity: c_ulonglong,
    pub allocation: c_ulonglong,
}

pub type virStorageVolInfoPtr = *mut virStorageVolInfo;

#[repr(C)]
#[derive(Debug)]
pub struct virNetworkDHCPLease {
    pub iface: *mut c_char,
    pub expirytime: c_longlong,
    pub type_: c_int,
    pub mac: *mut c_char,
    pub iaid: *mut c_char,
    pub ipaddr: *mut c_char,
    pub prefix: c_uint,
    pub hostname: *mut c_char,
    pub clientid: *mut c_char,
}

pub type virNetworkDHCPLeasePtr = *mut virNetworkDHCPLease;
