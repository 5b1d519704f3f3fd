//! Native constants needed by the binding layer itself.
//!
//! Only values the trampolines, helpers and typed-parameter code act on are
//! listed here; every other flag is passed through untouched.

use std::os::raw::c_int;

// Error records
pub const VIR_ERR_OK: c_int = 0;
pub const VIR_ERR_INTERNAL_ERROR: c_int = 1;
pub const VIR_ERR_NO_SUPPORT: c_int = 3;
pub const VIR_ERR_OPERATION_FAILED: c_int = 9;
pub const VIR_ERR_NO_DOMAIN: c_int = 42;
pub const VIR_FROM_NONE: c_int = 0;
pub const VIR_FROM_QEMU: c_int = 10;
pub const VIR_FROM_DOM: c_int = 6;
pub const VIR_ERR_NONE: c_int = 0;
pub const VIR_ERR_WARNING: c_int = 1;
pub const VIR_ERR_ERROR: c_int = 2;

// Typed parameters
pub const VIR_TYPED_PARAM_INT: c_int = 1;
pub const VIR_TYPED_PARAM_UINT: c_int = 2;
pub const VIR_TYPED_PARAM_LLONG: c_int = 3;
pub const VIR_TYPED_PARAM_ULLONG: c_int = 4;
pub const VIR_TYPED_PARAM_DOUBLE: c_int = 5;
pub const VIR_TYPED_PARAM_BOOLEAN: c_int = 6;
pub const VIR_TYPED_PARAM_STRING: c_int = 7;

// Credential types for virConnectOpenAuth
pub const VIR_CRED_USERNAME: c_int = 1;
pub const VIR_CRED_AUTHNAME: c_int = 2;
pub const VIR_CRED_LANGUAGE: c_int = 3;
pub const VIR_CRED_CNONCE: c_int = 4;
pub const VIR_CRED_PASSPHRASE: c_int = 5;
pub const VIR_CRED_ECHOPROMPT: c_int = 6;
pub const VIR_CRED_NOECHOPROMPT: c_int = 7;
pub const VIR_CRED_REALM: c_int = 8;
pub const VIR_CRED_EXTERNAL: c_int = 9;

// Event loop handle conditions
pub const VIR_EVENT_HANDLE_READABLE: c_int = 1 << 0;
pub const VIR_EVENT_HANDLE_WRITABLE: c_int = 1 << 1;
pub const VIR_EVENT_HANDLE_ERROR: c_int = 1 << 2;
pub const VIR_EVENT_HANDLE_HANGUP: c_int = 1 << 3;

// Stream events
pub const VIR_STREAM_EVENT_READABLE: c_int = 1 << 0;
pub const VIR_STREAM_EVENT_WRITABLE: c_int = 1 << 1;
pub const VIR_STREAM_EVENT_ERROR: c_int = 1 << 2;
pub const VIR_STREAM_EVENT_HANGUP: c_int = 1 << 3;

// Domain event IDs for virConnectDomainEventRegisterAny
pub const VIR_DOMAIN_EVENT_ID_LIFECYCLE: c_int = 0;
pub const VIR_DOMAIN_EVENT_ID_REBOOT: c_int = 1;
pub const VIR_DOMAIN_EVENT_ID_RTC_CHANGE: c_int = 2;
pub const VIR_DOMAIN_EVENT_ID_WATCHDOG: c_int = 3;
pub const VIR_DOMAIN_EVENT_ID_IO_ERROR: c_int = 4;
pub const VIR_DOMAIN_EVENT_ID_GRAPHICS: c_int = 5;
pub const VIR_DOMAIN_EVENT_ID_IO_ERROR_REASON: c_int = 6;
pub const VIR_DOMAIN_EVENT_ID_CONTROL_ERROR: c_int = 7;
pub const VIR_DOMAIN_EVENT_ID_BLOCK_JOB: c_int = 8;
pub const VIR_DOMAIN_EVENT_ID_DISK_CHANGE: c_int = 9;
pub const VIR_DOMAIN_EVENT_ID_TRAY_CHANGE: c_int = 10;
pub const VIR_DOMAIN_EVENT_ID_PMWAKEUP: c_int = 11;
pub const VIR_DOMAIN_EVENT_ID_PMSUSPEND: c_int = 12;
pub const VIR_DOMAIN_EVENT_ID_BALLOON_CHANGE: c_int = 13;
pub const VIR_DOMAIN_EVENT_ID_PMSUSPEND_DISK: c_int = 14;
pub const VIR_DOMAIN_EVENT_ID_DEVICE_REMOVED: c_int = 15;
pub const VIR_DOMAIN_EVENT_ID_BLOCK_JOB_2: c_int = 16;
pub const VIR_DOMAIN_EVENT_ID_TUNABLE: c_int = 17;
pub const VIR_DOMAIN_EVENT_ID_AGENT_LIFECYCLE: c_int = 18;
pub const VIR_DOMAIN_EVENT_ID_DEVICE_ADDED: c_int = 19;
pub const VIR_DOMAIN_EVENT_ID_MIGRATION_ITERATION: c_int = 20;
pub const VIR_DOMAIN_EVENT_ID_JOB_COMPLETED: c_int = 21;
pub const VIR_DOMAIN_EVENT_ID_DEVICE_REMOVAL_FAILED: c_int = 22;
pub const VIR_DOMAIN_EVENT_ID_METADATA_CHANGE: c_int = 23;
pub const VIR_DOMAIN_EVENT_ID_BLOCK_THRESHOLD: c_int = 24;
pub const VIR_DOMAIN_EVENT_ID_MEMORY_FAILURE: c_int = 25;

pub const VIR_NETWORK_EVENT_ID_LIFECYCLE: c_int = 0;
pub const VIR_NODE_DEVICE_EVENT_ID_LIFECYCLE: c_int = 0;
pub const VIR_NODE_DEVICE_EVENT_ID_UPDATE: c_int = 1;
pub const VIR_SECRET_EVENT_ID_LIFECYCLE: c_int = 0;
pub const VIR_SECRET_EVENT_ID_VALUE_CHANGED: c_int = 1;
pub const VIR_STORAGE_POOL_EVENT_ID_LIFECYCLE: c_int = 0;
pub const VIR_STORAGE_POOL_EVENT_ID_REFRESH: c_int = 1;

// Connection open flags
pub const VIR_CONNECT_RO: u32 = 1 << 0;
pub const VIR_CONNECT_NO_ALIASES: u32 = 1 << 1;
