//! QEMU-specific passthrough (`libvirt-qemu`).
//!
//! Resolved from the optional QEMU library. Commands sent here bypass
//! libvirt's own state tracking.

use std::os::raw::{c_char, c_int, c_uint, c_void};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct QemuSymbols => qemu, Qemu;

    fn virDomainQemuMonitorCommand(
        domain: virDomainPtr,
        cmd: *const c_char,
        result: *mut *mut c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainQemuMonitorCommandWithFiles(
        domain: virDomainPtr,
        cmd: *const c_char,
        ninfiles: c_uint,
        infiles: *mut c_int,
        noutfiles: *mut c_uint,
        outfiles: *mut *mut c_int,
        result: *mut *mut c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainQemuAgentCommand(
        domain: virDomainPtr,
        cmd: *const c_char,
        timeout: c_int,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virDomainQemuAttach(conn: virConnectPtr, pid_value: c_uint, flags: c_uint) -> virDomainPtr [Null];
    fn virConnectDomainQemuMonitorEventRegister(
        conn: virConnectPtr,
        dom: virDomainPtr,
        event: *const c_char,
        cb: virConnectDomainQemuMonitorEventCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectDomainQemuMonitorEventDeregister(
        conn: virConnectPtr,
        callback_id: c_int,
    ) -> c_int [Negative];
}
