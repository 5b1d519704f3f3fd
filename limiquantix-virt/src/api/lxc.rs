//! Container helpers (`libvirt-lxc`), resolved from the optional LXC library.

use std::os::raw::{c_int, c_uint};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct LxcSymbols => lxc, Lxc;

    fn virDomainLxcOpenNamespace(
        domain: virDomainPtr,
        fdlist: *mut *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainLxcEnterNamespace(
        domain: virDomainPtr,
        nfdlist: c_uint,
        fdlist: *mut c_int,
        noldfdlist: *mut c_uint,
        oldfdlist: *mut *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainLxcEnterSecurityLabel(
        model: virSecurityModelPtr,
        label: virSecurityLabelPtr,
        oldlabel: virSecurityLabelPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainLxcEnterCGroup(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
}
