//! Domain checkpoints for incremental backup.

use std::os::raw::{c_char, c_int, c_uint};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct CheckpointSymbols => checkpoint, Core;

    fn virDomainCheckpointCreateXML(
        domain: virDomainPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virDomainCheckpointPtr [Null];
    fn virDomainCheckpointDelete(checkpoint: virDomainCheckpointPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainCheckpointFree(checkpoint: virDomainCheckpointPtr) -> c_int [Negative];
    fn virDomainCheckpointGetConnect(checkpoint: virDomainCheckpointPtr) -> virConnectPtr [Null];
    fn virDomainCheckpointGetDomain(checkpoint: virDomainCheckpointPtr) -> virDomainPtr [Null];
    fn virDomainCheckpointGetName(checkpoint: virDomainCheckpointPtr) -> *const c_char [Null];
    fn virDomainCheckpointGetParent(
        checkpoint: virDomainCheckpointPtr,
        flags: c_uint,
    ) -> virDomainCheckpointPtr [Null];
    fn virDomainCheckpointGetXMLDesc(checkpoint: virDomainCheckpointPtr, flags: c_uint) -> *mut c_char [Null];
    fn virDomainCheckpointListAllChildren(
        checkpoint: virDomainCheckpointPtr,
        children: *mut *mut virDomainCheckpointPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainCheckpointLookupByName(
        domain: virDomainPtr,
        name: *const c_char,
        flags: c_uint,
    ) -> virDomainCheckpointPtr [Null];
    fn virDomainCheckpointRef(checkpoint: virDomainCheckpointPtr) -> c_int [Negative];
    fn virDomainListAllCheckpoints(
        domain: virDomainPtr,
        checkpoints: *mut *mut virDomainCheckpointPtr,
        flags: c_uint,
    ) -> c_int [Negative];
}
