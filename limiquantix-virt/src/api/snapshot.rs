//! Domain snapshots.

use std::os::raw::{c_char, c_int, c_uint};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct SnapshotSymbols => snapshot, Core;

    fn virDomainHasCurrentSnapshot(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainListAllSnapshots(
        domain: virDomainPtr,
        snaps: *mut *mut virDomainSnapshotPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainRevertToSnapshot(snapshot: virDomainSnapshotPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainSnapshotCreateXML(
        domain: virDomainPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virDomainSnapshotPtr [Null];
    fn virDomainSnapshotCurrent(domain: virDomainPtr, flags: c_uint) -> virDomainSnapshotPtr [Null];
    fn virDomainSnapshotDelete(snapshot: virDomainSnapshotPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainSnapshotFree(snapshot: virDomainSnapshotPtr) -> c_int [Negative];
    fn virDomainSnapshotGetConnect(snapshot: virDomainSnapshotPtr) -> virConnectPtr [Null];
    fn virDomainSnapshotGetDomain(snapshot: virDomainSnapshotPtr) -> virDomainPtr [Null];
    fn virDomainSnapshotGetName(snapshot: virDomainSnapshotPtr) -> *const c_char [Null];
    fn virDomainSnapshotGetParent(
        snapshot: virDomainSnapshotPtr,
        flags: c_uint,
    ) -> virDomainSnapshotPtr [Null];
    fn virDomainSnapshotGetXMLDesc(
        snapshot: virDomainSnapshotPtr,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virDomainSnapshotHasMetadata(
        snapshot: virDomainSnapshotPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSnapshotIsCurrent(
        snapshot: virDomainSnapshotPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSnapshotListAllChildren(
        snapshot: virDomainSnapshotPtr,
        snaps: *mut *mut virDomainSnapshotPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSnapshotListChildrenNames(
        snapshot: virDomainSnapshotPtr,
        names: *mut *mut c_char,
        nameslen: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSnapshotListNames(
        domain: virDomainPtr,
        names: *mut *mut c_char,
        nameslen: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSnapshotLookupByName(
        domain: virDomainPtr,
        name: *const c_char,
        flags: c_uint,
    ) -> virDomainSnapshotPtr [Null];
    fn virDomainSnapshotNum(domain: virDomainPtr, flags: c_uint) -> c_int [Negative];
    fn virDomainSnapshotNumChildren(
        snapshot: virDomainSnapshotPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virDomainSnapshotRef(snapshot: virDomainSnapshotPtr) -> c_int [Negative];
}
