use std::os::raw::{c_char, c_int, c_uchar, c_uint};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct NwFilterSymbols => nwfilter, Core;

    fn virConnectListAllNWFilterBindings(
        conn: virConnectPtr,
        bindings: *mut *mut virNWFilterBindingPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectListAllNWFilters(
        conn: virConnectPtr,
        filters: *mut *mut virNWFilterPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectListNWFilters(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int [Negative];
    fn virConnectNumOfNWFilters(conn: virConnectPtr) -> c_int [Negative];
    fn virNWFilterBindingCreateXML(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virNWFilterBindingPtr [Null];
    fn virNWFilterBindingDelete(binding: virNWFilterBindingPtr) -> c_int [Negative];
    fn virNWFilterBindingFree(binding: virNWFilterBindingPtr) -> c_int [Negative];
    fn virNWFilterBindingGetFilterName(binding: virNWFilterBindingPtr) -> *const c_char [Null];
    fn virNWFilterBindingGetPortDev(binding: virNWFilterBindingPtr) -> *const c_char [Null];
    fn virNWFilterBindingGetXMLDesc(
        binding: virNWFilterBindingPtr,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virNWFilterBindingLookupByPortDev(
        conn: virConnectPtr,
        portdev: *const c_char,
    ) -> virNWFilterBindingPtr [Null];
    fn virNWFilterBindingRef(binding: virNWFilterBindingPtr) -> c_int [Negative];
    fn virNWFilterDefineXML(conn: virConnectPtr, xml_desc: *const c_char) -> virNWFilterPtr [Null];
    fn virNWFilterDefineXMLFlags(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virNWFilterPtr [Null];
    fn virNWFilterFree(nwfilter: virNWFilterPtr) -> c_int [Negative];
    fn virNWFilterGetName(nwfilter: virNWFilterPtr) -> *const c_char [Null];
    fn virNWFilterGetUUID(nwfilter: virNWFilterPtr, uuid: *mut c_uchar) -> c_int [Negative];
    fn virNWFilterGetUUIDString(nwfilter: virNWFilterPtr, buf: *mut c_char) -> c_int [Negative];
    fn virNWFilterGetXMLDesc(nwfilter: virNWFilterPtr, flags: c_uint) -> *mut c_char [Null];
    fn virNWFilterLookupByName(conn: virConnectPtr, name: *const c_char) -> virNWFilterPtr [Null];
    fn virNWFilterLookupByUUID(conn: virConnectPtr, uuid: *const c_uchar) -> virNWFilterPtr [Null];
    fn virNWFilterLookupByUUIDString(
        conn: virConnectPtr,
        uuidstr: *const c_char,
    ) -> virNWFilterPtr [Null];
    fn virNWFilterRef(nwfilter: virNWFilterPtr) -> c_int [Negative];
    fn virNWFilterUndefine(nwfilter: virNWFilterPtr) -> c_int [Negative];
}
