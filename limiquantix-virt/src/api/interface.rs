use std::os::raw::{c_char, c_int, c_uint};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct InterfaceSymbols => interface, Core;

    fn virConnectListAllInterfaces(
        conn: virConnectPtr,
        ifaces: *mut *mut virInterfacePtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectListDefinedInterfaces(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int [Negative];
    fn virConnectListInterfaces(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int [Negative];
    fn virConnectNumOfDefinedInterfaces(conn: virConnectPtr) -> c_int [Negative];
    fn virConnectNumOfInterfaces(conn: virConnectPtr) -> c_int [Negative];
    fn virInterfaceChangeBegin(conn: virConnectPtr, flags: c_uint) -> c_int [Negative];
    fn virInterfaceChangeCommit(conn: virConnectPtr, flags: c_uint) -> c_int [Negative];
    fn virInterfaceChangeRollback(conn: virConnectPtr, flags: c_uint) -> c_int [Negative];
    fn virInterfaceCreate(iface: virInterfacePtr, flags: c_uint) -> c_int [Negative];
    fn virInterfaceDefineXML(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virInterfacePtr [Null];
    fn virInterfaceDestroy(iface: virInterfacePtr, flags: c_uint) -> c_int [Negative];
    fn virInterfaceFree(iface: virInterfacePtr) -> c_int [Negative];
    fn virInterfaceGetConnect(iface: virInterfacePtr) -> virConnectPtr [Null];
    fn virInterfaceGetMACString(iface: virInterfacePtr) -> *const c_char [Null];
    fn virInterfaceGetName(iface: virInterfacePtr) -> *const c_char [Null];
    fn virInterfaceGetXMLDesc(iface: virInterfacePtr, flags: c_uint) -> *mut c_char [Null];
    fn virInterfaceIsActive(iface: virInterfacePtr) -> c_int [Negative];
    fn virInterfaceLookupByMACString(
        conn: virConnectPtr,
        macstr: *const c_char,
    ) -> virInterfacePtr [Null];
    fn virInterfaceLookupByName(conn: virConnectPtr, name: *const c_char) -> virInterfacePtr [Null];
    fn virInterfaceRef(iface: virInterfacePtr) -> c_int [Negative];
    fn virInterfaceUndefine(iface: virInterfacePtr) -> c_int [Negative];
}
