//! Virtual networks and network ports.

use std::os::raw::{c_char, c_int, c_uchar, c_uint, c_void};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct NetworkSymbols => network, Core;

    fn virConnectListAllNetworks(
        conn: virConnectPtr,
        nets: *mut *mut virNetworkPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectListDefinedNetworks(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int [Negative];
    fn virConnectListNetworks(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int [Negative];
    fn virConnectNetworkEventDeregisterAny(
        conn: virConnectPtr,
        callback_id: c_int,
    ) -> c_int [Negative];
    fn virConnectNetworkEventRegisterAny(
        conn: virConnectPtr,
        net: virNetworkPtr,
        event_id: c_int,
        cb: virConnectNetworkEventGenericCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int [Negative];
    fn virConnectNumOfDefinedNetworks(conn: virConnectPtr) -> c_int [Negative];
    fn virConnectNumOfNetworks(conn: virConnectPtr) -> c_int [Negative];
    fn virNetworkCreate(network: virNetworkPtr) -> c_int [Negative];
    fn virNetworkCreateXML(conn: virConnectPtr, xml_desc: *const c_char) -> virNetworkPtr [Null];
    fn virNetworkCreateXMLFlags(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virNetworkPtr [Null];
    fn virNetworkDHCPLeaseFree(lease: virNetworkDHCPLeasePtr) -> () [Never];
    fn virNetworkDefineXML(conn: virConnectPtr, xml: *const c_char) -> virNetworkPtr [Null];
    fn virNetworkDefineXMLFlags(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virNetworkPtr [Null];
    fn virNetworkDestroy(network: virNetworkPtr) -> c_int [Negative];
    fn virNetworkFree(network: virNetworkPtr) -> c_int [Negative];
    fn virNetworkGetAutostart(network: virNetworkPtr, autostart: *mut c_int) -> c_int [Negative];
    fn virNetworkGetBridgeName(network: virNetworkPtr) -> *mut c_char [Null];
    fn virNetworkGetConnect(net: virNetworkPtr) -> virConnectPtr [Null];
    fn virNetworkGetDHCPLeases(
        network: virNetworkPtr,
        mac: *const c_char,
        leases: *mut *mut virNetworkDHCPLeasePtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNetworkGetMetadata(
        network: virNetworkPtr,
        type_: c_int,
        uri: *const c_char,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virNetworkGetName(network: virNetworkPtr) -> *const c_char [Null];
    fn virNetworkGetUUID(network: virNetworkPtr, uuid: *mut c_uchar) -> c_int [Negative];
    fn virNetworkGetUUIDString(network: virNetworkPtr, buf: *mut c_char) -> c_int [Negative];
    fn virNetworkGetXMLDesc(network: virNetworkPtr, flags: c_uint) -> *mut c_char [Null];
    fn virNetworkIsActive(net: virNetworkPtr) -> c_int [Negative];
    fn virNetworkIsPersistent(net: virNetworkPtr) -> c_int [Negative];
    fn virNetworkListAllPorts(
        network: virNetworkPtr,
        ports: *mut *mut virNetworkPortPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNetworkLookupByName(conn: virConnectPtr, name: *const c_char) -> virNetworkPtr [Null];
    fn virNetworkLookupByUUID(conn: virConnectPtr, uuid: *const c_uchar) -> virNetworkPtr [Null];
    fn virNetworkLookupByUUIDString(
        conn: virConnectPtr,
        uuidstr: *const c_char,
    ) -> virNetworkPtr [Null];
    fn virNetworkPortCreateXML(
        net: virNetworkPtr,
        xmldesc: *const c_char,
        flags: c_uint,
    ) -> virNetworkPortPtr [Null];
    fn virNetworkPortDelete(port: virNetworkPortPtr, flags: c_uint) -> c_int [Negative];
    fn virNetworkPortFree(port: virNetworkPortPtr) -> c_int [Negative];
    fn virNetworkPortGetNetwork(port: virNetworkPortPtr) -> virNetworkPtr [Null];
    fn virNetworkPortGetParameters(
        port: virNetworkPortPtr,
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNetworkPortGetUUID(port: virNetworkPortPtr, uuid: *mut c_uchar) -> c_int [Negative];
    fn virNetworkPortGetUUIDString(port: virNetworkPortPtr, buf: *mut c_char) -> c_int [Negative];
    fn virNetworkPortGetXMLDesc(port: virNetworkPortPtr, flags: c_uint) -> *mut c_char [Null];
    fn virNetworkPortLookupByUUID(
        net: virNetworkPtr,
        uuid: *const c_uchar,
    ) -> virNetworkPortPtr [Null];
    fn virNetworkPortLookupByUUIDString(
        net: virNetworkPtr,
        uuidstr: *const c_char,
    ) -> virNetworkPortPtr [Null];
    fn virNetworkPortRef(port: virNetworkPortPtr) -> c_int [Negative];
    fn virNetworkPortSetParameters(
        port: virNetworkPortPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNetworkRef(network: virNetworkPtr) -> c_int [Negative];
    fn virNetworkSetAutostart(network: virNetworkPtr, autostart: c_int) -> c_int [Negative];
    fn virNetworkSetMetadata(
        network: virNetworkPtr,
        type_: c_int,
        metadata: *const c_char,
        key: *const c_char,
        uri: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNetworkUndefine(network: virNetworkPtr) -> c_int [Negative];
    fn virNetworkUpdate(
        network: virNetworkPtr,
        command: c_uint,
        section: c_uint,
        parent_index: c_int,
        xml: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
}
