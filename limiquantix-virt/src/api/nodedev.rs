//! Host devices.

use std::os::raw::{c_char, c_int, c_uint, c_void};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct NodeDeviceSymbols => nodedev, Core;

    fn virConnectListAllNodeDevices(
        conn: virConnectPtr,
        devices: *mut *mut virNodeDevicePtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectNodeDeviceEventDeregisterAny(
        conn: virConnectPtr,
        callback_id: c_int,
    ) -> c_int [Negative];
    fn virConnectNodeDeviceEventRegisterAny(
        conn: virConnectPtr,
        dev: virNodeDevicePtr,
        event_id: c_int,
        cb: virConnectNodeDeviceEventGenericCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int [Negative];
    fn virNodeDeviceCreate(dev: virNodeDevicePtr, flags: c_uint) -> c_int [Negative];
    fn virNodeDeviceCreateXML(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virNodeDevicePtr [Null];
    fn virNodeDeviceDefineXML(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virNodeDevicePtr [Null];
    fn virNodeDeviceDestroy(dev: virNodeDevicePtr) -> c_int [Negative];
    fn virNodeDeviceDetachFlags(
        dev: virNodeDevicePtr,
        driver_name: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNodeDeviceDettach(dev: virNodeDevicePtr) -> c_int [Negative];
    fn virNodeDeviceFree(dev: virNodeDevicePtr) -> c_int [Negative];
    fn virNodeDeviceGetAutostart(dev: virNodeDevicePtr, autostart: *mut c_int) -> c_int [Negative];
    fn virNodeDeviceGetName(dev: virNodeDevicePtr) -> *const c_char [Null];
    fn virNodeDeviceGetParent(dev: virNodeDevicePtr) -> *const c_char [Null];
    fn virNodeDeviceGetXMLDesc(dev: virNodeDevicePtr, flags: c_uint) -> *mut c_char [Null];
    fn virNodeDeviceIsActive(dev: virNodeDevicePtr) -> c_int [Negative];
    fn virNodeDeviceIsPersistent(dev: virNodeDevicePtr) -> c_int [Negative];
    fn virNodeDeviceListCaps(
        dev: virNodeDevicePtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int [Negative];
    fn virNodeDeviceLookupByName(
        conn: virConnectPtr,
        name: *const c_char,
    ) -> virNodeDevicePtr [Null];
    fn virNodeDeviceLookupSCSIHostByWWN(
        conn: virConnectPtr,
        wwnn: *const c_char,
        wwpn: *const c_char,
        flags: c_uint,
    ) -> virNodeDevicePtr [Null];
    fn virNodeDeviceNumOfCaps(dev: virNodeDevicePtr) -> c_int [Negative];
    fn virNodeDeviceReAttach(dev: virNodeDevicePtr) -> c_int [Negative];
    fn virNodeDeviceRef(dev: virNodeDevicePtr) -> c_int [Negative];
    fn virNodeDeviceReset(dev: virNodeDevicePtr) -> c_int [Negative];
    fn virNodeDeviceSetAutostart(dev: virNodeDevicePtr, autostart: c_int) -> c_int [Negative];
    fn virNodeDeviceUndefine(dev: virNodeDevicePtr, flags: c_uint) -> c_int [Negative];
    fn virNodeDeviceUpdate(
        dev: virNodeDevicePtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNodeListDevices(
        conn: virConnectPtr,
        cap: *const c_char,
        names: *mut *mut c_char,
        maxnames: c_int,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virNodeNumOfDevices(
        conn: virConnectPtr,
        cap: *const c_char,
        flags: c_uint,
    ) -> c_int [Negative];
}
