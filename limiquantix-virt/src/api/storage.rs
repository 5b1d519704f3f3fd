//! Storage pools and volumes.

use std::os::raw::{c_char, c_int, c_uchar, c_uint, c_ulonglong, c_void};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct StorageSymbols => storage, Core;

    fn virConnectFindStoragePoolSources(
        conn: virConnectPtr,
        type_: *const c_char,
        src_spec: *const c_char,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virConnectGetStoragePoolCapabilities(
        conn: virConnectPtr,
        flags: c_uint,
    ) -> *mut c_char [Null];
    fn virConnectListAllStoragePools(
        conn: virConnectPtr,
        pools: *mut *mut virStoragePoolPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectListDefinedStoragePools(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int [Negative];
    fn virConnectListStoragePools(
        conn: virConnectPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int [Negative];
    fn virConnectNumOfDefinedStoragePools(conn: virConnectPtr) -> c_int [Negative];
    fn virConnectNumOfStoragePools(conn: virConnectPtr) -> c_int [Negative];
    fn virConnectStoragePoolEventDeregisterAny(
        conn: virConnectPtr,
        callback_id: c_int,
    ) -> c_int [Negative];
    fn virConnectStoragePoolEventRegisterAny(
        conn: virConnectPtr,
        pool: virStoragePoolPtr,
        event_id: c_int,
        cb: virConnectStoragePoolEventGenericCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int [Negative];
    fn virStoragePoolBuild(pool: virStoragePoolPtr, flags: c_uint) -> c_int [Negative];
    fn virStoragePoolCreate(pool: virStoragePoolPtr, flags: c_uint) -> c_int [Negative];
    fn virStoragePoolCreateXML(
        conn: virConnectPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virStoragePoolPtr [Null];
    fn virStoragePoolDefineXML(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virStoragePoolPtr [Null];
    fn virStoragePoolDelete(pool: virStoragePoolPtr, flags: c_uint) -> c_int [Negative];
    fn virStoragePoolDestroy(pool: virStoragePoolPtr) -> c_int [Negative];
    fn virStoragePoolFree(pool: virStoragePoolPtr) -> c_int [Negative];
    fn virStoragePoolGetAutostart(
        pool: virStoragePoolPtr,
        autostart: *mut c_int,
    ) -> c_int [Negative];
    fn virStoragePoolGetConnect(pool: virStoragePoolPtr) -> virConnectPtr [Null];
    fn virStoragePoolGetInfo(
        pool: virStoragePoolPtr,
        info: virStoragePoolInfoPtr,
    ) -> c_int [Negative];
    fn virStoragePoolGetName(pool: virStoragePoolPtr) -> *const c_char [Null];
    fn virStoragePoolGetUUID(pool: virStoragePoolPtr, uuid: *mut c_uchar) -> c_int [Negative];
    fn virStoragePoolGetUUIDString(pool: virStoragePoolPtr, buf: *mut c_char) -> c_int [Negative];
    fn virStoragePoolGetXMLDesc(pool: virStoragePoolPtr, flags: c_uint) -> *mut c_char [Null];
    fn virStoragePoolIsActive(pool: virStoragePoolPtr) -> c_int [Negative];
    fn virStoragePoolIsPersistent(pool: virStoragePoolPtr) -> c_int [Negative];
    fn virStoragePoolListAllVolumes(
        pool: virStoragePoolPtr,
        vols: *mut *mut virStorageVolPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virStoragePoolListVolumes(
        pool: virStoragePoolPtr,
        names: *mut *mut c_char,
        maxnames: c_int,
    ) -> c_int [Negative];
    fn virStoragePoolLookupByName(
        conn: virConnectPtr,
        name: *const c_char,
    ) -> virStoragePoolPtr [Null];
    fn virStoragePoolLookupByTargetPath(
        conn: virConnectPtr,
        path: *const c_char,
    ) -> virStoragePoolPtr [Null];
    fn virStoragePoolLookupByUUID(
        conn: virConnectPtr,
        uuid: *const c_uchar,
    ) -> virStoragePoolPtr [Null];
    fn virStoragePoolLookupByUUIDString(
        conn: virConnectPtr,
        uuidstr: *const c_char,
    ) -> virStoragePoolPtr [Null];
    fn virStoragePoolLookupByVolume(vol: virStorageVolPtr) -> virStoragePoolPtr [Null];
    fn virStoragePoolNumOfVolumes(pool: virStoragePoolPtr) -> c_int [Negative];
    fn virStoragePoolRef(pool: virStoragePoolPtr) -> c_int [Negative];
    fn virStoragePoolRefresh(pool: virStoragePoolPtr, flags: c_uint) -> c_int [Negative];
    fn virStoragePoolSetAutostart(pool: virStoragePoolPtr, autostart: c_int) -> c_int [Negative];
    fn virStoragePoolUndefine(pool: virStoragePoolPtr) -> c_int [Negative];
    fn virStorageVolCreateXML(
        pool: virStoragePoolPtr,
        xml_desc: *const c_char,
        flags: c_uint,
    ) -> virStorageVolPtr [Null];
    fn virStorageVolCreateXMLFrom(
        pool: virStoragePoolPtr,
        xml_desc: *const c_char,
        clonevol: virStorageVolPtr,
        flags: c_uint,
    ) -> virStorageVolPtr [Null];
    fn virStorageVolDelete(vol: virStorageVolPtr, flags: c_uint) -> c_int [Negative];
    fn virStorageVolDownload(
        vol: virStorageVolPtr,
        stream: virStreamPtr,
        offset: c_ulonglong,
        length: c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virStorageVolFree(vol: virStorageVolPtr) -> c_int [Negative];
    fn virStorageVolGetConnect(vol: virStorageVolPtr) -> virConnectPtr [Null];
    fn virStorageVolGetInfo(vol: virStorageVolPtr, info: virStorageVolInfoPtr) -> c_int [Negative];
    fn virStorageVolGetInfoFlags(
        vol: virStorageVolPtr,
        info: virStorageVolInfoPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virStorageVolGetKey(vol: virStorageVolPtr) -> *const c_char [Null];
    fn virStorageVolGetName(vol: virStorageVolPtr) -> *const c_char [Null];
    fn virStorageVolGetPath(vol: virStorageVolPtr) -> *mut c_char [Null];
    fn virStorageVolGetXMLDesc(vol: virStorageVolPtr, flags: c_uint) -> *mut c_char [Null];
    fn virStorageVolLookupByKey(conn: virConnectPtr, key: *const c_char) -> virStorageVolPtr [Null];
    fn virStorageVolLookupByName(
        pool: virStoragePoolPtr,
        name: *const c_char,
    ) -> virStorageVolPtr [Null];
    fn virStorageVolLookupByPath(
        conn: virConnectPtr,
        path: *const c_char,
    ) -> virStorageVolPtr [Null];
    fn virStorageVolRef(vol: virStorageVolPtr) -> c_int [Negative];
    fn virStorageVolResize(
        vol: virStorageVolPtr,
        capacity: c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virStorageVolUpload(
        vol: virStorageVolPtr,
        stream: virStreamPtr,
        offset: c_ulonglong,
        length: c_ulonglong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virStorageVolWipe(vol: virStorageVolPtr, flags: c_uint) -> c_int [Negative];
    fn virStorageVolWipePattern(
        vol: virStorageVolPtr,
        algorithm: c_uint,
        flags: c_uint,
    ) -> c_int [Negative];
}
