use std::os::raw::{c_char, c_int, c_uchar, c_uint, c_void};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct SecretSymbols => secret, Core;

    fn virConnectListAllSecrets(
        conn: virConnectPtr,
        secrets: *mut *mut virSecretPtr,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virConnectListSecrets(
        conn: virConnectPtr,
        uuids: *mut *mut c_char,
        maxuuids: c_int,
    ) -> c_int [Negative];
    fn virConnectNumOfSecrets(conn: virConnectPtr) -> c_int [Negative];
    fn virConnectSecretEventDeregisterAny(
        conn: virConnectPtr,
        callback_id: c_int,
    ) -> c_int [Negative];
    fn virConnectSecretEventRegisterAny(
        conn: virConnectPtr,
        secret: virSecretPtr,
        event_id: c_int,
        cb: virConnectSecretEventGenericCallback,
        opaque: *mut c_void,
        freecb: virFreeCallback,
    ) -> c_int [Negative];
    fn virSecretDefineXML(
        conn: virConnectPtr,
        xml: *const c_char,
        flags: c_uint,
    ) -> virSecretPtr [Null];
    fn virSecretFree(secret: virSecretPtr) -> c_int [Negative];
    fn virSecretGetConnect(secret: virSecretPtr) -> virConnectPtr [Null];
    fn virSecretGetUUID(secret: virSecretPtr, uuid: *mut c_uchar) -> c_int [Negative];
    fn virSecretGetUUIDString(secret: virSecretPtr, buf: *mut c_char) -> c_int [Negative];
    fn virSecretGetUsageID(secret: virSecretPtr) -> *const c_char [Null];
    fn virSecretGetUsageType(secret: virSecretPtr) -> c_int [Negative];
    fn virSecretGetValue(
        secret: virSecretPtr,
        value_size: *mut usize,
        flags: c_uint,
    ) -> *mut c_uchar [Null];
    fn virSecretGetXMLDesc(secret: virSecretPtr, flags: c_uint) -> *mut c_char [Null];
    fn virSecretLookupByUUID(conn: virConnectPtr, uuid: *const c_uchar) -> virSecretPtr [Null];
    fn virSecretLookupByUUIDString(
        conn: virConnectPtr,
        uuidstr: *const c_char,
    ) -> virSecretPtr [Null];
    fn virSecretLookupByUsage(
        conn: virConnectPtr,
        usage_type: c_int,
        usage_id: *const c_char,
    ) -> virSecretPtr [Null];
    fn virSecretRef(secret: virSecretPtr) -> c_int [Negative];
    fn virSecretSetValue(
        secret: virSecretPtr,
        value: *const c_uchar,
        value_size: usize,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virSecretUndefine(secret: virSecretPtr) -> c_int [Negative];
}
