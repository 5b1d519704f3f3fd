//! The native error channel.
//!
//! libvirt keeps the last error per thread (and, for the legacy `virConn*`
//! calls, per connection). These wrappers do not take an error record: they
//! are how the record gets filled in the first place.

use std::os::raw::{c_char, c_int, c_void};

use crate::ffi::*;

libvirt_api! {
    raw pub(crate) struct ErrorSymbols => errors, Core;

    fn virGetLastError() -> virErrorPtr [Null];
    /// Copy the thread's last error into `to`. Returns the error code, `0` if
    /// there is none.
    fn virCopyLastError(to: virErrorPtr) -> c_int [Negative];
    fn virSaveLastError() -> virErrorPtr [Null];
    fn virResetLastError() -> () [Never];
    /// Free the strings held by `err` and zero it. Does not free `err` itself.
    fn virResetError(err: virErrorPtr) -> () [Never];
    fn virFreeError(err: virErrorPtr) -> () [Never];
    fn virGetLastErrorMessage() -> *const c_char [Null];
    fn virGetLastErrorCode() -> c_int [Negative];
    fn virGetLastErrorDomain() -> c_int [Negative];
    fn virSetErrorFunc(user_data: *mut c_void, handler: virErrorFunc) -> () [Never];
    fn virConnCopyLastError(conn: virConnectPtr, to: virErrorPtr) -> c_int [Negative];
    fn virConnGetLastError(conn: virConnectPtr) -> virErrorPtr [Null];
    fn virConnResetLastError(conn: virConnectPtr) -> () [Never];
    fn virConnSetErrorFunc(conn: virConnectPtr, user_data: *mut c_void, handler: virErrorFunc) -> () [Never];
}
