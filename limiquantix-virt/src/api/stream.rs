//! Data streams used for console, screenshot and volume transfer.
//!
//! The `*All` variants drive a whole transfer through Rust callbacks; see
//! [`crate::helpers`] for versions that dispatch to [`crate::EventHooks`].

use std::os::raw::{c_char, c_int, c_longlong, c_uint, c_void};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct StreamSymbols => stream, Core;

    fn virStreamAbort(stream: virStreamPtr) -> c_int [Negative];
    fn virStreamEventAddCallback(
        stream: virStreamPtr,
        events: c_int,
        cb: virStreamEventCallback,
        opaque: *mut c_void,
        ff: virFreeCallback,
    ) -> c_int [Negative];
    fn virStreamEventRemoveCallback(stream: virStreamPtr) -> c_int [Negative];
    fn virStreamEventUpdateCallback(stream: virStreamPtr, events: c_int) -> c_int [Negative];
    fn virStreamFinish(stream: virStreamPtr) -> c_int [Negative];
    fn virStreamFree(stream: virStreamPtr) -> c_int [Negative];
    fn virStreamNew(conn: virConnectPtr, flags: c_uint) -> virStreamPtr [Null];
    fn virStreamRecv(stream: virStreamPtr, data: *mut c_char, nbytes: usize) -> c_int [Negative];
    fn virStreamRecvAll(
        stream: virStreamPtr,
        handler: virStreamSinkFunc,
        opaque: *mut c_void,
    ) -> c_int [Negative];
    fn virStreamRecvFlags(
        stream: virStreamPtr,
        data: *mut c_char,
        nbytes: usize,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virStreamRecvHole(
        stream: virStreamPtr,
        length: *mut c_longlong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virStreamRef(stream: virStreamPtr) -> c_int [Negative];
    fn virStreamSend(stream: virStreamPtr, data: *const c_char, nbytes: usize) -> c_int [Negative];
    fn virStreamSendAll(
        stream: virStreamPtr,
        handler: virStreamSourceFunc,
        opaque: *mut c_void,
    ) -> c_int [Negative];
    fn virStreamSendHole(
        stream: virStreamPtr,
        length: c_longlong,
        flags: c_uint,
    ) -> c_int [Negative];
    fn virStreamSparseRecvAll(
        stream: virStreamPtr,
        handler: virStreamSinkFunc,
        hole_handler: virStreamSinkHoleFunc,
        opaque: *mut c_void,
    ) -> c_int [Negative];
    fn virStreamSparseSendAll(
        stream: virStreamPtr,
        handler: virStreamSourceFunc,
        hole_handler: virStreamSourceHoleFunc,
        skip_handler: virStreamSourceSkipFunc,
        opaque: *mut c_void,
    ) -> c_int [Negative];
}
