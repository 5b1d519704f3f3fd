//! Stream adapters.
//!
//! Source and sink adapters receive a pointer to [`StreamCallbackIds`] and
//! pick the ID matching their role; the stream event adapter receives a plain
//! [`CallbackId`](super::CallbackId).

use std::os::raw::{c_char, c_int, c_longlong, c_void};

use super::{id_from_opaque, EventHooks, StreamCallbackIds};
use crate::ffi::*;

/// # Safety
/// `opaque` must point at a live `StreamCallbackIds`.
unsafe fn ids<'a>(opaque: *mut c_void) -> &'a StreamCallbackIds {
    &*(opaque as *const StreamCallbackIds)
}

pub extern "C" fn stream_source<H: EventHooks>(
    st: virStreamPtr,
    data: *mut c_char,
    nbytes: usize,
    opaque: *mut c_void,
) -> c_int {
    // SAFETY: the stream helpers keep the IDs alive for the whole transfer.
    let id = unsafe { ids(opaque) }.callback;
    H::stream_source(st, data, nbytes, id)
}

pub extern "C" fn stream_source_hole<H: EventHooks>(
    st: virStreamPtr,
    in_data: *mut c_int,
    length: *mut c_longlong,
    opaque: *mut c_void,
) -> c_int {
    let id = unsafe { ids(opaque) }.hole;
    H::stream_source_hole(st, in_data, length, id)
}

pub extern "C" fn stream_source_skip<H: EventHooks>(
    st: virStreamPtr,
    length: c_longlong,
    opaque: *mut c_void,
) -> c_int {
    let id = unsafe { ids(opaque) }.skip;
    H::stream_source_skip(st, length, id)
}

pub extern "C" fn stream_sink<H: EventHooks>(
    st: virStreamPtr,
    data: *const c_char,
    nbytes: usize,
    opaque: *mut c_void,
) -> c_int {
    let id = unsafe { ids(opaque) }.callback;
    H::stream_sink(st, data, nbytes, id)
}

pub extern "C" fn stream_sink_hole<H: EventHooks>(
    st: virStreamPtr,
    length: c_longlong,
    opaque: *mut c_void,
) -> c_int {
    let id = unsafe { ids(opaque) }.hole;
    H::stream_sink_hole(st, length, id)
}

hook_adapters! {
    fn stream_event(st: virStreamPtr, events: c_int);
}
