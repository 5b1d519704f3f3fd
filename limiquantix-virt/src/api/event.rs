//! The libvirt event loop.
//!
//! Either the built-in loop is registered with `virEventRegisterDefaultImpl`
//! and driven by repeated `virEventRunDefaultImpl` calls, or the embedding
//! program supplies its own loop through `virEventRegisterImpl`.

use std::os::raw::{c_int, c_void};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct EventSymbols => event, Core;

    fn virEventRegisterDefaultImpl() -> c_int [Negative];
    fn virEventRunDefaultImpl() -> c_int [Negative];
    fn virEventAddHandle(
        fd: c_int,
        events: c_int,
        cb: virEventHandleCallback,
        opaque: *mut c_void,
        ff: virFreeCallback,
    ) -> c_int [Negative];
    fn virEventUpdateHandle(watch: c_int, events: c_int) -> () [Never];
    fn virEventRemoveHandle(watch: c_int) -> c_int [Negative];
    fn virEventAddTimeout(
        timeout: c_int,
        cb: virEventTimeoutCallback,
        opaque: *mut c_void,
        ff: virFreeCallback,
    ) -> c_int [Negative];
    fn virEventUpdateTimeout(timer: c_int, timeout: c_int) -> () [Never];
    fn virEventRemoveTimeout(timer: c_int) -> c_int [Negative];
    fn virEventRegisterImpl(
        add_handle: virEventAddHandleFunc,
        update_handle: virEventUpdateHandleFunc,
        remove_handle: virEventRemoveHandleFunc,
        add_timeout: virEventAddTimeoutFunc,
        update_timeout: virEventUpdateTimeoutFunc,
        remove_timeout: virEventRemoveTimeoutFunc,
    ) -> () [Never];
}
