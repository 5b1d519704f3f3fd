//! Event loop adapters.
//!
//! Two directions exist. `event_handle` and `event_timeout` are called by
//! libvirt's loop when a watch or timer registered through `virEventAddHandle`
//! or `virEventAddTimeout` fires. The `*_impl` adapters are the reverse: they
//! are installed with `virEventRegisterImpl` so that libvirt asks the embedding
//! program's own loop to manage its watches and timers.

use std::os::raw::{c_int, c_void};

use super::{id_from_opaque, EventHooks};
use crate::ffi::*;

hook_adapters! {
    fn event_handle(watch: c_int, fd: c_int, events: c_int);
    fn event_timeout(timer: c_int);
}

pub extern "C" fn event_add_handle_impl<H: EventHooks>(
    fd: c_int,
    event: c_int,
    cb: virEventHandleCallback,
    opaque: *mut c_void,
    ff: virFreeCallback,
) -> c_int {
    H::event_add_handle(
        fd,
        event,
        cb.map_or(0, |f| f as usize),
        opaque as usize,
        ff.map_or(0, |f| f as usize),
    )
}

pub extern "C" fn event_update_handle_impl<H: EventHooks>(watch: c_int, event: c_int) {
    H::event_update_handle(watch, event)
}

pub extern "C" fn event_remove_handle_impl<H: EventHooks>(watch: c_int) -> c_int {
    H::event_remove_handle(watch)
}

pub extern "C" fn event_add_timeout_impl<H: EventHooks>(
    timeout: c_int,
    cb: virEventTimeoutCallback,
    opaque: *mut c_void,
    ff: virFreeCallback,
) -> c_int {
    H::event_add_timeout(
        timeout,
        cb.map_or(0, |f| f as usize),
        opaque as usize,
        ff.map_or(0, |f| f as usize),
    )
}

pub extern "C" fn event_update_timeout_impl<H: EventHooks>(timer: c_int, timeout: c_int) {
    H::event_update_timeout(timer, timeout)
}

pub extern "C" fn event_remove_timeout_impl<H: EventHooks>(timer: c_int) -> c_int {
    H::event_remove_timeout(timer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ADDED: Mutex<Option<(c_int, c_int, usize, usize, usize)>> = Mutex::new(None);

    struct Loop;

    impl EventHooks for Loop {
        fn event_add_handle(fd: c_int, event: c_int, callback: usize, opaque: usize, freecb: usize) -> c_int {
            *ADDED.lock().unwrap() = Some((fd, event, callback, opaque, freecb));
            7
        }
    }

    unsafe extern "C" fn on_handle(_watch: c_int, _fd: c_int, _events: c_int, _opaque: *mut c_void) {}

    #[test]
    fn test_add_handle_passes_addresses() {
        let watch = event_add_handle_impl::<Loop>(
            3,
            VIR_EVENT_HANDLE_READABLE,
            Some(on_handle),
            0x1000 as *mut c_void,
            None,
        );

        assert_eq!(watch, 7);
        let (fd, event, callback, opaque, freecb) = ADDED.lock().unwrap().unwrap();
        assert_eq!((fd, event), (3, VIR_EVENT_HANDLE_READABLE));
        assert_eq!(callback, on_handle as *const () as usize);
        assert_eq!(opaque, 0x1000);
        assert_eq!(freecb, 0);
    }

    #[test]
    fn test_defaults_report_failure() {
        struct Nothing;
        impl EventHooks for Nothing {}

        assert_eq!(event_remove_handle_impl::<Nothing>(1), -1);
        assert_eq!(event_remove_timeout_impl::<Nothing>(1), -1);
    }
}
