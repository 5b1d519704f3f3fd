//! Domain event adapters.

use std::mem;
use std::os::raw::{c_char, c_int, c_longlong, c_uint, c_ulonglong, c_void};

use super::{id_from_opaque, EventHooks};
use crate::ffi::*;

hook_adapters! {
    fn domain_event_lifecycle(conn: virConnectPtr, dom: virDomainPtr, event: c_int, detail: c_int);
    fn domain_event_generic(conn: virConnectPtr, dom: virDomainPtr);
    fn domain_event_rtc_change(conn: virConnectPtr, dom: virDomainPtr, utcoffset: c_longlong);
    fn domain_event_watchdog(conn: virConnectPtr, dom: virDomainPtr, action: c_int);
    fn domain_event_io_error(
        conn: virConnectPtr,
        dom: virDomainPtr,
        src_path: *const c_char,
        dev_alias: *const c_char,
        action: c_int,
    );
    #[allow(clippy::too_many_arguments)]
    fn domain_event_graphics(
        conn: virConnectPtr,
        dom: virDomainPtr,
        phase: c_int,
        local: *const virDomainEventGraphicsAddress,
        remote: *const virDomainEventGraphicsAddress,
        auth_scheme: *const c_char,
        subject: *const virDomainEventGraphicsSubject,
    );
    fn domain_event_io_error_reason(
        conn: virConnectPtr,
        dom: virDomainPtr,
        src_path: *const c_char,
        dev_alias: *const c_char,
        action: c_int,
        reason: *const c_char,
    );
    fn domain_event_block_job(
        conn: virConnectPtr,
        dom: virDomainPtr,
        disk: *const c_char,
        job_type: c_int,
        status: c_int,
    );
    fn domain_event_disk_change(
        conn: virConnectPtr,
        dom: virDomainPtr,
        old_src_path: *const c_char,
        new_src_path: *const c_char,
        dev_alias: *const c_char,
        reason: c_int,
    );
    fn domain_event_tray_change(conn: virConnectPtr, dom: virDomainPtr, dev_alias: *const c_char, reason: c_int);
    fn domain_event_pm_wakeup(conn: virConnectPtr, dom: virDomainPtr, reason: c_int);
    fn domain_event_pm_suspend(conn: virConnectPtr, dom: virDomainPtr, reason: c_int);
    fn domain_event_pm_suspend_disk(conn: virConnectPtr, dom: virDomainPtr, reason: c_int);
    fn domain_event_balloon_change(conn: virConnectPtr, dom: virDomainPtr, actual: c_ulonglong);
    fn domain_event_device_removed(conn: virConnectPtr, dom: virDomainPtr, dev_alias: *const c_char);
    fn domain_event_tunable(
        conn: virConnectPtr,
        dom: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
    );
    fn domain_event_agent_lifecycle(conn: virConnectPtr, dom: virDomainPtr, state: c_int, reason: c_int);
    fn domain_event_device_added(conn: virConnectPtr, dom: virDomainPtr, dev_alias: *const c_char);
    fn domain_event_migration_iteration(conn: virConnectPtr, dom: virDomainPtr, iteration: c_int);
    fn domain_event_job_completed(
        conn: virConnectPtr,
        dom: virDomainPtr,
        params: virTypedParameterPtr,
        nparams: c_int,
    );
    fn domain_event_device_removal_failed(conn: virConnectPtr, dom: virDomainPtr, dev_alias: *const c_char);
    fn domain_event_metadata_change(
        conn: virConnectPtr,
        dom: virDomainPtr,
        metadata_type: c_int,
        nsuri: *const c_char,
    );
    fn domain_event_block_threshold(
        conn: virConnectPtr,
        dom: virDomainPtr,
        dev: *const c_char,
        path: *const c_char,
        threshold: c_ulonglong,
        excess: c_ulonglong,
    );
    fn domain_event_memory_failure(
        conn: virConnectPtr,
        dom: virDomainPtr,
        recipient: c_int,
        action: c_int,
        flags: c_uint,
    );
    fn domain_qemu_monitor_event(
        conn: virConnectPtr,
        dom: virDomainPtr,
        event: *const c_char,
        seconds: c_longlong,
        micros: c_uint,
        details: *const c_char,
    );
}

type Generic = unsafe extern "C" fn(virConnectPtr, virDomainPtr, *mut c_void);

macro_rules! as_generic {
    ($adapter:expr, $shape:ty) => {
        // SAFETY: libvirt calls the callback registered for an event ID with
        // that event's own signature; the generic type only carries it.
        Some(unsafe { mem::transmute::<$shape, Generic>($adapter as $shape) })
    };
}

/// The adapter for domain event `event_id`, typed for
/// `virConnectDomainEventRegisterAny`.
///
/// Returns `None` for event IDs this binding does not know.
pub fn domain_event_callback<H: EventHooks>(event_id: c_int) -> virConnectDomainEventGenericCallback {
    match event_id {
        VIR_DOMAIN_EVENT_ID_LIFECYCLE => {
            as_generic!(domain_event_lifecycle::<H>, virConnectDomainEventLifecycleCallback)
        }
        VIR_DOMAIN_EVENT_ID_REBOOT | VIR_DOMAIN_EVENT_ID_CONTROL_ERROR => {
            Some(domain_event_generic::<H> as Generic)
        }
        VIR_DOMAIN_EVENT_ID_RTC_CHANGE => {
            as_generic!(domain_event_rtc_change::<H>, virConnectDomainEventRTCChangeCallback)
        }
        VIR_DOMAIN_EVENT_ID_WATCHDOG => {
            as_generic!(domain_event_watchdog::<H>, virConnectDomainEventWatchdogCallback)
        }
        VIR_DOMAIN_EVENT_ID_IO_ERROR => {
            as_generic!(domain_event_io_error::<H>, virConnectDomainEventIOErrorCallback)
        }
        VIR_DOMAIN_EVENT_ID_GRAPHICS => {
            as_generic!(domain_event_graphics::<H>, virConnectDomainEventGraphicsCallback)
        }
        VIR_DOMAIN_EVENT_ID_IO_ERROR_REASON => as_generic!(
            domain_event_io_error_reason::<H>,
            virConnectDomainEventIOErrorReasonCallback
        ),
        VIR_DOMAIN_EVENT_ID_BLOCK_JOB | VIR_DOMAIN_EVENT_ID_BLOCK_JOB_2 => {
            as_generic!(domain_event_block_job::<H>, virConnectDomainEventBlockJobCallback)
        }
        VIR_DOMAIN_EVENT_ID_DISK_CHANGE => {
            as_generic!(domain_event_disk_change::<H>, virConnectDomainEventDiskChangeCallback)
        }
        VIR_DOMAIN_EVENT_ID_TRAY_CHANGE => {
            as_generic!(domain_event_tray_change::<H>, virConnectDomainEventTrayChangeCallback)
        }
        VIR_DOMAIN_EVENT_ID_PMWAKEUP => {
            as_generic!(domain_event_pm_wakeup::<H>, virConnectDomainEventReasonCallback)
        }
        VIR_DOMAIN_EVENT_ID_PMSUSPEND => {
            as_generic!(domain_event_pm_suspend::<H>, virConnectDomainEventReasonCallback)
        }
        VIR_DOMAIN_EVENT_ID_PMSUSPEND_DISK => {
            as_generic!(domain_event_pm_suspend_disk::<H>, virConnectDomainEventReasonCallback)
        }
        VIR_DOMAIN_EVENT_ID_BALLOON_CHANGE => as_generic!(
            domain_event_balloon_change::<H>,
            virConnectDomainEventBalloonChangeCallback
        ),
        VIR_DOMAIN_EVENT_ID_DEVICE_REMOVED => {
            as_generic!(domain_event_device_removed::<H>, virConnectDomainEventDeviceAliasCallback)
        }
        VIR_DOMAIN_EVENT_ID_TUNABLE => {
            as_generic!(domain_event_tunable::<H>, virConnectDomainEventParamsCallback)
        }
        VIR_DOMAIN_EVENT_ID_AGENT_LIFECYCLE => as_generic!(
            domain_event_agent_lifecycle::<H>,
            virConnectDomainEventAgentLifecycleCallback
        ),
        VIR_DOMAIN_EVENT_ID_DEVICE_ADDED => {
            as_generic!(domain_event_device_added::<H>, virConnectDomainEventDeviceAliasCallback)
        }
        VIR_DOMAIN_EVENT_ID_MIGRATION_ITERATION => {
            as_generic!(domain_event_migration_iteration::<H>, virConnectDomainEventReasonCallback)
        }
        VIR_DOMAIN_EVENT_ID_JOB_COMPLETED => {
            as_generic!(domain_event_job_completed::<H>, virConnectDomainEventParamsCallback)
        }
        VIR_DOMAIN_EVENT_ID_DEVICE_REMOVAL_FAILED => as_generic!(
            domain_event_device_removal_failed::<H>,
            virConnectDomainEventDeviceAliasCallback
        ),
        VIR_DOMAIN_EVENT_ID_METADATA_CHANGE => as_generic!(
            domain_event_metadata_change::<H>,
            virConnectDomainEventMetadataChangeCallback
        ),
        VIR_DOMAIN_EVENT_ID_BLOCK_THRESHOLD => as_generic!(
            domain_event_block_threshold::<H>,
            virConnectDomainEventBlockThresholdCallback
        ),
        VIR_DOMAIN_EVENT_ID_MEMORY_FAILURE => as_generic!(
            domain_event_memory_failure::<H>,
            virConnectDomainEventMemoryFailureCallback
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trampoline::{opaque_from_id, CallbackId};
    use std::sync::Mutex;

    static SEEN: Mutex<Vec<(&'static str, CallbackId, i64)>> = Mutex::new(Vec::new());

    struct Recorder;

    impl EventHooks for Recorder {
        fn domain_event_lifecycle(
            _conn: virConnectPtr,
            _dom: virDomainPtr,
            event: c_int,
            detail: c_int,
            id: CallbackId,
        ) {
            SEEN.lock().unwrap().push(("lifecycle", id, (event * 10 + detail) as i64));
        }

        fn domain_event_balloon_change(
            _conn: virConnectPtr,
            _dom: virDomainPtr,
            actual: c_ulonglong,
            id: CallbackId,
        ) {
            SEEN.lock().unwrap().push(("balloon", id, actual as i64));
        }

        fn domain_event_generic(_conn: virConnectPtr, _dom: virDomainPtr, id: CallbackId) {
            SEEN.lock().unwrap().push(("generic", id, 0));
        }
    }

    #[test]
    fn test_selector_covers_known_events() {
        for id in 0..=VIR_DOMAIN_EVENT_ID_MEMORY_FAILURE {
            assert!(domain_event_callback::<Recorder>(id).is_some(), "event {id}");
        }
        assert!(domain_event_callback::<Recorder>(999).is_none());
    }

    #[test]
    fn test_adapters_forward_arguments_and_id() {
        SEEN.lock().unwrap().clear();

        let conn = std::ptr::null_mut();
        let dom = std::ptr::null_mut();

        domain_event_lifecycle::<Recorder>(conn, dom, 5, 3, opaque_from_id(42));
        domain_event_balloon_change::<Recorder>(conn, dom, 1 << 20, opaque_from_id(7));

        // Through the generic pointer, as libvirt would call it.
        let cb = domain_event_callback::<Recorder>(VIR_DOMAIN_EVENT_ID_REBOOT).unwrap();
        unsafe { cb(conn, dom, opaque_from_id(9)) };

        let seen = SEEN.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![("lifecycle", 42, 53), ("balloon", 7, 1 << 20), ("generic", 9, 0)]
        );
    }
}
