//! Network, node device, secret and storage pool event adapters.

use std::mem;
use std::os::raw::{c_int, c_void};

use super::{id_from_opaque, EventHooks};
use crate::ffi::*;

hook_adapters! {
    fn network_event_lifecycle(conn: virConnectPtr, net: virNetworkPtr, event: c_int, detail: c_int);
    fn node_device_event_lifecycle(conn: virConnectPtr, dev: virNodeDevicePtr, event: c_int, detail: c_int);
    fn node_device_event_generic(conn: virConnectPtr, dev: virNodeDevicePtr);
    fn secret_event_lifecycle(conn: virConnectPtr, secret: virSecretPtr, event: c_int, detail: c_int);
    fn secret_event_generic(conn: virConnectPtr, secret: virSecretPtr);
    fn storage_pool_event_lifecycle(
        conn: virConnectPtr,
        pool: virStoragePoolPtr,
        event: c_int,
        detail: c_int,
    );
    fn storage_pool_event_generic(conn: virConnectPtr, pool: virStoragePoolPtr);
}

/// The adapter for network event `event_id`.
pub fn network_event_callback<H: EventHooks>(event_id: c_int) -> virConnectNetworkEventGenericCallback {
    match event_id {
        // SAFETY: libvirt invokes lifecycle callbacks with the lifecycle signature.
        VIR_NETWORK_EVENT_ID_LIFECYCLE => Some(unsafe {
            mem::transmute::<
                virConnectNetworkEventLifecycleCallback,
                unsafe extern "C" fn(virConnectPtr, virNetworkPtr, *mut c_void),
            >(network_event_lifecycle::<H>)
        }),
        _ => None,
    }
}

/// The adapter for node device event `event_id`.
pub fn node_device_event_callback<H: EventHooks>(
    event_id: c_int,
) -> virConnectNodeDeviceEventGenericCallback {
    match event_id {
        VIR_NODE_DEVICE_EVENT_ID_LIFECYCLE => Some(unsafe {
            mem::transmute::<
                virConnectNodeDeviceEventLifecycleCallback,
                unsafe extern "C" fn(virConnectPtr, virNodeDevicePtr, *mut c_void),
            >(node_device_event_lifecycle::<H>)
        }),
        VIR_NODE_DEVICE_EVENT_ID_UPDATE => Some(node_device_event_generic::<H> as _),
        _ => None,
    }
}

/// The adapter for secret event `event_id`.
pub fn secret_event_callback<H: EventHooks>(event_id: c_int) -> virConnectSecretEventGenericCallback {
    match event_id {
        VIR_SECRET_EVENT_ID_LIFECYCLE => Some(unsafe {
            mem::transmute::<
                virConnectSecretEventLifecycleCallback,
                unsafe extern "C" fn(virConnectPtr, virSecretPtr, *mut c_void),
            >(secret_event_lifecycle::<H>)
        }),
        VIR_SECRET_EVENT_ID_VALUE_CHANGED => Some(secret_event_generic::<H> as _),
        _ => None,
    }
}

/// The adapter for storage pool event `event_id`.
pub fn storage_pool_event_callback<H: EventHooks>(
    event_id: c_int,
) -> virConnectStoragePoolEventGenericCallback {
    match event_id {
        VIR_STORAGE_POOL_EVENT_ID_LIFECYCLE => Some(unsafe {
            mem::transmute::<
                virConnectStoragePoolEventLifecycleCallback,
                unsafe extern "C" fn(virConnectPtr, virStoragePoolPtr, *mut c_void),
            >(storage_pool_event_lifecycle::<H>)
        }),
        VIR_STORAGE_POOL_EVENT_ID_REFRESH => Some(storage_pool_event_generic::<H> as _),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;
    impl EventHooks for Silent {}

    #[test]
    fn test_selectors() {
        assert!(network_event_callback::<Silent>(VIR_NETWORK_EVENT_ID_LIFECYCLE).is_some());
        assert!(network_event_callback::<Silent>(1).is_none());
        assert!(node_device_event_callback::<Silent>(VIR_NODE_DEVICE_EVENT_ID_UPDATE).is_some());
        assert!(secret_event_callback::<Silent>(VIR_SECRET_EVENT_ID_VALUE_CHANGED).is_some());
        assert!(storage_pool_event_callback::<Silent>(VIR_STORAGE_POOL_EVENT_ID_REFRESH).is_some());
        assert!(storage_pool_event_callback::<Silent>(-1).is_none());
    }
}
