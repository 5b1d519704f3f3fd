//! The process-wide binding lives in its own test binary so no other test can
//! initialize it first.

use std::os::raw::c_ulong;
use std::path::PathBuf;
use std::ptr;

use limiquantix_virt::{configure, libvirt, Library, LoadError, LoaderConfig, VirError};

#[test]
fn test_configure_then_use_global_binding() {
    let config = LoaderConfig {
        core: Some(PathBuf::from("/nonexistent/limiquantix/libvirt.so.0")),
        qemu: Some(PathBuf::from("/nonexistent/limiquantix/libvirt-qemu.so.0")),
        lxc: Some(PathBuf::from("/nonexistent/limiquantix/libvirt-lxc.so.0")),
        admin: Some(PathBuf::from("/nonexistent/limiquantix/libvirt-admin.so.0")),
        search_paths: Vec::new(),
    };

    let lv = configure(config.clone()).expect("first configure succeeds");
    assert!(ptr::eq(lv, libvirt()));
    assert!(matches!(configure(config), Err(LoadError::AlreadyInitialized)));

    // The configured core path does not exist: calls degrade to sentinels.
    let mut err = VirError::default();
    let mut version: c_ulong = 0;
    let rc = unsafe { lv.virGetVersion(&mut version, ptr::null(), ptr::null_mut(), &mut err) };
    assert_eq!(rc, -1);
    assert_eq!(version, 0);
    assert!(!err.is_set());

    match lv.library_status(Library::Core) {
        Err(LoadError::LibraryUnavailable { candidates, .. }) => {
            assert_eq!(candidates, vec!["/nonexistent/limiquantix/libvirt.so.0".to_string()]);
        }
        other => panic!("unexpected status: {other:?}"),
    }
}
