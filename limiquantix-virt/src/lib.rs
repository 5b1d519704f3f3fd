//! # limiquantix Virt
//!
//! libvirt bindings that load the native libraries at runtime instead of
//! linking against them.
//!
//! A node agent built with this crate starts on hosts without libvirt
//! installed. Every native function is resolved the first time it is called,
//! and a missing library or symbol makes only that call fail (with a sentinel
//! return value), never the process.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │   Libvirt wrappers (virDomainCreate, ...)    │
//! │   + helpers that install callback adapters   │
//! └──────────────────────┬───────────────────────┘
//!                        │ SymbolSlot (resolved once)
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │               SymbolSource                   │
//! └──────────┬───────────────────────┬───────────┘
//!            ▼                       ▼
//! ┌────────────────────┐   ┌────────────────────┐
//! │   DlopenSource     │   │    MockSource      │
//! │ (libvirt.so.0 ...) │   │  (tests, no host)  │
//! └────────────────────┘   └────────────────────┘
//! ```
//!
//! Native callbacks are routed back to Rust through [`EventHooks`]: each
//! registration carries a caller-chosen [`CallbackId`] in libvirt's opaque
//! pointer, and the adapter in [`trampoline`] hands it to the hook.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use limiquantix_virt::{libvirt, VirError};
//!
//! let lv = libvirt();
//! let mut err = VirError::default();
//! let uri = std::ffi::CString::new("qemu:///system").unwrap();
//!
//! let conn = unsafe { lv.virConnectOpenReadOnly(uri.as_ptr(), &mut err) };
//! if conn.is_null() {
//!     eprintln!("connect failed: {err}");
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod ffi;
mod helpers;
pub mod loader;
pub mod mock;
pub mod trampoline;
pub mod typed_params;

pub use api::{configure, libvirt, Libvirt};
pub use config::LoaderConfig;
pub use error::{ConfigError, LoadError, VirError};
pub use helpers::{
    invoke_event_free_callback, invoke_event_handle_callback, invoke_event_timeout_callback,
};
pub use loader::{DlopenSource, Failure, Library, SymbolSource};
pub use mock::MockSource;
pub use trampoline::{CallbackId, EventHooks, StreamCallbackIds};
pub use typed_params::{TypedParam, TypedParamValue, TypedParams};
