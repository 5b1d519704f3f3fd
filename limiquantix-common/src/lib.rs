//! # limiquantix Common
//!
//! Shared utilities for limiquantix binaries.
//!
//! ## Logging
//!
//! ```rust,no_run
//! use limiquantix_common::init_logging;
//!
//! init_logging("info").unwrap();
//! tracing::info!(library = "libvirt", "Library loaded");
//! ```

pub mod logging;

pub use logging::{init_logging, init_logging_json};
