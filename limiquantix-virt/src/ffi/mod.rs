//! Raw C declarations for the libvirt ABI.
//!
//! Names follow the C headers so that the wrappers in [`crate::api`] read
//! exactly like the native calls they forward to.

#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]

pub mod callbacks;
pub mod consts;
pub mod types;

pub use callbacks::*;
pub use consts::*;
pub use types::*;
