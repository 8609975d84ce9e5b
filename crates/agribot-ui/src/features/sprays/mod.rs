//! Spray catalogue feature slice.
//!
//! # Design
//! - Create and edit share one dialog; delete waits on a confirm toast.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
