//! Disease catalogue feature slice.
//!
//! # Design
//! - The spray catalogue is fetched once, the first time a row is expanded.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
