//! User feedback feature slice.
//!
//! # Design
//! - Star ratings are derived once per fetch; filtering and charts reuse them.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
