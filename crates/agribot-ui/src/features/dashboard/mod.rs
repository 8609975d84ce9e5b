//! Dashboard feature slice.
//!
//! # Design
//! - Every dashboard source is fetched in parallel and applied at once.
//! - Charts are rendered as plain tables and CSS grids.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
