//! Header notification feature.
//!
//! # Design
//! - The bell owns its list; nothing else reads notifications.
//! - Read-state changes are optimistic.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
