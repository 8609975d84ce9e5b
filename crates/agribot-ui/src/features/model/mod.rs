//! Trained model catalogue feature slice.
//!
//! # Design
//! - Plants and the three model collections load together.
//! - Uploads send the parsed metrics file as a JSON object.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
