//! Account management feature slice.
//!
//! # Design
//! - Admins and regular users are listed separately behind one toggle.
//! - The message editor works on raw HTML; the e-mail wrapper is built on send.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
