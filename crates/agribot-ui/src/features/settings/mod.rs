//! Account settings feature slice.
//!
//! # Design
//! - The account is re-fetched by the cached profile id on every visit.
//! - A profile save refreshes the cached profile without touching the token.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
