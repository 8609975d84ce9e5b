#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! AGRIBOT admin console.
//!
//! A Yew single-page app for managing the AGRIBOT plant-care platform: plants,
//! diseases, sprays, ML models, user accounts, feedback, and logs. Everything
//! that does not touch the DOM lives in [`core`] and the `logic` module of each
//! feature so it can be tested natively; browser adapters, components, and
//! page views only build for `wasm32`.

pub mod core;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
