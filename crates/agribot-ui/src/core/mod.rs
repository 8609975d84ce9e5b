//! Core, DOM-free primitives shared by every page.
pub mod auth;
pub mod config;
pub mod gateway;
pub mod metrics;
pub mod nav;
pub mod pagination;
pub mod search;
pub mod store;
pub mod toast;
