//! Route pages, one slice per admin screen.
//!
//! Each slice keeps DOM-free rules in `logic` and, on `wasm32`, its HTTP calls
//! in `api` and its components in `view`.

pub mod accounts;
pub mod dashboard;
pub mod diseases;
pub mod feedback;
pub mod login;
pub mod logs;
pub mod model;
pub mod notifications;
pub mod plants;
pub mod settings;
pub mod sprays;
