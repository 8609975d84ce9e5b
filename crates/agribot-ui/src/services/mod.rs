//! Browser adapters for the DOM-free core: HTTP, persisted session, files.

pub(crate) mod api;
pub(crate) mod files;
pub(crate) mod storage;
pub(crate) mod transport;
