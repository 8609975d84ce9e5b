//! Shared admin API client and multipart helpers.

use web_sys::{File, FormData};

use crate::core::config::AppConfig;
use crate::core::gateway::{Failure, Gateway};
use crate::services::storage::BrowserSession;
use crate::services::transport::FetchTransport;

/// Gateway wired to `fetch` and the browser session.
pub(crate) type ApiClient = Gateway<FetchTransport, BrowserSession>;

/// Build the singleton client for one app boot.
pub(crate) const fn new_client(config: AppConfig) -> ApiClient {
    Gateway::new(config, FetchTransport, BrowserSession)
}

/// Incrementally built multipart body.
pub(crate) struct Multipart(FormData);

impl Multipart {
    pub(crate) fn new() -> Result<Self, Failure> {
        FormData::new()
            .map(Self)
            .map_err(|_| Failure::local("Could not create form data"))
    }

    pub(crate) fn text(self, name: &str, value: &str) -> Result<Self, Failure> {
        self.0
            .append_with_str(name, value)
            .map_err(|_| Failure::local(format!("Could not add field {name}")))?;
        Ok(self)
    }

    pub(crate) fn file(self, name: &str, file: &File) -> Result<Self, Failure> {
        self.0
            .append_with_blob_and_filename(name, file, &file.name())
            .map_err(|_| Failure::local(format!("Could not attach {}", file.name())))?;
        Ok(self)
    }

    pub(crate) fn finish(self) -> FormData {
        self.0
    }
}
