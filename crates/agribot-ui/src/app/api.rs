//! API client context shared through the component tree.
//!
//! # Design
//! - Exactly one client per app boot, handed out by reference count.

use std::rc::Rc;

use crate::core::config::AppConfig;
use crate::services::api::{ApiClient, new_client};

/// Shared API client context.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    pub(crate) fn new(config: AppConfig) -> Self {
        Self {
            client: Rc::new(new_client(config)),
        }
    }

    /// Session cookie lifetime configured for this boot.
    pub(crate) fn token_ttl_secs(&self) -> u32 {
        self.client.config().token_ttl_secs
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
