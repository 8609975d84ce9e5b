//! Session persistence: token cookie plus cached profile in `LocalStorage`.

use agribot_api_models::User;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::core::auth::{SessionStorage, expired_cookie, read_cookie, session_cookie};
use crate::core::config::{LEGACY_TOKEN_KEY, PROFILE_KEY, TOKEN_COOKIE};
use crate::core::gateway::TokenSource;

/// Browser-backed session store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BrowserSession;

fn html_document() -> Option<HtmlDocument> {
    document().dyn_into::<HtmlDocument>().ok()
}

fn set_cookie(assignment: &str) {
    let Some(doc) = html_document() else {
        return;
    };
    if doc.set_cookie(assignment).is_err() {
        gloo::console::warn!("unable to write session cookie");
    }
}

impl SessionStorage for BrowserSession {
    fn token(&self) -> Option<String> {
        html_document()
            .and_then(|doc| doc.cookie().ok())
            .and_then(|cookies| read_cookie(&cookies, TOKEN_COOKIE))
    }

    fn store_token(&self, token: &str, ttl_secs: u32) {
        set_cookie(&session_cookie(TOKEN_COOKIE, token, ttl_secs));
    }

    fn clear_token(&self) {
        set_cookie(&expired_cookie(TOKEN_COOKIE));
    }

    fn profile(&self) -> Option<User> {
        LocalStorage::get(PROFILE_KEY).ok()
    }

    fn store_profile(&self, profile: &User) {
        if LocalStorage::set(PROFILE_KEY, profile).is_err() {
            gloo::console::warn!("unable to cache user profile");
        }
    }

    fn clear_profile(&self) {
        LocalStorage::delete(PROFILE_KEY);
    }
}

impl TokenSource for BrowserSession {
    fn token(&self) -> Option<String> {
        SessionStorage::token(self).or_else(|| {
            LocalStorage::raw()
                .get_item(LEGACY_TOKEN_KEY)
                .ok()
                .flatten()
                .filter(|token| !token.trim().is_empty())
        })
    }
}
