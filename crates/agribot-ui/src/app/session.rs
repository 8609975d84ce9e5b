//! Session transitions bound to the browser store and the yewdux state.

use agribot_api_models::User;
use yewdux::prelude::Dispatch;

use crate::core::auth::{self, cached_profile};
use crate::core::store::{AppStore, set_session};
use crate::services::storage::BrowserSession;

/// Initial synchronous token check.
pub(crate) fn start(dispatch: &Dispatch<AppStore>) {
    set_session(dispatch, auth::init(&BrowserSession));
}

/// Persist the profile (and token when given) and mark the session live.
pub(crate) fn sign_in(dispatch: &Dispatch<AppStore>, token: Option<&str>, user: &User, ttl_secs: u32) {
    set_session(dispatch, auth::login(&BrowserSession, token, user, ttl_secs));
}

/// Drop the token and the cached profile.
pub(crate) fn sign_out(dispatch: &Dispatch<AppStore>) {
    set_session(dispatch, auth::sign_out(&BrowserSession));
}

/// Profile cached at the last login or profile refresh.
pub(crate) fn profile() -> Option<User> {
    cached_profile(&BrowserSession)
}
