//! Authentication session state and the route guard decision.
//!
//! # Design
//! - Session state is two flags; persistence goes through [`SessionStorage`]
//!   so the browser adapter (cookie + `LocalStorage`) stays out of core.
//! - `logout` only drops the token; `sign_out` also forgets the cached profile.
//! - The guard is a pure function so every route/state pairing is testable.

use agribot_api_models::User;

/// Process-wide login state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// A session token is present.
    pub is_logged_in: bool,
    /// The initial token check has not completed yet.
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_logged_in: false,
            is_loading: true,
        }
    }
}

/// Persistence for the session token and cached profile.
pub trait SessionStorage {
    /// Stored session token.
    fn token(&self) -> Option<String>;
    /// Store the session token for `ttl_secs`.
    fn store_token(&self, token: &str, ttl_secs: u32);
    /// Remove the session token.
    fn clear_token(&self);
    /// Cached user profile.
    fn profile(&self) -> Option<User>;
    /// Cache the user profile.
    fn store_profile(&self, profile: &User);
    /// Forget the cached user profile.
    fn clear_profile(&self);
}

/// Resolve the initial state from persisted storage.
#[must_use]
pub fn init(storage: &impl SessionStorage) -> SessionState {
    let has_token = storage
        .token()
        .is_some_and(|token| !token.trim().is_empty());
    SessionState {
        is_logged_in: has_token,
        is_loading: false,
    }
}

/// Record a successful login. A `None` token refreshes the cached profile
/// without touching the existing session cookie.
#[must_use]
pub fn login(
    storage: &impl SessionStorage,
    token: Option<&str>,
    profile: &User,
    ttl_secs: u32,
) -> SessionState {
    storage.store_profile(profile);
    if let Some(token) = token {
        storage.store_token(token, ttl_secs);
    }
    SessionState {
        is_logged_in: true,
        is_loading: false,
    }
}

/// Drop the session token; the cached profile is kept.
#[must_use]
pub fn logout(storage: &impl SessionStorage) -> SessionState {
    storage.clear_token();
    SessionState {
        is_logged_in: false,
        is_loading: false,
    }
}

/// Drop the session token and the cached profile.
#[must_use]
pub fn sign_out(storage: &impl SessionStorage) -> SessionState {
    storage.clear_profile();
    logout(storage)
}

/// Cached profile of the signed-in user.
#[must_use]
pub fn cached_profile(storage: &impl SessionStorage) -> Option<User> {
    storage.profile()
}

/// What the shell renders for a requested route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardView<R> {
    /// Initial check still running.
    Placeholder,
    /// Visitor is signed out; only the login screen is shown.
    Login,
    /// Render the requested route.
    Page(R),
}

/// Decide what to render for `route` given the session state.
#[must_use]
pub fn guard<R>(state: SessionState, route: R) -> GuardView<R> {
    match (state.is_loading, state.is_logged_in) {
        (true, _) => GuardView::Placeholder,
        (false, true) => GuardView::Page(route),
        (false, false) => GuardView::Login,
    }
}

/// Value of cookie `name` in a `document.cookie` string, percent-decoded.
#[must_use]
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value).map_or_else(|_| value.to_string(), std::borrow::Cow::into_owned)
        })
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` style assignment persisting `value` for `ttl_secs`.
#[must_use]
pub fn session_cookie(name: &str, value: &str, ttl_secs: u32) -> String {
    format!(
        "{name}={}; max-age={ttl_secs}; path=/; SameSite=Strict",
        urlencoding::encode(value)
    )
}

/// Assignment that deletes cookie `name`.
#[must_use]
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; max-age=0; path=/; SameSite=Strict")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Memory {
        token: RefCell<Option<(String, u32)>>,
        profile: RefCell<Option<User>>,
    }

    impl SessionStorage for Memory {
        fn token(&self) -> Option<String> {
            self.token.borrow().as_ref().map(|(token, _)| token.clone())
        }
        fn store_token(&self, token: &str, ttl_secs: u32) {
            *self.token.borrow_mut() = Some((token.to_string(), ttl_secs));
        }
        fn clear_token(&self) {
            *self.token.borrow_mut() = None;
        }
        fn profile(&self) -> Option<User> {
            self.profile.borrow().clone()
        }
        fn store_profile(&self, profile: &User) {
            *self.profile.borrow_mut() = Some(profile.clone());
        }
        fn clear_profile(&self) {
            *self.profile.borrow_mut() = None;
        }
    }

    fn admin() -> User {
        User {
            id: 7,
            email: "admin@agribot.dev".to_string(),
            role: "Admin".to_string(),
            ..User::default()
        }
    }

    #[test]
    fn default_state_is_loading() {
        let state = SessionState::default();
        assert!(state.is_loading);
        assert_eq!(guard(state, "/plants"), GuardView::Placeholder);
    }

    #[test]
    fn init_without_token_guards_every_route() {
        let storage = Memory::default();
        let state = init(&storage);
        assert!(!state.is_loading);
        for route in ["/", "/plants", "/settings", "/unknown"] {
            assert_eq!(guard(state, route), GuardView::Login);
        }
    }

    #[test]
    fn init_with_token_renders_requested_page() {
        let storage = Memory::default();
        storage.store_token("jwt", 7_200);
        let state = init(&storage);
        assert_eq!(guard(state, "/feedback"), GuardView::Page("/feedback"));
    }

    #[test]
    fn login_persists_token_and_profile() {
        let storage = Memory::default();
        let state = login(&storage, Some("jwt"), &admin(), 7_200);
        assert!(state.is_logged_in);
        assert_eq!(*storage.token.borrow(), Some(("jwt".to_string(), 7_200)));
        assert_eq!(cached_profile(&storage).map(|u| u.id), Some(7));
    }

    #[test]
    fn profile_refresh_keeps_existing_token() {
        let storage = Memory::default();
        storage.store_token("jwt", 7_200);
        let mut updated = admin();
        updated.full_name = Some("Ada".to_string());
        let state = login(&storage, None, &updated, 7_200);
        assert!(state.is_logged_in);
        assert_eq!(storage.token().as_deref(), Some("jwt"));
        assert_eq!(
            cached_profile(&storage).and_then(|u| u.full_name),
            Some("Ada".to_string())
        );
    }

    #[test]
    fn logout_keeps_profile_but_sign_out_clears_it() {
        let storage = Memory::default();
        let _ = login(&storage, Some("jwt"), &admin(), 7_200);
        let state = logout(&storage);
        assert!(!state.is_logged_in);
        assert!(storage.token().is_none());
        assert!(cached_profile(&storage).is_some());

        let _ = login(&storage, Some("jwt"), &admin(), 7_200);
        let state = sign_out(&storage);
        assert!(!state.is_logged_in);
        assert!(cached_profile(&storage).is_none());
    }

    #[test]
    fn cookies_round_through_document_strings() {
        let assignment = session_cookie("token", "a b", 7_200);
        assert_eq!(assignment, "token=a%20b; max-age=7200; path=/; SameSite=Strict");
        assert_eq!(read_cookie("theme=dark; token=a%20b", "token").as_deref(), Some("a b"));
        assert_eq!(read_cookie("token=", "token"), None);
        assert_eq!(read_cookie("", "token"), None);
        assert!(expired_cookie("token").contains("max-age=0"));
    }
}
