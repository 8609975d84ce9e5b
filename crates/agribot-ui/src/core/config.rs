//! Application configuration resolved once at boot.
//!
//! # Design
//! - Defaults mirror the deployed admin API so a plain build works out of the box.
//! - Build-time env vars (`AGRIBOT_API_BASE_URL`, `AGRIBOT_API_PREFIX`) override them.
//! - Normalise URL fragments here so request building never deals with stray slashes.

/// Base URL of the deployed admin API.
pub const DEFAULT_BASE_URL: &str = "https://agribot-hydro-nft-admin.netlify.app";
/// Function prefix every API route lives under.
pub const DEFAULT_API_PREFIX: &str = ".netlify/functions/api";
/// Cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";
/// Legacy LocalStorage key some deployments still populate with the token.
pub const LEGACY_TOKEN_KEY: &str = "authToken";
/// LocalStorage key holding the cached user profile.
pub const PROFILE_KEY: &str = "user";
/// Session cookie lifetime (two hours).
pub const TOKEN_TTL_SECS: u32 = 2 * 60 * 60;
/// Auto-dismiss delay applied to non-loading toasts.
pub const TOAST_TIMEOUT_MS: u32 = 2_000;

/// Runtime configuration for the admin UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Absolute API origin without trailing slash.
    pub base_url: String,
    /// Route prefix without leading or trailing slash.
    pub api_prefix: String,
    /// Session cookie lifetime in seconds.
    pub token_ttl_secs: u32,
    /// Default toast timeout in milliseconds.
    pub toast_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_API_PREFIX)
    }
}

impl AppConfig {
    /// Build a configuration from raw URL fragments.
    #[must_use]
    pub fn new(base_url: &str, api_prefix: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            api_prefix: normalize_prefix(api_prefix),
            token_ttl_secs: TOKEN_TTL_SECS,
            toast_timeout_ms: TOAST_TIMEOUT_MS,
        }
    }

    /// Resolve the configuration compiled into this build.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("AGRIBOT_API_BASE_URL"),
            option_env!("AGRIBOT_API_PREFIX"),
        )
    }

    /// Apply optional overrides on top of the defaults; blank values are ignored.
    #[must_use]
    pub fn from_overrides(base_url: Option<&str>, api_prefix: Option<&str>) -> Self {
        let pick = |value: Option<&str>, fallback: &'static str| {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        Self::new(
            &pick(base_url, DEFAULT_BASE_URL),
            &pick(api_prefix, DEFAULT_API_PREFIX),
        )
    }
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn normalize_prefix(value: &str) -> String {
    value.trim().trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_prefix, DEFAULT_API_PREFIX);
        assert_eq!(config.token_ttl_secs, 7_200);
        assert_eq!(config.toast_timeout_ms, 2_000);
    }

    #[test]
    fn overrides_are_normalised() {
        let config =
            AppConfig::from_overrides(Some(" http://localhost:8888/ "), Some("/api/v2/"));
        assert_eq!(config.base_url, "http://localhost:8888");
        assert_eq!(config.api_prefix, "api/v2");
    }

    #[test]
    fn blank_overrides_fall_back() {
        let config = AppConfig::from_overrides(Some("   "), None);
        assert_eq!(config, AppConfig::default());
    }
}
