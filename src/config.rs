//! Client configuration resolved at compile time.
//!
//! WASM bundles have no process environment, so the API base URL is baked in
//! from `KANBAN_API_URL` when the bundle is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `KANBAN_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// `localStorage` key holding the auth token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Settings shared by the API client and session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root without a trailing slash.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build a config for an explicit base URL.
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        Self { api_base_url: normalize_base_url(api_base_url) }
    }

    /// Build a config from the build-time environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("KANBAN_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
