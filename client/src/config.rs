//! Build-time client configuration.
//!
//! Values are baked into the WASM bundle when it is compiled:
//! - `WMS_API_URL`: backend base URL, default `http://localhost:3000/api`
//! - `WMS_AUTH_MODE`: `demo` (default) or `remote`
//!
//! The request timeout and the demo login delay are fixed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEMO_LOGIN_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown auth mode `{0}` (expected `demo` or `remote`)")]
    UnknownAuthMode(String),

    #[error("API base URL is empty")]
    EmptyBaseUrl,
}

/// Which credential verifier backs the login form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Accept any valid form submission and mint a local demo session.
    #[default]
    LocalDemo,
    /// Verify against `POST {base}/auth/login`.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), timeout: REQUEST_TIMEOUT }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub auth_mode: AuthMode,
    pub login_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api: ApiConfig::default(), auth_mode: AuthMode::default(), login_delay: DEMO_LOGIN_DELAY }
    }
}

impl ClientConfig {
    /// Read the values captured at compile time.
    ///
    /// An invalid value is logged and the whole config falls back to the
    /// defaults (local API, demo login) so a bad build never blanks the
    /// dashboard.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("WMS_API_URL"), option_env!("WMS_AUTH_MODE")).unwrap_or_else(|e| {
            log::warn!("{e}; using default client config");
            Self::default()
        })
    }

    /// Build a config from raw values, failing on anything invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty base URL or unknown auth mode.
    pub fn from_values(api_url: Option<&str>, auth_mode: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            api: ApiConfig { base_url: parse_base_url(api_url)?, timeout: REQUEST_TIMEOUT },
            auth_mode: parse_auth_mode(auth_mode)?,
            login_delay: DEMO_LOGIN_DELAY,
        })
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    Ok(trimmed.to_owned())
}

fn parse_auth_mode(raw: Option<&str>) -> Result<AuthMode, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("" | "demo" | "local") => Ok(AuthMode::LocalDemo),
        Some("remote" | "api") => Ok(AuthMode::Remote),
        Some(_) => Err(ConfigError::UnknownAuthMode(raw.unwrap_or_default().to_owned())),
    }
}
