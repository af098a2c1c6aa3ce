//! Credential verification strategies behind the login form.
//!
//! DESIGN
//! ======
//! The session store only sees [`CredentialVerifier`]. Which implementation
//! runs is decided once, from [`AuthMode`], when the store is built:
//! - [`LocalDemoVerifier`] mints a local session for any valid submission.
//! - [`RemoteVerifier`] posts to `{base}/auth/login`.

#[cfg(test)]
#[path = "verifier_test.rs"]
mod verifier_test;

use std::time::Duration;

use super::api::{ApiClient, ApiError};
use super::types::{Credentials, LoginResponse, Session, User};
use crate::config::{AuthMode, ClientConfig};
use crate::state::session::AuthError;
use crate::util::clock;
use crate::util::storage::KeyValueStore;

/// Email domain used for synthesized demo identities.
pub const DEMO_EMAIL_DOMAIN: &str = "kancralabs.com";
/// Role label given to every demo identity.
pub const DEMO_ROLE: &str = "Administrator";
/// Identifier shared by every demo identity.
pub const DEMO_USER_ID: &str = "1";
/// Prefix of locally minted session tokens.
pub const DEMO_TOKEN_PREFIX: &str = "demo-token-";

/// Turns submitted credentials into a session.
#[allow(async_fn_in_trait)]
pub trait CredentialVerifier {
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the pair is rejected, or
    /// [`AuthError::Api`] when verification could not be completed.
    async fn verify(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Build the demo identity for `username`.
#[must_use]
pub fn demo_user(username: &str) -> User {
    User {
        id: DEMO_USER_ID.to_owned(),
        username: username.to_owned(),
        email: format!("{username}@{DEMO_EMAIL_DOMAIN}"),
        full_name: capitalize_first(username),
        role: DEMO_ROLE.to_owned(),
        avatar: None,
    }
}

/// Demo token keyed by wall-clock time. Not secret and not unique.
#[must_use]
pub fn demo_token(now_millis: u64) -> String {
    format!("{DEMO_TOKEN_PREFIX}{now_millis}")
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Accepts any validated submission after a fixed delay that stands in for
/// network latency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalDemoVerifier {
    pub delay: Duration,
}

impl CredentialVerifier for LocalDemoVerifier {
    async fn verify(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        clock::sleep(self.delay).await;
        log::info!("demo login accepted for {}", credentials.username);
        Ok(Session { token: demo_token(clock::now_millis()), user: demo_user(&credentials.username) })
    }
}

/// Verifies against the backend's `POST /auth/login`.
#[derive(Clone, Debug)]
pub struct RemoteVerifier<S> {
    api: ApiClient<S>,
}

impl<S: KeyValueStore> RemoteVerifier<S> {
    pub fn new(api: ApiClient<S>) -> Self {
        Self { api }
    }
}

impl<S: KeyValueStore> CredentialVerifier for RemoteVerifier<S> {
    async fn verify(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        match self.api.post::<_, LoginResponse>("auth/login", credentials).await {
            Ok(response) => Ok(response.into()),
            Err(e) => Err(map_login_error(e)),
        }
    }
}

/// Rejections become [`AuthError::InvalidCredentials`]; everything else is
/// passed through.
pub(crate) fn map_login_error(error: ApiError) -> AuthError {
    match error.status() {
        Some(400 | 401) => AuthError::InvalidCredentials,
        _ => AuthError::Api(error),
    }
}

/// The verifier selected by configuration.
#[derive(Clone, Debug)]
pub enum Verifier<S> {
    LocalDemo(LocalDemoVerifier),
    Remote(RemoteVerifier<S>),
}

impl<S: KeyValueStore> Verifier<S> {
    /// Pick the verifier named by `config.auth_mode`.
    pub fn from_config(config: &ClientConfig, storage: S) -> Self {
        match config.auth_mode {
            AuthMode::LocalDemo => Self::LocalDemo(LocalDemoVerifier { delay: config.login_delay }),
            AuthMode::Remote => Self::Remote(RemoteVerifier::new(ApiClient::new(config.api.clone(), storage))),
        }
    }

    pub fn mode(&self) -> AuthMode {
        match self {
            Self::LocalDemo(_) => AuthMode::LocalDemo,
            Self::Remote(_) => AuthMode::Remote,
        }
    }
}

impl<S: KeyValueStore> CredentialVerifier for Verifier<S> {
    async fn verify(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        match self {
            Self::LocalDemo(verifier) => verifier.verify(credentials).await,
            Self::Remote(verifier) => verifier.verify(credentials).await,
        }
    }
}
