//! The session store: single source of truth for who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the app root and handed to the view layer through context; the
//! HTTP wrapper reads the same persisted entries through its own
//! [`KeyValueStore`] handle. All mutations happen on the UI thread, so the
//! store needs no locking.
//!
//! PERSISTED FORMAT
//! ================
//! A session is the pair of entries `token` and `user` (JSON). It is present
//! only when both are. Writes go `user` then `token` and roll back on failure;
//! removals go `token` first. Rehydration removes a lone orphan entry and
//! drops a `user` record that no longer decodes, so a session is never
//! half-present after startup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::ApiError;
use crate::net::types::{Session, User};
use crate::net::verifier::{CredentialVerifier, Verifier};
use crate::state::auth::AuthState;
use crate::util::login_form::{LoginValidationError, validate_login};
use crate::util::navigation::{LANDING_ROUTE, LOGIN_ROUTE};
use crate::util::storage::{
    KeyValueStore, StorageError, TOKEN_KEY, USER_KEY, clear_session_entries, load_json, save_json,
};

/// Why a login attempt did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] LoginValidationError),

    #[error("Username atau password salah")]
    InvalidCredentials,

    #[error("Login gagal. Silakan coba lagi.")]
    Api(#[source] ApiError),

    #[error("Sesi tidak dapat disimpan: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    verifier: Verifier<S>,
    state: AuthState,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// A store that has not yet read its persisted entries.
    pub fn new(storage: S, verifier: Verifier<S>) -> Self {
        Self { storage, verifier, state: AuthState::default() }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn is_authenticated(&self) -> bool {
        !self.state.loading && self.state.user.is_some()
    }

    pub fn verifier(&self) -> &Verifier<S> {
        &self.verifier
    }

    /// Rehydrate from persisted entries. Always leaves `loading` false.
    pub fn initialize(&mut self) -> &AuthState {
        self.state.user = restore_user(&self.storage);
        self.state.loading = false;
        if let Some(user) = &self.state.user {
            log::info!("restored session for {}", user.username);
        }
        &self.state
    }

    /// Validate, verify and persist a login. Returns the route to navigate to.
    ///
    /// Validation runs before any state changes. `loading` is set for the
    /// duration of verification and cleared on every exit path. After a
    /// failed attempt the in-memory user is re-read from storage, since a
    /// rejected request may already have cleared the persisted entries.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when validation, verification or persistence fails.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<&'static str, AuthError> {
        let credentials = validate_login(username, password)?;
        self.state.loading = true;
        let outcome = match self.verifier.verify(&credentials).await {
            Ok(session) => persist_session(&self.storage, &session).map(|()| session.user),
            Err(e) => Err(e),
        };
        self.state.loading = false;

        match outcome {
            Ok(user) => {
                log::info!("signed in as {}", user.username);
                self.state = AuthState::authenticated(user);
                Ok(LANDING_ROUTE)
            }
            Err(e) => {
                log::error!("login error: {e}");
                self.state.user = restore_user(&self.storage);
                Err(e)
            }
        }
    }

    /// Drop the session. Idempotent. Returns the route to navigate to.
    pub fn logout(&mut self) -> &'static str {
        clear_session_entries(&self.storage);
        if let Some(user) = &self.state.user {
            log::info!("signed out {}", user.username);
        }
        self.state = AuthState::anonymous();
        LOGIN_ROUTE
    }
}

/// Write `user` then `token`; undo the first write if the second fails.
fn persist_session(storage: &impl KeyValueStore, session: &Session) -> Result<(), AuthError> {
    save_json(storage, USER_KEY, &session.user)?;
    if let Err(e) = storage.set(TOKEN_KEY, &session.token) {
        storage.remove(USER_KEY);
        return Err(e.into());
    }
    Ok(())
}

/// Read the persisted session, repairing partial or corrupt entries.
fn restore_user(storage: &impl KeyValueStore) -> Option<User> {
    let has_token = storage.get(TOKEN_KEY).is_some();
    match (has_token, load_json::<User>(storage, USER_KEY)) {
        (true, Ok(Some(user))) => Some(user),
        (_, Err(e)) => {
            log::warn!("discarding persisted session: {e}");
            clear_session_entries(storage);
            None
        }
        (true, Ok(None)) => {
            log::warn!("discarding token without a user record");
            storage.remove(TOKEN_KEY);
            None
        }
        (false, Ok(Some(_))) => {
            log::warn!("discarding user record without a token");
            storage.remove(USER_KEY);
            None
        }
        (false, Ok(None)) => None,
    }
}
