//! Shared auth UI helpers: the route-guard decision and the reactive handle
//! components use to drive the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical unauthenticated redirect behavior,
//! and every session mutation must be mirrored into the `AuthState` signal
//! so guards re-evaluate (e.g. right after logout).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::AuthMode;
use crate::state::auth::{AuthState, SessionPhase};
use crate::state::session::{AuthError, SessionStore};
use crate::util::navigation::LOGIN_ROUTE;
use crate::util::storage::{KeyValueStore, LocalStorage};

/// What a protected route should do for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not read yet; render a neutral placeholder.
    Pending,
    RedirectToLogin,
    Render,
}

#[must_use]
pub fn guard_decision(state: &AuthState) -> GuardDecision {
    match state.phase() {
        SessionPhase::Loading => GuardDecision::Pending,
        SessionPhase::Anonymous => GuardDecision::RedirectToLogin,
        SessionPhase::Authenticated => GuardDecision::Render,
    }
}

/// Return true when auth has loaded and there is no user.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    guard_decision(state) == GuardDecision::RedirectToLogin
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Context handle pairing the session store with its reactive mirror.
pub struct SessionHandle<S = LocalStorage> {
    pub auth: RwSignal<AuthState>,
    store: StoredValue<SessionStore<S>>,
}

impl<S> Clone for SessionHandle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SessionHandle<S> {}

impl<S> SessionHandle<S>
where
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    pub fn new(store: SessionStore<S>) -> Self {
        let auth = RwSignal::new(store.state().clone());
        Self { auth, store: StoredValue::new(store) }
    }

    /// Which verifier the login form is talking to.
    pub fn auth_mode(self) -> AuthMode {
        self.store.with_value(|store| store.verifier().mode())
    }

    /// Read persisted entries and publish the result.
    pub fn initialize(self) {
        let mut store = self.store.get_value();
        self.auth.set(store.initialize().clone());
        self.store.set_value(store);
    }

    /// Run a login and publish the resulting state.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`AuthError`].
    pub async fn login(self, username: String, password: String) -> Result<&'static str, AuthError> {
        let mut store = self.store.get_value();
        self.auth.update(|state| state.loading = true);
        let result = store.login(&username, &password).await;
        self.auth.set(store.state().clone());
        self.store.set_value(store);
        result
    }

    /// End the session and publish the anonymous state.
    pub fn logout(self) -> &'static str {
        let mut store = self.store.get_value();
        let route = store.logout();
        self.auth.set(store.state().clone());
        self.store.set_value(store);
        route
    }
}
