//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrored into an `RwSignal` context so the route guard and user-aware
//! components re-render whenever the session store changes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Starts out loading: nothing is known until the persisted session has
/// been read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Coarse session phase derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Anonymous,
    Authenticated,
}

impl AuthState {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (self.loading, &self.user) {
            (true, _) => SessionPhase::Loading,
            (false, None) => SessionPhase::Anonymous,
            (false, Some(_)) => SessionPhase::Authenticated,
        }
    }

    /// Display name for headers, falling back to `"User"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "User".to_owned(), |user| user.full_name.clone())
    }
}
