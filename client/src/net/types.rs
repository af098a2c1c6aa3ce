//! Shared DTOs for the session and the (future) backend API.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so the persisted `user` entry and the
//! `/auth/login` payloads keep the JSON shape the dashboard has always used.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity of the signed-in dashboard user.
///
/// Issued once per login and replaced wholesale on the next one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier.
    pub id: String,
    pub username: String,
    pub email: String,
    /// Display name shown in the header and greeting.
    pub full_name: String,
    /// Free-text role label (e.g. `"Administrator"`).
    pub role: String,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// First character of the display name, upper-cased, for avatar badges.
    #[must_use]
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
    }
}

/// Username/password pair submitted by the login form.
///
/// Serializes as the `/auth/login` request body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `/auth/login` response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// An authenticated browser context: bearer token plus identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self { token: response.token, user: response.user }
    }
}
