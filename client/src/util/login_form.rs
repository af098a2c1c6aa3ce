//! Client-side validation for the login form.
//!
//! Runs synchronously before any session state is touched, so a rejected
//! submission never leaves a half-started login behind.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use crate::net::types::Credentials;

/// Shortest password the form accepts, in characters.
pub const MIN_PASSWORD_CHARS: usize = 4;

/// A login submission rejected before reaching the verifier.
///
/// Display strings are the messages shown under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    #[error("Username wajib diisi")]
    UsernameRequired,

    #[error("Password wajib diisi")]
    PasswordRequired,

    #[error("Password minimal 4 karakter")]
    PasswordTooShort,
}

/// Check a submission and package it as [`Credentials`].
///
/// Checks run in order (username, password presence, password length) and
/// the first failure wins. Values pass through untrimmed.
///
/// # Errors
///
/// Returns the first [`LoginValidationError`] that applies.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, LoginValidationError> {
    if username.trim().is_empty() {
        return Err(LoginValidationError::UsernameRequired);
    }
    if password.is_empty() {
        return Err(LoginValidationError::PasswordRequired);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(LoginValidationError::PasswordTooShort);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}
