//! Persisted key-value entries backing the browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads as plain string entries in `localStorage`.
//! Everything that reads or writes those entries goes through
//! [`KeyValueStore`] so the session store and the HTTP wrapper can run
//! against [`MemoryStorage`] on the server and in tests.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail (a missing or inaccessible entry is `None`); writes and
//! JSON decoding surface a [`StorageError`] instead of panicking.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Opaque bearer token for the current session.
pub const TOKEN_KEY: &str = "token";
/// Serialized [`crate::net::types::User`] for the current session.
pub const USER_KEY: &str = "user";
/// Reserved for a future refresh flow; only ever cleared today.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Errors raised by persisted-entry access.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    /// No backing store is reachable (server render, privacy mode).
    #[error("persistent storage unavailable")]
    Unavailable,

    /// The store rejected a write (quota, privacy mode).
    #[error("failed to write `{key}`")]
    Write { key: String },

    /// A stored value could not be encoded or decoded as JSON.
    #[error("malformed `{key}` entry: {message}")]
    Decode { key: String, message: String },
}

/// String-keyed, string-valued durable store.
pub trait KeyValueStore {
    /// Read `key`, treating empty values as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store is unreachable or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Missing keys are ignored.
    fn remove(&self, key: &str);
}

/// Browser `window.localStorage`. Inert outside the `hydrate` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .get_item(key)
                .ok()
                .flatten()
                .filter(|value| !value.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = browser_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::Write { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = browser_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Process-local store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` holds any value, including an empty one.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Load and decode the JSON value stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Decode`] when the entry exists but is not valid JSON for `T`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Decode { key: key.to_owned(), message: e.to_string() })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError`] when encoding or the underlying write fails.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Decode { key: key.to_owned(), message: e.to_string() })?;
    store.set(key, &raw)
}

/// Remove every session-related entry.
pub fn clear_session_entries(store: &impl KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(REFRESH_TOKEN_KEY);
    store.remove(USER_KEY);
}
