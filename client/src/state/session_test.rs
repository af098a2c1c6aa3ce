use futures::executor::block_on;

use super::*;
use crate::config::{AuthMode, ClientConfig};
use crate::net::api::ApiClient;
use crate::net::verifier::{DEMO_ROLE, DEMO_TOKEN_PREFIX, demo_user};
use crate::state::auth::SessionPhase;
use crate::util::storage::{MemoryStorage, REFRESH_TOKEN_KEY};

fn demo_store(storage: &MemoryStorage) -> SessionStore<MemoryStorage> {
    let verifier = Verifier::from_config(&ClientConfig::default(), storage.clone());
    SessionStore::new(storage.clone(), verifier)
}

fn signed_in(storage: &MemoryStorage, username: &str) -> SessionStore<MemoryStorage> {
    let mut store = demo_store(storage);
    store.initialize();
    block_on(store.login(username, "1234")).unwrap();
    store
}

/// Accepts every write except to one key.
#[derive(Clone, Default)]
struct RejectingStorage {
    inner: MemoryStorage,
    reject: &'static str,
}

impl KeyValueStore for RejectingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.reject {
            return Err(StorageError::Write { key: key.to_owned() });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

#[test]
fn new_store_is_loading_until_initialized() {
    let storage = MemoryStorage::new();
    let mut store = demo_store(&storage);
    assert!(store.is_loading());
    assert_eq!(store.initialize().phase(), SessionPhase::Anonymous);
    assert!(!store.is_loading());
}

#[test]
fn login_authenticates_and_persists_both_entries() {
    let storage = MemoryStorage::new();
    let mut store = demo_store(&storage);
    store.initialize();

    let route = block_on(store.login("alice", "1234")).unwrap();

    assert_eq!(route, "/");
    assert!(store.is_authenticated());
    let user = store.user().unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@kancralabs.com");
    assert_eq!(user.role, DEMO_ROLE);
    assert!(storage.get(TOKEN_KEY).unwrap().starts_with(DEMO_TOKEN_PREFIX));
    assert!(storage.get(USER_KEY).is_some());
}

#[test]
fn short_password_stays_anonymous_with_message() {
    let storage = MemoryStorage::new();
    let mut store = demo_store(&storage);
    store.initialize();

    let err = block_on(store.login("alice", "123")).unwrap_err();

    assert_eq!(err, AuthError::Validation(LoginValidationError::PasswordTooShort));
    assert_eq!(err.to_string(), "Password minimal 4 karakter");
    assert_eq!(store.state().phase(), SessionPhase::Anonymous);
    assert!(!store.is_loading());
    assert!(!storage.contains(TOKEN_KEY));
    assert!(!storage.contains(USER_KEY));
}

#[test]
fn empty_username_is_rejected_before_verification() {
    let storage = MemoryStorage::new();
    let mut store = demo_store(&storage);
    store.initialize();
    let err = block_on(store.login("  ", "1234")).unwrap_err();
    assert_eq!(err.to_string(), "Username wajib diisi");
    assert!(store.user().is_none());
}

#[test]
fn logout_clears_memory_and_storage() {
    let storage = MemoryStorage::new();
    let mut store = signed_in(&storage, "alice");
    storage.set(REFRESH_TOKEN_KEY, "r").unwrap();

    assert_eq!(store.logout(), "/login");

    assert_eq!(store.state().phase(), SessionPhase::Anonymous);
    assert!(!storage.contains(TOKEN_KEY));
    assert!(!storage.contains(USER_KEY));
    assert!(!storage.contains(REFRESH_TOKEN_KEY));
}

#[test]
fn logout_is_idempotent_from_any_state() {
    let storage = MemoryStorage::new();
    let mut fresh = demo_store(&storage);
    fresh.logout();
    assert_eq!(fresh.state(), &AuthState::anonymous());

    let mut store = signed_in(&storage, "alice");
    store.logout();
    let once = store.state().clone();
    store.logout();
    assert_eq!(store.state(), &once);
    assert!(!storage.contains(TOKEN_KEY));
    assert!(!storage.contains(USER_KEY));
}

#[test]
fn restart_rehydrates_the_same_user() {
    let storage = MemoryStorage::new();
    let original = signed_in(&storage, "alice").user().cloned().unwrap();

    let mut restarted = demo_store(&storage);
    restarted.initialize();

    assert_eq!(restarted.user(), Some(&original));
    assert!(restarted.is_authenticated());
}

#[test]
fn token_without_user_is_anonymous_and_cleared() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "demo-token-1").unwrap();

    let mut store = demo_store(&storage);
    assert_eq!(store.initialize().phase(), SessionPhase::Anonymous);
    assert!(!storage.contains(TOKEN_KEY));
}

#[test]
fn user_without_token_is_anonymous_and_cleared() {
    let storage = MemoryStorage::new();
    save_json(&storage, USER_KEY, &demo_user("alice")).unwrap();

    let mut store = demo_store(&storage);
    assert_eq!(store.initialize().phase(), SessionPhase::Anonymous);
    assert!(!storage.contains(USER_KEY));
}

#[test]
fn empty_entries_count_as_missing() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "").unwrap();
    save_json(&storage, USER_KEY, &demo_user("alice")).unwrap();

    let mut store = demo_store(&storage);
    assert_eq!(store.initialize().phase(), SessionPhase::Anonymous);
}

#[test]
fn corrupt_user_record_falls_back_to_anonymous() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "demo-token-1").unwrap();
    storage.set(USER_KEY, "{\"id\":").unwrap();

    let mut store = demo_store(&storage);
    let state = store.initialize();

    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(!storage.contains(TOKEN_KEY));
    assert!(!storage.contains(USER_KEY));
}

#[test]
fn failed_token_write_rolls_back_user_entry() {
    let storage = RejectingStorage { inner: MemoryStorage::new(), reject: TOKEN_KEY };
    let verifier = Verifier::from_config(&ClientConfig::default(), storage.clone());
    let mut store = SessionStore::new(storage.clone(), verifier);
    store.initialize();

    let err = block_on(store.login("alice", "1234")).unwrap_err();

    assert_eq!(err, AuthError::Storage(StorageError::Write { key: TOKEN_KEY.to_owned() }));
    assert!(store.user().is_none());
    assert!(!store.is_loading());
    assert!(!storage.inner.contains(USER_KEY));
}

#[test]
fn failed_user_write_persists_nothing() {
    let storage = RejectingStorage { inner: MemoryStorage::new(), reject: USER_KEY };
    let verifier = Verifier::from_config(&ClientConfig::default(), storage.clone());
    let mut store = SessionStore::new(storage.clone(), verifier);
    store.initialize();

    assert!(block_on(store.login("alice", "1234")).is_err());
    assert!(!storage.inner.contains(TOKEN_KEY));
}

#[test]
fn relogin_replaces_user_wholesale() {
    let storage = MemoryStorage::new();
    let mut store = signed_in(&storage, "alice");
    block_on(store.login("budi", "abcd")).unwrap();
    assert_eq!(store.user().unwrap().username, "budi");
    assert_eq!(store.user().unwrap().full_name, "Budi");
}

fn remote_store(storage: &MemoryStorage) -> SessionStore<MemoryStorage> {
    let config = ClientConfig { auth_mode: AuthMode::Remote, ..ClientConfig::default() };
    SessionStore::new(storage.clone(), Verifier::from_config(&config, storage.clone()))
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn failed_login_keeps_a_still_persisted_session() {
    let storage = MemoryStorage::new();
    signed_in(&storage, "alice");
    let mut store = remote_store(&storage);
    store.initialize();

    assert!(block_on(store.login("alice", "wrong")).is_err());

    assert!(store.is_authenticated());
    assert_eq!(store.user().unwrap().username, "alice");
    assert!(storage.contains(TOKEN_KEY));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn failed_login_after_401_expiry_drops_in_memory_user() {
    let storage = MemoryStorage::new();
    signed_in(&storage, "alice");
    let mut store = remote_store(&storage);
    assert!(store.initialize().user.is_some());

    // The 401 on the login request wipes the persisted session.
    ApiClient::new(ClientConfig::default().api, storage.clone()).reject(401, "");
    assert!(block_on(store.login("alice", "wrong")).is_err());

    assert_eq!(store.state(), &AuthState::anonymous());
    assert!(!storage.contains(TOKEN_KEY));
    assert!(!storage.contains(USER_KEY));
}

#[test]
fn storage_errors_clone_into_auth_errors() {
    let err = AuthError::from(StorageError::Write { key: TOKEN_KEY.to_owned() });
    assert_eq!(err.clone(), err);
    assert_eq!(err.to_string(), "Sesi tidak dapat disimpan: failed to write `token`");
}
