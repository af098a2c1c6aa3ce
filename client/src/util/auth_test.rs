use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::config::ClientConfig;
use crate::net::verifier::{Verifier, demo_user};
use crate::util::navigation::{LANDING_ROUTE, Section, needs_login_redirect};
use crate::util::storage::{MemoryStorage, TOKEN_KEY};

fn memory_handle(storage: &MemoryStorage, config: &ClientConfig) -> SessionHandle<MemoryStorage> {
    SessionHandle::new(SessionStore::new(storage.clone(), Verifier::from_config(config, storage.clone())))
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
    assert_eq!(guard_decision(&state), GuardDecision::RedirectToLogin);
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
    assert_eq!(guard_decision(&state), GuardDecision::Pending);
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(demo_user("alice")), loading: false };
    assert!(!should_redirect_unauth(&state));
    assert_eq!(guard_decision(&state), GuardDecision::Render);
}

#[test]
fn guard_flips_to_redirect_after_logout() {
    let mut state = AuthState::authenticated(demo_user("alice"));
    assert_eq!(guard_decision(&state), GuardDecision::Render);
    state.user = None;
    assert_eq!(guard_decision(&state), GuardDecision::RedirectToLogin);
}

#[test]
fn handle_mirrors_store_into_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = MemoryStorage::new();
        let session = memory_handle(&storage, &ClientConfig::default());
        assert_eq!(session.auth.get_untracked().phase(), SessionPhase::Loading);

        session.initialize();
        assert_eq!(session.auth.get_untracked().phase(), SessionPhase::Anonymous);

        let route = block_on(session.login("alice".to_owned(), "1234".to_owned())).unwrap();
        assert_eq!(route, LANDING_ROUTE);
        assert_eq!(session.auth.get_untracked().phase(), SessionPhase::Authenticated);
        assert_eq!(session.auth.get_untracked().display_name(), "Alice");

        assert_eq!(session.logout(), LOGIN_ROUTE);
        assert_eq!(session.auth.get_untracked().phase(), SessionPhase::Anonymous);
        assert!(should_redirect_unauth(&session.auth.get_untracked()));
        assert!(!storage.contains(TOKEN_KEY));
    });
}

#[test]
fn handle_publishes_rejected_login_as_anonymous() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = MemoryStorage::new();
        let session = memory_handle(&storage, &ClientConfig::default());
        session.initialize();

        let err = block_on(session.login("alice".to_owned(), "12".to_owned())).unwrap_err();
        assert_eq!(err.to_string(), "Password minimal 4 karakter");
        assert_eq!(session.auth.get_untracked(), AuthState::anonymous());
    });
}

#[test]
fn signed_in_user_can_still_open_login() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = MemoryStorage::new();
        let session = memory_handle(&storage, &ClientConfig::default());
        session.initialize();
        block_on(session.login("alice".to_owned(), "1234".to_owned())).unwrap();

        // `/login` is not a guarded section and nothing sends a signed-in user away.
        assert_eq!(Section::from_path(LOGIN_ROUTE), None);
        assert!(!needs_login_redirect(LOGIN_ROUTE));
        assert_eq!(guard_decision(&session.auth.get_untracked()), GuardDecision::Render);

        block_on(session.login("budi".to_owned(), "abcd".to_owned())).unwrap();
        assert_eq!(session.auth.get_untracked().display_name(), "Budi");
    });
}

#[test]
fn handle_reports_configured_auth_mode() {
    let owner = Owner::new();
    owner.with(|| {
        let storage = MemoryStorage::new();
        let demo = memory_handle(&storage, &ClientConfig::default());
        assert_eq!(demo.auth_mode(), AuthMode::LocalDemo);

        let remote_config = ClientConfig { auth_mode: AuthMode::Remote, ..ClientConfig::default() };
        assert_eq!(memory_handle(&storage, &remote_config).auth_mode(), AuthMode::Remote);
    });
}
