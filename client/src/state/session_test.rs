use std::collections::HashMap;

use super::*;
use crate::util::storage::{MemoryStorage, StorageError};

fn alice() -> Identity {
    Identity { id: 7, username: "alice".to_owned(), email: "alice@example.com".to_owned() }
}

fn resolved(storage: MemoryStorage) -> SessionGate<MemoryStorage> {
    let mut gate = SessionGate::new(storage);
    gate.resolve();
    gate
}

/// Store that reads normally but refuses every write and removal.
#[derive(Debug, Default)]
struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl DurableStorage for ReadOnlyStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteRejected { key: key.to_owned(), reason: "read-only".to_owned() })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::RemoveRejected { key: key.to_owned(), reason: "read-only".to_owned() })
    }
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn new_gate_is_resolving() {
    let gate = SessionGate::new(MemoryStorage::new());
    assert!(gate.phase().is_resolving());
    assert!(!gate.is_authenticated());
}

#[test]
fn resolve_with_empty_storage_is_anonymous() {
    let gate = resolved(MemoryStorage::new());
    assert_eq!(gate.phase(), &Phase::Anonymous);
}

#[test]
fn resolve_restores_well_formed_identity() {
    let storage = MemoryStorage::new()
        .with_entry(IDENTITY_KEY, r#"{"id":7,"username":"alice","email":"alice@example.com"}"#);
    let gate = resolved(storage);
    assert_eq!(gate.identity(), Some(&alice()));
}

#[test]
fn resolve_treats_malformed_identity_as_absent() {
    for raw in ["not json", "{}", r#"{"id":7,"username":"alice"}"#, r#"{"id":"7","username":"a","email":"e"}"#, "null"] {
        let gate = resolved(MemoryStorage::new().with_entry(IDENTITY_KEY, raw));
        assert_eq!(gate.phase(), &Phase::Anonymous, "raw={raw}");
    }
}

#[test]
fn round_trip_persistence_across_fresh_resolution() {
    let mut gate = resolved(MemoryStorage::new());
    gate.login(alice());

    let restarted = resolved(gate.storage().clone());
    assert_eq!(restarted.identity(), Some(&alice()));
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_replaces_prior_identity_wholesale() {
    let mut gate = resolved(MemoryStorage::new());
    gate.login(alice());
    let bob = Identity { id: 8, username: "bob".to_owned(), email: "bob@example.com".to_owned() };
    gate.login(bob.clone());

    assert_eq!(gate.identity(), Some(&bob));
    let stored: Identity = serde_json::from_str(&gate.storage().get(IDENTITY_KEY).unwrap()).unwrap();
    assert_eq!(stored, bob);
}

#[test]
fn login_twice_with_same_identity_is_harmless() {
    let mut gate = resolved(MemoryStorage::new());
    gate.login(alice());
    gate.login(alice());
    assert_eq!(gate.identity(), Some(&alice()));
    assert_eq!(gate.storage().len(), 1);
}

#[test]
fn logout_clears_memory_and_storage() {
    let mut gate = resolved(MemoryStorage::new());
    gate.login(alice());
    gate.logout();
    assert_eq!(gate.phase(), &Phase::Anonymous);
    assert!(!gate.storage().contains(IDENTITY_KEY));
}

#[test]
fn logout_twice_matches_logout_once() {
    let mut once = resolved(MemoryStorage::new());
    once.login(alice());
    once.logout();

    let mut twice = resolved(MemoryStorage::new());
    twice.login(alice());
    twice.logout();
    twice.logout();

    assert_eq!(once.phase(), twice.phase());
    assert_eq!(once.storage(), twice.storage());
}

#[test]
fn logout_with_failing_removal_still_clears_memory() {
    let storage = ReadOnlyStorage {
        inner: MemoryStorage::new()
            .with_entry(IDENTITY_KEY, r#"{"id":7,"username":"alice","email":"alice@example.com"}"#),
    };
    let mut gate = SessionGate::new(storage);
    gate.resolve();
    assert!(gate.is_authenticated());

    gate.logout();
    assert_eq!(gate.phase(), &Phase::Anonymous);
    assert!(gate.storage().inner.contains(IDENTITY_KEY));
}

#[test]
fn login_with_failing_write_proceeds_in_memory() {
    let mut gate = SessionGate::new(ReadOnlyStorage::default());
    gate.resolve();
    gate.login(alice());
    assert_eq!(gate.identity(), Some(&alice()));
}

#[test]
fn logout_without_identity_is_noop() {
    let mut gate = resolved(MemoryStorage::new());
    gate.logout();
    assert_eq!(gate.phase(), &Phase::Anonymous);
    assert!(gate.storage().is_empty());
}

// =============================================================
// OAuth handoff
// =============================================================

#[test]
fn oauth_happy_path_logs_in_and_targets_protected_root() {
    let query = params(&[("userId", "7"), ("username", "alice"), ("email", "alice@example.com")]);
    let mut gate = resolved(MemoryStorage::new());

    let nav = gate.complete_oauth_handoff(|k| query.get(k).cloned());

    assert_eq!(nav, Navigation::ProtectedRoot);
    assert_eq!(nav.path(), "/");
    assert_eq!(gate.identity(), Some(&alice()));
    assert!(gate.storage().contains(IDENTITY_KEY));
}

#[test]
fn oauth_missing_email_leaves_identity_absent() {
    let query = params(&[("userId", "7"), ("username", "alice")]);
    let mut gate = resolved(MemoryStorage::new());

    let nav = gate.complete_oauth_handoff(|k| query.get(k).cloned());

    assert_eq!(nav, Navigation::LoginFailed);
    assert_eq!(nav.path(), "/login?error=oauth_failed");
    assert_eq!(gate.phase(), &Phase::Anonymous);
    assert!(gate.storage().is_empty());
}

#[test]
fn oauth_non_numeric_id_is_rejected() {
    let query = params(&[("userId", "seven"), ("username", "alice"), ("email", "alice@example.com")]);
    let mut gate = resolved(MemoryStorage::new());
    assert_eq!(gate.complete_oauth_handoff(|k| query.get(k).cloned()), Navigation::LoginFailed);
    assert!(!gate.is_authenticated());
}

#[test]
fn oauth_blank_values_count_as_missing() {
    let query = params(&[("userId", "7"), ("username", "  "), ("email", "alice@example.com")]);
    let mut gate = resolved(MemoryStorage::new());
    assert_eq!(gate.complete_oauth_handoff(|k| query.get(k).cloned()), Navigation::LoginFailed);
    assert!(!gate.is_authenticated());
}

#[test]
fn oauth_values_are_trimmed_before_login() {
    let query = params(&[("userId", " 7 "), ("username", " alice "), ("email", "\talice@example.com ")]);
    let mut gate = resolved(MemoryStorage::new());
    assert_eq!(gate.complete_oauth_handoff(|k| query.get(k).cloned()), Navigation::ProtectedRoot);
    assert_eq!(gate.identity(), Some(&alice()));
}

#[test]
fn navigation_paths() {
    assert_eq!(Navigation::ProtectedRoot.path(), "/");
    assert_eq!(Navigation::LoginFailed.path(), "/login?error=oauth_failed");
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_defaults_to_light_without_stored_key() {
    let gate = resolved(MemoryStorage::new());
    assert_eq!(gate.theme(), Theme::Light);
}

#[test]
fn theme_unknown_literal_defaults_to_light() {
    let gate = resolved(MemoryStorage::new().with_entry(THEME_KEY, "sepia"));
    assert_eq!(gate.theme(), Theme::Light);
}

#[test]
fn theme_toggle_persists_and_restores() {
    let mut gate = resolved(MemoryStorage::new());
    assert_eq!(gate.toggle_theme(), Theme::Dark);
    assert_eq!(gate.storage().get(THEME_KEY).as_deref(), Some("dark"));

    let restarted = resolved(gate.storage().clone());
    assert_eq!(restarted.theme(), Theme::Dark);
}

#[test]
fn theme_toggle_does_not_touch_identity() {
    let mut gate = resolved(MemoryStorage::new());
    gate.login(alice());
    gate.toggle_theme();
    assert_eq!(gate.identity(), Some(&alice()));
}

#[test]
fn logout_keeps_theme() {
    let mut gate = resolved(MemoryStorage::new());
    gate.login(alice());
    gate.toggle_theme();
    gate.logout();

    assert_eq!(gate.theme(), Theme::Dark);
    let restarted = resolved(gate.storage().clone());
    assert_eq!(restarted.theme(), Theme::Dark);
    assert_eq!(restarted.phase(), &Phase::Anonymous);
}
