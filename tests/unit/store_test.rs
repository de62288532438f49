//! Unit tests for the SQLite-backed key-value store.
//!
//! These tests exercise the `StorageBackend` surface of `LocalStore`
//! using in-memory databases, plus on-disk persistence via tempfile.

use sitemanager::store::migrations;
use sitemanager::store::{LocalStore, StorageBackend};

#[test]
fn test_get_missing_key_returns_none() {
    let store = LocalStore::open_in_memory().expect("Failed to open in-memory store");
    assert!(store.get("sitemanager-lists").unwrap().is_none());
}

#[test]
fn test_set_then_get_returns_value() {
    let store = LocalStore::open_in_memory().expect("Failed to open in-memory store");
    store.set("sitemanager-lists", "[]").unwrap();
    assert_eq!(store.get("sitemanager-lists").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_set_overwrites_previous_value() {
    let store = LocalStore::open_in_memory().expect("Failed to open in-memory store");
    store.set("key", "first").unwrap();
    store.set("key", "second").unwrap();
    assert_eq!(store.get("key").unwrap().as_deref(), Some("second"));
}

#[test]
fn test_remove_deletes_the_key() {
    let store = LocalStore::open_in_memory().expect("Failed to open in-memory store");
    store.set("key", "value").unwrap();
    store.remove("key").unwrap();
    assert!(store.get("key").unwrap().is_none());
}

#[test]
fn test_remove_absent_key_is_not_an_error() {
    let store = LocalStore::open_in_memory().expect("Failed to open in-memory store");
    assert!(store.remove("never-stored").is_ok());
}

#[test]
fn test_keys_are_independent() {
    let store = LocalStore::open_in_memory().expect("Failed to open in-memory store");
    store.set("sitemanager-lists", "[]").unwrap();
    store.set("sitemanager-isLoggedIn", "true").unwrap();

    store.remove("sitemanager-lists").unwrap();
    assert_eq!(
        store.get("sitemanager-isLoggedIn").unwrap().as_deref(),
        Some("true")
    );
}

#[test]
fn test_migrations_record_schema_version() {
    let store = LocalStore::open_in_memory().expect("Failed to open in-memory store");
    assert_eq!(
        migrations::get_schema_version(store.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn test_values_survive_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitemanager.db");

    {
        let store = LocalStore::open(&path).expect("Failed to open store");
        store.set("sitemanager-userEmail", "\"a@b.c\"").unwrap();
    }

    let store = LocalStore::open(&path).expect("Failed to reopen store");
    assert_eq!(
        store.get("sitemanager-userEmail").unwrap().as_deref(),
        Some("\"a@b.c\"")
    );
}

#[test]
fn test_reopen_does_not_rerun_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sitemanager.db");

    {
        LocalStore::open(&path).expect("Failed to open store");
    }
    let store = LocalStore::open(&path).expect("Failed to reopen store");
    assert_eq!(
        migrations::get_schema_version(store.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}
