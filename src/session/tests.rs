// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Session, SessionStore};
use crate::error::SessionError;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_load_missing_is_none() {
    let temp = temp_dir();
    let store = SessionStore::new(temp.path().join("session.toml"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_require_missing_is_not_logged_in() {
    let temp = temp_dir();
    let store = SessionStore::new(temp.path().join("session.toml"));
    assert!(matches!(store.require(), Err(SessionError::NotLoggedIn)));
}

#[test]
fn test_save_load_round_trip() {
    let temp = temp_dir();
    // Parent directories are created on save.
    let store = SessionStore::new(temp.path().join("nested").join("session.toml"));

    let session = Session {
        token: "tok-123".to_string(),
        username: "jdoe".to_string(),
    };
    store.save(&session).unwrap();

    let loaded = store.require().unwrap();
    assert_eq!(loaded.token, "tok-123");
    assert_eq!(loaded.username, "jdoe");
}

#[cfg(unix)]
#[test]
fn test_save_restricts_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = temp_dir();
    let store = SessionStore::new(temp.path().join("session.toml"));
    store
        .save(&Session {
            token: "t".to_string(),
            username: "u".to_string(),
        })
        .unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_clear_is_idempotent() {
    let temp = temp_dir();
    let store = SessionStore::new(temp.path().join("session.toml"));

    store
        .save(&Session {
            token: "t".to_string(),
            username: "u".to_string(),
        })
        .unwrap();
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());

    // Clearing again is fine.
    store.clear().unwrap();
}

#[test]
fn test_load_garbage_errors() {
    let temp = temp_dir();
    let path = temp.path().join("session.toml");
    std::fs::write(&path, "not = [valid").unwrap();

    let store = SessionStore::new(&path);
    assert!(matches!(store.load(), Err(SessionError::Store { .. })));
}
