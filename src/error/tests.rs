// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ApiError, BerthError, BerthResult, SessionError, SsoError};

#[test]
fn test_backend_error_display() {
    let err = ApiError::Backend {
        status: 404,
        message: "Project does not exist or you don't have access".to_string(),
    };
    insta::assert_snapshot!("backend_error_display", err.to_string());
}

#[test]
fn test_sso_error_display() {
    assert_eq!(
        SsoError::Backend("Invalid ticket".into()).to_string(),
        "login rejected: Invalid ticket"
    );
    assert_eq!(
        SsoError::Generic("connection refused".into()).to_string(),
        "login failed: connection refused"
    );
    assert_eq!(
        SsoError::Unknown.to_string(),
        "unexpected response from the login service"
    );
}

#[test]
fn test_not_logged_in_display() {
    let err = SessionError::NotLoggedIn;
    assert!(err.to_string().contains("berth login"));
}

#[test]
fn test_berth_error_size() {
    // All variants are boxed; Box<str> (Other) is the widest at 16 bytes,
    // plus discriminant + alignment = 24 bytes.
    let size = std::mem::size_of::<BerthError>();
    assert!(size <= 24, "BerthError is {size} bytes, expected <= 24");
}

#[test]
fn test_berth_result_size() {
    let size = std::mem::size_of::<BerthResult<()>>();
    assert!(size <= 24, "BerthResult<()> is {size} bytes, expected <= 24");
}
