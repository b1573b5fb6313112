// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the API client using wiremock.
//!
//! Tests the `ApiClient` against a mocked backend, covering:
//! - Git credentials fetch (session cookie, error taxonomy)
//! - Git password regeneration
//! - Project deletion
//! - Bulk environment variable updates
//! - SSO ticket exchange

use berth::api::ApiClient;
use berth::envfile;
use berth::error::{ApiError, SsoError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, session: Option<&str>) -> ApiClient {
    ApiClient::new(&server.uri(), session.map(str::to_string)).unwrap()
}

// =============================================================================
// git_credentials tests
// =============================================================================

#[tokio::test]
async fn test_git_credentials_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project/acme/web/git-credentials"))
        .and(header("Cookie", "id=session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "git_username": "acme-web-git",
            "git_url": "https://git.example.com/acme/web.git",
            "project_name": "web",
            "owner_name": "acme",
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, Some("session-token"));
    let credentials = client.git_credentials("acme", "web").await.unwrap();

    assert_eq!(credentials.git_username, "acme-web-git");
    assert_eq!(credentials.git_url, "https://git.example.com/acme/web.git");
    assert_eq!(credentials.project_name, "web");
    assert_eq!(credentials.owner_name, "acme");
}

#[tokio::test]
async fn test_git_credentials_backend_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project/acme/gone/git-credentials"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Project does not exist or you don't have access",
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None);
    let result = client.git_credentials("acme", "gone").await;

    match result.unwrap_err() {
        ApiError::Backend { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Project does not exist or you don't have access");
        }
        other => panic!("Expected ApiError::Backend, got {other:?}"),
    }
}

#[tokio::test]
async fn test_git_credentials_http_error_without_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project/acme/web/git-credentials"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Internal Error</html>"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None);
    let result = client.git_credentials("acme", "web").await;

    match result.unwrap_err() {
        ApiError::Http { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("/project/acme/web/git-credentials"));
        }
        other => panic!("Expected ApiError::Http, got {other:?}"),
    }
}

#[tokio::test]
async fn test_user_agent_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/project/acme/web/git-credentials"))
        .and(header(
            "User-Agent",
            format!("berth/{}", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "git_username": "u",
            "git_url": "https://git.example.com/acme/web.git",
            "project_name": "web",
            "owner_name": "acme",
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None);
    assert!(client.git_credentials("acme", "web").await.is_ok());
}

// =============================================================================
// regenerate_git_password tests
// =============================================================================

#[tokio::test]
async fn test_regenerate_git_password_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/project/acme/web/regenerate-git-password"))
        .and(header("Cookie", "id=session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "git_username": "acme-web-git",
            "git_password": "s3cr3t-one-time",
            "git_url": "https://git.example.com/acme/web.git",
            "message": "Save this password now; it will not be shown again.",
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, Some("session-token"));
    let regenerated = client.regenerate_git_password("acme", "web").await.unwrap();

    assert_eq!(regenerated.git_username, "acme-web-git");
    assert_eq!(regenerated.git_password.as_str(), "s3cr3t-one-time");
    assert_eq!(
        regenerated.message,
        "Save this password now; it will not be shown again."
    );
}

#[tokio::test]
async fn test_regenerate_git_password_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/project/acme/web/regenerate-git-password"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "Not logged in",
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None);
    let result = client.regenerate_git_password("acme", "web").await;

    match result.unwrap_err() {
        ApiError::Backend { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Not logged in");
        }
        other => panic!("Expected ApiError::Backend, got {other:?}"),
    }
}

// =============================================================================
// delete_project tests
// =============================================================================

#[tokio::test]
async fn test_delete_project_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/project/acme/web/delete"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, Some("session-token"));
    assert!(client.delete_project("acme", "web").await.is_ok());
}

#[tokio::test]
async fn test_delete_project_backend_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/project/acme/web/delete"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "message": "Deletion is queued but the git backend is unreachable",
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, Some("session-token"));
    let result = client.delete_project("acme", "web").await;

    match result.unwrap_err() {
        ApiError::Backend { status, .. } => assert_eq!(status, 500),
        other => panic!("Expected ApiError::Backend, got {other:?}"),
    }
}

// =============================================================================
// bulk_update_env tests
// =============================================================================

#[tokio::test]
async fn test_bulk_update_env_sends_whole_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/project/acme/web/env/bulk"))
        .and(body_json(serde_json::json!({
            "envs": {
                "DATABASE_URL": "postgres://db/app?sslmode=require",
                "DEBUG": "false",
            }
        })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let envs = envfile::decode(
        "DATABASE_URL=postgres://db/app?sslmode=require\nDEBUG=\"false\"\n# comment\n",
    );

    let client = client(&mock_server, Some("session-token"));
    assert!(client.bulk_update_env("acme", "web", &envs).await.is_ok());
}

#[tokio::test]
async fn test_bulk_update_env_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/project/acme/web/env/bulk"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "You are not an owner of this project",
        })))
        .mount(&mock_server)
        .await;

    let envs = envfile::decode("A=1");
    let client = client(&mock_server, Some("session-token"));
    let result = client.bulk_update_env("acme", "web", &envs).await;

    match result.unwrap_err() {
        ApiError::Backend { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "You are not an owner of this project");
        }
        other => panic!("Expected ApiError::Backend, got {other:?}"),
    }
}

// =============================================================================
// exchange_ticket tests
// =============================================================================

#[tokio::test]
async fn test_exchange_ticket_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/sso"))
        .and(body_json(serde_json::json!({
            "ticket": "ST-1234",
            "service_url": "https://berth.example.com/web/sso",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Set-Cookie", "id=fresh-session; Path=/; HttpOnly")
                .set_body_json(serde_json::json!({ "username": "jdoe" })),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None);
    let login = client
        .exchange_ticket("ST-1234", "https://berth.example.com/web/sso")
        .await
        .unwrap();

    assert_eq!(login.username, "jdoe");
    assert_eq!(login.session.as_deref(), Some("fresh-session"));
}

#[tokio::test]
async fn test_exchange_ticket_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/sso"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "Invalid ticket",
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None);
    let result = client
        .exchange_ticket("ST-bad", "https://berth.example.com/web/sso")
        .await;

    match result.unwrap_err() {
        SsoError::Backend(message) => assert_eq!(message, "Invalid ticket"),
        other => panic!("Expected SsoError::Backend, got {other:?}"),
    }
}

#[tokio::test]
async fn test_exchange_ticket_http_error_without_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/sso"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None);
    let result = client
        .exchange_ticket("ST-1234", "https://berth.example.com/web/sso")
        .await;

    match result.unwrap_err() {
        SsoError::Generic(message) => assert!(message.contains("502")),
        other => panic!("Expected SsoError::Generic, got {other:?}"),
    }
}

#[tokio::test]
async fn test_exchange_ticket_unexpected_response() {
    let mock_server = MockServer::start().await;

    // A 2xx answer with none of the expected fields.
    Mock::given(method("POST"))
        .and(path("/auth/sso"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None);
    let result = client
        .exchange_ticket("ST-1234", "https://berth.example.com/web/sso")
        .await;

    assert!(matches!(result.unwrap_err(), SsoError::Unknown));
}

#[tokio::test]
async fn test_exchange_ticket_without_session_cookie() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/sso"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "username": "jdoe",
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None);
    let login = client
        .exchange_ticket("ST-1234", "https://berth.example.com/web/sso")
        .await
        .unwrap();

    assert_eq!(login.username, "jdoe");
    assert!(login.session.is_none());
}

// =============================================================================
// Anonymous requests
// =============================================================================

#[tokio::test]
async fn test_anonymous_request_has_no_cookie_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/project/acme/web/delete"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "Not logged in",
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server, None);
    let result = client.delete_project("acme", "web").await;

    match result.unwrap_err() {
        ApiError::Backend { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Not logged in");
        }
        other => panic!("Expected ApiError::Backend, got {other:?}"),
    }
}
