// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backend API client.
//!
//! ```text
//! ApiClient::new(base_url, session)
//!        |
//!        +-- projects: git_credentials() regenerate_git_password()
//!        |             delete_project()  bulk_update_env()
//!        +-- sso:      login_url()      exchange_ticket()
//!
//! Every call: session cookie + JSON accept header, one request,
//! no retry, reqwest's default timeout.
//!
//! Non-2xx responses: body with {message}/{error} --> ApiError::Backend
//!                    anything else               --> ApiError::Http
//! ```

pub mod projects;
pub mod sso;


use std::sync::OnceLock;

use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Client, Method, RequestBuilder, Response};
use url::Url;

use crate::error::ApiError;

/// Name of the backend session cookie.
pub const SESSION_COOKIE: &str = "id";

/// Global HTTP client - initialized once, reused across all requests.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("berth/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Client for the Berth backend API.
///
/// Holds the configured base URL and an optional session token that is
/// attached to every request as the session cookie.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    session: Option<String>,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, session: Option<String>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            client: global_client().clone(),
            base_url,
            session,
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds an endpoint URL from path segments appended to the base.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Starts a request with the session cookie and JSON accept header.
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.session {
            request = request.header(COOKIE, format!("{SESSION_COOKIE}={token}"));
        }
        request
    }
}

/// Maps a non-2xx response to an [`ApiError`], consuming the body.
///
/// A JSON body carrying a `message` or `error` field is a backend-reported
/// failure; anything else is a generic HTTP failure.
async fn error_from_response(url: &Url, response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    backend_or_http(status, url.as_str(), &body)
}

pub(crate) fn backend_or_http(status: u16, url: &str, body: &str) -> ApiError {
    error_message(body).map_or_else(
        || ApiError::Http {
            status,
            url: url.to_string(),
        },
        |message| ApiError::Backend { status, message },
    )
}

/// Extracts the backend error message from a JSON body, trying the
/// `message` field first and then `error`.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}
