// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! SSO login handoff.
//!
//! ```text
//! login_url()        {sso_ui_url}/login?service={service_url}
//!                    (user authenticates in the browser, the provider
//!                     redirects to {service_url}?ticket=ST-...)
//! exchange_ticket()  POST {base}/auth/sso {ticket, service_url}
//!                    --> {username, ..} + Set-Cookie session
//! ```
//!
//! Errors are tagged by origin (backend / generic / unknown) purely for
//! message selection; no retry is ever attempted.

use reqwest::Method;
use reqwest::header::SET_COOKIE;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{ApiClient, SESSION_COOKIE, error_message};
use crate::error::{ApiError, SsoError};

/// Successful ticket exchange.
#[derive(Debug)]
pub struct SsoLogin {
    /// Username the identity provider vouched for.
    pub username: String,
    /// Session token from the backend's `Set-Cookie`, if one was issued.
    pub session: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExchangeResponse {
    username: Option<String>,
}

/// Builds the browser login URL for the identity provider.
///
/// # Errors
///
/// Returns [`ApiError::InvalidUrl`] if the configured SSO UI URL does not
/// parse or cannot take a `login` segment.
pub fn login_url(sso_ui_url: &str, service_url: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(sso_ui_url)
        .and_then(|u| u.join("login"))
        .map_err(|e| ApiError::InvalidUrl(format!("{sso_ui_url}: {e}")))?;
    url.query_pairs_mut().append_pair("service", service_url);
    Ok(url)
}

impl ApiClient {
    /// Exchanges an SSO ticket for a backend session.
    ///
    /// # Errors
    ///
    /// Returns [`SsoError::Backend`] when the backend rejects the ticket,
    /// [`SsoError::Generic`] on transport failures, and
    /// [`SsoError::Unknown`] when the response has none of the expected
    /// fields.
    pub async fn exchange_ticket(
        &self,
        ticket: &str,
        service_url: &str,
    ) -> Result<SsoLogin, SsoError> {
        let url = self
            .endpoint(&["auth", "sso"])
            .map_err(|e| SsoError::Generic(e.to_string()))?;

        debug!(service_url, "exchanging sso ticket");

        let response = self
            .request(Method::POST, url)
            .json(&serde_json::json!({
                "ticket": ticket,
                "service_url": service_url,
            }))
            .send()
            .await
            .map_err(|e| SsoError::Generic(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(&body).map_or_else(
                || SsoError::Generic(format!("login service answered http {status}")),
                SsoError::Backend,
            ));
        }

        let session = session_from_headers(&response);

        let exchange = response
            .json::<ExchangeResponse>()
            .await
            .map_err(|e| SsoError::Generic(e.to_string()))?;

        let Some(username) = exchange.username else {
            return Err(SsoError::Unknown);
        };

        Ok(SsoLogin { username, session })
    }
}

/// Pulls the session token out of `Set-Cookie` response headers.
fn session_from_headers(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| {
            let rest = cookie.strip_prefix(SESSION_COOKIE)?.strip_prefix('=')?;
            let token = rest.split(';').next()?.trim();
            (!token.is_empty()).then(|| token.to_string())
        })
}
