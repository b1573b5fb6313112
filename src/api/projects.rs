// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project settings endpoints.
//!
//! ```text
//! GET  /project/{owner}/{project}/git-credentials       --> GitCredentials
//! POST /project/{owner}/{project}/regenerate-git-password --> RegeneratedPassword
//! POST /project/{owner}/{project}/delete                 --> opaque 2xx
//! POST /project/{owner}/{project}/env/bulk  {envs: {..}} --> 2xx (204)
//! ```

use reqwest::Method;
use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroizing;

use super::{ApiClient, error_from_response};
use crate::envfile::EnvMap;
use crate::error::ApiError;

/// Git credentials snapshot for a project.
///
/// Immutable once fetched; refreshed only by refetching.
#[derive(Debug, Clone, Deserialize)]
pub struct GitCredentials {
    pub git_username: String,
    pub git_url: String,
    pub project_name: String,
    pub owner_name: String,
}

/// Wire shape of the regenerate-password response.
#[derive(Deserialize)]
struct RegenerateResponse {
    git_username: String,
    git_password: String,
    git_url: String,
    message: String,
}

/// Result of a password regeneration.
///
/// `git_password` is a one-time secret: it is zeroed on drop, shown to the
/// user exactly once, and never logged.
#[derive(Debug)]
pub struct RegeneratedPassword {
    pub git_username: String,
    pub git_password: Zeroizing<String>,
    pub git_url: String,
    pub message: String,
}

impl From<RegenerateResponse> for RegeneratedPassword {
    fn from(wire: RegenerateResponse) -> Self {
        Self {
            git_username: wire.git_username,
            git_password: Zeroizing::new(wire.git_password),
            git_url: wire.git_url,
            message: wire.message,
        }
    }
}

impl ApiClient {
    /// Fetches the git credentials for a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or the response body cannot be parsed.
    pub async fn git_credentials(
        &self,
        owner: &str,
        project: &str,
    ) -> Result<GitCredentials, ApiError> {
        let url = self.endpoint(&["project", owner, project, "git-credentials"])?;

        debug!(owner, project, "fetching git credentials");

        let response = self.request(Method::GET, url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(&url, response).await);
        }

        Ok(response.json::<GitCredentials>().await?)
    }

    /// Regenerates the project's git password.
    ///
    /// The returned password is not retrievable again; the caller must
    /// surface it to the user immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend reports a
    /// failure, or the response body cannot be parsed.
    pub async fn regenerate_git_password(
        &self,
        owner: &str,
        project: &str,
    ) -> Result<RegeneratedPassword, ApiError> {
        let url = self.endpoint(&["project", owner, project, "regenerate-git-password"])?;

        debug!(owner, project, "regenerating git password");

        let response = self.request(Method::POST, url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(&url, response).await);
        }

        Ok(response.json::<RegenerateResponse>().await?.into())
    }

    /// Deletes a project. The success body is opaque and discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    pub async fn delete_project(&self, owner: &str, project: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["project", owner, project, "delete"])?;

        debug!(owner, project, "deleting project");

        let response = self.request(Method::POST, url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(&url, response).await);
        }

        Ok(())
    }

    /// Replaces the project's entire environment variable set.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports a
    /// failure.
    pub async fn bulk_update_env(
        &self,
        owner: &str,
        project: &str,
        envs: &EnvMap,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["project", owner, project, "env", "bulk"])?;

        debug!(owner, project, count = envs.len(), "bulk updating environment");

        let response = self
            .request(Method::POST, url.clone())
            .json(&serde_json::json!({ "envs": envs }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_from_response(&url, response).await);
        }

        Ok(())
    }
}
