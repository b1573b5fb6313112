// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   login, logout, credentials, password, delete, env, config
//!
//! Shared helpers:
//!   resolve_target()  OWNER/PROJECT argument or [project] config
//!   client_for()      ApiClient with the persisted session attached
//! ```

pub mod config;
pub mod credentials;
pub mod delete;
pub mod env;
pub mod login;
pub mod password;


use anyhow::Context;

use crate::api::ApiClient;
use crate::cli::project::{TargetArgs, parse_target};
use crate::config::Config;
use crate::error::Result;
use crate::session::SessionStore;

/// Resolves the project a command operates on: the `OWNER/PROJECT`
/// argument when given, otherwise the `[project]` config section.
///
/// # Errors
///
/// Returns an error if the argument is malformed or neither source
/// names a project.
pub fn resolve_target(args: &TargetArgs, config: &Config) -> Result<(String, String)> {
    if let Some(target) = &args.target {
        return parse_target(target);
    }

    config.project.target().context(
        "no project specified (pass OWNER/PROJECT or set [project] owner/name in the config)",
    )
}

/// Builds an API client for the configured backend, attaching the
/// persisted session token when one exists.
///
/// # Errors
///
/// Returns an error if `api.url` is unset or invalid. A missing or
/// unreadable session file is not an error; the client is simply
/// anonymous and the backend will answer 401.
pub fn client_for(config: &Config) -> Result<ApiClient> {
    let base_url = config.require_api_url()?;

    let session = SessionStore::open_default()
        .and_then(|store| store.load())
        .ok()
        .flatten()
        .map(|session| session.token);

    Ok(ApiClient::new(base_url, session)?)
}
