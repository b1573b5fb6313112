// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config: GlobalConfig, ApiConfig, SsoConfig, ProjectConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Print what would be sent instead of calling the backend.
    pub dry: bool,
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file; file logging is disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Backend API options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `https://berth.example.com/api`.
    pub url: String,
}

/// SSO identity provider options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SsoConfig {
    /// Browser-facing URL of the identity provider UI.
    pub ui_url: String,
    /// Return path on the platform origin that receives the ticket.
    pub service_path: String,
}

impl Default for SsoConfig {
    fn default() -> Self {
        Self {
            ui_url: String::new(),
            service_path: "/web/sso".to_string(),
        }
    }
}

/// Default project target, used when a command's `OWNER/PROJECT` argument
/// is omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Owner (user or organization) name.
    pub owner: String,
    /// Project name.
    pub name: String,
}

impl ProjectConfig {
    /// Returns the configured `(owner, name)` pair if both are set.
    #[must_use]
    pub fn target(&self) -> Option<(String, String)> {
        if self.owner.is_empty() || self.name.is_empty() {
            None
        } else {
            Some((self.owner.clone(), self.name.clone()))
        }
    }
}
