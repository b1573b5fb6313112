// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. berth.toml (cwd)
//! 3. --config FILE (repeatable)
//! 4. BERTH__* env vars
//! 5. CLI overrides (--api-url, --dry, --set, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! BERTH__API__URL=https://...   → api.url
//! BERTH__GLOBAL__DRY=true       → global.dry
//! BERTH__PROJECT__OWNER=acme    → project.owner
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use url::Url;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{ApiConfig, GlobalConfig, ProjectConfig, SsoConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Backend API options.
    pub api: ApiConfig,
    /// SSO identity provider options.
    pub sso: SsoConfig,
    /// Default project target.
    pub project: ProjectConfig,
}

impl Config {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid
    /// TOML, or does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not
    /// match the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validates cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if `api.url` or `sso.ui_url` is set but does not
    /// parse, or if `sso.service_path` is not absolute.
    pub fn validate(&self) -> Result<()> {
        if !self.api.url.is_empty() {
            Url::parse(&self.api.url).map_err(|e| ConfigError::InvalidValue {
                section: "api".to_string(),
                key: "url".to_string(),
                message: e.to_string(),
            })?;
        }
        if !self.sso.ui_url.is_empty() {
            Url::parse(&self.sso.ui_url).map_err(|e| ConfigError::InvalidValue {
                section: "sso".to_string(),
                key: "ui_url".to_string(),
                message: e.to_string(),
            })?;
        }
        if !self.sso.service_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                section: "sso".to_string(),
                key: "service_path".to_string(),
                message: format!("must start with '/', got '{}'", self.sso.service_path),
            }
            .into());
        }
        Ok(())
    }

    /// Returns the backend base URL, requiring it to be configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when `api.url` is unset.
    pub fn require_api_url(&self) -> std::result::Result<&str, ConfigError> {
        if self.api.url.is_empty() {
            Err(ConfigError::MissingKey {
                section: "api".to_string(),
                key: "url".to_string(),
            })
        } else {
            Ok(&self.api.url)
        }
    }

    /// Returns the SSO UI URL, requiring it to be configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when `sso.ui_url` is unset.
    pub fn require_sso_ui_url(&self) -> std::result::Result<&str, ConfigError> {
        if self.sso.ui_url.is_empty() {
            Err(ConfigError::MissingKey {
                section: "sso".to_string(),
                key: "ui_url".to_string(),
            })
        } else {
            Ok(&self.sso.ui_url)
        }
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("global.dry".to_string(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("api.url".to_string(), self.api.url.clone());
        options.insert("sso.ui_url".to_string(), self.sso.ui_url.clone());
        options.insert(
            "sso.service_path".to_string(),
            self.sso.service_path.clone(),
        );
        options.insert("project.owner".to_string(), self.project.owner.clone());
        options.insert("project.name".to_string(), self.project.name.clone());

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
