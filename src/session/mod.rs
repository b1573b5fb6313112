// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persisted login session.
//!
//! ```text
//! login  --> SessionStore::save()   {config_dir}/berth/session.toml (0600)
//! api    --> SessionStore::load()   cookie value for every request
//! logout --> SessionStore::clear()
//! ```
//!
//! The session file is the CLI analog of the dashboard's browser cookie:
//! a single token plus the username it belongs to.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// A logged-in session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session token issued by the backend on SSO exchange.
    pub token: String,
    /// Username the session belongs to.
    pub username: String,
}

/// On-disk session store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the default user-config location.
    ///
    /// # Errors
    ///
    /// Returns an error if no user config directory can be determined.
    pub fn open_default() -> Result<Self, SessionError> {
        let base = dirs::config_dir().ok_or(SessionError::Store {
            action: "locate",
            path: "<config dir>".to_string(),
            message: "no user config directory".to_string(),
        })?;
        Ok(Self::new(base.join("berth").join("session.toml")))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.store_error("read", e.to_string())),
        };

        toml::from_str(&contents)
            .map(Some)
            .map_err(|e| self.store_error("parse", e.to_string()))
    }

    /// Loads the persisted session, failing when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotLoggedIn`] when no session file exists.
    pub fn require(&self) -> Result<Session, SessionError> {
        self.load()?.ok_or(SessionError::NotLoggedIn)
    }

    /// Writes the session, creating parent directories as needed.
    ///
    /// On Unix the file is restricted to the owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| self.store_error("create directory for", e.to_string()))?;
        }

        let contents = toml::to_string_pretty(session)
            .map_err(|e| self.store_error("serialize", e.to_string()))?;

        std::fs::write(&self.path, contents)
            .map_err(|e| self.store_error("write", e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(|e| self.store_error("restrict", e.to_string()))?;
        }

        Ok(())
    }

    /// Removes the session file. Missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.store_error("remove", e.to_string())),
        }
    }

    fn store_error(&self, action: &'static str, message: String) -> SessionError {
        SessionError::Store {
            action,
            path: self.path.display().to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests;
