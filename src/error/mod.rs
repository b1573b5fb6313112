// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              BerthError (boxed variants)
//!                     |
//!        +-------+----+----+---------+
//!        |       |         |         |
//!        v       v         v         v
//!       Api     Sso      Config   Session   Io/Other
//!       Box     Box       Box       Box     Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Api      Backend, Http, Reqwest, InvalidUrl
//!   Sso      Backend, Generic, Unknown
//!   Config   ReadError, ParseError, MissingKey, InvalidValue
//!   Session  NotLoggedIn, Store
//!
//! Backend vs generic: a non-2xx response whose JSON body carries a
//! `message` or `error` field is backend-reported; anything else is
//! a generic HTTP failure.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BerthError`].
pub type BerthResult<T> = std::result::Result<T, BerthError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep the enum small on the stack.
#[derive(Debug, Error)]
pub enum BerthError {
    /// Backend API call failed.
    #[error("api error: {0}")]
    Api(#[from] Box<ApiError>),

    /// SSO login handoff failed.
    #[error("sso error: {0}")]
    Sso(#[from] Box<SsoError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Session store error.
    #[error("session error: {0}")]
    Session(#[from] Box<SessionError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BerthError {
                fn from(err: $error) -> Self {
                    BerthError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ApiError => Api,
    SsoError => Sso,
    ConfigError => Config,
    SessionError => Session,
    std::io::Error => Io,
}

// --- API Errors ---

/// Backend API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered non-2xx with a structured `{message}` or
    /// `{error}` body.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Non-2xx response without a structured body.
    #[error("http error {status}: {url}")]
    Http { status: u16, url: String },

    /// Transport or body-decode failure from reqwest.
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// A URL could not be built from the configured base.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

// --- SSO Errors ---

/// SSO login handoff errors, tagged by origin for message selection.
#[derive(Debug, Error)]
pub enum SsoError {
    /// The identity provider or backend rejected the ticket.
    #[error("login rejected: {0}")]
    Backend(String),

    /// Network or parse failure during the exchange.
    #[error("login failed: {0}")]
    Generic(String),

    /// Response had none of the expected fields.
    #[error("unexpected response from the login service")]
    Unknown,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Session Errors ---

/// Session store errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No persisted session; the user must run `berth login` first.
    #[error("not logged in (run `berth login` first)")]
    NotLoggedIn,

    /// The session file could not be read or written.
    #[error("failed to {action} session file '{path}': {message}")]
    Store {
        action: &'static str,
        path: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
