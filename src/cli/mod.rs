// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! berth [global options] <command>
//! login [--ticket TICKET]
//! logout
//! credentials [OWNER/PROJECT]
//! regen-password [OWNER/PROJECT]
//! delete [OWNER/PROJECT] --yes
//! env {push|format} [FILE]
//! options | configs | version
//! ```

pub mod delete;
pub mod env;
pub mod global;
pub mod login;
pub mod project;


use crate::cli::delete::DeleteArgs;
use crate::cli::env::EnvArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::login::LoginArgs;
use crate::cli::project::TargetArgs;
use clap::{Parser, Subcommand};

/// Berth Platform CLI
///
/// A terminal client for projects hosted on the Berth platform.
#[derive(Debug, Parser)]
#[command(
    name = "berth",
    author,
    version,
    about = "Berth Platform CLI",
    long_about = "Manage projects hosted on the Berth platform: SSO login,\n\
                  git credentials, password regeneration, project deletion\n\
                  and bulk environment variable updates.\n\n\
                  See `berth <command> --help` for more information about\n\
                  a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, berth loads `berth.toml` from the current\n\
                  directory if present. Additional files can be specified\n\
                  with --config and are loaded in order, later files\n\
                  overriding earlier ones. BERTH__SECTION__KEY environment\n\
                  variables and --set overrides apply on top."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the configuration.
    Options,

    /// Lists the configuration files used by berth.
    Configs,

    /// Logs in through the SSO identity provider.
    Login(LoginArgs),

    /// Discards the persisted session.
    Logout,

    /// Shows the git credentials for a project.
    Credentials(TargetArgs),

    /// Regenerates the git password for a project.
    /// The new password is shown exactly once.
    #[command(name = "regen-password")]
    RegenPassword(TargetArgs),

    /// Deletes a project. This cannot be undone.
    Delete(DeleteArgs),

    /// Manages a project's environment variables.
    Env(EnvArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if
/// help/version information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
