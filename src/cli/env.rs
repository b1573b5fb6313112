// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable command arguments.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::project::TargetArgs;

/// Arguments for the `env` command.
#[derive(Debug, Args)]
pub struct EnvArgs {
    /// Environment operation to perform.
    #[command(subcommand)]
    pub operation: EnvOperation,
}

/// Environment variable operations.
#[derive(Debug, Subcommand)]
pub enum EnvOperation {
    /// Replaces the project's entire environment variable set with the
    /// contents of a KEY=value file.
    Push {
        /// Project to operate on.
        #[command(flatten)]
        target: TargetArgs,

        /// File to read, '-' for stdin. Defaults to .env in the current
        /// directory.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Parses a KEY=value file and prints it back normalized (comments
    /// and malformed lines dropped, quotes unwrapped).
    Format {
        /// File to read, '-' for stdin. Defaults to .env in the current
        /// directory.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}
