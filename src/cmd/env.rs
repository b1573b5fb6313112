// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command - bulk environment variable updates.
//!
//! ```text
//! env push [OWNER/PROJECT] [FILE]   decode FILE, replace the project's
//!                                   entire variable set in one request
//! env format [FILE]                 decode FILE, print it normalized
//! ```
//!
//! Push is whole-set replacement: variables absent from the file are
//! removed on the backend.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::cli::env::{EnvArgs, EnvOperation};
use crate::cmd::{client_for, resolve_target};
use crate::config::Config;
use crate::envfile;
use crate::error::Result;

/// Main handler for the env command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, no project is
/// specified for a push, or the push request fails.
pub async fn run_env_command(args: &EnvArgs, config: &Config) -> Result<()> {
    match &args.operation {
        EnvOperation::Push { target, file } => {
            let (owner, project) = resolve_target(target, config)?;
            let text = read_env_input(file.as_deref())?;
            let envs = envfile::decode(&text);

            if config.global.dry {
                println!(
                    "[DRY-RUN] Would push {} environment variables to {owner}/{project}:",
                    envs.len()
                );
                println!("{}", envfile::encode(&envs));
                return Ok(());
            }

            let client = client_for(config)?;
            client
                .bulk_update_env(&owner, &project, &envs)
                .await
                .with_context(|| {
                    format!("failed to push environment variables to {owner}/{project}")
                })?;

            info!(owner, project, count = envs.len(), "environment pushed");
            println!(
                "Pushed {} environment variables to {owner}/{project}.",
                envs.len()
            );
        }
        EnvOperation::Format { file } => {
            let text = read_env_input(file.as_deref())?;
            let envs = envfile::decode(&text);
            println!("{}", envfile::encode(&envs));
        }
    }

    Ok(())
}

/// Reads the env input: the given file, stdin for `-`, or `.env` in the
/// current directory when no file was named.
fn read_env_input(file: Option<&Path>) -> Result<String> {
    let path = file.map_or_else(|| PathBuf::from(".env"), Path::to_path_buf);

    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read environment variables from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read environment file '{}'", path.display()))
}
