// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Credentials command - show the git credentials for a project.
//!
//! Single fetch per invocation: a failure is terminal until the user
//! reruns the command, no automatic retry.

use anyhow::Context;
use tracing::info;

use crate::cli::project::TargetArgs;
use crate::cmd::{client_for, resolve_target};
use crate::config::Config;
use crate::error::Result;

/// Main handler for the credentials command.
///
/// # Errors
///
/// Returns an error if no project is specified, the client cannot be
/// built, or the fetch fails.
pub async fn run_credentials_command(args: &TargetArgs, config: &Config) -> Result<()> {
    let (owner, project) = resolve_target(args, config)?;
    let client = client_for(config)?;

    let credentials = client
        .git_credentials(&owner, &project)
        .await
        .with_context(|| format!("failed to fetch git credentials for {owner}/{project}"))?;

    info!(owner, project, "fetched git credentials");

    println!(
        "Project:  {}/{}",
        credentials.owner_name, credentials.project_name
    );
    println!("Username: {}", credentials.git_username);
    println!("Remote:   {}", credentials.git_url);

    Ok(())
}
