// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Password command - regenerate the git password for a project.
//!
//! The regenerated password exists only in the response and this
//! process's memory (zeroed on drop); it is printed exactly once and
//! never logged. On failure the state simply returns to idle: nothing
//! was changed locally and the user may rerun.

use anyhow::Context;
use tracing::info;

use crate::cli::project::TargetArgs;
use crate::cmd::{client_for, resolve_target};
use crate::config::Config;
use crate::error::Result;

/// Main handler for the regen-password command.
///
/// # Errors
///
/// Returns an error if no project is specified, the client cannot be
/// built, or the regeneration request fails.
pub async fn run_password_command(args: &TargetArgs, config: &Config) -> Result<()> {
    let (owner, project) = resolve_target(args, config)?;

    if config.global.dry {
        println!("[DRY-RUN] Would regenerate the git password for {owner}/{project}");
        return Ok(());
    }

    let client = client_for(config)?;

    let regenerated = client
        .regenerate_git_password(&owner, &project)
        .await
        .with_context(|| format!("failed to regenerate the git password for {owner}/{project}"))?;

    info!(owner, project, "git password regenerated");

    println!("Username: {}", regenerated.git_username);
    println!("Remote:   {}", regenerated.git_url);
    println!("Password: {}", regenerated.git_password.as_str());
    println!();
    println!("{}", regenerated.message);

    Ok(())
}
