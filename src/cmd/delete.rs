// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Delete command - remove a project from the platform.
//!
//! The request is fire-and-forget: once the deletion has been submitted
//! the command finishes successfully either way, and only the printed
//! message reflects whether the backend confirmed it.

use anyhow::bail;
use tracing::{info, warn};

use crate::cli::delete::DeleteArgs;
use crate::cmd::{client_for, resolve_target};
use crate::config::Config;
use crate::error::Result;

/// Main handler for the delete command.
///
/// # Errors
///
/// Returns an error if no project is specified, `--yes` is missing, or
/// the client cannot be built. A backend failure after submission is
/// reported but does not fail the command.
pub async fn run_delete_command(args: &DeleteArgs, config: &Config) -> Result<()> {
    let (owner, project) = resolve_target(&args.target, config)?;

    if !args.yes {
        bail!("refusing to delete {owner}/{project}: pass --yes to confirm");
    }

    if config.global.dry {
        println!("[DRY-RUN] Would delete {owner}/{project}");
        return Ok(());
    }

    let client = client_for(config)?;

    match client.delete_project(&owner, &project).await {
        Ok(()) => {
            info!(owner, project, "project deleted");
            println!("Project {owner}/{project} deleted.");
        }
        Err(e) => {
            warn!(owner, project, error = %e, "deletion not confirmed");
            println!("The deletion of {owner}/{project} could not be confirmed: {e}");
        }
    }

    Ok(())
}
