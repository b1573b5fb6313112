// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project targeting arguments shared by the settings commands.

use anyhow::Context;
use clap::Args;

use crate::error::Result;

/// Selects the project a command operates on.
#[derive(Debug, Clone, Default, Args)]
pub struct TargetArgs {
    /// Project to operate on, as OWNER/PROJECT.
    /// Falls back to [project] owner/name from the configuration.
    #[arg(value_name = "OWNER/PROJECT")]
    pub target: Option<String>,
}

/// Parse a target argument in "owner/project" form.
///
/// # Examples
/// - "acme/web" -> Ok(("acme", "web"))
/// - "acme" -> Err(...)
/// - "acme/web/extra" -> Err(...)
///
/// # Errors
///
/// Returns an error unless the argument is exactly two non-empty
/// segments separated by one `/`.
pub fn parse_target(target: &str) -> Result<(String, String)> {
    let (owner, project) = target
        .split_once('/')
        .with_context(|| format!("invalid target '{target}': expected OWNER/PROJECT"))?;

    if owner.is_empty() || project.is_empty() || project.contains('/') {
        anyhow::bail!("invalid target '{target}': expected OWNER/PROJECT");
    }

    Ok((owner.to_string(), project.to_string()))
}
