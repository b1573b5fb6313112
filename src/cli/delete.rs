// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Delete command arguments.

use clap::Args;

use crate::cli::project::TargetArgs;

/// Arguments for the `delete` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DeleteArgs {
    /// Project to delete.
    #[command(flatten)]
    pub target: TargetArgs,

    /// Confirms the deletion; without it the command refuses to run.
    #[arg(long)]
    pub yes: bool,
}
