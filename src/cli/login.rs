// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Login command arguments.

use clap::Args;

/// Arguments for the `login` command.
#[derive(Debug, Clone, Default, Args)]
pub struct LoginArgs {
    /// SSO ticket (or the full redirect URL containing `?ticket=`).
    /// When omitted, the ticket is read interactively.
    #[arg(long, value_name = "TICKET")]
    pub ticket: Option<String>,
}
