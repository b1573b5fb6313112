// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Introspection commands for the effective configuration.

use crate::config::Config;
use crate::error::Result;

/// Prints every option with its effective value.
pub fn run_options_command(config: &Config) -> Result<()> {
    for line in config.format_options() {
        println!("{line}");
    }
    Ok(())
}

/// Prints the configuration files that were loaded, in order.
pub fn run_configs_command(files: &[String]) -> Result<()> {
    if files.is_empty() {
        println!("No configuration files loaded.");
    } else {
        for line in files {
            println!("{line}");
        }
    }
    Ok(())
}
