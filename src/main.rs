// berth: Berth Platform CLI
//
// SPDX-FileCopyrightText: 2026 Berth Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Login | Logout | Credentials | RegenPassword | Delete | Env
//!   Options | Configs | Version
//! ```

use std::process::ExitCode;

use berth::cli::global::GlobalOptions;
use berth::cli::{self, Command};
use berth::cmd::config::{run_configs_command, run_options_command};
use berth::cmd::credentials::run_credentials_command;
use berth::cmd::delete::run_delete_command;
use berth::cmd::env::run_env_command;
use berth::cmd::login::{run_login_command, run_logout_command};
use berth::cmd::password::run_password_command;
use berth::config::Config;
use berth::config::loader::ConfigLoader;
use berth::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let (config, loaded_files) = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config, &loaded_files).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config, loaded_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => Ok(()),
        Some(Command::Options) => run_options_command(config),
        Some(Command::Configs) => run_configs_command(loaded_files),
        Some(Command::Login(args)) => run_login_command(args, config).await,
        Some(Command::Logout) => run_logout_command(),
        Some(Command::Credentials(args)) => run_credentials_command(args, config).await,
        Some(Command::RegenPassword(args)) => run_password_command(args, config).await,
        Some(Command::Delete(args)) => run_delete_command(args, config).await,
        Some(Command::Env(args)) => run_env_command(args, config).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the layered configuration: `berth.toml`, `--config` files,
/// `BERTH__*` environment variables, then CLI overrides on top.
fn load_config(global: &GlobalOptions) -> berth::error::Result<(Config, Vec<String>)> {
    let mut loader = ConfigLoader::new().add_toml_file_optional("berth.toml");

    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }

    loader = loader.with_env_prefix("BERTH");

    for option in &global.options {
        let Some((key, value)) = option.split_once('=') else {
            return Err(anyhow::anyhow!(
                "invalid --set option '{option}': expected KEY=VALUE"
            ));
        };
        loader = loader.set(key, value)?;
    }

    if global.dry {
        loader = loader.set("global.dry", true)?;
    }
    if let Some(level) = global.log_level {
        loader = loader.set("global.output_log_level", i64::from(level))?;
    }
    if let Some(level) = global.file_log_level {
        loader = loader.set("global.file_log_level", i64::from(level))?;
    }
    if let Some(path) = &global.log_file {
        loader = loader.set("global.log_file", path.display().to_string())?;
    }
    if let Some(url) = &global.api_url {
        loader = loader.set("api.url", url.as_str())?;
    }

    let loaded_files = loader.format_loaded_files();
    let config = loader.build()?;
    Ok((config, loaded_files))
}
