// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | ResolveVersion | Tags | Metadata | Build | Options | Inis
//! ```
//!
//! Configuration is loaded before logging so `[global]` log settings take
//! effect; a configuration error is only reported by commands that need it.

use std::process::ExitCode;

use dorie_wheel::cli::global::GlobalOptions;
use dorie_wheel::cli::{self, Command};
use dorie_wheel::cmd::build::run_build_command;
use dorie_wheel::cmd::config::{run_inis_command, run_options_command};
use dorie_wheel::cmd::metadata::run_metadata_command;
use dorie_wheel::cmd::tags::run_tags_command;
use dorie_wheel::cmd::version::{run_resolve_version_command, run_version_command};
use dorie_wheel::config::loader::ConfigLoader;
use dorie_wheel::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use dorie_wheel::error::{Result, bail_out};
use dorie_wheel::logging::init_logging;
use dorie_wheel::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = load_config(&cli.global);

    let log_config = build_log_config(&cli.global, config.as_ref().ok());
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, config).await
}

fn build_log_config(global: &GlobalOptions, config: Option<&Config>) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .or_else(|| config.map(|c| c.global.output_log_level))
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .or_else(|| config.and_then(|c| c.global.file_log_level))
        .unwrap_or(console_level);

    let log_file = global
        .log_file_path()
        .or_else(|| config.and_then(|c| c.global.log_file.clone()));

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file.map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: Result<Config>) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            run_version_command();
            Ok(())
        }
        Some(Command::ResolveVersion) => match config {
            Ok(config) => run_resolve_version_command(&config).await,
            Err(e) => Err(e),
        },
        Some(Command::Tags(args)) => config.map(|config| run_tags_command(args, &config)),
        Some(Command::Metadata(args)) => match config {
            Ok(config) => run_metadata_command(args, &config).await,
            Err(e) => Err(e),
        },
        Some(Command::Build(args)) => match config {
            Ok(config) => run_build_command(args, &config, config.global.dry).await,
            Err(e) => Err(e),
        },
        Some(Command::Options) => config.map(|config| run_options_command(&config)),
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(bail_out("no command specified").into())
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

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let project_dir = global.project_dir();
    let mut loader = ConfigLoader::new().with_project_dir(&project_dir);
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(project_dir.join(CONFIG_FILE_NAME));
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    let mut loader = build_config_loader(global);
    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    loader.build().map_err(|e| e.context("failed to load config"))
}
