// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! -C DIR            ← Project directory (relative config paths resolve here)
//! --ini FILE        ← Additional config files (can repeat)
//! --dry             ← Validate everything, write nothing
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← Log file, relative to the current directory
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > --ini > dorie.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Project directory containing dorie.toml, dorie_version.cmake and
    /// the package directory.
    #[arg(short = 'C', long = "project-dir", value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Collects and validates the wheel contents without writing anything.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'package.name=dorie' or 'wheel.plat_name=win_amd64'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Disables auto loading of dorie.toml, only uses --ini.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,
}

impl GlobalOptions {
    /// Project directory, `.` when not given.
    #[must_use]
    pub fn project_dir(&self) -> PathBuf {
        self.project_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// `--log-file` resolved against the current directory.
    ///
    /// Config paths are anchored at the project directory, so the flag is
    /// made absolute before it reaches either the config or the logger.
    #[must_use]
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .map(|path| std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()))
    }

    /// Converts command-line options to `--set` style configuration overrides.
    ///
    /// Explicit `--set` values come first so the dedicated flags win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global.output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global.file_log_level={level}"));
        }

        if let Some(path) = self.log_file_path() {
            overrides.push(format!("global.log_file={}", path.display()));
        }

        if self.dry {
            overrides.push("global.dry=true".to_string());
        }

        overrides
    }
}
