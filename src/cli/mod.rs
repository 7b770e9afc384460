// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for dorie-wheel using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! dorie-wheel [global options] <command>
//! version
//! resolve-version
//! tags
//! metadata [--json]
//! build [--out-dir DIR] [--plat-name TAG] [--force]
//! options
//! inis
//! ```

pub mod build;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::build::{BuildArgs, MetadataArgs, TagsArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Packages a pre-built clang-format as the `dorie` wheel.
#[derive(Debug, Parser)]
#[command(
    name = "dorie-wheel",
    author,
    version,
    about = "clang-format wheel packager",
    long_about = "dorie-wheel Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds the `dorie` wheel from a pre-built package directory.\n\n\
                  Invoking `dorie-wheel -C some/project build` reads\n\
                  dorie_version.cmake and README.md from that directory and writes\n\
                  the wheel to dist/. See `dorie-wheel <command> --help` for more\n\
                  information about a command.",
    after_help = "INI FILES:\n\n\
                  By default, dorie-wheel looks for `dorie.toml` in the project\n\
                  directory (-C, the current directory if not given). Additional\n\
                  INIs can be specified with --ini, those are loaded after it and\n\
                  override its values. DORIEPKG_* environment variables and --set\n\
                  come last. Use --no-default-inis to only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version of dorie-wheel.
    #[command(visible_alias = "-v")]
    Version,

    /// Prints the package version from the version declaration file.
    #[command(name = "resolve-version")]
    ResolveVersion,

    /// Prints the wheel compatibility tags.
    Tags(TagsArgs),

    /// Prints the package metadata and entry points.
    Metadata(MetadataArgs),

    /// Builds the wheel.
    Build(BuildArgs),

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by dorie-wheel.
    Inis,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
