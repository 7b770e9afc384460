// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the wheel commands.
//!
//! ```text
//! tags      [--plat-name TAG]
//! metadata  [--plat-name TAG] [--json]
//! build     [--plat-name TAG] [--out-dir DIR] [--force]
//! ```
//!
//! `--plat-name` beats `wheel.plat_name`, which beats host detection.

use clap::Args;
use std::path::PathBuf;

use crate::wheel::tags::is_valid_platform_name;

/// Platform tag selection shared by the wheel commands.
#[derive(Debug, Clone, Default, Args)]
pub struct PlatformArgs {
    /// Platform tag to use instead of the detected one, e.g. 'win_amd64'.
    /// Several platforms can be joined with '.'.
    #[arg(short = 'p', long = "plat-name", value_name = "TAG", value_parser = parse_plat_name)]
    pub plat_name: Option<String>,
}

fn parse_plat_name(value: &str) -> Result<String, String> {
    if is_valid_platform_name(value) {
        Ok(value.to_string())
    } else {
        Err(format!(
            "'{value}' is not a platform tag (expected [A-Za-z0-9_.-], no empty parts)"
        ))
    }
}

/// Arguments for the `tags` command.
#[derive(Debug, Clone, Default, Args)]
pub struct TagsArgs {
    #[command(flatten)]
    pub platform: PlatformArgs,

    /// Prints one expanded `py-abi-plat` tag per line instead of the
    /// compressed tag set.
    #[arg(short = 'e', long)]
    pub expand: bool,
}

/// Arguments for the `metadata` command.
#[derive(Debug, Clone, Default, Args)]
pub struct MetadataArgs {
    #[command(flatten)]
    pub platform: PlatformArgs,

    /// Prints metadata, tags and entry points as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub platform: PlatformArgs,

    /// Output directory, overrides wheel.out_dir. Relative to the current
    /// directory, not the project directory.
    #[arg(short = 'o', long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Overwrites an existing wheel with the same filename.
    #[arg(short = 'f', long)]
    pub force: bool,
}
