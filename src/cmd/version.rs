// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version commands.

use crate::config::Config;
use crate::error::Result;
use crate::version::resolve_version;

/// Prints the version of dorie-wheel itself.
pub fn run_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Prints the package version resolved from the declaration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, contains a malformed line,
/// or lacks one of the configured keys.
pub async fn run_resolve_version_command(config: &Config) -> Result<()> {
    let version = resolve_version(&config.version.file, &config.version.keys()).await?;
    println!("{version}");
    Ok(())
}
