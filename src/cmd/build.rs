// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation for dorie-wheel.

use tracing::info;

use crate::cli::build::BuildArgs;
use crate::config::Config;
use crate::error::Result;
use crate::wheel::plan::load_wheel_spec;
use crate::wheel::{BuildOutcome, WheelBuilder};

/// Builds the wheel described by `config`.
///
/// # Errors
///
/// Returns an error if the wheel spec cannot be assembled or the archive
/// cannot be written.
pub async fn build_wheel(args: &BuildArgs, config: &Config, dry_run: bool) -> Result<BuildOutcome> {
    let spec = load_wheel_spec(config, args.platform.plat_name.as_deref()).await?;
    info!(
        name = %spec.metadata().name,
        version = %spec.metadata().version,
        tag = %spec.tag(),
        "Building wheel"
    );

    let out_dir = args.out_dir.as_deref().unwrap_or(&config.wheel.out_dir);
    WheelBuilder::new(spec)
        .build(out_dir, args.force, dry_run)
        .await
}

/// Main handler for build command.
///
/// Prints the wheel path on success so it can be captured by scripts.
///
/// # Errors
///
/// Returns an error if the build fails.
pub async fn run_build_command(args: &BuildArgs, config: &Config, dry_run: bool) -> Result<()> {
    let outcome = build_wheel(args, config, dry_run).await?;
    if outcome.written {
        println!("{}", outcome.path.display());
    }
    Ok(())
}
