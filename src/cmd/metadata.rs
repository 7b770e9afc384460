// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Metadata command implementation.
//!
//! Plain output is exactly what ends up in the wheel: `METADATA`, then
//! `entry_points.txt`. `--json` gives a machine-readable summary.

use serde_json::json;

use crate::cli::build::MetadataArgs;
use crate::config::Config;
use crate::error::Result;
use crate::wheel::WheelSpec;
use crate::wheel::metadata::render_entry_points;
use crate::wheel::plan::load_wheel_spec;

/// JSON summary of a wheel spec.
#[must_use]
pub fn metadata_json(spec: &WheelSpec) -> serde_json::Value {
    json!({
        "filename": spec.filename(),
        "metadata": spec.metadata(),
        "tag": spec.tag().to_string(),
        "tags": spec.tag().expand(),
        "root_is_pure": spec.root_is_pure(),
        "entry_points": {
            "console_scripts": spec.entry_points(),
        },
        "packages": spec.packages(),
    })
}

/// Plain-text rendering of `METADATA` followed by `entry_points.txt`.
#[must_use]
pub fn metadata_text(spec: &WheelSpec) -> String {
    let mut out = spec.metadata().render();
    out.push('\n');
    out.push_str(&render_entry_points(spec.entry_points()));
    out
}

/// Main handler for metadata command.
///
/// # Errors
///
/// Returns an error if the version, README or entry points cannot be
/// resolved, or the JSON cannot be serialized.
pub async fn run_metadata_command(args: &MetadataArgs, config: &Config) -> Result<()> {
    let spec = load_wheel_spec(config, args.platform.plat_name.as_deref()).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&metadata_json(&spec))?);
    } else {
        print!("{}", metadata_text(&spec));
    }
    Ok(())
}
