// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Turns the loaded configuration into a [`WheelSpec`].

use tracing::debug;

use super::builder::WheelSpec;
use super::metadata::{PackageMetadata, parse_entry_points};
use super::tags::{TagOverride, finalize_tag};
use crate::config::Config;
use crate::error::{FsError, Result};
use crate::utility::fs::text::read_text;
use crate::version::resolve_version;

/// Reads the version declaration and README and assembles the wheel spec.
///
/// `plat_name` overrides both detection and `wheel.plat_name`.
///
/// # Errors
///
/// Returns an error if the version cannot be resolved, the README cannot be
/// read, or an entry point is malformed.
pub async fn load_wheel_spec(config: &Config, plat_name: Option<&str>) -> Result<WheelSpec> {
    let version = resolve_version(&config.version.file, &config.version.keys()).await?;

    let readme_path = &config.package.readme;
    let long_description = read_text(readme_path)
        .await
        .map_err(|e| FsError::from_io(readme_path, e))?;
    debug!(readme = %readme_path.display(), bytes = long_description.len(), "Read long description");

    let entry_points = parse_entry_points(&config.entry_points.console_scripts)?;

    let tag_override = TagOverride::default();
    let tag = finalize_tag(
        &tag_override,
        plat_name.or(config.wheel.plat_name.as_deref()),
    );

    let package = &config.package;
    let metadata = PackageMetadata {
        name: package.name.clone(),
        version,
        summary: package.summary.clone(),
        author: package.author.clone(),
        author_email: package.author_email.clone(),
        license: package.license.clone(),
        home_page: package.url.clone(),
        download_url: package.download_url.clone(),
        project_urls: package.project_urls.clone(),
        classifiers: package.classifiers.clone(),
        long_description,
        long_description_content_type: package.readme_content_type.clone(),
    };

    Ok(WheelSpec::builder()
        .metadata(metadata)
        .entry_points(entry_points)
        .tag(tag)
        .root_is_pure(tag_override.root_is_pure)
        .package_dir(config.wheel.package_dir.clone())
        .packages(config.wheel.packages.clone())
        .exclude(config.wheel.exclude.clone())
        .build())
}
