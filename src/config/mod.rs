// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for dorie-wheel.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (the published dorie package)
//! 2. <project-dir>/dorie.toml
//! 3. --ini FILE (in order)
//! 4. DORIEPKG_* env vars
//! 5. --set KEY=VALUE
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! DORIEPKG_GLOBAL__DRY=true          → global.dry = true
//! DORIEPKG_PACKAGE__NAME=dorie       → package.name = "dorie"
//! DORIEPKG_WHEEL__PLAT_NAME=linux_x86_64
//! ```
//!
//! Relative paths resolve against the project directory.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::wheel::tags::is_valid_platform_name;

pub use loader::ConfigLoader;
use types::{EntryPointsConfig, GlobalConfig, PackageConfig, VersionConfig, WheelConfig};

/// Default project configuration file name.
pub const CONFIG_FILE_NAME: &str = "dorie.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "DORIEPKG";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Package metadata.
    pub package: PackageConfig,
    /// Version declaration.
    pub version: VersionConfig,
    /// Wheel layout and tags.
    pub wheel: WheelConfig,
    /// Console scripts.
    pub entry_points: EntryPointsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dorie_wheel::config::Config;
    ///
    /// let config = Config::builder()
    ///     .with_project_dir("clang-format-wheel")
    ///     .add_toml_file_optional("clang-format-wheel/dorie.toml")
    ///     .with_env_prefix("DORIEPKG")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Anchor relative paths at `root` and validate required values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required value is empty or the
    /// platform name contains characters that would corrupt the wheel
    /// filename.
    pub fn resolve_and_validate(&mut self, root: &Path) -> Result<()> {
        resolve_path(&mut self.package.readme, root);
        resolve_path(&mut self.version.file, root);
        resolve_path(&mut self.wheel.package_dir, root);
        resolve_path(&mut self.wheel.out_dir, root);
        if let Some(log_file) = &mut self.global.log_file {
            resolve_path(log_file, root);
        }

        require("package", "name", &self.package.name)?;
        require("version", "base_key", &self.version.base_key)?;
        require("version", "revision_key", &self.version.revision_key)?;

        if self.wheel.packages.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "wheel".to_string(),
                key: "packages".to_string(),
            }
            .into());
        }

        if let Some(plat_name) = &self.wheel.plat_name {
            validate_plat_name(plat_name)?;
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_package_options(&mut options);
        self.format_version_options(&mut options);
        self.format_wheel_options(&mut options);
        self.format_entry_point_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        let global = &self.global;
        options.insert("global.dry".into(), global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            global
                .file_log_level
                .unwrap_or(global.output_log_level)
                .as_u8()
                .to_string(),
        );
        options.insert(
            "global.log_file".into(),
            global
                .log_file
                .as_ref()
                .map_or_else(|| "<none>".to_string(), |p| p.display().to_string()),
        );
    }

    fn format_package_options(&self, options: &mut BTreeMap<String, String>) {
        let package = &self.package;
        options.insert("package.name".into(), package.name.clone());
        options.insert("package.summary".into(), package.summary.clone());
        options.insert("package.author".into(), package.author.clone());
        options.insert("package.author_email".into(), package.author_email.clone());
        options.insert("package.license".into(), package.license.clone());
        options.insert("package.url".into(), package.url.clone());
        options.insert("package.download_url".into(), package.download_url.clone());
        for (label, url) in &package.project_urls {
            options.insert(format!("package.project_urls.{label}"), url.clone());
        }
        options.insert(
            "package.classifiers".into(),
            package.classifiers.join("; "),
        );
        options.insert("package.readme".into(), package.readme.display().to_string());
        options.insert(
            "package.readme_content_type".into(),
            package.readme_content_type.clone(),
        );
    }

    fn format_version_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("version.file".into(), self.version.file.display().to_string());
        options.insert("version.base_key".into(), self.version.base_key.clone());
        options.insert(
            "version.revision_key".into(),
            self.version.revision_key.clone(),
        );
    }

    fn format_wheel_options(&self, options: &mut BTreeMap<String, String>) {
        let wheel = &self.wheel;
        options.insert(
            "wheel.plat_name".into(),
            wheel.plat_name.clone().unwrap_or_else(|| "<detected>".into()),
        );
        options.insert(
            "wheel.package_dir".into(),
            wheel.package_dir.display().to_string(),
        );
        options.insert("wheel.packages".into(), wheel.packages.join(", "));
        options.insert("wheel.exclude".into(), wheel.exclude.join(", "));
        options.insert("wheel.out_dir".into(), wheel.out_dir.display().to_string());
    }

    fn format_entry_point_options(&self, options: &mut BTreeMap<String, String>) {
        for (index, script) in self.entry_points.console_scripts.iter().enumerate() {
            options.insert(
                format!("entry_points.console_scripts.{index}"),
                script.clone(),
            );
        }
    }
}

fn resolve_path(path: &mut PathBuf, root: &Path) {
    if path.is_relative() {
        *path = root.join(&*path);
    }
}

fn require(section: &str, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
        });
    }
    Ok(())
}

fn validate_plat_name(value: &str) -> std::result::Result<(), ConfigError> {
    if !is_valid_platform_name(value) {
        return Err(ConfigError::InvalidValue {
            section: "wheel".to_string(),
            key: "plat_name".to_string(),
            message: format!(
                "'{value}' is not a platform tag (expected [A-Za-z0-9_.-], no empty parts)"
            ),
        });
    }
    Ok(())
}
