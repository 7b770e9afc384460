// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for dorie-wheel.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PackageConfig, VersionConfig, WheelConfig, EntryPointsConfig
//! ```
//!
//! Defaults describe the published `dorie` package, so an empty
//! `dorie.toml` (or none at all) builds the standard wheel.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::version::VersionKeys;

/// Global configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Collect and validate everything but write no wheel.
    pub dry: bool,
    /// Console log level (0-6).
    pub output_log_level: LogLevel,
    /// File log level; falls back to `output_log_level`.
    pub file_log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

/// Package metadata fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageConfig {
    pub name: String,
    pub summary: String,
    pub author: String,
    pub author_email: String,
    pub license: String,
    /// Home page.
    pub url: String,
    pub download_url: String,
    pub project_urls: BTreeMap<String, String>,
    pub classifiers: Vec<String>,
    /// Long description source, embedded verbatim.
    pub readme: PathBuf,
    pub readme_content_type: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: "dorie".to_string(),
            summary: "Dorie".to_string(),
            author: "Dominic Kempf".to_string(),
            author_email: "ssc@iwr.uni-heidelberg.de".to_string(),
            license: "Apache 2.0".to_string(),
            url: "http://clang.llvm.org/".to_string(),
            download_url: "https://github.com/llvm/llvm-project/releases".to_string(),
            project_urls: BTreeMap::from([
                (
                    "Documentation".to_string(),
                    "https://clang.llvm.org/docs/ClangFormat.html".to_string(),
                ),
                (
                    "Source".to_string(),
                    "https://github.com/ssciwr/clang-format-wheel".to_string(),
                ),
            ]),
            classifiers: vec!["Programming Language :: C++".to_string()],
            readme: PathBuf::from("README.md"),
            readme_content_type: "text/markdown".to_string(),
        }
    }
}

/// Location and keys of the version declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VersionConfig {
    pub file: PathBuf,
    pub base_key: String,
    pub revision_key: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        let keys = VersionKeys::default();
        Self {
            file: PathBuf::from("dorie_version.cmake"),
            base_key: keys.base_key,
            revision_key: keys.revision_key,
        }
    }
}

impl VersionConfig {
    #[must_use]
    pub fn keys(&self) -> VersionKeys {
        VersionKeys {
            base_key: self.base_key.clone(),
            revision_key: self.revision_key.clone(),
        }
    }
}

/// Wheel layout.
///
/// The interpreter and ABI tags and purity are fixed by
/// [`TagOverride`](crate::wheel::tags::TagOverride)
/// and cannot be configured; only the platform is selectable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WheelConfig {
    /// Platform tag; detected from the host when unset.
    pub plat_name: Option<String>,
    /// Directory containing the packages.
    pub package_dir: PathBuf,
    pub packages: Vec<String>,
    /// Globs, relative to each package, of files left out of the wheel.
    pub exclude: Vec<String>,
    pub out_dir: PathBuf,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            plat_name: None,
            package_dir: PathBuf::from("pkg"),
            packages: vec!["dorie".to_string()],
            exclude: vec!["**/*.pyc".to_string(), "**/*.pyo".to_string()],
            out_dir: PathBuf::from("dist"),
        }
    }
}

/// Console scripts as `name=module:callable`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntryPointsConfig {
    pub console_scripts: Vec<String>,
}

impl Default for EntryPointsConfig {
    fn default() -> Self {
        Self {
            console_scripts: vec![
                "clang-format=clang_format:clang_format".to_string(),
                "git-clang-format=clang_format:git_clang_format".to_string(),
                "clang-format-diff.py=clang_format:clang_format_diff".to_string(),
            ],
        }
    }
}
