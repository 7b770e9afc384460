// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Package version from the CMake version declaration.
//!
//! ```text
//! dorie_version.cmake
//!   set(DORIE_VERSION 2.0.1)        --> base
//!   set(DORIE_WHEEL_VERSION 0)      --> revision
//!
//! revision == "0"  -->  "2.0.1"
//! revision == "3"  -->  "2.0.1.3"
//! ```
//!
//! Blank lines and `#` comments are skipped. Any other line that is not a
//! two-token `set(...)` aborts the run: a misversioned wheel must never be
//! produced from a half-read file.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use regex::Regex;
use tracing::{debug, info};

use crate::error::{Result, VersionFileError};
use crate::utility::fs::text::read_text;

/// Revision value meaning "first packaging of this tool version".
const NO_REVISION: &str = "0";

/// Names of the two declarations that make up the version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionKeys {
    /// Key holding the wrapped tool's version.
    pub base_key: String,
    /// Key holding the wheel revision counter.
    pub revision_key: String,
}

impl Default for VersionKeys {
    fn default() -> Self {
        Self {
            base_key: "DORIE_VERSION".to_string(),
            revision_key: "DORIE_WHEEL_VERSION".to_string(),
        }
    }
}

/// Parsed `set(<KEY> <VALUE>)` declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionDeclaration {
    entries: BTreeMap<String, String>,
}

impl VersionDeclaration {
    /// Parses declaration text.
    ///
    /// A later declaration of a key replaces an earlier one. A value wrapped
    /// in double quotes is unquoted.
    ///
    /// # Errors
    ///
    /// Returns [`VersionFileError::MalformedLine`] for the first line that is
    /// neither blank, a comment, nor a two-token `set(...)`.
    pub fn parse(content: &str) -> Result<Self> {
        let regex = Regex::new(r"^set\(\s*([^\s()]+)\s+([^\s()]+)\s*\)$")
            .context("failed to compile version declaration regex")?;

        let mut entries = BTreeMap::new();
        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let captures = regex.captures(line).ok_or_else(|| VersionFileError::MalformedLine {
                line: index + 1,
                content: raw_line.to_string(),
            })?;
            let (key, value) = match (captures.get(1), captures.get(2)) {
                (Some(key), Some(value)) => (key.as_str(), unquote(value.as_str())),
                _ => {
                    return Err(VersionFileError::MalformedLine {
                        line: index + 1,
                        content: raw_line.to_string(),
                    }
                    .into());
                }
            };

            debug!(key, value, "version declaration");
            entries.insert(key.to_string(), value.to_string());
        }

        Ok(Self { entries })
    }

    /// Reads and parses a declaration file.
    ///
    /// # Errors
    ///
    /// Returns [`VersionFileError::Read`] if the file cannot be read, or any
    /// error of [`VersionDeclaration::parse`].
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = read_text(path)
            .await
            .map_err(|source| VersionFileError::Read {
                path: path.display().to_string(),
                source,
            })?;

        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Value declared for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// All declarations, ordered by key.
    #[must_use]
    pub const fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Composes the package version string.
    ///
    /// # Errors
    ///
    /// Returns [`VersionFileError::MissingKey`] if either key is undeclared.
    pub fn resolve(&self, keys: &VersionKeys) -> Result<String> {
        let base = self.require(&keys.base_key)?;
        let revision = self.require(&keys.revision_key)?;

        Ok(if revision == NO_REVISION {
            base.to_string()
        } else {
            format!("{base}.{revision}")
        })
    }

    fn require(&self, key: &str) -> std::result::Result<&str, VersionFileError> {
        self.get(key).ok_or_else(|| VersionFileError::MissingKey {
            key: key.to_string(),
        })
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Reads `path` and resolves the package version in one step.
///
/// # Errors
///
/// Returns an error if the file cannot be read, contains a malformed line,
/// or lacks one of the keys.
pub async fn resolve_version(path: &Path, keys: &VersionKeys) -> Result<String> {
    let declaration = VersionDeclaration::from_file(path).await?;
    let version = declaration
        .resolve(keys)
        .with_context(|| format!("in {}", path.display()))?;

    info!(version = %version, file = %path.display(), "Resolved package version");
    Ok(version)
}
