// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core metadata (`METADATA`) and console entry points.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::Serialize;

use crate::error::PackageError;

/// Metadata version written to `METADATA`.
pub const METADATA_VERSION: &str = "2.1";

/// Package metadata as published on the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    pub summary: String,
    pub author: String,
    pub author_email: String,
    pub license: String,
    pub home_page: String,
    pub download_url: String,
    pub project_urls: BTreeMap<String, String>,
    pub classifiers: Vec<String>,
    #[serde(skip)]
    pub long_description: String,
    pub long_description_content_type: String,
}

impl PackageMetadata {
    /// Renders the `METADATA` file.
    ///
    /// Empty optional fields are omitted. The long description is the
    /// message body, after a blank line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        push_field(&mut out, "Metadata-Version", METADATA_VERSION);
        push_field(&mut out, "Name", &self.name);
        push_field(&mut out, "Version", &self.version);
        push_field(&mut out, "Summary", &self.summary);
        push_field(&mut out, "Home-page", &self.home_page);
        push_field(&mut out, "Download-URL", &self.download_url);
        push_field(&mut out, "Author", &self.author);
        push_field(&mut out, "Author-email", &self.author_email);
        push_field(&mut out, "License", &self.license);
        for (label, url) in &self.project_urls {
            push_field(&mut out, "Project-URL", &format!("{label}, {url}"));
        }
        for classifier in &self.classifiers {
            push_field(&mut out, "Classifier", classifier);
        }
        push_field(
            &mut out,
            "Description-Content-Type",
            &self.long_description_content_type,
        );

        if !self.long_description.is_empty() {
            out.push('\n');
            out.push_str(&self.long_description);
            if !self.long_description.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}

fn push_field(out: &mut String, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    // Continuation lines keep multi-line values inside the header block
    let value = value.replace('\n', "\n        ");
    let _ = writeln!(out, "{name}: {value}");
}

/// A `name=module:callable` console script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPoint {
    pub name: String,
    pub module: String,
    pub attr: String,
}

impl FromStr for EntryPoint {
    type Err = PackageError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| PackageError::InvalidEntryPoint {
            spec: spec.to_string(),
            message: message.to_string(),
        };

        let (name, target) = spec.split_once('=').ok_or_else(|| invalid("missing '='"))?;
        let (module, attr) = target
            .split_once(':')
            .ok_or_else(|| invalid("target must be 'module:callable'"))?;
        let (name, module, attr) = (name.trim(), module.trim(), attr.trim());

        if name.is_empty() {
            return Err(invalid("empty script name"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid("script name contains whitespace"));
        }
        if module.is_empty() || attr.is_empty() {
            return Err(invalid("target must be 'module:callable'"));
        }

        Ok(Self {
            name: name.to_string(),
            module: module.to_string(),
            attr: attr.to_string(),
        })
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}:{}", self.name, self.module, self.attr)
    }
}

/// Parses console script declarations, failing on the first invalid one.
///
/// # Errors
///
/// Returns [`PackageError::InvalidEntryPoint`] for a malformed declaration.
pub fn parse_entry_points<S: AsRef<str>>(specs: &[S]) -> Result<Vec<EntryPoint>, PackageError> {
    specs.iter().map(|s| s.as_ref().parse()).collect()
}

/// Renders `entry_points.txt`.
#[must_use]
pub fn render_entry_points(console_scripts: &[EntryPoint]) -> String {
    let mut out = String::from("[console_scripts]\n");
    for entry in console_scripts {
        let _ = writeln!(out, "{entry}");
    }
    out
}
