// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `RECORD` manifest.
//!
//! ```text
//! dorie/__init__.py,sha256=<urlsafe b64, no padding>,1234
//! dorie-2.0.1.dist-info/RECORD,,
//! ```

use std::fmt::Write as _;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// Hash string in `RECORD` format.
#[must_use]
pub fn record_hash(contents: &[u8]) -> String {
    format!("sha256={}", URL_SAFE_NO_PAD.encode(Sha256::digest(contents)))
}

/// One archive member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub path: String,
    pub hash: String,
    pub size: u64,
}

impl RecordEntry {
    #[must_use]
    pub fn for_contents(path: impl Into<String>, contents: &[u8]) -> Self {
        Self {
            path: path.into(),
            hash: record_hash(contents),
            size: contents.len() as u64,
        }
    }
}

/// Accumulates entries while the archive is written.
#[derive(Debug, Clone, Default)]
pub struct Record {
    entries: Vec<RecordEntry>,
}

impl Record {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: RecordEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    /// Renders the manifest; `record_path` is listed last without a hash.
    #[must_use]
    pub fn render(&self, record_path: &str) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let _ = writeln!(out, "{},{},{}", csv_field(&entry.path), entry.hash, entry.size);
        }
        let _ = writeln!(out, "{},,", csv_field(record_path));
        out
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
