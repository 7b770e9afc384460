// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text file reading with BOM sniffing.
//!
//! Version files and READMEs edited on Windows often carry a UTF-8 BOM or
//! are saved as UTF-16. `encoding_rs` picks the encoding from the BOM and
//! falls back to UTF-8; invalid sequences become U+FFFD.

use encoding_rs::UTF_8;
use std::path::Path;
use tokio::fs;
use tracing::warn;

/// Decodes raw file bytes into a UTF-8 string, honouring a leading BOM.
#[must_use]
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, encoding, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        warn!(
            encoding = encoding.name(),
            "invalid byte sequences replaced while decoding text"
        );
    }
    text.into_owned()
}

/// Reads a text file and decodes it with [`decode_text`].
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read.
pub async fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path).await?;
    Ok(decode_text(&bytes))
}
