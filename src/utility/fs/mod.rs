// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:  collect_files()   ignore::Walk, sorted, fail-fast
//!        WalkOptions       hidden, gitignore, skip_dirs, exclude globs (wax)
//! text:  read_text()       BOM-aware decode (encoding_rs)
//! ```

pub mod text;
pub mod walk;
