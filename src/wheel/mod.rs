// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wheel assembly.
//!
//! ```text
//! Config --plan--> WheelSpec --builder--> dist/<name>-<ver>-<tag>.whl
//!                    |
//!   tags      TagOverride::apply(detected)   py38.py39-none-<plat>
//!   metadata  METADATA, entry_points.txt
//!   record    RECORD (sha256, size)
//! ```

pub mod builder;
pub mod metadata;
pub mod plan;
pub mod record;
pub mod tags;

pub use builder::{BuildOutcome, WheelBuilder, WheelSpec};
pub use metadata::{EntryPoint, PackageMetadata};
pub use tags::{TagOverride, WheelTag};
