// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   build, config, metadata, tags, version
//! ```
//!
//! Handlers print results on stdout; diagnostics go through `tracing`
//! to stderr.

pub mod build;
pub mod config;
pub mod metadata;
pub mod tags;
pub mod version;
