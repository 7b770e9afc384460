// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration test for the log file layer.
//!
//! Installs the global subscriber, so this binary holds a single test.

use dorie_wheel::logging::{LogConfig, LogLevel, init_logging};

#[test]
fn log_file_is_plain_text() {
    let temp = tempfile::tempdir().unwrap();
    let log_path = temp.path().join("logs/dorie.log");
    let config = LogConfig::builder()
        .with_console_level(LogLevel::SILENT)
        .with_file_level(LogLevel::DUMP)
        .with_log_file(log_path.display().to_string())
        .build();

    let guard = init_logging(&config).unwrap();
    tracing::info!(version = "2.0.1", "resolved version");
    drop(guard);

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let line = contents.lines().next().unwrap();
    assert!(!line.starts_with('{'));
    assert!(line.contains("INFO"));
    assert!(line.contains("resolved version"));
    assert!(line.contains("version=\"2.0.1\""));
}
