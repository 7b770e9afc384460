// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(9), None);
    assert_eq!(LogLevel::try_from(4).map(u8::from).ok(), Some(4));
}

#[test]
fn test_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        "off",
        "error",
        "warn",
        "info",
        "warn,dorie_wheel=debug",
        "warn,dorie_wheel=trace",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_level_deserialize_rejects_out_of_range() {
    let ok: LogLevel = serde_json::from_str("5").unwrap();
    assert_eq!(ok, LogLevel::TRACE);
    assert!(serde_json::from_str::<LogLevel>("12").is_err());
}
