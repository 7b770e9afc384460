// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};

#[test]
fn test_default_config_describes_dorie() {
    let config = Config::default();
    let summary = vec![
        ("package.name", config.package.name),
        ("package.license", config.package.license),
        ("version.base_key", config.version.base_key),
        ("version.revision_key", config.version.revision_key),
        ("wheel.package_dir", config.wheel.package_dir.display().to_string()),
        ("wheel.out_dir", config.wheel.out_dir.display().to_string()),
    ];
    insta::assert_debug_snapshot!(summary, @r#"
    [
        (
            "package.name",
            "dorie",
        ),
        (
            "package.license",
            "Apache 2.0",
        ),
        (
            "version.base_key",
            "DORIE_VERSION",
        ),
        (
            "version.revision_key",
            "DORIE_WHEEL_VERSION",
        ),
        (
            "wheel.package_dir",
            "pkg",
        ),
        (
            "wheel.out_dir",
            "dist",
        ),
    ]
    "#);
    assert_eq!(config.version.file, PathBuf::from("dorie_version.cmake"));
    assert_eq!(config.entry_points.console_scripts.len(), 3);
}

#[test]
fn test_parse_overrides_and_keeps_defaults() {
    let config = Config::parse(
        r#"
[package]
name = "clang-format-dorie"

[wheel]
plat_name = "manylinux2014_x86_64"
"#,
    )
    .unwrap();

    assert_eq!(config.package.name, "clang-format-dorie");
    assert_eq!(config.package.author, "Dominic Kempf");
    assert_eq!(
        config.wheel.plat_name.as_deref(),
        Some("manylinux2014_x86_64")
    );
    assert_eq!(config.wheel.packages, vec!["dorie".to_string()]);
}

#[test]
fn test_unknown_key_rejected() {
    let result = Config::parse("[wheel]\nuniversal = true\n");
    assert!(result.is_err());
}

#[test]
fn test_relative_paths_anchor_at_project_dir() {
    let config = ConfigLoader::new()
        .with_project_dir("/work/clang-format-wheel")
        .build()
        .unwrap();

    assert_eq!(
        config.version.file,
        Path::new("/work/clang-format-wheel").join("dorie_version.cmake")
    );
    assert_eq!(
        config.wheel.package_dir,
        Path::new("/work/clang-format-wheel").join("pkg")
    );
    assert_eq!(
        config.package.readme,
        Path::new("/work/clang-format-wheel").join("README.md")
    );
}

#[test]
fn test_absolute_paths_are_kept() {
    let absolute = std::env::temp_dir().join("dorie_version.cmake");
    let toml = format!("[version]\nfile = {:?}\n", absolute.display().to_string());
    let config = ConfigLoader::new()
        .with_project_dir("elsewhere")
        .add_toml_str(&toml)
        .build()
        .unwrap();

    assert_eq!(config.version.file, absolute);
}

#[test]
fn test_set_assignment() {
    let config = ConfigLoader::new()
        .set_assignment("package.summary=Clang-Format wheel")
        .unwrap()
        .set_assignment("wheel.plat_name = win_amd64")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.package.summary, "Clang-Format wheel");
    assert_eq!(config.wheel.plat_name.as_deref(), Some("win_amd64"));
}

#[test]
fn test_set_assignment_without_equals() {
    let err = ConfigLoader::new().set_assignment("package.name").err().unwrap();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_empty_name_rejected() {
    let err = Config::parse("[package]\nname = \"\"\n").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'name' in section '[package]'");
}

#[test]
fn test_empty_packages_rejected() {
    let err = Config::parse("[wheel]\npackages = []\n").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::MissingKey { key, .. }) if key == "packages"
    ));
}

#[test]
fn test_fixed_tags_not_configurable() {
    for toml in [
        "[wheel]\nroot_is_pure = true\n",
        "[wheel]\npython_tag = \"py3\"\n",
        "[wheel]\nabi_tag = \"cp311\"\n",
    ] {
        assert!(Config::parse(toml).is_err(), "{toml} should be rejected");
    }
}

#[test]
fn test_plat_name_validated() {
    for bad in ["linux x86_64", "", "linux_x86_64..win_amd64", "win/amd64"] {
        let toml = format!("[wheel]\nplat_name = {bad:?}\n");
        let err = Config::parse(&toml).unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<ConfigError>(),
                Some(ConfigError::InvalidValue { key, .. }) if key == "plat_name"
            ),
            "{bad:?} should be rejected"
        );
    }

    let config =
        Config::parse("[wheel]\nplat_name = \"manylinux_2_17_x86_64.manylinux2014_x86_64\"\n")
            .unwrap();
    assert_eq!(
        config.wheel.plat_name.as_deref(),
        Some("manylinux_2_17_x86_64.manylinux2014_x86_64")
    );
}

#[test]
fn test_required_file_missing() {
    let result = Config::from_file("/nonexistent/dorie.toml");
    assert!(result.is_err());
}

#[test]
fn test_loaded_files_listing() {
    let temp = tempfile::tempdir().unwrap();
    let present = temp.path().join("dorie.toml");
    std::fs::write(&present, "").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(&present)
        .add_toml_file_optional(temp.path().join("absent.toml"))
        .add_toml_str("");

    let files: Vec<PathBuf> = loader.loaded_files().into_iter().map(|(_, p)| p).collect();
    assert_eq!(files, vec![present, PathBuf::from("<string>")]);
    assert_eq!(loader.format_loaded_files().len(), 2);
}

#[test]
fn test_format_options() {
    let config = Config::default();
    let options = config.format_options();

    assert!(
        options
            .iter()
            .any(|line| line.starts_with("wheel.plat_name") && line.ends_with("= <detected>"))
    );
    assert!(
        options
            .iter()
            .any(|line| line.starts_with("entry_points.console_scripts.0")
                && line.ends_with("= clang-format=clang_format:clang_format"))
    );
    // Keys are padded to a common width
    let widths: Vec<usize> = options
        .iter()
        .filter_map(|line| line.find(" = "))
        .collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_global_log_levels() {
    let config = Config::parse("[global]\noutput_log_level = 4\nlog_file = \"dorie.log\"\n").unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, None);
    assert_eq!(
        config.global.log_file,
        Some(Path::new(".").join("dorie.log"))
    );
}

#[test]
fn test_global_log_level_out_of_range() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}
