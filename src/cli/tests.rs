// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["dorie-wheel", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
    assert!(cli.global.project_dir.is_none());
}

#[test]
fn test_parse_resolve_version() {
    let cli = Cli::try_parse_from(["dorie-wheel", "-C", "/src/clang-format-wheel", "resolve-version"])
        .unwrap();
    assert!(matches!(cli.command, Some(Command::ResolveVersion)));
    assert_eq!(
        cli.global.project_dir(),
        PathBuf::from("/src/clang-format-wheel")
    );
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "dorie-wheel",
        "-l",
        "5",
        "-i",
        "ci.toml",
        "-s",
        "package.name=dorie",
        "--dry",
        "build",
    ])
    .unwrap();
    insta::assert_debug_snapshot!(cli.global, @r#"
    GlobalOptions {
        project_dir: None,
        inis: [
            "ci.toml",
        ],
        dry: true,
        log_level: Some(
            5,
        ),
        file_log_level: None,
        log_file: None,
        options: [
            "package.name=dorie",
        ],
        no_default_inis: false,
    }
    "#);
}

#[test]
fn test_global_options_to_overrides() {
    let cli = Cli::try_parse_from([
        "dorie-wheel",
        "-l",
        "4",
        "--log-file",
        "/var/log/dorie.log",
        "-s",
        "wheel.plat_name=win_amd64",
        "--dry",
        "options",
    ])
    .unwrap();
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "wheel.plat_name=win_amd64",
        "global.output_log_level=4",
        "global.file_log_level=4",
        "global.log_file=/var/log/dorie.log",
        "global.dry=true",
    ]
    "#);
}

#[test]
fn test_relative_log_file_resolved_against_cwd() {
    let cli = Cli::try_parse_from([
        "dorie-wheel",
        "-C",
        "/src/clang-format-wheel",
        "--log-file",
        "logs/dorie.log",
        "options",
    ])
    .unwrap();
    let expected = std::env::current_dir().unwrap().join("logs/dorie.log");

    assert_eq!(cli.global.log_file_path(), Some(expected.clone()));
    assert!(
        cli.global
            .to_config_overrides()
            .contains(&format!("global.log_file={}", expected.display()))
    );
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["dorie-wheel", "-l", "7", "version"]).is_err());
}

#[test]
fn test_parse_build() {
    let cli = Cli::try_parse_from([
        "dorie-wheel",
        "build",
        "--plat-name",
        "manylinux2014_x86_64",
        "--out-dir",
        "wheelhouse",
        "--force",
    ])
    .unwrap();
    insta::assert_debug_snapshot!(cli.command, @r#"
    Some(
        Build(
            BuildArgs {
                platform: PlatformArgs {
                    plat_name: Some(
                        "manylinux2014_x86_64",
                    ),
                },
                out_dir: Some(
                    "wheelhouse",
                ),
                force: true,
            },
        ),
    )
    "#);
}

#[test]
fn test_parse_metadata_json() {
    let cli = Cli::try_parse_from(["dorie-wheel", "metadata", "--json"]).unwrap();
    let Some(Command::Metadata(args)) = cli.command else {
        panic!("expected metadata command");
    };
    assert!(args.json);
    assert!(args.platform.plat_name.is_none());
}

#[test]
fn test_parse_tags_expand() {
    let cli = Cli::try_parse_from(["dorie-wheel", "tags", "-e", "-p", "win_amd64"]).unwrap();
    let Some(Command::Tags(args)) = cli.command else {
        panic!("expected tags command");
    };
    assert!(args.expand);
    assert_eq!(args.platform.plat_name.as_deref(), Some("win_amd64"));
}

#[test]
fn test_plat_name_rejected_when_malformed() {
    assert!(Cli::try_parse_from(["dorie-wheel", "build", "--plat-name", "linux x86_64"]).is_err());
    assert!(Cli::try_parse_from(["dorie-wheel", "tags", "-p", "win_amd64."]).is_err());
    assert!(
        Cli::try_parse_from([
            "dorie-wheel",
            "tags",
            "-p",
            "manylinux_2_17_x86_64.manylinux2014_x86_64",
        ])
        .is_ok()
    );
}

#[test]
fn test_no_command() {
    let cli = Cli::try_parse_from(["dorie-wheel", "--no-default-inis"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.global.no_default_inis);
}
