// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end wheel builds against a scratch project directory.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use dorie_wheel::config::{CONFIG_FILE_NAME, Config, ConfigLoader};
use dorie_wheel::error::{PackageError, VersionFileError};
use dorie_wheel::wheel::WheelBuilder;
use dorie_wheel::wheel::plan::load_wheel_spec;
use dorie_wheel::wheel::record::record_hash;

fn write_project(root: &Path, version_file: &str) {
    std::fs::write(root.join("dorie_version.cmake"), version_file).unwrap();
    std::fs::write(
        root.join("README.md"),
        "# clang-format\n\nThe clang-format binary as a wheel.\n",
    )
    .unwrap();
    std::fs::write(
        root.join(CONFIG_FILE_NAME),
        "[wheel]\nplat_name = \"linux_x86_64\"\n",
    )
    .unwrap();

    let package = root.join("pkg/dorie");
    std::fs::create_dir_all(package.join("data/bin")).unwrap();
    std::fs::write(
        package.join("__init__.py"),
        "def clang_format():\n    pass\n",
    )
    .unwrap();
    std::fs::write(package.join("data/bin/clang-format"), b"\x7fELF\x02\x01\x01").unwrap();
}

fn load(root: &Path) -> Config {
    ConfigLoader::new()
        .with_project_dir(root)
        .add_toml_file_optional(root.join(CONFIG_FILE_NAME))
        .build()
        .unwrap()
}

fn read_archive(path: &Path) -> BTreeMap<String, Vec<u8>> {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut members = BTreeMap::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).unwrap();
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents).unwrap();
        members.insert(entry.name().to_string(), contents);
    }
    members
}

// =============================================================================
// Successful Builds
// =============================================================================

#[tokio::test]
async fn build_with_wheel_revision() {
    let temp = tempfile::tempdir().unwrap();
    write_project(
        temp.path(),
        "# clang-format release\nset(DORIE_VERSION 18.1.8)\nset(DORIE_WHEEL_VERSION 2)\n",
    );
    let config = load(temp.path());

    let spec = load_wheel_spec(&config, None).await.unwrap();
    let outcome = WheelBuilder::new(spec)
        .build(&config.wheel.out_dir, false, false)
        .await
        .unwrap();

    assert_eq!(
        outcome.path,
        temp.path()
            .join("dist")
            .join("dorie-18.1.8.2-py38.py39-none-linux_x86_64.whl")
    );

    let members = read_archive(&outcome.path);
    let metadata = String::from_utf8(members["dorie-18.1.8.2.dist-info/METADATA"].clone()).unwrap();
    assert!(metadata.contains("\nVersion: 18.1.8.2\n"));
    assert!(metadata.ends_with("The clang-format binary as a wheel.\n"));

    let entry_points =
        String::from_utf8(members["dorie-18.1.8.2.dist-info/entry_points.txt"].clone()).unwrap();
    insta::assert_snapshot!(entry_points, @r"
    [console_scripts]
    clang-format = clang_format:clang_format
    git-clang-format = clang_format:git_clang_format
    clang-format-diff.py = clang_format:clang_format_diff
    ");
}

#[tokio::test]
async fn build_record_matches_archive() {
    let temp = tempfile::tempdir().unwrap();
    write_project(
        temp.path(),
        "set(DORIE_VERSION 2.0.1)\nset(DORIE_WHEEL_VERSION 0)\n",
    );
    let config = load(temp.path());

    let spec = load_wheel_spec(&config, None).await.unwrap();
    let outcome = WheelBuilder::new(spec)
        .build(&config.wheel.out_dir, false, false)
        .await
        .unwrap();
    let members = read_archive(&outcome.path);

    let record_path = "dorie-2.0.1.dist-info/RECORD";
    let record = String::from_utf8(members[record_path].clone()).unwrap();
    let mut listed = Vec::new();
    for line in record.lines() {
        let mut fields = line.split(',');
        let path = fields.next().unwrap();
        let hash = fields.next().unwrap();
        let size = fields.next().unwrap();
        listed.push(path.to_string());

        if path == record_path {
            assert!(hash.is_empty() && size.is_empty());
            continue;
        }
        let contents = &members[path];
        assert_eq!(hash, record_hash(contents), "hash of {path}");
        assert_eq!(size, contents.len().to_string(), "size of {path}");
    }

    assert_eq!(listed.last().map(String::as_str), Some(record_path));
    listed.sort();
    let archived: Vec<String> = members.keys().cloned().collect();
    assert_eq!(listed, archived);
}

#[tokio::test]
async fn build_is_reproducible() {
    let temp = tempfile::tempdir().unwrap();
    write_project(
        temp.path(),
        "set(DORIE_VERSION 2.0.1)\nset(DORIE_WHEEL_VERSION 0)\n",
    );
    let config = load(temp.path());
    let builder = WheelBuilder::new(load_wheel_spec(&config, None).await.unwrap());

    let first = builder
        .build(&temp.path().join("a"), false, false)
        .await
        .unwrap();
    let second = builder
        .build(&temp.path().join("b"), false, false)
        .await
        .unwrap();

    assert_eq!(
        std::fs::read(first.path).unwrap(),
        std::fs::read(second.path).unwrap()
    );
}

#[cfg(unix)]
#[tokio::test]
async fn build_ships_symlinked_binaries_as_copies() {
    let temp = tempfile::tempdir().unwrap();
    write_project(
        temp.path(),
        "set(DORIE_VERSION 18.1.8)\nset(DORIE_WHEEL_VERSION 0)\n",
    );
    std::os::unix::fs::symlink(
        "clang-format",
        temp.path().join("pkg/dorie/data/bin/clang-format-18"),
    )
    .unwrap();
    let config = load(temp.path());

    let spec = load_wheel_spec(&config, None).await.unwrap();
    let outcome = WheelBuilder::new(spec)
        .build(&config.wheel.out_dir, false, false)
        .await
        .unwrap();
    let members = read_archive(&outcome.path);

    assert_eq!(
        members["dorie/data/bin/clang-format-18"],
        members["dorie/data/bin/clang-format"]
    );
    let record = String::from_utf8(members["dorie-18.1.8.dist-info/RECORD"].clone()).unwrap();
    assert!(record.contains("dorie/data/bin/clang-format-18,sha256="));
}

#[tokio::test]
async fn build_rejects_attempts_to_change_fixed_tags() {
    let temp = tempfile::tempdir().unwrap();
    write_project(
        temp.path(),
        "set(DORIE_VERSION 2.0.1)\nset(DORIE_WHEEL_VERSION 0)\n",
    );

    for assignment in [
        "wheel.root_is_pure=true",
        "wheel.python_tag=py3",
        "wheel.abi_tag=cp311",
    ] {
        let result = ConfigLoader::new()
            .with_project_dir(temp.path())
            .set_assignment(assignment)
            .unwrap()
            .build();
        assert!(result.is_err(), "{assignment} should be rejected");
    }

    let config = load(temp.path());
    let outcome = WheelBuilder::new(load_wheel_spec(&config, None).await.unwrap())
        .build(&config.wheel.out_dir, false, false)
        .await
        .unwrap();
    let members = read_archive(&outcome.path);
    let wheel = String::from_utf8(members["dorie-2.0.1.dist-info/WHEEL"].clone()).unwrap();

    assert!(wheel.contains("Root-Is-Purelib: false\n"));
    assert!(wheel.contains("Tag: py38-none-linux_x86_64\nTag: py39-none-linux_x86_64\n"));
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn build_fails_on_malformed_version_file() {
    let temp = tempfile::tempdir().unwrap();
    write_project(temp.path(), "set(DORIE_VERSION 2.0.1)\nDORIE_WHEEL_VERSION 0\n");
    let config = load(temp.path());

    let err = load_wheel_spec(&config, None).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<VersionFileError>(),
        Some(VersionFileError::MalformedLine { line: 2, .. })
    ));
    assert!(!temp.path().join("dist").exists());
}

#[tokio::test]
async fn build_fails_on_missing_revision() {
    let temp = tempfile::tempdir().unwrap();
    write_project(temp.path(), "set(DORIE_VERSION 2.0.1)\n");
    let config = load(temp.path());

    let err = load_wheel_spec(&config, None).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<VersionFileError>(),
        Some(VersionFileError::MissingKey { key }) if key == "DORIE_WHEEL_VERSION"
    ));
    assert!(format!("{err:#}").ends_with(": version file does not declare 'DORIE_WHEEL_VERSION'"));
}

#[tokio::test]
async fn build_refuses_to_overwrite() {
    let temp = tempfile::tempdir().unwrap();
    write_project(
        temp.path(),
        "set(DORIE_VERSION 2.0.1)\nset(DORIE_WHEEL_VERSION 0)\n",
    );
    let config = load(temp.path());
    let builder = WheelBuilder::new(load_wheel_spec(&config, None).await.unwrap());

    let outcome = builder.build(&config.wheel.out_dir, false, false).await.unwrap();
    let before = std::fs::read(&outcome.path).unwrap();

    let err = builder
        .build(&config.wheel.out_dir, false, false)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PackageError>(),
        Some(PackageError::OutputExists { .. })
    ));
    assert_eq!(std::fs::read(&outcome.path).unwrap(), before);
}
