// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wheel archive writer.
//!
//! ```text
//! WheelBuilder::build(out_dir, force, dry_run)
//!   check package dirs   --> MissingPackageDir
//!   collect payload      pkg/<package>/** (sorted, excludes applied)
//!   dist-info            METADATA, WHEEL, entry_points.txt, top_level.txt
//!   NamedTempFile in out_dir --> zip --> RECORD (last) --> persist
//! ```
//!
//! The archive only appears under its final name once it is complete.

use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use super::metadata::{EntryPoint, PackageMetadata, render_entry_points};
use super::record::{Record, RecordEntry};
use super::tags::WheelTag;
use crate::error::{FsError, PackageError, Result};
use crate::utility::fs::walk::{WalkOptions, collect_files};

/// Wheel format version written to `WHEEL`.
pub const WHEEL_VERSION: &str = "1.0";

const FILE_MODE: u32 = 0o644;

/// Escapes a distribution name for filenames: runs of `-_.` become `_`.
#[must_use]
pub fn escape_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_separator = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator {
                out.push('_');
            }
            in_separator = true;
        } else {
            out.extend(c.to_lowercase());
            in_separator = false;
        }
    }
    out
}

/// Escapes a version for filenames.
#[must_use]
pub fn escape_version(version: &str) -> String {
    version.replace('-', "_")
}

/// `{name}-{version}-{python}-{abi}-{platform}.whl`
#[must_use]
pub fn wheel_filename(name: &str, version: &str, tag: &WheelTag) -> String {
    format!("{}-{}-{tag}.whl", escape_name(name), escape_version(version))
}

/// `{name}-{version}.dist-info`
#[must_use]
pub fn dist_info_dir(name: &str, version: &str) -> String {
    format!("{}-{}.dist-info", escape_name(name), escape_version(version))
}

/// Renders the `WHEEL` file.
#[must_use]
pub fn render_wheel_file(root_is_pure: bool, tag: &WheelTag) -> String {
    let mut out = format!(
        "Wheel-Version: {WHEEL_VERSION}\nGenerator: {} {}\nRoot-Is-Purelib: {root_is_pure}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );
    for expanded in tag.expand() {
        out.push_str("Tag: ");
        out.push_str(&expanded);
        out.push('\n');
    }
    out
}

/// A file as it will be stored in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveMember {
    /// Forward-slash path inside the wheel.
    pub path: String,
    pub contents: Vec<u8>,
    /// Unix permission bits.
    pub mode: u32,
}

impl ArchiveMember {
    #[must_use]
    pub fn text(path: impl Into<String>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents: contents.into_bytes(),
            mode: FILE_MODE,
        }
    }
}

/// Everything needed to assemble one wheel.
#[derive(Debug, Clone, Builder)]
pub struct WheelSpec {
    metadata: PackageMetadata,
    #[builder(default)]
    entry_points: Vec<EntryPoint>,
    tag: WheelTag,
    #[builder(default = false)]
    root_is_pure: bool,
    #[builder(into)]
    package_dir: PathBuf,
    packages: Vec<String>,
    #[builder(default)]
    exclude: Vec<String>,
}

impl WheelSpec {
    #[must_use]
    pub const fn metadata(&self) -> &PackageMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn entry_points(&self) -> &[EntryPoint] {
        &self.entry_points
    }

    #[must_use]
    pub const fn tag(&self) -> &WheelTag {
        &self.tag
    }

    #[must_use]
    pub const fn root_is_pure(&self) -> bool {
        self.root_is_pure
    }

    #[must_use]
    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    #[must_use]
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    #[must_use]
    pub fn filename(&self) -> String {
        wheel_filename(&self.metadata.name, &self.metadata.version, &self.tag)
    }

    #[must_use]
    pub fn dist_info_dir(&self) -> String {
        dist_info_dir(&self.metadata.name, &self.metadata.version)
    }

    /// The `.dist-info` members except `RECORD`.
    #[must_use]
    pub fn dist_info_members(&self) -> Vec<ArchiveMember> {
        let dir = self.dist_info_dir();
        let mut members = vec![
            ArchiveMember::text(format!("{dir}/METADATA"), self.metadata.render()),
            ArchiveMember::text(
                format!("{dir}/WHEEL"),
                render_wheel_file(self.root_is_pure, &self.tag),
            ),
        ];
        if !self.entry_points.is_empty() {
            members.push(ArchiveMember::text(
                format!("{dir}/entry_points.txt"),
                render_entry_points(&self.entry_points),
            ));
        }
        let mut top_level = self.packages.join("\n");
        top_level.push('\n');
        members.push(ArchiveMember::text(format!("{dir}/top_level.txt"), top_level));
        members
    }

    /// Reads every payload file of the configured packages.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::MissingPackageDir`] if a package directory is
    /// absent, or an error if any file cannot be read.
    pub fn collect_payload(&self) -> Result<Vec<ArchiveMember>> {
        let options = WalkOptions::for_wheel_payload(self.exclude.clone());
        let mut members = Vec::new();

        for package in &self.packages {
            let root = self.package_dir.join(package);
            if !root.is_dir() {
                return Err(PackageError::MissingPackageDir {
                    path: root.display().to_string(),
                }
                .into());
            }

            for file in collect_files(&root, &options)? {
                let rel = file.strip_prefix(&self.package_dir).with_context(|| {
                    format!("{} escapes {}", file.display(), self.package_dir.display())
                })?;
                let path = archive_path(rel);
                let contents =
                    std::fs::read(&file).map_err(|e| FsError::from_io(&file, e))?;
                let mode = file_mode(&file)?;
                debug!(path = %path, size = contents.len(), "payload file");
                members.push(ArchiveMember {
                    path,
                    contents,
                    mode,
                });
            }
        }

        Ok(members)
    }
}

fn archive_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(unix)]
fn file_mode(path: &Path) -> Result<u32> {
    use std::os::unix::fs::PermissionsExt;
    let metadata = std::fs::metadata(path).map_err(|e| FsError::from_io(path, e))?;
    Ok(metadata.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn file_mode(path: &Path) -> Result<u32> {
    let is_exe = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("exe"));
    Ok(if is_exe { 0o755 } else { FILE_MODE })
}

/// Writes `members` followed by `RECORD` into a zip stream.
///
/// Timestamps are pinned to the zip epoch so identical inputs give
/// identical archives.
///
/// # Errors
///
/// Returns an error if the zip stream cannot be written.
pub fn write_wheel<W: Write + Seek>(
    writer: W,
    members: &[ArchiveMember],
    dist_info_dir: &str,
) -> Result<(W, Record)> {
    let mut zip = ZipWriter::new(writer);
    let mut record = Record::new();

    for member in members {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
            .unix_permissions(member.mode);
        zip.start_file(member.path.as_str(), options)
            .with_context(|| format!("failed to add {}", member.path))?;
        zip.write_all(&member.contents)
            .with_context(|| format!("failed to write {}", member.path))?;
        record.push(RecordEntry::for_contents(
            member.path.as_str(),
            &member.contents,
        ));
    }

    let record_path = format!("{dist_info_dir}/RECORD");
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(FILE_MODE);
    zip.start_file(record_path.as_str(), options)
        .context("failed to add RECORD")?;
    zip.write_all(record.render(&record_path).as_bytes())
        .context("failed to write RECORD")?;

    let writer = zip.finish().context("failed to finalize zip archive")?;
    Ok((writer, record))
}

/// Result of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub path: PathBuf,
    pub file_count: usize,
    pub written: bool,
}

/// Assembles a wheel from a [`WheelSpec`].
#[derive(Debug, Clone)]
pub struct WheelBuilder {
    spec: WheelSpec,
}

impl WheelBuilder {
    #[must_use]
    pub const fn new(spec: WheelSpec) -> Self {
        Self { spec }
    }

    #[must_use]
    pub const fn spec(&self) -> &WheelSpec {
        &self.spec
    }

    /// Builds the wheel into `out_dir`.
    ///
    /// In dry-run mode the payload is still collected and validated, but
    /// nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A package directory is missing.
    /// - The wheel exists and `force` is false.
    /// - The output directory or archive cannot be written.
    pub async fn build(&self, out_dir: &Path, force: bool, dry_run: bool) -> Result<BuildOutcome> {
        let target = out_dir.join(self.spec.filename());

        let spec = self.spec.clone();
        let mut members = tokio::task::spawn_blocking(move || spec.collect_payload())
            .await
            .context("payload collection task panicked")??;
        members.extend(self.spec.dist_info_members());
        // RECORD itself is the extra member
        let file_count = members.len() + 1;

        if dry_run {
            for member in &members {
                info!(path = %member.path, size = member.contents.len(), "[dry-run] Would add");
            }
            info!(wheel = %target.display(), file_count, "[dry-run] Would write wheel");
            return Ok(BuildOutcome {
                path: target,
                file_count,
                written: false,
            });
        }

        if target.exists() && !force {
            return Err(PackageError::OutputExists {
                path: target.display().to_string(),
            }
            .into());
        }

        tokio::fs::create_dir_all(out_dir)
            .await
            .map_err(|e| FsError::from_io(out_dir, e))?;

        let dist_info = self.spec.dist_info_dir();
        let archive_target = target.clone();
        let out_dir = out_dir.to_path_buf();
        tokio::task::spawn_blocking(move || {
            write_to_disk(&out_dir, &archive_target, &members, &dist_info)
        })
        .await
        .context("archive task panicked")??;

        info!(wheel = %target.display(), file_count, "Wheel written");
        Ok(BuildOutcome {
            path: target,
            file_count,
            written: true,
        })
    }
}

fn write_to_disk(
    out_dir: &Path,
    target: &Path,
    members: &[ArchiveMember],
    dist_info_dir: &str,
) -> Result<()> {
    let archive_error = |message: String| PackageError::Archive {
        path: target.display().to_string(),
        message,
    };

    let mut temp = NamedTempFile::new_in(out_dir).map_err(|e| FsError::from_io(out_dir, e))?;
    write_wheel(temp.as_file_mut(), members, dist_info_dir)
        .map_err(|e| archive_error(format!("{e:#}")))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| archive_error(e.to_string()))?;
    temp.persist(target)
        .map_err(|e| archive_error(e.error.to_string()))?;
    Ok(())
}
