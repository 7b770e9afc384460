// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, Result};
use anyhow::Context;
use bon::Builder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;
use wax::{Glob, Program as _};

/// Options for collecting the files of a package directory.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Respect .gitignore files
    #[builder(setters(name = with_respect_gitignore), default = false)]
    respect_gitignore: bool,
    /// Follow symbolic links; a linked file is collected under its link path
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Skip directories matching these names (exact match)
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
    /// Glob patterns, relative to the walk root, of files to leave out
    #[builder(setters(name = with_exclude), default)]
    exclude: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    /// Returns whether to include hidden files/directories.
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Returns whether to respect .gitignore files.
    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    /// Returns whether symbolic links are followed.
    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    /// Returns the skip directories list.
    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    /// Returns the exclusion globs.
    #[must_use]
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Options for wheel payloads.
    ///
    /// Bytecode caches and VCS metadata never ship. Ignore files are not
    /// consulted, since the bundled binary is usually gitignored. Symlinks
    /// are followed so that linked tools ship as copies of their target; a
    /// dangling link or a link loop fails the walk.
    #[must_use]
    pub fn for_wheel_payload(exclude: Vec<String>) -> Self {
        Self::builder()
            .with_follow_links(true)
            .with_skip_dirs(vec![
                "__pycache__".to_string(),
                ".git".to_string(),
                ".hg".to_string(),
                ".svn".to_string(),
            ])
            .with_exclude(exclude)
            .build()
    }
}

/// Builds a `WalkBuilder` with the given options, using `filter_entry` for directory skipping.
fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder.follow_links(options.follow_links());
    builder.hidden(!options.include_hidden());
    builder.ignore(options.respect_gitignore());
    builder.git_ignore(options.respect_gitignore());
    builder.git_global(options.respect_gitignore());
    builder.git_exclude(options.respect_gitignore());
    builder.parents(options.respect_gitignore());

    // Evaluated before descending, so skipped trees are never read
    if !options.skip_dirs().is_empty() {
        let skip_dirs: Arc<Vec<String>> = Arc::new(options.skip_dirs().to_vec());
        builder.filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir())
                && let Some(name) = entry.file_name().to_str()
                && skip_dirs.iter().any(|skip| skip == name)
            {
                return false;
            }
            true
        });
    }

    builder
}

fn compile_excludes(patterns: &[String]) -> Result<Vec<Glob<'static>>> {
    patterns
        .iter()
        .map(|pattern| {
            Glob::new(pattern)
                .map(Glob::into_owned)
                .map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))
        })
        .collect()
}

/// Collects every regular file under `root`, sorted by path.
///
/// Any traversal error aborts the collection.
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - An exclusion glob is invalid.
/// - Any directory entry cannot be read.
///
/// # Example
/// ```no_run
/// use dorie_wheel::utility::fs::walk::{collect_files, WalkOptions};
///
/// let files = collect_files("pkg/dorie", &WalkOptions::default())?;
/// println!("Found {} files", files.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn collect_files<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.is_dir() {
        return Err(FsError::NotFound(root.display().to_string()).into());
    }

    let excludes = compile_excludes(options.exclude())?;
    let mut files = Vec::new();

    for entry in build_walker(root, options).build() {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let rel_path = path.strip_prefix(root).unwrap_or(path);
        if excludes.iter().any(|glob| glob.is_match(rel_path)) {
            trace!(path = %path.display(), "excluded from walk");
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}
