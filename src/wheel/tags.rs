// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wheel compatibility tags.
//!
//! ```text
//! detected  py3      - none - linux_x86_64
//!              |        |         |
//! override  py38.py39 - none      |   (root_is_pure = false)
//!              v        v         v
//! final     py38.py39-none-linux_x86_64
//! ```
//!
//! The wheel carries a native binary but no CPython extension, so the
//! interpreter and ABI tags are pinned while the platform tag follows the
//! build host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A compressed `python-abi-platform` tag set.
///
/// Each component may hold several `.`-separated values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelTag {
    pub python: String,
    pub abi: String,
    pub platform: String,
}

impl WheelTag {
    #[must_use]
    pub fn new(
        python: impl Into<String>,
        abi: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            python: python.into(),
            abi: abi.into(),
            platform: platform.into(),
        }
    }

    /// Tag a generic builder would assign before any override.
    #[must_use]
    pub fn generic(platform: impl Into<String>) -> Self {
        Self::new("py3", "none", platform)
    }

    /// Every concrete `py-abi-plat` triple of the set, in declaration order.
    #[must_use]
    pub fn expand(&self) -> Vec<String> {
        let mut tags = Vec::new();
        for python in self.python.split('.') {
            for abi in self.abi.split('.') {
                for platform in self.platform.split('.') {
                    tags.push(format!("{python}-{abi}-{platform}"));
                }
            }
        }
        tags
    }
}

impl fmt::Display for WheelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.python, self.abi, self.platform)
    }
}

/// Fixed override applied on top of the detected tags.
///
/// Only the default value is ever used to build a wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOverride {
    /// Whether the wheel installs into purelib. Always false for a wheel
    /// that bundles a platform binary.
    pub root_is_pure: bool,
    pub python: String,
    pub abi: String,
}

impl Default for TagOverride {
    fn default() -> Self {
        Self {
            root_is_pure: false,
            python: "py38.py39".to_string(),
            abi: "none".to_string(),
        }
    }
}

impl TagOverride {
    /// Replaces the interpreter and ABI tags, keeping the detected platform.
    #[must_use]
    pub fn apply(&self, detected: WheelTag) -> WheelTag {
        WheelTag {
            python: self.python.clone(),
            abi: self.abi.clone(),
            platform: detected.platform,
        }
    }
}

/// Normalises a platform name the way wheel filenames require.
///
/// A distutils-style name such as `macosx-10.9-x86_64` contains `-`; its
/// `-` and `.` both become `_`. A name without `-` is already a tag set
/// and is kept as is, so `.` still separates compressed platforms
/// (`manylinux_2_17_x86_64.manylinux2014_x86_64`).
#[must_use]
pub fn normalize_platform_tag(name: &str) -> String {
    if name.contains('-') {
        name.replace(['-', '.'], "_")
    } else {
        name.to_string()
    }
}

/// Whether `name` can be used as a platform name: non-empty, made of
/// ASCII alphanumerics, `_`, `.` and `-`, with no empty `.`-separated part
/// once normalised.
#[must_use]
pub fn is_valid_platform_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        && normalize_platform_tag(name)
            .split('.')
            .all(|part| !part.is_empty())
}

/// Platform tag for an OS/architecture pair as reported by `std::env::consts`.
#[must_use]
pub fn platform_tag_for(os: &str, arch: &str) -> String {
    let tag = match (os, arch) {
        ("linux", "x86") => "linux_i686".to_string(),
        ("linux", arch) => format!("linux_{arch}"),
        ("macos", "aarch64") => "macosx_11_0_arm64".to_string(),
        ("macos", arch) => format!("macosx_10_9_{arch}"),
        ("windows", "x86_64") => "win_amd64".to_string(),
        ("windows", "x86") => "win32".to_string(),
        ("windows", "aarch64") => "win_arm64".to_string(),
        (os, arch) => format!("{os}_{arch}"),
    };
    normalize_platform_tag(&tag)
}

/// Platform tag of the build host.
#[must_use]
pub fn detect_platform_tag() -> String {
    platform_tag_for(std::env::consts::OS, std::env::consts::ARCH)
}

/// Final tag for a wheel: an explicit platform name wins over detection.
#[must_use]
pub fn finalize_tag(tag_override: &TagOverride, plat_name: Option<&str>) -> WheelTag {
    let platform = plat_name.map_or_else(detect_platform_tag, normalize_platform_tag);
    tag_override.apply(WheelTag::generic(platform))
}
