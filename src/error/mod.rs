// dorie-wheel: clang-format wheel packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            WheelError (~24 bytes)
//!                    |
//!   +-------+--------+--------+------+---------+
//!   |       |        |        |      |         |
//!   v       v        v        v      v         v
//! Bail   Version   Config  Package  Fs    Io/Other
//!          Box       Box     Box    Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Version  Read, MalformedLine, MissingKey
//!   Config   ParseError, MissingKey, InvalidValue
//!   Package  InvalidEntryPoint, MissingPackageDir, OutputExists
//!   Fs       NotFound, PermissionDenied, IoError
//! ```
//!
//! Every variant aborts the packaging run; nothing is recovered locally.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`WheelError`].
pub type WheelResult<T> = std::result::Result<T, WheelError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum WheelError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Version declaration could not be resolved.
    #[error("version error: {0}")]
    Version(#[from] Box<VersionFileError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Wheel assembly error.
    #[error("package error: {0}")]
    Package(#[from] Box<PackageError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`WheelError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> WheelError {
    WheelError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for WheelError {
                fn from(err: $error) -> Self {
                    WheelError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    VersionFileError => Version,
    ConfigError => Config,
    PackageError => Package,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Version Declaration Errors ---

/// Errors raised while reading `set(<KEY> <VALUE>)` declarations.
#[derive(Debug, Error)]
pub enum VersionFileError {
    /// The declaration file could not be read.
    #[error("failed to read version file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line is neither blank, a comment, nor a two-token `set(...)`.
    #[error("version file not readable: line {line} is not of the form 'set(<KEY> <VALUE>)': {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A required key was never declared.
    #[error("version file does not declare '{key}'")]
    MissingKey { key: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Package Errors ---

/// Errors raised while assembling the wheel.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Console script declaration is not `name=module:callable`.
    #[error("invalid entry point '{spec}': {message}")]
    InvalidEntryPoint { spec: String, message: String },

    /// Package source directory does not exist.
    #[error("package directory not found: {path}")]
    MissingPackageDir { path: String },

    /// Target wheel already exists and `--force` was not given.
    #[error("wheel already exists: {path} (use --force to overwrite)")]
    OutputExists { path: String },

    /// Writing the archive failed.
    #[error("failed to write wheel '{path}': {message}")]
    Archive { path: String, message: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error raised while touching `path`.
    #[must_use]
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let display = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(display),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(display),
            _ => Self::IoError {
                path: display,
                source,
            },
        }
    }
}
