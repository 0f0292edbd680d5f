// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// failfast error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// A path given on the command line does not exist.
    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Python grammar could not be loaded into the parser.
    #[error("parser error: {0}")]
    Parser(String),

    /// Test-count baseline could not be read or written.
    #[error(transparent)]
    Baseline(#[from] crate::baseline::BaselineError),
}

/// Result type using failfast Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No error-level violations
    Success = 0,
    /// Violations found, or a path given on the command line is missing
    Failed = 1,
    /// Configuration error; clap reports argument errors with the same code
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::PathNotFound(_) => ExitCode::Failed,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Parser(_) => ExitCode::InternalError,
            Error::Baseline(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
