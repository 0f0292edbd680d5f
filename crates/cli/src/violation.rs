// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Violation records shared by the linter, the bypass scanner and the output layer.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Kind of a violation that is not produced by a policy rule.
pub const SYNTAX_ERROR: &str = "syntax-error";

/// Kind of a bypass comment finding.
pub const BYPASS: &str = "bypass";

/// Severity of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Fails the run.
    Error,
    /// Reported, does not fail the run.
    Warn,
}

/// A single finding.
///
/// `message` is the finding text after the marker, for example
/// `Function 'load' takes dict but has no validation. ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub file: PathBuf,
    /// 1-based line number.
    pub line: u32,
    /// Rule identifier, [`SYNTAX_ERROR`] or [`BYPASS`].
    pub kind: &'static str,
    pub level: Level,
    pub message: String,
}

impl Violation {
    /// A policy rule finding for the function named `function`.
    pub fn rule(
        file: impl Into<PathBuf>,
        line: u32,
        kind: &'static str,
        level: Level,
        function: &str,
        finding: &str,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            kind,
            level,
            message: format!("Function '{}' {}", function, finding),
        }
    }

    /// The diagnostic for a file that cannot be parsed.
    pub fn syntax_error(file: impl Into<PathBuf>, line: u32, detail: impl fmt::Display) -> Self {
        Self {
            file: file.into(),
            line,
            kind: SYNTAX_ERROR,
            level: Level::Error,
            message: format!("Syntax error: {}", detail),
        }
    }

    /// The diagnostic for a file that cannot be read or decoded.
    pub fn unreadable(file: impl Into<PathBuf>, detail: impl fmt::Display) -> Self {
        Self {
            file: file.into(),
            line: 1,
            kind: SYNTAX_ERROR,
            level: Level::Error,
            message: format!("Cannot read file: {}", detail),
        }
    }

    /// A bypass comment on `line`.
    pub fn bypass(file: impl Into<PathBuf>, line: u32, description: &str, text: &str) -> Self {
        Self {
            file: file.into(),
            line,
            kind: BYPASS,
            level: Level::Error,
            message: format!("{}: {}", description, text),
        }
    }

    /// `[X]` for diagnostics, `[!]` for errors, `[?]` for warnings.
    pub fn marker(&self) -> &'static str {
        match (self.kind, self.level) {
            (SYNTAX_ERROR, _) => "[X]",
            (_, Level::Error) => "[!]",
            (_, Level::Warn) => "[?]",
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} {}",
            self.file.display(),
            self.line,
            self.marker(),
            self.message
        )
    }
}

/// Ordered violations from one run plus the number of files looked at.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LintReport {
    pub violations: Vec<Violation>,
    pub files_checked: usize,
}

impl LintReport {
    /// Append the results of one more file.
    pub fn push_file(&mut self, violations: Vec<Violation>) {
        self.files_checked += 1;
        self.violations.extend(violations);
    }

    /// No error-level violations.
    pub fn passed(&self) -> bool {
        !self.violations.iter().any(Violation::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
