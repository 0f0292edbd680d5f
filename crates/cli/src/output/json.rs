// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::violation::{LintReport, Violation};

/// Top-level JSON document of `failfast check -o json`.
#[derive(Debug, Serialize)]
pub struct LintOutput<'a> {
    pub timestamp: String,
    pub passed: bool,
    pub files_checked: usize,
    pub violations: &'a [Violation],
}

impl<'a> LintOutput<'a> {
    /// Output for `report`, stamped with the current time.
    pub fn new(report: &'a LintReport) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            passed: report.passed(),
            files_checked: report.files_checked,
            violations: &report.violations,
        }
    }
}

/// JSON document when a path given to `check` does not exist.
#[derive(Debug, Serialize)]
pub struct PathNotFoundOutput {
    pub timestamp: String,
    pub passed: bool,
    pub error: &'static str,
    pub path: String,
}

impl PathNotFoundOutput {
    pub fn new(path: &Path) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            passed: false,
            error: "path not found",
            path: path.display().to_string(),
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON document.
    pub fn write<T: Serialize>(&mut self, output: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
