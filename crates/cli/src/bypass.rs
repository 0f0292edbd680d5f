// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bypass comment scanner.
//!
//! Finds comments that silence other linters wholesale (`# nosemgrep`,
//! a blanket `# noqa`, ...). Those tools respect their own suppressions, so
//! the scan is a plain line-by-line regex match.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use regex::{Regex, RegexBuilder};

use crate::config::BypassPatternConfig;
use crate::error::{Error, Result};
use crate::python::{PythonFiles, is_python_file};
use crate::violation::Violation;
use crate::walker::FileWalker;

/// Built-in patterns as (name, regex, description).
pub const BUILTIN_PATTERNS: &[(&str, &str, &str)] = &[
    (
        "nosemgrep",
        r"#\s*nosemgrep",
        "# nosemgrep - Semgrep bypass",
    ),
    (
        "noqa_blanket",
        r"#\s*noqa\s*$",
        "# noqa (blanket) - silences all warnings",
    ),
    (
        "type_ignore",
        r"#\s*type:\s*ignore\s*$",
        "# type: ignore (blanket) - silences all type errors",
    ),
    (
        "pylint_disable_all",
        r"#\s*pylint:\s*disable\s*=\s*all",
        "# pylint: disable=all - blanket disable",
    ),
];

/// Matched line text is cut to this many characters in reports.
const MAX_EXCERPT_CHARS: usize = 60;

/// A compiled bypass pattern.
#[derive(Debug)]
pub struct BypassPattern {
    pub name: String,
    regex: Regex,
    pub description: String,
}

impl BypassPattern {
    /// Compile a case-insensitive pattern.
    pub fn new(name: &str, pattern: &str, description: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::Config {
                message: format!("invalid bypass pattern '{}': {}", name, e),
                path: None,
            })?;
        Ok(Self {
            name: name.to_string(),
            regex,
            description: description.to_string(),
        })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Result of scanning a set of paths.
#[derive(Debug, Default)]
pub struct BypassReport {
    pub violations: Vec<Violation>,
    pub files_scanned: usize,
    /// Requested paths that do not exist.
    pub skipped_paths: Vec<PathBuf>,
}

impl BypassReport {
    /// Number of distinct files with at least one finding.
    pub fn files_with_findings(&self) -> usize {
        let mut files: Vec<&Path> = self.violations.iter().map(|v| v.file.as_path()).collect();
        files.dedup();
        files.len()
    }
}

/// Scans Python files for bypass comments.
pub struct BypassScanner {
    patterns: Vec<BypassPattern>,
    files: PythonFiles,
    walker: FileWalker,
}

impl BypassScanner {
    /// Built-in patterns followed by `extra`, checked in that order.
    pub fn new(extra: &[BypassPatternConfig], walker: FileWalker) -> Result<Self> {
        let builtin = BUILTIN_PATTERNS
            .iter()
            .map(|(name, pattern, description)| BypassPattern::new(name, pattern, description));
        let configured = extra
            .iter()
            .map(|p| BypassPattern::new(&p.name, &p.pattern, &p.description));
        let patterns = builtin.chain(configured).collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            files: PythonFiles::new(),
            walker,
        })
    }

    /// Findings in `source`, at most one per line.
    pub fn scan_source(&self, file: &Path, source: &str) -> Vec<Violation> {
        source
            .lines()
            .zip(1u32..)
            .filter_map(|(line, number)| {
                let pattern = self.patterns.iter().find(|p| p.is_match(line))?;
                tracing::trace!("{}:{}: matched {}", file.display(), number, pattern.name);
                Some(Violation::bypass(
                    file,
                    number,
                    &pattern.description,
                    &excerpt(line.trim()),
                ))
            })
            .collect()
    }

    /// Read and scan one file.
    pub fn scan_file(&self, file: &Path) -> Vec<Violation> {
        match std::fs::read_to_string(file) {
            Ok(source) => self.scan_source(file, &source),
            Err(e) => vec![Violation::unreadable(file, e)],
        }
    }

    /// Scan files and directories in argument order.
    ///
    /// Missing paths are recorded and skipped. Directories contribute their
    /// `.py` files except test modules, `conftest.py` and anything inside
    /// caches or virtual environments.
    pub fn scan_paths(&self, paths: &[PathBuf]) -> BypassReport {
        let mut report = BypassReport::default();
        let mut targets = Vec::new();

        for path in paths {
            if !path.exists() {
                tracing::warn!("bypass path does not exist: {}", path.display());
                report.skipped_paths.push(path.clone());
            } else if path.is_dir() {
                let (walked, _) = self.walker.walk_collect(path);
                targets.extend(
                    walked
                        .into_iter()
                        .map(|f| f.path)
                        .filter(|p| self.is_scanned(p)),
                );
            } else {
                targets.push(path.clone());
            }
        }

        let per_file: Vec<Vec<Violation>> =
            targets.par_iter().map(|file| self.scan_file(file)).collect();

        report.files_scanned = targets.len();
        report.violations = per_file.into_iter().flatten().collect();
        report
    }

    fn is_scanned(&self, path: &Path) -> bool {
        is_python_file(path) && !self.files.is_test(path) && !self.files.is_excluded(path)
    }
}

fn excerpt(text: &str) -> String {
    match text.char_indices().nth(MAX_EXCERPT_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "bypass_tests.rs"]
mod tests;
