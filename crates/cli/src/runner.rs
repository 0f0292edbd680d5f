// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Target discovery and parallel linting.
//!
//! Files are linted in parallel with rayon. The indexed parallel iterator
//! keeps input order on collect, so the report lists files in walk order and
//! violations in source order within each file.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::linter::Linter;
use crate::python::{is_python_file, is_test_file_name};
use crate::violation::LintReport;
use crate::walker::FileWalker;

/// Resolves command-line paths into the Python files to lint.
pub struct TargetCollector {
    walker: FileWalker,
}

impl TargetCollector {
    pub fn new(walker: FileWalker) -> Self {
        Self { walker }
    }

    /// Every path must exist; the first missing one is an error.
    pub fn ensure_exist(paths: &[PathBuf]) -> Result<()> {
        match paths.iter().find(|p| !p.exists()) {
            Some(missing) => Err(Error::PathNotFound(missing.clone())),
            None => Ok(()),
        }
    }

    /// Expand `paths` into files, in argument order.
    ///
    /// An explicit file is linted when it has a `.py` suffix, whatever its
    /// name. Directories contribute their `.py` files except test modules
    /// and `conftest.py`.
    pub fn collect(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        Self::ensure_exist(paths)?;

        let mut files = Vec::new();
        for path in paths {
            if path.is_dir() {
                self.collect_dir(path, &mut files);
            } else if is_python_file(path) {
                files.push(path.clone());
            } else {
                tracing::debug!("skipping non-Python file {}", path.display());
            }
        }
        Ok(files)
    }

    fn collect_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let (walked, stats) = self.walker.walk_collect(dir);
        tracing::debug!(
            "{}: {} files found, {} skipped for size, {} symlink loops, {} errors",
            dir.display(),
            stats.files_found,
            stats.files_skipped_size,
            stats.symlink_loops,
            stats.errors
        );
        files.extend(
            walked
                .into_iter()
                .map(|f| f.path)
                .filter(|p| is_python_file(p) && !is_test_file_name(p)),
        );
    }
}

/// Lint `files` in parallel, preserving order.
pub fn lint_files(linter: &Linter, files: &[PathBuf]) -> Result<LintReport> {
    let per_file: Vec<_> = files
        .par_iter()
        .map(|file| {
            tracing::debug!("linting {}", file.display());
            linter.lint_file(file)
        })
        .collect::<Result<_>>()?;

    let mut report = LintReport::default();
    for violations in per_file {
        report.push_file(violations);
    }
    Ok(report)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
