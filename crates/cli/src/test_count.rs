// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-count ratchet.
//!
//! Counts `test_*` functions through the syntax tree rather than by running
//! pytest collection, so no project environment is needed. The count may
//! only go up: a drop below the stored baseline fails.

use std::path::Path;

use rayon::prelude::*;

use crate::error::Result;
use crate::python::{ParsedModule, is_test_module, new_parser, visit_functions};
use crate::walker::FileWalker;

/// Name prefix of a test function.
const TEST_FUNCTION_PREFIX: &str = "test_";

/// Tests found under a directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TestCount {
    pub tests: usize,
    pub files: usize,
}

/// Count `test_*` functions in a module, sync or async, at any nesting.
///
/// A module with a syntax error counts zero.
pub fn count_in_source(source: &str) -> Result<usize> {
    let mut parser = new_parser()?;
    let module = ParsedModule::parse(&mut parser, source)?;
    if module.syntax_error().is_some() {
        return Ok(0);
    }

    let mut count = 0;
    visit_functions(module.root(), &mut |node| {
        if node
            .child_by_field_name("name")
            .is_some_and(|name| module.text(name).starts_with(TEST_FUNCTION_PREFIX))
        {
            count += 1;
        }
    });
    Ok(count)
}

/// Count tests in one file. Unreadable files count zero.
pub fn count_in_file(path: &Path) -> Result<usize> {
    match std::fs::read_to_string(path) {
        Ok(source) => count_in_source(&source),
        Err(e) => {
            tracing::warn!("cannot read {}: {}", path.display(), e);
            Ok(0)
        }
    }
}

/// Count tests in every `test_*.py` below `dir`. A missing directory counts zero.
pub fn count_tests(dir: &Path, walker: &FileWalker) -> Result<TestCount> {
    if !dir.is_dir() {
        tracing::debug!("tests directory {} not found", dir.display());
        return Ok(TestCount::default());
    }

    let (walked, _) = walker.walk_collect(dir);
    let files: Vec<_> = walked
        .into_iter()
        .map(|f| f.path)
        .filter(|p| is_test_module(p))
        .collect();

    let counts = files
        .par_iter()
        .map(|file| count_in_file(file))
        .collect::<Result<Vec<_>>>()?;

    Ok(TestCount {
        tests: counts.iter().sum(),
        files: files.len(),
    })
}

/// Result of comparing the current count with the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatchetOutcome {
    /// `--update`: the baseline was reset to the current count.
    Reset { previous: usize, current: usize },
    /// Fewer tests than the baseline.
    Regressed { baseline: usize, current: usize },
    /// More tests than the baseline; the baseline moves up.
    Increased { previous: usize, current: usize },
    Stable { current: usize },
}

impl RatchetOutcome {
    /// Compare `current` with the stored count (missing baseline counts zero).
    pub fn evaluate(current: usize, baseline: Option<usize>, force_update: bool) -> Self {
        let previous = baseline.unwrap_or(0);
        if force_update {
            return Self::Reset { previous, current };
        }
        match current.cmp(&previous) {
            std::cmp::Ordering::Less => Self::Regressed {
                baseline: previous,
                current,
            },
            std::cmp::Ordering::Greater => Self::Increased { previous, current },
            std::cmp::Ordering::Equal => Self::Stable { current },
        }
    }

    pub fn passed(&self) -> bool {
        !matches!(self, Self::Regressed { .. })
    }

    /// The count to store, if the baseline file should be written.
    pub fn new_baseline(&self) -> Option<usize> {
        match *self {
            Self::Reset { current, .. } | Self::Increased { current, .. } => Some(current),
            Self::Regressed { .. } | Self::Stable { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "test_count_tests.rs"]
mod tests;
