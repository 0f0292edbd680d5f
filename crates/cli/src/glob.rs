// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob pattern utilities.

use globset::{Glob, GlobSet, GlobSetBuilder};

/// Build a GlobSet from pattern strings.
///
/// Invalid patterns are logged and skipped.
pub fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => {
                tracing::warn!("invalid glob pattern '{}': {}", pattern, e);
            }
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Normalize user-facing exclude patterns to globs.
///
/// - `dir/` → `dir/**`
/// - `dir` → `dir/**`
/// - patterns containing `*` are kept as-is
pub fn normalize_exclude_patterns(patterns: &[String]) -> Vec<String> {
    patterns
        .iter()
        .map(|p| {
            if p.ends_with('/') {
                format!("{}**", p)
            } else if !p.contains('*') {
                format!("{}/**", p.trim_end_matches('/'))
            } else {
                p.clone()
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
