// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File walking with gitignore support.
//!
//! Uses the `ignore` crate for file discovery that respects `.gitignore`,
//! custom exclude patterns, and depth limits. Entries are sorted by file
//! name within each directory so repeated runs report in the same order.

use std::path::{Path, PathBuf};

use crossbeam_channel::{Receiver, Sender, bounded};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::glob::normalize_exclude_patterns;

/// Maximum file size to process (10MB).
/// Larger files are skipped with a warning.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Directories skipped during traversal.
/// Filtered at the walker level so their subtrees are never read.
pub(crate) const SKIP_DIRECTORIES: &[&str] =
    &["__pycache__", "venv", ".venv", "node_modules", ".git"];

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (default: 100).
    pub max_depth: Option<usize>,

    /// Exclude patterns from `[project] exclude`, already in glob form.
    pub exclude_patterns: Vec<String>,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    /// Whether to skip hidden files.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            exclude_patterns: Vec::new(),
            git_ignore: true,
            hidden: true,
        }
    }
}

/// File discovered by the walker.
#[derive(Debug)]
pub struct WalkedFile {
    /// Path to the file.
    pub path: PathBuf,
}

/// Statistics from a walk operation.
#[derive(Debug, Default)]
pub struct WalkStats {
    /// Total files discovered.
    pub files_found: usize,

    /// Files skipped due to size limit (>10MB).
    pub files_skipped_size: usize,

    /// Symlink loops detected.
    pub symlink_loops: usize,

    /// Errors encountered.
    pub errors: usize,
}

/// File walker with gitignore support.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    /// Create a new walker with the given configuration.
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Create a walker from user-facing `[project] exclude` entries.
    pub fn from_excludes(exclude: &[String]) -> Self {
        Self::new(WalkerConfig {
            exclude_patterns: normalize_exclude_patterns(exclude),
            ..Default::default()
        })
    }

    /// Walk the given root directory, returning a receiver of discovered files.
    ///
    /// Files are streamed through the channel from a background thread.
    /// The handle can be joined to get stats.
    pub fn walk(&self, root: &Path) -> (Receiver<WalkedFile>, WalkHandle) {
        let (tx, rx) = bounded(1000);

        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .require_git(false)
            .follow_links(true)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));

        // Override globs without `!` whitelist; with `!` they exclude.
        if !self.config.exclude_patterns.is_empty() {
            let mut override_builder = OverrideBuilder::new(root);
            for pattern in &self.config.exclude_patterns {
                if let Err(e) = override_builder.add(&format!("!{}", pattern)) {
                    tracing::warn!("invalid exclude pattern '{}': {}", pattern, e);
                }
            }
            match override_builder.build() {
                Ok(overrides) => {
                    builder.overrides(overrides);
                }
                Err(e) => tracing::warn!("ignoring exclude patterns: {}", e),
            }
        }

        builder.filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !is_dir
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
        });

        (rx, Self::walk_sequential(builder, tx))
    }

    /// Run the walker in a background thread.
    fn walk_sequential(builder: WalkBuilder, tx: Sender<WalkedFile>) -> WalkHandle {
        let walker = builder.build();

        let handle = std::thread::spawn(move || {
            let mut stats = WalkStats::default();

            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        if is_loop_error(&err) {
                            tracing::warn!("symlink loop detected: {}", err);
                            stats.symlink_loops += 1;
                        } else {
                            tracing::warn!("walk error: {}", err);
                            stats.errors += 1;
                        }
                        continue;
                    }
                };

                if !entry.file_type().is_some_and(|t| t.is_file()) {
                    continue;
                }

                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                if size > MAX_FILE_SIZE {
                    tracing::warn!(
                        "skipping {} ({} bytes > 10MB limit)",
                        entry.path().display(),
                        size
                    );
                    stats.files_skipped_size += 1;
                    continue;
                }

                stats.files_found += 1;
                let walked = WalkedFile {
                    path: entry.into_path(),
                };
                if tx.send(walked).is_err() {
                    break;
                }
            }

            stats
        });

        WalkHandle { handle }
    }

    /// Walk and collect all files.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let (rx, handle) = self.walk(root);
        let files: Vec<_> = rx.iter().collect();
        let stats = handle.join();
        (files, stats)
    }
}

/// Handle to a running walk operation.
pub struct WalkHandle {
    handle: std::thread::JoinHandle<WalkStats>,
}

impl WalkHandle {
    /// Wait for the walk to complete and return stats.
    pub fn join(self) -> WalkStats {
        self.handle.join().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
