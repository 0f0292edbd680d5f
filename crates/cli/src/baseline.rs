// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Baseline file I/O for the test-count ratchet.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current baseline format version.
pub const BASELINE_VERSION: u32 = 1;

/// Stored test count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Baseline {
    /// Format version for forward compatibility.
    pub version: u32,

    /// Last update timestamp (ISO 8601).
    pub updated: DateTime<Utc>,

    /// Git commit hash when baseline was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// Number of `test_*` functions.
    pub tests: usize,
}

impl Baseline {
    /// Create a new baseline with current timestamp.
    pub fn new(tests: usize) -> Self {
        Self {
            version: BASELINE_VERSION,
            updated: Utc::now(),
            commit: None,
            tests,
        }
    }

    /// Load baseline from file, returning None if not found.
    pub fn load(path: &Path) -> Result<Option<Self>, BaselineError> {
        if !path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| BaselineError::Read(e.to_string()))?;

        let baseline: Baseline =
            serde_json::from_str(&content).map_err(|e| BaselineError::Parse(e.to_string()))?;

        if baseline.version > BASELINE_VERSION {
            return Err(BaselineError::Version {
                found: baseline.version,
                supported: BASELINE_VERSION,
            });
        }

        Ok(Some(baseline))
    }

    /// Save baseline to file, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<(), BaselineError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BaselineError::Write(e.to_string()))?;
        }

        let mut content = serde_json::to_string_pretty(self)
            .map_err(|e| BaselineError::Serialize(e.to_string()))?;
        content.push('\n');

        std::fs::write(path, content).map_err(|e| BaselineError::Write(e.to_string()))?;

        Ok(())
    }

    /// Set git commit hash from current HEAD.
    pub fn with_commit(mut self, root: &Path) -> Self {
        if let Ok(output) = std::process::Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .current_dir(root)
            .output()
            && output.status.success()
        {
            self.commit = Some(String::from_utf8_lossy(&output.stdout).trim().to_string());
        }
        self
    }
}

/// Errors that can occur during baseline operations.
#[derive(Debug, thiserror::Error)]
pub enum BaselineError {
    #[error("failed to read baseline: {0}")]
    Read(String),

    #[error("failed to parse baseline: {0}")]
    Parse(String),

    #[error("baseline version {found} is newer than supported {supported}")]
    Version { found: u32, supported: u32 },

    #[error("failed to serialize baseline: {0}")]
    Serialize(String),

    #[error("failed to write baseline: {0}")]
    Write(String),
}

#[cfg(test)]
#[path = "baseline_tests.rs"]
mod tests;
