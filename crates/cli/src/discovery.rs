// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for failfast.toml.

use std::path::{Path, PathBuf};

use crate::config::{self, CONFIG_FILE_NAME, Config};
use crate::error::{Error, Result};

/// Resolved configuration and the directory it applies to.
#[derive(Debug)]
pub struct Project {
    pub config: Config,
    /// Directory relative config paths resolve against.
    pub root: PathBuf,
}

/// Resolve, load and validate the config for this invocation.
///
/// Without a config file every setting takes its default and the root is `cwd`.
pub fn load_project(explicit: Option<&Path>, cwd: &Path) -> Result<Project> {
    let config_path = resolve_config(explicit, cwd)?;
    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Config::default()
        }
    };
    Ok(Project {
        config,
        root: project_root(config_path.as_deref(), cwd),
    })
}

/// Find failfast.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        current = current.parent()?;
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (clap also reads `FAILFAST_CONFIG`)
/// 2. Discovery from current directory up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.exists() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        }),
        None => Ok(find_config(cwd)),
    }
}

/// Directory that relative config paths resolve against.
///
/// The directory holding the config file, or `cwd` when running on defaults.
pub fn project_root(config_path: Option<&Path>, cwd: &Path) -> PathBuf {
    config_path
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf())
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
