// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles failfast.toml parsing with version validation and unknown key warnings.

mod checks;
mod parse;
mod suggest;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use checks::{
    CheckConfig, CheckLevel, ExcessiveDefaultsConfig, MissingRaiseConfig, UnvalidatedMapConfig,
};
pub use parse::unknown_keys;
pub use suggest::suggest_rule_name;

use crate::error::{Error, Result};
use parse::warn_unknown_key;
use suggest::{KNOWN_RULE_TABLES, warn_unknown_rule};

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "failfast.toml";

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Project configuration.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Policy linter configuration.
    #[serde(default)]
    pub check: CheckConfig,

    /// Bypass comment scanner configuration.
    #[serde(default)]
    pub bypass: BypassConfig,

    /// Test-count ratchet configuration.
    #[serde(default)]
    pub test_count: TestCountConfig,
}

/// Project-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Extra exclude patterns applied by the walker (e.g., "legacy/", "**/generated/**").
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// `[bypass]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BypassConfig {
    /// Paths scanned when none are given on the command line.
    pub paths: Vec<PathBuf>,

    /// Additional bypass patterns on top of the built-in ones.
    pub patterns: Vec<BypassPatternConfig>,
}

impl Default for BypassConfig {
    fn default() -> Self {
        Self {
            paths: vec![PathBuf::from("src"), PathBuf::from("tests")],
            patterns: Vec::new(),
        }
    }
}

/// A user-defined bypass pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct BypassPatternConfig {
    pub name: String,
    /// Regular expression, matched case-insensitively against each line.
    pub pattern: String,
    pub description: String,
}

/// `[test_count]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TestCountConfig {
    /// Directory searched for `test_*.py` files.
    pub tests: PathBuf,

    /// Baseline file, relative to the project root.
    pub baseline: PathBuf,
}

impl Default for TestCountConfig {
    fn default() -> Self {
        Self {
            tests: PathBuf::from("tests"),
            baseline: PathBuf::from(".failfast/test_count.json"),
        }
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| config_error(e, path))?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade failfast to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let config: Config = toml::from_str(content).map_err(|e| config_error(e, path))?;
    validate(&config, path)?;
    Ok(config)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    let table: toml::Table = toml::from_str(content).map_err(|e| config_error(e, path))?;
    for key in unknown_keys(&table) {
        match key.strip_prefix("check.") {
            Some(rule) if !rule.contains('.') && !KNOWN_RULE_TABLES.contains(&rule) => {
                warn_unknown_rule(path, rule)
            }
            _ => warn_unknown_key(path, &key),
        }
    }

    Ok(config)
}

fn validate(config: &Config, path: &Path) -> Result<()> {
    let ratio = config.check.excessive_defaults.max_ratio;
    if !(0.0..=1.0).contains(&ratio) {
        return Err(Error::Config {
            message: format!(
                "check.excessive_defaults.max_ratio must be between 0 and 1 (got {})",
                ratio
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let lists = [
        (
            "check.unvalidated_map.map_types",
            &config.check.unvalidated_map.map_types,
        ),
        ("check.exempt_prefixes", &config.check.exempt_prefixes),
    ];
    for (key, entries) in lists {
        if entries.iter().any(|e| e.trim().is_empty()) {
            return Err(Error::Config {
                message: format!("{} must not contain empty entries", key),
                path: Some(path.to_path_buf()),
            });
        }
    }
    Ok(())
}

fn config_error(e: toml::de::Error, path: &Path) -> Error {
    Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
