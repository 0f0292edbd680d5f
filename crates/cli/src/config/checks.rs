// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Policy rule configuration structures.

use serde::Deserialize;

/// Rule level: error, warn, or off.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    #[default]
    Error,
    Warn,
    Off,
}

/// `[check]` section: policy linter settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Functions whose name starts with any of these are exempt from all rules.
    pub exempt_prefixes: Vec<String>,

    pub excessive_defaults: ExcessiveDefaultsConfig,

    pub unvalidated_map: UnvalidatedMapConfig,

    pub missing_raise: MissingRaiseConfig,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            exempt_prefixes: Self::default_exempt_prefixes(),
            excessive_defaults: ExcessiveDefaultsConfig::default(),
            unvalidated_map: UnvalidatedMapConfig::default(),
            missing_raise: MissingRaiseConfig::default(),
        }
    }
}

impl CheckConfig {
    pub(super) fn default_exempt_prefixes() -> Vec<String> {
        vec!["_".to_string(), "test".to_string()]
    }

    /// Configured level of a rule by its identifier.
    pub fn level_for(&self, rule: &str) -> Option<CheckLevel> {
        match rule {
            "excessive-defaults" => Some(self.excessive_defaults.level),
            "unvalidated-map" => Some(self.unvalidated_map.level),
            "missing-raise" => Some(self.missing_raise.level),
            _ => None,
        }
    }
}

/// `[check.excessive_defaults]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExcessiveDefaultsConfig {
    pub level: CheckLevel,

    /// Flag when the defaulted share of parameters exceeds this ratio.
    pub max_ratio: f64,

    /// Functions with fewer effective parameters are never flagged.
    pub min_params: usize,
}

impl Default for ExcessiveDefaultsConfig {
    fn default() -> Self {
        Self {
            level: CheckLevel::Error,
            max_ratio: 0.5,
            min_params: 2,
        }
    }
}

/// `[check.unvalidated_map]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UnvalidatedMapConfig {
    pub level: CheckLevel,

    /// Case-insensitive substrings of an annotation that mark a mapping type.
    pub map_types: Vec<String>,
}

impl Default for UnvalidatedMapConfig {
    fn default() -> Self {
        Self {
            level: CheckLevel::Error,
            map_types: vec!["dict".to_string(), "mapping".to_string()],
        }
    }
}

/// `[check.missing_raise]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MissingRaiseConfig {
    /// Off by default: the rule is informational.
    pub level: CheckLevel,

    /// Only bodies longer than this many statements are considered.
    pub min_body_statements: usize,
}

impl Default for MissingRaiseConfig {
    fn default() -> Self {
        Self {
            level: CheckLevel::Off,
            min_body_statements: 3,
        }
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
