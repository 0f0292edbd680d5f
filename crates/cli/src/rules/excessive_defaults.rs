// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Too many parameters with default values.

use super::Rule;
use crate::config::ExcessiveDefaultsConfig;
use crate::python::FunctionDescriptor;

/// Flags functions where more than `max_ratio` of the effective parameters
/// carry a default value.
///
/// The receiver and variadic parameters are not counted. A lone
/// `x: T | None = None` parameter is explicit optionality, not a lax default.
pub struct ExcessiveDefaults {
    max_ratio: f64,
    min_params: usize,
}

impl ExcessiveDefaults {
    pub const ID: &'static str = "excessive-defaults";

    pub fn new(max_ratio: f64, min_params: usize) -> Self {
        Self {
            max_ratio,
            min_params,
        }
    }

    pub fn from_config(config: &ExcessiveDefaultsConfig) -> Self {
        Self::new(config.max_ratio, config.min_params)
    }
}

impl Default for ExcessiveDefaults {
    fn default() -> Self {
        Self::from_config(&ExcessiveDefaultsConfig::default())
    }
}

impl Rule for ExcessiveDefaults {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check(&self, function: &FunctionDescriptor) -> Option<String> {
        let params: Vec<_> = function.effective_params().collect();
        let total = params.len();
        if total == 0 || total < self.min_params {
            return None;
        }

        let defaults = params.iter().filter(|p| p.has_default()).count();
        if let [only] = params.as_slice()
            && only.is_optional_idiom()
        {
            return None;
        }

        let ratio = defaults as f64 / total as f64;
        tracing::trace!("{}: {}/{} defaulted", function.name, defaults, total);
        if ratio <= self.max_ratio {
            return None;
        }

        Some(format!(
            "has {}/{} parameters with defaults (>{}%). Consider making some required.",
            defaults,
            total,
            (self.max_ratio * 100.0).round()
        ))
    }
}

#[cfg(test)]
#[path = "excessive_defaults_tests.rs"]
mod tests;
