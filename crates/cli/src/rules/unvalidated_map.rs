// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping parameters accepted without any validation.

use super::Rule;
use crate::config::UnvalidatedMapConfig;
use crate::python::FunctionDescriptor;

/// Flags functions taking a mapping-typed parameter whose body neither
/// raises nor performs an `in` / `not in` membership test.
pub struct UnvalidatedMap {
    /// Lowercased annotation substrings that mark a mapping.
    map_types: Vec<String>,
}

impl UnvalidatedMap {
    pub const ID: &'static str = "unvalidated-map";

    pub fn new(map_types: &[String]) -> Self {
        Self {
            map_types: map_types.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn from_config(config: &UnvalidatedMapConfig) -> Self {
        Self::new(&config.map_types)
    }

    fn is_map_type(&self, annotation: &str) -> bool {
        let annotation = annotation.to_lowercase();
        self.map_types.iter().any(|t| annotation.contains(t.as_str()))
    }
}

impl Default for UnvalidatedMap {
    fn default() -> Self {
        Self::from_config(&UnvalidatedMapConfig::default())
    }
}

impl Rule for UnvalidatedMap {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check(&self, function: &FunctionDescriptor) -> Option<String> {
        let takes_map = function
            .params
            .iter()
            .filter(|p| !p.is_variadic())
            .filter_map(|p| p.annotation.as_deref())
            .any(|a| self.is_map_type(a));

        if !takes_map || function.has_raise || function.has_membership_test {
            return None;
        }

        Some(
            "takes dict but has no validation. Add: if 'key' not in dict: raise ValueError(...)"
                .to_string(),
        )
    }
}

#[cfg(test)]
#[path = "unvalidated_map_tests.rs"]
mod tests;
