// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Non-trivial functions that never raise.

use super::Rule;
use crate::config::MissingRaiseConfig;
use crate::python::FunctionDescriptor;

/// Informational: flags functions with more than `min_body_statements`
/// top-level statements and no `raise` anywhere. Off unless configured.
pub struct MissingRaise {
    min_body_statements: usize,
}

impl MissingRaise {
    pub const ID: &'static str = "missing-raise";

    pub fn new(min_body_statements: usize) -> Self {
        Self {
            min_body_statements,
        }
    }

    pub fn from_config(config: &MissingRaiseConfig) -> Self {
        Self::new(config.min_body_statements)
    }
}

impl Rule for MissingRaise {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn check(&self, function: &FunctionDescriptor) -> Option<String> {
        if function.body_len <= self.min_body_statements || function.has_raise {
            return None;
        }
        Some("has no raise statements.".to_string())
    }
}

#[cfg(test)]
#[path = "missing_raise_tests.rs"]
mod tests;
