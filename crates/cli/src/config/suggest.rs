// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule name suggestions for config validation.

use std::path::Path;

/// Rule tables accepted under `[check]`.
pub(super) const KNOWN_RULE_TABLES: &[&str] =
    &["excessive_defaults", "unvalidated_map", "missing_raise"];

/// Suggest a rule table name for a typo.
pub fn suggest_rule_name(unknown: &str) -> Option<&'static str> {
    if unknown.is_empty() {
        return None;
    }

    let suggestion = match unknown {
        "defaults" | "default_params" | "excessive-defaults" | "too_many_defaults" => {
            Some("excessive_defaults")
        }
        "dict" | "dict_validation" | "unvalidated-map" | "map" => Some("unvalidated_map"),
        "raise" | "no_raise" | "missing-raise" | "validation" => Some("missing_raise"),
        _ => None,
    };

    if suggestion.is_some() {
        return suggestion;
    }

    // Prefix matching, at least 3 chars to avoid noise
    if unknown.len() >= 3 {
        for &name in KNOWN_RULE_TABLES {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(name);
            }
        }
    }

    None
}

/// Warn about an unknown `[check.<name>]` table with a suggestion.
pub fn warn_unknown_rule(path: &Path, key: &str) {
    match suggest_rule_name(key) {
        Some(suggested) => eprintln!(
            "failfast: warning: {}: unrecognized field `check.{}` (ignored)\n  Did you mean `check.{}`?",
            path.display(),
            key,
            suggested
        ),
        None => eprintln!(
            "failfast: warning: {}: unrecognized field `check.{}` (ignored)\n  Known rules: {}",
            path.display(),
            key,
            KNOWN_RULE_TABLES.join(", ")
        ),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
