// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unknown key detection for failfast.toml.

use std::path::Path;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "project", "check", "bypass", "test_count"];

/// Known project keys in the config.
const KNOWN_PROJECT_KEYS: &[&str] = &["exclude"];

/// Known `[check]` keys besides the rule tables.
const KNOWN_CHECK_KEYS: &[&str] = &["exempt_prefixes"];

const KNOWN_EXCESSIVE_DEFAULTS_KEYS: &[&str] = &["level", "max_ratio", "min_params"];
const KNOWN_UNVALIDATED_MAP_KEYS: &[&str] = &["level", "map_types"];
const KNOWN_MISSING_RAISE_KEYS: &[&str] = &["level", "min_body_statements"];

const KNOWN_BYPASS_KEYS: &[&str] = &["paths", "patterns"];
const KNOWN_TEST_COUNT_KEYS: &[&str] = &["tests", "baseline"];

/// Dotted paths of all keys that failfast does not understand.
///
/// Returned in key order at every level.
pub fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();

    for (key, value) in table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.push(key.clone());
            continue;
        }
        let Some(section) = value.as_table() else {
            continue;
        };
        match key.as_str() {
            "project" => collect_unknown(section, "project", KNOWN_PROJECT_KEYS, &mut unknown),
            "bypass" => collect_unknown(section, "bypass", KNOWN_BYPASS_KEYS, &mut unknown),
            "test_count" => {
                collect_unknown(section, "test_count", KNOWN_TEST_COUNT_KEYS, &mut unknown)
            }
            "check" => collect_unknown_check(section, &mut unknown),
            _ => {}
        }
    }

    unknown
}

fn collect_unknown_check(section: &toml::Table, unknown: &mut Vec<String>) {
    for (key, value) in section {
        let rule_keys = match key.as_str() {
            "excessive_defaults" => KNOWN_EXCESSIVE_DEFAULTS_KEYS,
            "unvalidated_map" => KNOWN_UNVALIDATED_MAP_KEYS,
            "missing_raise" => KNOWN_MISSING_RAISE_KEYS,
            other if KNOWN_CHECK_KEYS.contains(&other) => continue,
            other => {
                unknown.push(format!("check.{}", other));
                continue;
            }
        };
        if let Some(rule_table) = value.as_table() {
            collect_unknown(rule_table, &format!("check.{}", key), rule_keys, unknown);
        }
    }
}

fn collect_unknown(section: &toml::Table, prefix: &str, known: &[&str], unknown: &mut Vec<String>) {
    for key in section.keys() {
        if !known.contains(&key.as_str()) {
            unknown.push(format!("{}.{}", prefix, key));
        }
    }
}

/// Print a warning for an unknown config key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "failfast: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}
