//! Behavioral specs for failfast.toml discovery and validation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const EXCESSIVE: &str = "def f(a, b=1, c=2): pass\n";

/// > A missing config file means defaults
#[test]
fn runs_with_defaults_without_config() {
    let temp = Project::empty();
    temp.file(".git/HEAD", "ref: refs/heads/main\n");
    temp.file("src/app.py", EXCESSIVE);

    check()
        .pwd(temp.path())
        .args(&["src"])
        .fails()
        .stdout_has("Function 'f' has 2/3 parameters");
}

/// > Discovery walks up from the current directory
#[test]
fn config_is_found_in_parent_directory() {
    let temp = Project::empty();
    temp.config("[check.excessive_defaults]\nlevel = \"off\"\n");
    temp.file("pkg/app.py", EXCESSIVE);

    check()
        .pwd(temp.path().join("pkg"))
        .args(&["app.py"])
        .passes();
}

/// > Discovery stops at the git root
#[test]
fn discovery_stops_at_git_root() {
    let temp = Project::empty();
    temp.config("[check.excessive_defaults]\nlevel = \"off\"\n");
    temp.file("repo/.git/HEAD", "ref: refs/heads/main\n");
    temp.file("repo/app.py", EXCESSIVE);

    check()
        .pwd(temp.path().join("repo"))
        .args(&["app.py"])
        .fails();
}

#[test]
fn config_flag_selects_file() {
    let temp = Project::with_defaults();
    temp.file("strict.toml", "version = 1\n[check.excessive_defaults]\nlevel = \"off\"\n");
    temp.file("app.py", EXCESSIVE);

    check()
        .pwd(temp.path())
        .args(&["-C", "strict.toml", "app.py"])
        .passes();
}

#[test]
fn config_env_var_selects_file() {
    let temp = Project::with_defaults();
    temp.file("strict.toml", "version = 1\n[check.excessive_defaults]\nlevel = \"off\"\n");
    temp.file("app.py", EXCESSIVE);

    check()
        .pwd(temp.path())
        .env("FAILFAST_CONFIG", "strict.toml")
        .args(&["app.py"])
        .passes();
}

#[test]
fn missing_explicit_config_is_config_error() {
    let temp = Project::empty();
    temp.file("app.py", EXCESSIVE);

    check()
        .pwd(temp.path())
        .args(&["-C", "nope.toml", "app.py"])
        .exits(2)
        .stderr_has("config file not found: nope.toml");
}

// =============================================================================
// Validation
// =============================================================================

/// > version must be 1
#[test]
fn unsupported_version_is_config_error() {
    let temp = Project::empty();
    temp.file("failfast.toml", "version = 2\n");
    temp.file("app.py", "x = 1\n");

    check()
        .pwd(temp.path())
        .args(&["app.py"])
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn missing_version_is_config_error() {
    let temp = Project::empty();
    temp.file("failfast.toml", "[check]\n");
    temp.file("app.py", "x = 1\n");

    check()
        .pwd(temp.path())
        .args(&["app.py"])
        .exits(2)
        .stderr_has("missing required field: version");
}

#[test]
fn invalid_toml_is_config_error() {
    let temp = Project::empty();
    temp.file("failfast.toml", "version = \n");
    temp.file("app.py", "x = 1\n");

    check()
        .pwd(temp.path())
        .args(&["app.py"])
        .exits(2)
        .stderr_has("failfast: config error:");
}

#[test]
fn invalid_level_is_config_error() {
    let temp = Project::empty();
    temp.config("[check.unvalidated_map]\nlevel = \"fatal\"\n");
    temp.file("app.py", "x = 1\n");

    check().pwd(temp.path()).args(&["app.py"]).exits(2);
}

#[test]
fn out_of_range_ratio_is_config_error() {
    let temp = Project::empty();
    temp.config("[check.excessive_defaults]\nmax_ratio = 1.5\n");
    temp.file("app.py", "x = 1\n");

    check()
        .pwd(temp.path())
        .args(&["app.py"])
        .exits(2)
        .stderr_has("max_ratio must be between 0 and 1");
}

#[test]
fn empty_map_type_is_config_error() {
    let temp = Project::empty();
    temp.config("[check.unvalidated_map]\nmap_types = [\"dict\", \"\"]\n");
    temp.file("app.py", "x = 1\n");

    check()
        .pwd(temp.path())
        .args(&["app.py"])
        .exits(2)
        .stderr_has("map_types must not contain empty entries");
}

/// > Unknown keys produce warnings, not errors
#[test]
fn unknown_key_warns() {
    let temp = Project::empty();
    temp.config("colour = true\n");
    temp.file("app.py", "x = 1\n");

    check()
        .pwd(temp.path())
        .args(&["app.py"])
        .passes()
        .stderr_has("unrecognized field `colour` (ignored)");
}

#[test]
fn unknown_rule_table_suggests_name() {
    let temp = Project::empty();
    temp.config("[check.defaults]\nlevel = \"off\"\n");
    temp.file("app.py", "x = 1\n");

    check()
        .pwd(temp.path())
        .args(&["app.py"])
        .passes()
        .stderr_has("unrecognized field `check.defaults` (ignored)")
        .stderr_has("Did you mean `check.excessive_defaults`?");
}

#[test]
fn valid_config_produces_no_warnings() {
    let temp = Project::with_defaults();
    temp.file("app.py", "x = 1\n");

    check()
        .pwd(temp.path())
        .args(&["app.py"])
        .passes()
        .stderr_lacks("warning");
}

#[test]
fn map_types_are_configurable() {
    let temp = Project::empty();
    temp.config("[check.unvalidated_map]\nmap_types = [\"payload\"]\n");
    temp.file(
        "app.py",
        "def handle(body: Payload):\n    return body.x\n\ndef other(cfg: dict):\n    return cfg[\"k\"]\n",
    );

    check()
        .pwd(temp.path())
        .args(&["app.py"])
        .fails()
        .stdout_has("Function 'handle' takes dict")
        .stdout_lacks("Function 'other'");
}
