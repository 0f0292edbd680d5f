//! Behavioral specs for `failfast bypass`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Defaults to scanning src and tests under the project root
#[test]
fn default_paths_scan_src_and_tests() {
    let result = bypass().on("bypass").fails();
    let stdout = result.stdout();

    assert!(stdout.starts_with("Bypass comments found:\n\n"), "{}", stdout);
    assert!(stdout.contains("Total: 4 bypass comments in 2 files"));
    assert!(stdout.contains("To fix:"));
}

#[test]
fn findings_show_description_and_trimmed_line() {
    bypass()
        .on("bypass")
        .args(&["src"])
        .fails()
        .stdout_has("src/app.py:1: [!] # noqa (blanket) - silences all warnings: import os  # noqa\n")
        .stdout_has(
            "src/app.py:4: [!] # type: ignore (blanket) - silences all type errors: value = os.environ.get(\"HOME\")  # type: ignore\n",
        )
        .stdout_has("src/legacy.py:1: [!] # pylint: disable=all - blanket disable: # pylint: disable=all\n")
        .stdout_has("src/legacy.py:3: [!] # nosemgrep - Semgrep bypass: ");
}

/// > Scoped suppressions are not bypasses
#[test]
fn scoped_suppressions_are_allowed() {
    bypass()
        .on("bypass")
        .args(&["src"])
        .fails()
        .stdout_lacks("src/app.py:2:")
        .stdout_lacks("src/app.py:5:")
        .stdout_has("Total: 4 bypass comments in 2 files");
}

/// > Test modules are never scanned
#[test]
fn test_modules_are_skipped() {
    bypass()
        .on("bypass")
        .args(&["tests"])
        .passes()
        .stdout_eq("[OK] No bypass comments detected\n");
}

/// > A missing path is skipped with a warning
#[test]
fn missing_path_is_skipped() {
    bypass()
        .on("bypass")
        .args(&["nowhere", "tests"])
        .passes()
        .stdout_eq("[SKIP] Path does not exist: nowhere\n[OK] No bypass comments detected\n");
}

#[test]
fn missing_default_paths_are_skipped() {
    let temp = Project::with_defaults();
    temp.file("lib/app.py", "import os  # noqa\n");

    let result = bypass().pwd(temp.path()).passes();
    let stdout = result.stdout();
    assert_eq!(stdout.matches("[SKIP] Path does not exist:").count(), 2);
    assert!(stdout.ends_with("[OK] No bypass comments detected\n"));
}

/// > Matching is case-insensitive
#[test]
fn patterns_are_case_insensitive() {
    let temp = Project::with_defaults();
    temp.file("src/app.py", "import os  # NOQA\n");

    bypass()
        .pwd(temp.path())
        .args(&["src"])
        .fails()
        .stdout_has("src/app.py:1: [!] # noqa (blanket)");
}

#[test]
fn long_lines_are_truncated() {
    let temp = Project::with_defaults();
    let line = format!("value = {}  # nosemgrep", "x".repeat(80));
    temp.file("src/app.py", &format!("{}\n", line));

    bypass()
        .pwd(temp.path())
        .args(&["src"])
        .fails()
        .stdout_has(format!("Semgrep bypass: {}...\n", &line[..60]).as_str());
}

/// > Extra patterns may be added in config
#[test]
fn configured_patterns_extend_builtins() {
    let temp = Project::empty();
    temp.config(
        r##"
[bypass]
paths = ["pkg"]

[[bypass.patterns]]
name = "skip_policy"
pattern = "#\\s*skip-policy"
description = "# skip-policy - custom bypass"
"##,
    );
    temp.file("pkg/app.py", "x = 1  # skip-policy\ny = 2  # noqa\n");

    bypass()
        .pwd(temp.path())
        .fails()
        .stdout_has("app.py:1: [!] # skip-policy - custom bypass: x = 1  # skip-policy")
        .stdout_has("app.py:2: [!] # noqa (blanket)")
        .stdout_has("Total: 2 bypass comments in 1 file\n");
}

/// > An invalid pattern is a configuration error
#[test]
fn invalid_configured_pattern_is_config_error() {
    let temp = Project::empty();
    temp.config(
        r#"
[[bypass.patterns]]
name = "broken"
pattern = "(unclosed"
description = "never matches"
"#,
    );

    bypass()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("invalid bypass pattern 'broken'");
}
