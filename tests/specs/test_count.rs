//! Behavioral specs for `failfast test-count`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const BASELINE: &str = ".failfast/test_count.json";

fn project_with_tests(count: usize) -> Project {
    let temp = Project::with_defaults();
    let body: String = (0..count)
        .map(|i| format!("def test_case_{i}():\n    assert True\n\n"))
        .collect();
    temp.file("tests/test_cases.py", &body);
    temp
}

fn stored_count(temp: &Project) -> u64 {
    let json: serde_json::Value = serde_json::from_str(&temp.read(BASELINE)).unwrap();
    json["tests"].as_u64().unwrap()
}

/// > A missing baseline counts as zero and is created on increase
#[test]
fn first_run_creates_baseline() {
    let temp = project_with_tests(3);

    test_count()
        .pwd(temp.path())
        .passes()
        .stdout_eq("[OK] Test count increased: 0 -> 3 (baseline updated)\n");

    assert_eq!(stored_count(&temp), 3);
}

#[test]
fn baseline_file_records_version_and_timestamp() {
    let temp = project_with_tests(1);
    test_count().pwd(temp.path()).passes();

    let json: serde_json::Value = serde_json::from_str(&temp.read(BASELINE)).unwrap();
    assert_eq!(json["version"], 1);
    assert!(json["updated"].is_string());
}

/// > Equal counts report stable and exit 0
#[test]
fn unchanged_count_is_stable() {
    let temp = project_with_tests(2);
    temp.file(BASELINE, r#"{"version": 1, "updated": "2026-01-01T00:00:00Z", "tests": 2}"#);

    test_count()
        .pwd(temp.path())
        .passes()
        .stdout_eq("[OK] Test count stable: 2 tests\n");
}

/// > A drop below the baseline fails with a regression report
#[test]
fn regression_fails_with_report() {
    let temp = project_with_tests(2);
    temp.file(BASELINE, r#"{"version": 1, "updated": "2026-01-01T00:00:00Z", "tests": 5}"#);

    test_count().pwd(temp.path()).fails().stdout_eq(
        "[X] Test count regression detected!
    Baseline: 5 tests
    Current:  2 tests
    Delta:    -3

    If this is intentional (refactoring, test consolidation),
    update the baseline explicitly:
        failfast test-count --update
",
    );

    assert_eq!(stored_count(&temp), 5);
}

/// > --update writes the current count unconditionally
#[test]
fn update_resets_baseline() {
    let temp = project_with_tests(2);
    temp.file(BASELINE, r#"{"version": 1, "updated": "2026-01-01T00:00:00Z", "tests": 5}"#);

    test_count()
        .pwd(temp.path())
        .args(&["--update"])
        .passes()
        .stdout_eq("[OK] Baseline updated: 5 -> 2\n");

    assert_eq!(stored_count(&temp), 2);
}

/// > An increase moves the baseline up
#[test]
fn increase_updates_baseline() {
    let temp = project_with_tests(4);
    temp.file(BASELINE, r#"{"version": 1, "updated": "2026-01-01T00:00:00Z", "tests": 3}"#);

    test_count().pwd(temp.path()).passes();
    assert_eq!(stored_count(&temp), 4);
}

/// > Only test_*.py modules count, and only test_* functions
#[test]
fn counts_test_functions_in_test_modules() {
    let temp = Project::with_defaults();
    temp.file(
        "tests/test_api.py",
        "def test_a():\n    pass\n\nasync def test_b():\n    pass\n\ndef helper():\n    pass\n\nclass TestGroup:\n    def test_c(self):\n        pass\n",
    );
    temp.file("tests/helpers.py", "def test_not_counted():\n    pass\n");
    temp.file("tests/unit/test_deep.py", "def test_d():\n    pass\n");

    test_count()
        .pwd(temp.path())
        .passes()
        .stdout_eq("[OK] Test count increased: 0 -> 4 (baseline updated)\n");
}

/// > Files that fail to parse count zero
#[test]
fn unparsable_test_module_counts_zero() {
    let temp = project_with_tests(1);
    temp.file("tests/test_broken.py", "def test_x(:\n    pass\n");

    test_count()
        .pwd(temp.path())
        .passes()
        .stdout_has("0 -> 1");
}

#[test]
fn tests_and_baseline_flags_override_config() {
    let temp = Project::with_defaults();
    temp.file("suite/test_one.py", "def test_one():\n    pass\n");
    let baseline = temp.path().join("counts.json");

    test_count()
        .pwd(temp.path())
        .args(&["--tests", "suite", "--baseline", baseline.to_str().unwrap()])
        .passes()
        .stdout_has("0 -> 1");

    assert!(baseline.exists());
}

#[test]
fn configured_paths_resolve_against_project_root() {
    let temp = Project::empty();
    temp.config("[test_count]\ntests = \"checks\"\nbaseline = \"meta/count.json\"\n");
    temp.file("checks/test_one.py", "def test_one():\n    pass\n");
    temp.file("pkg/sub/.keep", "");

    test_count()
        .pwd(temp.path().join("pkg/sub"))
        .passes()
        .stdout_has("0 -> 1");

    assert!(temp.path().join("meta/count.json").exists());
}

/// > A baseline with a newer format version is an error
#[test]
fn newer_baseline_version_is_an_error() {
    let temp = project_with_tests(1);
    temp.file(BASELINE, r#"{"version": 99, "updated": "2026-01-01T00:00:00Z", "tests": 1}"#);

    test_count()
        .pwd(temp.path())
        .exits(3)
        .stderr_has("failfast: baseline version 99 is newer than supported 1");
}

#[test]
fn corrupt_baseline_is_an_error() {
    let temp = project_with_tests(1);
    temp.file(BASELINE, "not json");

    test_count()
        .pwd(temp.path())
        .exits(3)
        .stderr_has("failed to parse baseline");
}
