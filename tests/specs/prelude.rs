//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the failfast binary and asserting on
//! its stdout, stderr and exit code.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the failfast binary
pub fn failfast_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("failfast"));
    cmd.env_remove("FAILFAST_CONFIG")
        .env_remove("FAILFAST_LOG")
        .env_remove("COLOR");
    cmd
}

/// `failfast check <args>`
pub fn check() -> RunBuilder {
    RunBuilder::new("check")
}

/// `failfast bypass <args>`
pub fn bypass() -> RunBuilder {
    RunBuilder::new("bypass")
}

/// `failfast test-count <args>`
pub fn test_count() -> RunBuilder {
    RunBuilder::new("test-count")
}

/// Fluent builder for one subcommand invocation.
pub struct RunBuilder {
    subcommand: &'static str,
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl RunBuilder {
    fn new(subcommand: &'static str) -> Self {
        Self {
            subcommand,
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Set fixture directory by name
    pub fn on(mut self, fixture_name: &str) -> Self {
        self.dir = Some(fixture(fixture_name));
        self
    }

    /// Set working directory (alternative to fixture)
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Run and expect exit code 0
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and expect exit code 1
    pub fn fails(self) -> RunAssert {
        self.exits(1)
    }

    /// Run and expect a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run `check -o json` and parse stdout, whatever the exit code
    pub fn json(mut self) -> LintJson {
        self.args.extend(["-o".to_string(), "json".to_string()]);
        let output = self.command().output().expect("command should run");
        let value = serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout should be JSON ({})\n{}",
                e,
                String::from_utf8_lossy(&output.stdout)
            )
        });
        LintJson { value }
    }

    fn command(self) -> Command {
        let mut cmd = failfast_cmd();
        cmd.arg(self.subcommand);
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd
    }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

/// Parsed `check -o json` output.
pub struct LintJson {
    value: serde_json::Value,
}

#[allow(dead_code)]
impl LintJson {
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a required top-level field
    pub fn require(&self, key: &str) -> &serde_json::Value {
        self.value
            .get(key)
            .unwrap_or_else(|| panic!("missing field '{}' in {}", key, self.value))
    }

    pub fn passed(&self) -> bool {
        self.require("passed").as_bool().expect("passed should be bool")
    }

    pub fn violations(&self) -> &[serde_json::Value] {
        self.require("violations")
            .as_array()
            .expect("violations should be an array")
    }

    /// Violation kinds in report order
    pub fn kinds(&self) -> Vec<&str> {
        self.violations()
            .iter()
            .map(|v| v["kind"].as_str().expect("kind should be a string"))
            .collect()
    }
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

// =============================================================================
// Project
// =============================================================================

/// Temporary project directory.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a project with a minimal failfast.toml
    pub fn with_defaults() -> Self {
        let temp = Self::empty();
        temp.config("");
        temp
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write failfast.toml with `version = 1` followed by `content`
    pub fn config(&self, content: &str) {
        self.file("failfast.toml", &format!("version = 1\n{}", content));
    }

    /// Write a file, creating parent directories
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.dir.path().join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Read a file relative to the project root
    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }
}
