// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Fail-fast policy linter for Python code bases
#[derive(Parser)]
#[command(name = "failfast")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "FAILFAST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lint Python functions against the fail-fast policy
    Check(CheckArgs),
    /// Find comments that silence other linters wholesale
    Bypass(BypassArgs),
    /// Fail if the number of test functions drops below the baseline
    TestCount(TestCountArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Files or directories to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    // Rule enable flags (run only these rules)
    /// Run only the excessive-defaults rule
    #[arg(long)]
    pub excessive_defaults: bool,

    /// Run only the unvalidated-map rule
    #[arg(long)]
    pub unvalidated_map: bool,

    /// Run only the missing-raise rule
    #[arg(long)]
    pub missing_raise: bool,

    // Rule disable flags (skip these rules)
    /// Skip the excessive-defaults rule
    #[arg(long)]
    pub no_excessive_defaults: bool,

    /// Skip the unvalidated-map rule
    #[arg(long)]
    pub no_unvalidated_map: bool,

    /// Skip the missing-raise rule
    #[arg(long)]
    pub no_missing_raise: bool,
}

#[derive(clap::Args)]
pub struct BypassArgs {
    /// Files or directories to scan (default: [bypass] paths, or src and tests)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct TestCountArgs {
    /// Reset the baseline to the current count
    #[arg(long)]
    pub update: bool,

    /// Directory holding test_*.py modules
    #[arg(long, value_name = "DIR")]
    pub tests: Option<PathBuf>,

    /// Baseline file
    #[arg(long, value_name = "FILE")]
    pub baseline: Option<PathBuf>,
}

/// Trait for filtering rules by name.
pub trait CheckFilter {
    /// Get list of explicitly enabled rules.
    fn enabled_checks(&self) -> Vec<String>;

    /// Get list of explicitly disabled rules.
    fn disabled_checks(&self) -> Vec<String>;

    /// Check if a rule should run based on filters.
    ///
    /// If any rules are explicitly enabled, only those run.
    /// Otherwise, all rules run except those explicitly disabled.
    fn should_include(&self, check_name: &str) -> bool {
        let enabled = self.enabled_checks();
        let disabled = self.disabled_checks();

        if !enabled.is_empty() {
            enabled.iter().any(|e| e == check_name)
        } else {
            !disabled.iter().any(|d| d == check_name)
        }
    }
}

/// Collect rule names from boolean flags.
macro_rules! collect_checks {
    ($self:expr, $($flag:ident => $name:expr),+ $(,)?) => {{
        let mut checks = Vec::new();
        $(
            if $self.$flag {
                checks.push($name.to_string());
            }
        )+
        checks
    }};
}

impl CheckFilter for CheckArgs {
    fn enabled_checks(&self) -> Vec<String> {
        collect_checks!(self,
            excessive_defaults => "excessive-defaults",
            unvalidated_map => "unvalidated-map",
            missing_raise => "missing-raise",
        )
    }

    fn disabled_checks(&self) -> Vec<String> {
        collect_checks!(self,
            no_excessive_defaults => "excessive-defaults",
            no_unvalidated_map => "unvalidated-map",
            no_missing_raise => "missing-raise",
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
