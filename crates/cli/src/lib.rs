// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! failfast: a fail-fast policy linter for Python code bases.
//!
//! Three tools share one Python parsing layer, walker and output stack:
//! - `check`: policy rules over every function definition
//! - `bypass`: comments that silence other linters wholesale
//! - `test-count`: a ratchet on the number of test functions

pub mod baseline;
pub mod bypass;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod glob;
pub mod linter;
pub mod output;
pub mod python;
pub mod rules;
pub mod runner;
pub mod test_count;
pub mod violation;
pub mod walker;

pub use cli::{CheckArgs, Cli, Command, OutputFormat};
pub use color::resolve_color;
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use linter::Linter;
pub use violation::{Level, LintReport, Violation};
pub use walker::{FileWalker, WalkStats, WalkedFile, WalkerConfig};
