// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Lint report format:
//! ```text
//! Fail-fast pattern violations found:
//!
//!   <file>:<line>: [!] Function '<name>' <finding>
//!
//! Total: N violation(s)
//! ```

use std::io::Write;
use std::path::Path;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::plural;
use crate::bypass::BypassReport;
use crate::color::scheme;
use crate::test_count::RatchetOutcome;
use crate::violation::{Level, LintReport, SYNTAX_ERROR, Violation};

/// Command that resets the test-count baseline.
const UPDATE_COMMAND: &str = "failfast test-count --update";

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// `[X] Path not found: <path>`
    pub fn write_path_not_found(&mut self, path: &Path) -> std::io::Result<()> {
        self.marker("[X]", &scheme::error())?;
        writeln!(self.out, " Path not found: {}", path.display())
    }

    /// Write the policy linter report.
    pub fn write_lint_report(&mut self, report: &LintReport) -> std::io::Result<()> {
        if report.is_empty() {
            self.marker("[OK]", &scheme::pass())?;
            return writeln!(self.out, " No fail-fast violations found");
        }

        self.header("Fail-fast pattern violations found:")?;
        writeln!(self.out)?;
        for violation in &report.violations {
            self.write_violation(violation)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "Total: {} violation(s)", report.violations.len())
    }

    /// Write the bypass scanner report.
    pub fn write_bypass_report(&mut self, report: &BypassReport) -> std::io::Result<()> {
        for path in &report.skipped_paths {
            self.marker("[SKIP]", &scheme::skip())?;
            writeln!(self.out, " Path does not exist: {}", path.display())?;
        }

        if report.violations.is_empty() {
            self.marker("[OK]", &scheme::pass())?;
            return writeln!(self.out, " No bypass comments detected");
        }

        self.header("Bypass comments found:")?;
        writeln!(self.out)?;
        for violation in &report.violations {
            self.write_violation(violation)?;
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Total: {} in {}",
            plural(report.violations.len(), "bypass comment"),
            plural(report.files_with_findings(), "file")
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "To fix:")?;
        writeln!(self.out, "  1. Remove the bypass comment")?;
        writeln!(self.out, "  2. Fix the underlying issue that triggered the warning")?;
        writeln!(
            self.out,
            "  3. If a suppression is truly necessary, scope it to a rule code (e.g. # noqa: F401)"
        )
    }

    /// Write the test-count ratchet result.
    pub fn write_test_count(&mut self, outcome: &RatchetOutcome) -> std::io::Result<()> {
        match *outcome {
            RatchetOutcome::Reset { previous, current } => {
                self.marker("[OK]", &scheme::pass())?;
                writeln!(self.out, " Baseline updated: {} -> {}", previous, current)
            }
            RatchetOutcome::Increased { previous, current } => {
                self.marker("[OK]", &scheme::pass())?;
                writeln!(
                    self.out,
                    " Test count increased: {} -> {} (baseline updated)",
                    previous, current
                )
            }
            RatchetOutcome::Stable { current } => {
                self.marker("[OK]", &scheme::pass())?;
                writeln!(self.out, " Test count stable: {}", plural(current, "test"))
            }
            RatchetOutcome::Regressed { baseline, current } => {
                self.marker("[X]", &scheme::error())?;
                writeln!(self.out, " Test count regression detected!")?;
                writeln!(self.out, "    Baseline: {}", plural(baseline, "test"))?;
                writeln!(self.out, "    Current:  {}", plural(current, "test"))?;
                writeln!(self.out, "    Delta:    -{}", baseline - current)?;
                writeln!(self.out)?;
                writeln!(
                    self.out,
                    "    If this is intentional (refactoring, test consolidation),"
                )?;
                writeln!(self.out, "    update the baseline explicitly:")?;
                writeln!(self.out, "        {}", UPDATE_COMMAND)
            }
        }
    }

    fn write_violation(&mut self, v: &Violation) -> std::io::Result<()> {
        write!(self.out, "  ")?;

        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", v.file.display())?;
        self.out.reset()?;

        write!(self.out, ":")?;
        self.out.set_color(&scheme::line_number())?;
        write!(self.out, "{}", v.line)?;
        self.out.reset()?;
        write!(self.out, ": ")?;

        let spec = match (v.kind, v.level) {
            (SYNTAX_ERROR, _) | (_, Level::Error) => scheme::error(),
            (_, Level::Warn) => scheme::warn(),
        };
        self.marker(v.marker(), &spec)?;
        writeln!(self.out, " {}", v.message)
    }

    fn marker(&mut self, marker: &str, spec: &termcolor::ColorSpec) -> std::io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", marker)?;
        self.out.reset()
    }

    fn header(&mut self, text: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::header())?;
        write!(self.out, "{}", text)?;
        self.out.reset()?;
        writeln!(self.out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
