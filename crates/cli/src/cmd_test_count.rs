// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-count command implementation.

use failfast::baseline::Baseline;
use failfast::cli::{Cli, TestCountArgs};
use failfast::color::resolve_color;
use failfast::discovery;
use failfast::error::ExitCode;
use failfast::output::text::TextFormatter;
use failfast::test_count::{RatchetOutcome, count_tests};
use failfast::walker::FileWalker;

/// Run the test-count command.
pub fn run(cli: &Cli, args: &TestCountArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let project = discovery::load_project(cli.config.as_deref(), &cwd)?;
    let settings = &project.config.test_count;

    let tests_dir = match &args.tests {
        Some(dir) => dir.clone(),
        None => project.root.join(&settings.tests),
    };
    let baseline_path = match &args.baseline {
        Some(file) => file.clone(),
        None => project.root.join(&settings.baseline),
    };

    let walker = FileWalker::from_excludes(&project.config.project.exclude);
    let count = count_tests(&tests_dir, &walker)?;
    tracing::debug!(
        "{} tests in {} files under {}",
        count.tests,
        count.files,
        tests_dir.display()
    );

    let stored = Baseline::load(&baseline_path)?.map(|b| b.tests);
    let outcome = RatchetOutcome::evaluate(count.tests, stored, args.update);

    if let Some(tests) = outcome.new_baseline() {
        Baseline::new(tests)
            .with_commit(&project.root)
            .save(&baseline_path)?;
        tracing::debug!("baseline written to {}", baseline_path.display());
    }

    let mut formatter = TextFormatter::stdout(resolve_color());
    formatter.write_test_count(&outcome)?;

    Ok(if outcome.passed() {
        ExitCode::Success
    } else {
        ExitCode::Failed
    })
}
