// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::io::Write;

use failfast::cli::{CheckArgs, Cli, OutputFormat};
use failfast::color::resolve_color_flags;
use failfast::discovery;
use failfast::error::{Error, ExitCode};
use failfast::linter::Linter;
use failfast::output::json::{JsonFormatter, LintOutput, PathNotFoundOutput};
use failfast::output::text::TextFormatter;
use failfast::runner::{TargetCollector, lint_files};
use failfast::walker::FileWalker;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let project = discovery::load_project(cli.config.as_deref(), &cwd)?;
    let color = resolve_color_flags(args.color, args.no_color);

    // Missing paths fail before any analysis
    if let Err(Error::PathNotFound(missing)) = TargetCollector::ensure_exist(&args.paths) {
        match args.output {
            OutputFormat::Text => {
                let mut formatter = TextFormatter::stdout(color);
                formatter.write_path_not_found(&missing)?;
            }
            OutputFormat::Json => {
                let mut formatter = JsonFormatter::new(std::io::stdout().lock());
                formatter.write(&PathNotFoundOutput::new(&missing))?;
                formatter.into_inner().flush()?;
            }
        }
        return Ok(ExitCode::Failed);
    }

    let linter = Linter::from_config(&project.config.check, args);
    if linter.rule_count() == 0 {
        tracing::debug!("all rules disabled");
    }

    let walker = FileWalker::from_excludes(&project.config.project.exclude);
    let files = TargetCollector::new(walker).collect(&args.paths)?;
    tracing::debug!("linting {} files", files.len());

    let report = lint_files(&linter, &files)?;

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(color);
            formatter.write_lint_report(&report)?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout().lock());
            formatter.write(&LintOutput::new(&report))?;
            formatter.into_inner().flush()?;
        }
    }

    Ok(if report.passed() {
        ExitCode::Success
    } else {
        ExitCode::Failed
    })
}
