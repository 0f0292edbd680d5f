// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bypass command implementation.

use failfast::bypass::BypassScanner;
use failfast::cli::{BypassArgs, Cli};
use failfast::color::resolve_color_flags;
use failfast::discovery;
use failfast::error::ExitCode;
use failfast::output::text::TextFormatter;
use failfast::walker::FileWalker;

/// Run the bypass command.
pub fn run(cli: &Cli, args: &BypassArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let project = discovery::load_project(cli.config.as_deref(), &cwd)?;

    // Command-line paths are relative to cwd, configured ones to the project root
    let paths = if args.paths.is_empty() {
        project
            .config
            .bypass
            .paths
            .iter()
            .map(|p| project.root.join(p))
            .collect()
    } else {
        args.paths.clone()
    };

    let walker = FileWalker::from_excludes(&project.config.project.exclude);
    let scanner = BypassScanner::new(&project.config.bypass.patterns, walker)?;
    let report = scanner.scan_paths(&paths);
    tracing::debug!(
        "scanned {} files, {} findings",
        report.files_scanned,
        report.violations.len()
    );

    let mut formatter = TextFormatter::stdout(resolve_color_flags(args.color, args.no_color));
    formatter.write_bypass_report(&report)?;

    Ok(if report.violations.is_empty() {
        ExitCode::Success
    } else {
        ExitCode::Failed
    })
}
