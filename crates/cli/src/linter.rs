// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The policy linter: source text in, ordered violations out.

use std::path::Path;

use crate::cli::CheckFilter;
use crate::config::CheckConfig;
use crate::error::Result;
use crate::python::{FunctionDescriptor, ParsedModule, new_parser, visit_functions};
use crate::rules::{ActiveRule, active_rules};
use crate::violation::Violation;

/// Applies the active rules to every function of a module.
pub struct Linter {
    rules: Vec<ActiveRule>,
    exempt_prefixes: Vec<String>,
}

impl Linter {
    pub fn new(rules: Vec<ActiveRule>, exempt_prefixes: Vec<String>) -> Self {
        Self {
            rules,
            exempt_prefixes,
        }
    }

    /// Build a linter from `[check]` config and the rule flags of this run.
    pub fn from_config(config: &CheckConfig, filter: &impl CheckFilter) -> Self {
        Self::new(active_rules(config, filter), config.exempt_prefixes.clone())
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Lint one module.
    ///
    /// A module that does not parse yields exactly one `syntax-error`
    /// violation and no rule findings. Errors are reserved for a parser that
    /// cannot be constructed.
    pub fn lint_source(&self, file: &Path, source: &str) -> Result<Vec<Violation>> {
        let mut parser = new_parser()?;
        let module = ParsedModule::parse(&mut parser, source)?;

        if let Some(err) = module.syntax_error() {
            tracing::debug!("{}: {}", file.display(), err);
            return Ok(vec![Violation::syntax_error(file, err.line, &err)]);
        }

        let mut violations = Vec::new();
        visit_functions(module.root(), &mut |node| {
            let Some(function) = FunctionDescriptor::from_node(&module, node) else {
                return;
            };
            if self.is_exempt(&function.name) {
                tracing::trace!("{}: {} is exempt", file.display(), function.name);
                return;
            }
            violations.extend(self.check_function(file, &function));
        });

        Ok(violations)
    }

    /// Read and lint one file. Unreadable or non-UTF-8 files yield a single
    /// diagnostic violation.
    pub fn lint_file(&self, file: &Path) -> Result<Vec<Violation>> {
        match std::fs::read_to_string(file) {
            Ok(source) => self.lint_source(file, &source),
            Err(e) => {
                tracing::warn!("cannot read {}: {}", file.display(), e);
                Ok(vec![Violation::unreadable(file, e)])
            }
        }
    }

    fn check_function<'a>(
        &'a self,
        file: &'a Path,
        function: &'a FunctionDescriptor,
    ) -> impl Iterator<Item = Violation> + 'a {
        self.rules.iter().filter_map(move |active| {
            let finding = active.rule.check(function)?;
            Some(Violation::rule(
                file,
                function.line,
                active.rule.id(),
                active.level,
                &function.name,
                &finding,
            ))
        })
    }

    fn is_exempt(&self, name: &str) -> bool {
        self.exempt_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
