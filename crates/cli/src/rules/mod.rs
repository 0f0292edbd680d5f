// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Policy rules.
//!
//! Each rule is a stateless predicate over one [`FunctionDescriptor`].
//! Rules are independent: every active rule sees every function, and the
//! registry order decides the order of findings for one function.

mod excessive_defaults;
mod missing_raise;
mod unvalidated_map;

pub use excessive_defaults::ExcessiveDefaults;
pub use missing_raise::MissingRaise;
pub use unvalidated_map::UnvalidatedMap;

use crate::cli::CheckFilter;
use crate::config::{CheckConfig, CheckLevel};
use crate::python::FunctionDescriptor;
use crate::violation::Level;

/// A single policy rule.
pub trait Rule: Send + Sync {
    /// Kebab-case identifier, used as the violation kind and CLI flag name.
    fn id(&self) -> &'static str;

    /// Finding text for `function`, or `None` when it complies.
    ///
    /// The text continues `Function '<name>' `, e.g. `has no raise statements.`
    fn check(&self, function: &FunctionDescriptor) -> Option<String>;
}

/// All rule identifiers in registry order.
pub const RULE_IDS: &[&str] = &[ExcessiveDefaults::ID, UnvalidatedMap::ID, MissingRaise::ID];

/// A rule together with the level it reports at.
pub struct ActiveRule {
    pub rule: Box<dyn Rule>,
    pub level: Level,
}

/// Every rule built from config, in registry order.
pub fn all_rules(config: &CheckConfig) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ExcessiveDefaults::from_config(&config.excessive_defaults)),
        Box::new(UnvalidatedMap::from_config(&config.unvalidated_map)),
        Box::new(MissingRaise::from_config(&config.missing_raise)),
    ]
}

/// Rules that run for this invocation.
///
/// When any rule is named on the command line only the named rules run, and
/// a rule configured `off` runs at warn level. Otherwise every rule not
/// configured `off` runs, minus the ones disabled with `--no-<rule>`.
pub fn active_rules(config: &CheckConfig, filter: &impl CheckFilter) -> Vec<ActiveRule> {
    let explicit = !filter.enabled_checks().is_empty();

    all_rules(config)
        .into_iter()
        .filter(|rule| filter.should_include(rule.id()))
        .filter_map(|rule| {
            let level = match config.level_for(rule.id()).unwrap_or_default() {
                CheckLevel::Error => Level::Error,
                CheckLevel::Warn => Level::Warn,
                CheckLevel::Off if explicit => Level::Warn,
                CheckLevel::Off => return None,
            };
            tracing::debug!("rule {} active at {:?}", rule.id(), level);
            Some(ActiveRule { rule, level })
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
