// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Python language support.
//!
//! Provides everything the checks need to know about Python sources:
//! - Parsing into a tree-sitter syntax tree, with syntax error location
//! - Lowering function definitions into [`FunctionDescriptor`]s
//! - File classification (source vs test, excluded directories)

use std::path::Path;

use globset::GlobSet;
use tree_sitter::Node;

mod function;
mod parse;
mod strict;

pub use function::{FunctionDescriptor, ParamKind, Parameter};
pub use parse::{FUNCTION_DEFINITION, ParsedModule, SyntaxError, line_of, new_parser};

use crate::glob::build_glob_set;

/// File extension of Python sources.
pub const PYTHON_EXTENSION: &str = "py";

/// Visit every function definition below `node` in source order.
///
/// Outer functions are visited before the functions nested inside them.
pub fn visit_functions<'t>(node: Node<'t>, visit: &mut impl FnMut(Node<'t>)) {
    match node.kind() {
        FUNCTION_DEFINITION => visit(node),
        "string" | "comment" => return,
        _ => {}
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        visit_functions(child, visit);
    }
}

/// Whether `path` has a `.py` extension.
pub fn is_python_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PYTHON_EXTENSION)
}

/// Whether the file name marks a test module or test configuration.
///
/// Used by directory mode of the policy linter, which skips any file whose
/// name mentions `test` (`test_api.py`, `api_test.py`, `conftest.py`).
pub fn is_test_file_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.contains("test") || name.contains("conftest"))
}

/// Whether `path` is a pytest module (`test_*.py`).
pub fn is_test_module(path: &Path) -> bool {
    is_python_file(path)
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with("test_"))
}

/// Path classification for Python trees.
pub struct PythonFiles {
    test_patterns: GlobSet,
    exclude_patterns: GlobSet,
}

impl Default for PythonFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonFiles {
    /// Create a classifier with the default Python conventions.
    pub fn new() -> Self {
        Self {
            test_patterns: build_glob_set(&[
                "**/test_*.py".to_string(),
                "test_*.py".to_string(),
                "**/conftest.py".to_string(),
                "conftest.py".to_string(),
            ]),
            exclude_patterns: build_glob_set(&[
                "**/__pycache__/**".to_string(),
                "**/venv/**".to_string(),
                "**/.venv/**".to_string(),
                "**/node_modules/**".to_string(),
                "**/.git/**".to_string(),
            ]),
        }
    }

    /// Test modules (`test_*.py`) and pytest configuration (`conftest.py`).
    pub fn is_test(&self, path: &Path) -> bool {
        self.test_patterns.is_match(path)
    }

    /// Paths inside caches, virtual environments or VCS metadata.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
