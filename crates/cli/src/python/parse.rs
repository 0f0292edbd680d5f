// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Python parsing on top of tree-sitter.

use tree_sitter::{Node, Parser, Tree};

use super::strict::first_rejection;
use crate::error::{Error, Result};

/// Node kind of `def` / `async def` statements.
pub const FUNCTION_DEFINITION: &str = "function_definition";

/// Create a parser loaded with the Python grammar.
pub fn new_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| Error::Parser(e.to_string()))?;
    Ok(parser)
}

/// A parsed Python module borrowing its source text.
pub struct ParsedModule<'s> {
    source: &'s str,
    tree: Tree,
}

/// The first syntax error found in a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based line number.
    pub line: u32,
    pub message: String,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (line {})", self.message, self.line)
    }
}

impl<'s> ParsedModule<'s> {
    /// Parse `source` with a Python parser.
    pub fn parse(parser: &mut Parser, source: &'s str) -> Result<Self> {
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| Error::Parser("parser returned no tree".to_string()))?;
        Ok(Self { source, tree })
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    pub fn text(&self, node: Node<'_>) -> &'s str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    /// Locate the first syntax error in source order, if any.
    ///
    /// Besides grammar errors this covers constructs the grammar accepts
    /// but Python 3 rejects, such as `print "x"`.
    pub fn syntax_error(&self) -> Option<SyntaxError> {
        let root = self.root();
        if !root.has_error() {
            return first_rejection(self.source, root).map(|r| SyntaxError {
                line: line_of(r.node),
                message: r.message,
            });
        }

        let Some(node) = first_error(root) else {
            return Some(SyntaxError {
                line: 1,
                message: "invalid syntax".to_string(),
            });
        };

        let message = if node.is_missing() {
            format!("expected '{}'", node.kind())
        } else {
            let snippet = self.text(node).lines().next().unwrap_or_default().trim();
            if snippet.is_empty() {
                "invalid syntax".to_string()
            } else {
                format!("invalid syntax near '{}'", truncate(snippet, 40))
            }
        };

        Some(SyntaxError {
            line: line_of(node),
            message,
        })
    }
}

/// 1-based line on which `node` starts.
pub fn line_of(node: Node<'_>) -> u32 {
    u32::try_from(node.start_position().row)
        .unwrap_or(u32::MAX - 1)
        .saturating_add(1)
}

fn first_error<'t>(node: Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
