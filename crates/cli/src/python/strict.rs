// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Python 3 rules the tree-sitter grammar does not enforce.
//!
//! The grammar stays permissive so editors can highlight old code: it
//! accepts Python 2 `print`/`exec` statements, parameter lists with a
//! required parameter after a defaulted one, and statements indented
//! deeper than their siblings. The interpreter rejects all of these.

use tree_sitter::Node;

/// A construct rejected by the interpreter, and the reason.
pub(super) struct Rejection<'t> {
    pub node: Node<'t>,
    pub message: String,
}

/// The earliest rejected construct below `root`, in source order.
pub(super) fn first_rejection<'t>(source: &str, root: Node<'t>) -> Option<Rejection<'t>> {
    let mut first: Option<Rejection<'t>> = None;
    collect(source, root, &mut |found| {
        if first
            .as_ref()
            .is_none_or(|f| found.node.start_byte() < f.node.start_byte())
        {
            first = Some(found);
        }
    });
    first
}

fn collect<'t>(source: &str, node: Node<'t>, report: &mut impl FnMut(Rejection<'t>)) {
    match node.kind() {
        "print_statement" => report(missing_parentheses(node, "print")),
        "exec_statement" => report(missing_parentheses(node, "exec")),
        "parameters" | "lambda_parameters" => {
            if let Some(param) = required_after_default(node) {
                report(Rejection {
                    node: param,
                    message: "parameter without a default follows parameter with a default"
                        .to_string(),
                });
            }
        }
        "module" => {
            if let Some(found) = misindented(source, node, Some("")) {
                report(found);
            }
        }
        "block" => {
            if let Some(found) = misindented(source, node, None) {
                report(found);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect(source, child, report);
    }
}

fn missing_parentheses<'t>(node: Node<'t>, name: &str) -> Rejection<'t> {
    Rejection {
        node,
        message: format!(
            "Missing parentheses in call to '{}'. Did you mean {}(...)?",
            name, name
        ),
    }
}

/// First required positional parameter declared after a defaulted one.
///
/// Keyword-only parameters (after `*` or `*args`) may omit defaults.
fn required_after_default(parameters: Node<'_>) -> Option<Node<'_>> {
    let mut seen_default = false;
    let mut cursor = parameters.walk();
    for child in parameters.named_children(&mut cursor) {
        match child.kind() {
            "default_parameter" | "typed_default_parameter" => seen_default = true,
            "keyword_separator" | "list_splat_pattern" | "dictionary_splat_pattern" => {
                return None;
            }
            "typed_parameter" if is_splat(child) => return None,
            "identifier" | "typed_parameter" if seen_default => return Some(child),
            _ => {}
        }
    }
    None
}

fn is_splat(typed: Node<'_>) -> bool {
    let mut cursor = typed.walk();
    let found = typed
        .named_children(&mut cursor)
        .next()
        .is_some_and(|n| matches!(n.kind(), "list_splat_pattern" | "dictionary_splat_pattern"));
    found
}

/// First statement of `suite` whose indentation differs from its siblings.
///
/// `expected` fixes the indentation up front (empty at module level);
/// otherwise the first statement that starts a line sets it. A suite
/// written on its header line (`if x: y()`) admits no indented lines.
fn misindented<'s, 't>(
    source: &'s str,
    suite: Node<'t>,
    expected: Option<&'s str>,
) -> Option<Rejection<'t>> {
    let mut cursor = suite.walk();
    let mut statements = suite
        .named_children(&mut cursor)
        .filter(|s| s.kind() != "comment")
        .peekable();

    let mut expected = expected;
    let inline_suite = expected.is_none()
        && statements
            .peek()
            .is_some_and(|first| indentation(source, *first).is_none());

    for statement in statements {
        // Statements after `;` share a line with their predecessor
        let Some(indent) = indentation(source, statement) else {
            continue;
        };
        let current = expected;
        let message = match current {
            _ if inline_suite => "unexpected indent",
            Some(want) if indent.len() > want.len() => "unexpected indent",
            Some(want) if indent != want => "unindent does not match any outer indentation level",
            Some(_) => continue,
            None => {
                expected = Some(indent);
                continue;
            }
        };
        return Some(Rejection {
            node: statement,
            message: message.to_string(),
        });
    }
    None
}

/// Leading whitespace of the line `node` starts, or `None` when something
/// else precedes it on that line.
fn indentation<'s>(source: &'s str, node: Node<'_>) -> Option<&'s str> {
    let start = node.start_byte();
    let line_start = start.saturating_sub(node.start_position().column);
    let mut prefix = source.get(line_start..start)?;
    if line_start == 0 {
        prefix = prefix.trim_start_matches('\u{feff}');
    }
    let prefix = prefix.trim_start_matches('\x0c');
    prefix
        .chars()
        .all(|c| c == ' ' || c == '\t')
        .then_some(prefix)
}

#[cfg(test)]
#[path = "strict_tests.rs"]
mod tests;
