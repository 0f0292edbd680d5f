// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural description of a single function definition.
//!
//! Rules never see the syntax tree: the linter lowers every
//! `function_definition` node into a [`FunctionDescriptor`] first.

use tree_sitter::Node;

use super::parse::{FUNCTION_DEFINITION, ParsedModule, line_of};

/// Names treated as an implicit receiver in the first parameter slot.
const RECEIVER_NAMES: &[&str] = &["self", "cls"];

/// How a parameter can be passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Declared before a `/` separator.
    PositionalOnly,
    /// Ordinary positional-or-keyword parameter.
    Positional,
    /// Declared after `*` or `*args`.
    KeywordOnly,
    /// `*args`
    VarPositional,
    /// `**kwargs`
    VarKeyword,
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParamKind,
    /// Annotation source text, e.g. `dict[str, Any]`.
    pub annotation: Option<String>,
    /// Default value source text, e.g. `None`.
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            annotation: None,
            default: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self.kind, ParamKind::VarPositional | ParamKind::VarKeyword)
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// `x: T | None = None` / `x: Optional[T] = None`.
    ///
    /// The annotation check is textual, so aliases of optional types
    /// are not recognized.
    pub fn is_optional_idiom(&self) -> bool {
        let default_is_none = self.default.as_deref() == Some("None");
        let annotation_allows_none = self
            .annotation
            .as_deref()
            .is_some_and(|a| a.contains("None") || a.contains("Optional["));
        default_is_none && annotation_allows_none
    }
}

/// Everything the policy rules need to know about a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: String,
    /// 1-based line of the `def` keyword.
    pub line: u32,
    pub params: Vec<Parameter>,
    /// Number of top-level statements in the body (comments excluded).
    pub body_len: usize,
    /// A `raise` statement appears anywhere in the function.
    pub has_raise: bool,
    /// An `in` / `not in` comparison appears anywhere in the function.
    pub has_membership_test: bool,
}

impl FunctionDescriptor {
    /// Lower a `function_definition` node. Returns `None` for any other node
    /// or for a definition too broken to have a name.
    pub fn from_node(module: &ParsedModule<'_>, node: Node<'_>) -> Option<Self> {
        if node.kind() != FUNCTION_DEFINITION {
            return None;
        }
        let name = module.text(node.child_by_field_name("name")?).to_string();

        let params = node
            .child_by_field_name("parameters")
            .map(|p| parse_parameters(module, p))
            .unwrap_or_default();

        let body_len = node
            .child_by_field_name("body")
            .map(|body| {
                let mut cursor = body.walk();
                let statements = body
                    .named_children(&mut cursor)
                    .filter(|s| s.kind() != "comment")
                    .count();
                statements
            })
            .unwrap_or(0);

        let mut facts = ValidationFacts::default();
        scan_validation(node, &mut facts);

        Some(Self {
            name,
            line: line_of(node),
            params,
            body_len,
            has_raise: facts.has_raise,
            has_membership_test: facts.has_membership_test,
        })
    }

    /// Parameters that count toward policy ratios: no receiver, no variadics.
    pub fn effective_params(&self) -> impl Iterator<Item = &Parameter> {
        let skip_receiver = self.params.first().is_some_and(|p| {
            matches!(p.kind, ParamKind::PositionalOnly | ParamKind::Positional)
                && RECEIVER_NAMES.contains(&p.name.as_str())
        });
        self.params
            .iter()
            .skip(usize::from(skip_receiver))
            .filter(|p| !p.is_variadic())
    }
}

fn parse_parameters(module: &ParsedModule<'_>, node: Node<'_>) -> Vec<Parameter> {
    let mut params: Vec<Parameter> = Vec::new();
    let mut kind = ParamKind::Positional;

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "positional_separator" => {
                for p in params.iter_mut().filter(|p| p.kind == ParamKind::Positional) {
                    p.kind = ParamKind::PositionalOnly;
                }
            }
            "keyword_separator" => kind = ParamKind::KeywordOnly,
            "identifier" => params.push(Parameter::new(module.text(child), kind)),
            "list_splat_pattern" => {
                params.push(Parameter::new(splat_name(module, child), ParamKind::VarPositional));
                kind = ParamKind::KeywordOnly;
            }
            "dictionary_splat_pattern" => {
                params.push(Parameter::new(splat_name(module, child), ParamKind::VarKeyword));
            }
            "typed_parameter" => {
                let mut inner = child.walk();
                let Some(target) = child.named_children(&mut inner).next() else {
                    continue;
                };
                let mut param = match target.kind() {
                    "list_splat_pattern" => {
                        kind = ParamKind::KeywordOnly;
                        Parameter::new(splat_name(module, target), ParamKind::VarPositional)
                    }
                    "dictionary_splat_pattern" => {
                        Parameter::new(splat_name(module, target), ParamKind::VarKeyword)
                    }
                    _ => Parameter::new(module.text(target), kind),
                };
                if let Some(ty) = child.child_by_field_name("type") {
                    param = param.with_annotation(module.text(ty));
                }
                params.push(param);
            }
            "default_parameter" | "typed_default_parameter" => {
                let Some(name) = child.child_by_field_name("name") else {
                    continue;
                };
                let mut param = Parameter::new(module.text(name), kind);
                if let Some(ty) = child.child_by_field_name("type") {
                    param = param.with_annotation(module.text(ty));
                }
                if let Some(value) = child.child_by_field_name("value") {
                    param = param.with_default(module.text(value));
                }
                params.push(param);
            }
            _ => {}
        }
    }

    params
}

fn splat_name<'s>(module: &ParsedModule<'s>, node: Node<'_>) -> &'s str {
    module.text(node).trim_start_matches('*')
}

#[derive(Default)]
struct ValidationFacts {
    has_raise: bool,
    has_membership_test: bool,
}

fn scan_validation(node: Node<'_>, facts: &mut ValidationFacts) {
    match node.kind() {
        "raise_statement" => facts.has_raise = true,
        "comparison_operator" if is_membership_test(node) => facts.has_membership_test = true,
        "comment" => return,
        "string" => {
            // Only f-string interpolations hold code.
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() == "interpolation" {
                    scan_validation(child, facts);
                }
            }
            return;
        }
        _ => {}
    }
    if facts.has_raise && facts.has_membership_test {
        return;
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        scan_validation(child, facts);
    }
}

fn is_membership_test(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|op| matches!(op.kind(), "in" | "not in"));
    found
}

#[cfg(test)]
#[path = "function_tests.rs"]
mod tests;
