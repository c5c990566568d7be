// Copyright (C) 2025 The waddl developers.
//
// This file is part of waddl. waddl is free software: you can redistribute it
// and/or modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// waddl is distributed in the hope that it will be useful, but WITHOUT ANY
// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// waddl. If not, see [http://www.gnu.org/licenses](http://www.gnu.org/licenses).
/// `diagram.rs` -- Transform a parsed syntax tree into a code diagram
/// ===================================================================
///
/// The parsing service hands back the syntax tree of the submitted source as
/// untyped JSON: nested objects discriminated by a `type` field (`FunctionDef`,
/// `Call`, `For`, ...), arrays, and primitive leaves. This module reduces that
/// tree to a forest of [`DisplayNode`]s, which is what the diagram view draws.
///
/// Overview
/// --------
///
/// Each recognized node type produces exactly one display node whose label
/// summarizes the construct (`def greet()`, `for i in range`) and whose
/// children expand the interesting part of its subtree (a function's body, a
/// call's arguments). Arrays never produce a node of their own; they are
/// flattened into their parent. Anything else is handled by the structural
/// fallback: its fields are expanded one by one, so constructs without a
/// dedicated shape (a `Module`, a `While` loop) still surface whatever
/// recognized nodes they contain.
///
/// The transformer never fails. Missing fields, unknown discriminators, and
/// fields of the wrong type all degrade to placeholders or to the fallback.
// Imports
// -------
//
// ### Standard library
use std::fmt;

// ### Third-party
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

// ### Local
mod operators;
mod outline;
mod values;

pub use operators::{operator_symbol, render_operator, OPERATOR_SYMBOL_ARR};
pub use outline::{outline, EMPTY_DIAGRAM_PLACEHOLDER};
pub use values::render_value;


// Data structures
// ---------------
//
/// The rendering category of a display node. The diagram view picks colors
/// and icons from this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayKind {
    Function,
    Call,
    Assign,
    Loop,
    Condition,
    Return,
    Expression,
    MathOperator,
    LogicOperator,
    ConditionalExpression,
    Integer,
    #[serde(rename = "string")]
    Text,
    Boolean,
    /// A primitive leaf that isn't an integer, string, or boolean; in practice,
    /// a floating-point number.
    Other,
}

impl DisplayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayKind::Function => "function",
            DisplayKind::Call => "call",
            DisplayKind::Assign => "assign",
            DisplayKind::Loop => "loop",
            DisplayKind::Condition => "condition",
            DisplayKind::Return => "return",
            DisplayKind::Expression => "expression",
            DisplayKind::MathOperator => "math-operator",
            DisplayKind::LogicOperator => "logic-operator",
            DisplayKind::ConditionalExpression => "conditional-expression",
            DisplayKind::Integer => "integer",
            DisplayKind::Text => "string",
            DisplayKind::Boolean => "boolean",
            DisplayKind::Other => "other",
        }
    }
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One box in the diagram.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayNode {
    /// Unique within the forest produced by one call to [`transform`].
    pub id: String,
    pub kind: DisplayKind,
    pub label: String,
    /// Nodes without meaningful content are left out rather than inserted
    /// empty.
    pub children: Vec<DisplayNode>,
}

/// A parsed-tree object, classified by its `type` discriminator. Fields are
/// borrowed from the JSON; a field the parser omitted (or sent with the wrong
/// shape) is `None`.
enum SyntaxNode<'a> {
    FunctionDef {
        name: Option<&'a str>,
        body: Option<&'a Value>,
    },
    Call {
        callee: Option<&'a str>,
        args: Option<&'a Value>,
    },
    Assign {
        target: Option<&'a str>,
        value: Option<&'a Value>,
    },
    For {
        target: Option<&'a Value>,
        iter: Option<&'a Value>,
        body: Option<&'a Value>,
    },
    If {
        test: Option<&'a Value>,
        body: Option<&'a Value>,
    },
    Return {
        value: Option<&'a Value>,
    },
    Expr {
        value: Option<&'a Value>,
    },
    BinOp {
        op: Option<&'a Value>,
        left: Option<&'a Value>,
        right: Option<&'a Value>,
    },
    BoolOp {
        op: Option<&'a Value>,
        values: Option<&'a Value>,
    },
    IfExp {
        test: Option<&'a Value>,
        body: Option<&'a Value>,
        orelse: Option<&'a Value>,
    },
    /// An unrecognized discriminator, or none at all. The structural fallback
    /// walks these fields.
    Other(&'a Map<String, Value>),
}

/// Fields which describe where a node was found in the source rather than
/// what it is. The structural fallback skips them, together with the
/// discriminator.
const IGNORED_FIELD_ARR: &[&str] = &["type", "lineno", "col_offset"];

impl<'a> SyntaxNode<'a> {
    fn from_mapping(map: &'a Map<String, Value>) -> SyntaxNode<'a> {
        match map.get("type").and_then(Value::as_str) {
            Some("FunctionDef") => SyntaxNode::FunctionDef {
                name: non_empty_str(map.get("name")),
                body: map.get("body"),
            },
            Some("Call") => SyntaxNode::Call {
                callee: identifier(map.get("func")),
                args: map.get("args"),
            },
            Some("Assign") => SyntaxNode::Assign {
                // Only the first target is shown: `a = b = 1` reads as `a = 1`.
                target: identifier(map.get("targets").and_then(|targets| targets.get(0))),
                value: map.get("value"),
            },
            Some("For") => SyntaxNode::For {
                target: map.get("target"),
                iter: map.get("iter"),
                body: map.get("body"),
            },
            Some("If") => SyntaxNode::If {
                test: map.get("test"),
                body: map.get("body"),
            },
            Some("Return") => SyntaxNode::Return {
                value: map.get("value"),
            },
            Some("Expr") => SyntaxNode::Expr {
                value: map.get("value"),
            },
            Some("BinOp") => SyntaxNode::BinOp {
                op: map.get("op"),
                left: map.get("left"),
                right: map.get("right"),
            },
            Some("BoolOp") => SyntaxNode::BoolOp {
                op: map.get("op"),
                values: map.get("values"),
            },
            Some("IfExp") => SyntaxNode::IfExp {
                test: map.get("test"),
                body: map.get("body"),
                orelse: map.get("orelse"),
            },
            _ => SyntaxNode::Other(map),
        }
    }
}

/// Return the `id` of an identifier-like node (`{"type": "Name", "id": "x"}`).
fn identifier(node: Option<&Value>) -> Option<&str> {
    non_empty_str(node.and_then(|node| node.get("id")))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|text| !text.is_empty())
}

// Code
// ----
//
/// Transform `node`, found at `depth` in the parsed tree, into display nodes.
/// Pass a depth of 0 for the root of the tree.
///
/// The result is empty only when `node` holds nothing to show (`null`, an
/// empty array, or an object whose fields are all empty or ignored).
pub fn transform(node: &Value, depth: usize) -> Vec<DisplayNode> {
    Transformer::default().transform(node, depth)
}

/// The state of one top-level [`transform`] call: a sequence number which
/// makes every id in the resulting forest unique. A new transformer is built
/// per call, so ids never depend on earlier calls.
#[derive(Default)]
struct Transformer {
    next_seq: usize,
}

impl Transformer {
    fn transform(&mut self, node: &Value, depth: usize) -> Vec<DisplayNode> {
        match node {
            Value::Null => Vec::new(),
            Value::Array(item_arr) => item_arr
                .iter()
                .flat_map(|item| self.transform(item, depth + 1))
                .collect(),
            Value::Object(map) => self.transform_mapping(map, depth),
            leaf => vec![self.leaf(leaf, depth)],
        }
    }

    /// Transform an optional field; an absent field produces nothing.
    fn expand(&mut self, node: Option<&Value>, depth: usize) -> Vec<DisplayNode> {
        match node {
            Some(node) => self.transform(node, depth),
            None => Vec::new(),
        }
    }

    fn transform_mapping(&mut self, map: &Map<String, Value>, depth: usize) -> Vec<DisplayNode> {
        let display_node = match SyntaxNode::from_mapping(map) {
            SyntaxNode::FunctionDef { name, body } => {
                let name = name.unwrap_or("anonymous");
                let id = self.allocate_id("func", Some(name), depth);
                DisplayNode {
                    id,
                    kind: DisplayKind::Function,
                    label: format!("def {name}()"),
                    children: self.expand(body, depth + 1),
                }
            }
            SyntaxNode::Call { callee, args } => {
                let callee = callee.unwrap_or("func");
                let id = self.allocate_id("call", Some(callee), depth);
                DisplayNode {
                    id,
                    kind: DisplayKind::Call,
                    label: format!("{callee}()"),
                    children: self.expand(args, depth + 1),
                }
            }
            SyntaxNode::Assign { target, value } => {
                let target = target.unwrap_or("var");
                DisplayNode {
                    id: self.allocate_id("assign", Some(target), depth),
                    kind: DisplayKind::Assign,
                    label: format!("{target} = {}", render_field(value)),
                    children: Vec::new(),
                }
            }
            SyntaxNode::For { target, iter, body } => {
                let id = self.allocate_id("for", None, depth);
                DisplayNode {
                    id,
                    kind: DisplayKind::Loop,
                    label: format!("for {} in {}", render_field(target), render_field(iter)),
                    children: self.expand(body, depth + 1),
                }
            }
            // Only the body is shown; `orelse` never is.
            SyntaxNode::If { test, body } => {
                let id = self.allocate_id("if", None, depth);
                DisplayNode {
                    id,
                    kind: DisplayKind::Condition,
                    label: format!("if {}", render_field(test)),
                    children: self.expand(body, depth + 1),
                }
            }
            SyntaxNode::Return { value } => DisplayNode {
                id: self.allocate_id("return", None, depth),
                kind: DisplayKind::Return,
                label: format!("return {}", render_field(value)),
                children: Vec::new(),
            },
            SyntaxNode::Expr { value } => {
                let id = self.allocate_id("expr", None, depth);
                DisplayNode {
                    id,
                    kind: DisplayKind::Expression,
                    label: render_field(value),
                    // Expand the value too, so a bare call statement still
                    // shows its arguments.
                    children: self.expand(value, depth + 1),
                }
            }
            SyntaxNode::BinOp { op, left, right } => {
                let id = self.allocate_id("binop", None, depth);
                let mut children = self.expand(left, depth + 1);
                children.extend(self.expand(right, depth + 1));
                DisplayNode {
                    id,
                    kind: DisplayKind::MathOperator,
                    label: render_operator(op),
                    children,
                }
            }
            SyntaxNode::BoolOp { op, values } => {
                let id = self.allocate_id("boolop", None, depth);
                DisplayNode {
                    id,
                    kind: DisplayKind::LogicOperator,
                    label: render_operator(op),
                    children: self.expand(values, depth + 1),
                }
            }
            SyntaxNode::IfExp { test, body, orelse } => {
                let id = self.allocate_id("ifexp", None, depth);
                let mut children = self.expand(test, depth + 1);
                children.extend(self.expand(body, depth + 1));
                children.extend(self.expand(orelse, depth + 1));
                DisplayNode {
                    id,
                    kind: DisplayKind::ConditionalExpression,
                    label: "if".to_string(),
                    children,
                }
            }
            SyntaxNode::Other(map) => return self.transform_fields(map, depth),
        };
        vec![display_node]
    }

    /// The structural fallback: expand every field except the discriminator
    /// and the position metadata, in the order the parser emitted them.
    fn transform_fields(&mut self, map: &Map<String, Value>, depth: usize) -> Vec<DisplayNode> {
        if let Some(node_type) = map.get("type").and_then(Value::as_str) {
            debug!("No diagram shape for node type {node_type}; expanding its fields.");
        }
        let mut display_node_vec = Vec::new();
        for (key, value) in map {
            if !IGNORED_FIELD_ARR.contains(&key.as_str()) {
                display_node_vec.extend(self.transform(value, depth + 1));
            }
        }
        display_node_vec
    }

    fn leaf(&mut self, value: &Value, depth: usize) -> DisplayNode {
        let (kind, label) = match value {
            Value::String(text) => (DisplayKind::Text, text.clone()),
            Value::Bool(flag) => (DisplayKind::Boolean, flag.to_string()),
            Value::Number(number) if number.is_i64() || number.is_u64() => {
                (DisplayKind::Integer, number.to_string())
            }
            other => (DisplayKind::Other, other.to_string()),
        };
        DisplayNode {
            id: self.allocate_id("value", None, depth),
            kind,
            label,
            children: Vec::new(),
        }
    }

    /// Build an id from the node's role, its name (if it has one), and its
    /// depth, then append a sequence number: two `return` statements at the
    /// same depth would otherwise collide.
    fn allocate_id(&mut self, role: &str, name: Option<&str>, depth: usize) -> String {
        let seq = self.next_seq;
        self.next_seq += 1;
        match name {
            Some(name) => format!("{role}-{name}-{depth}-{seq}"),
            None => format!("{role}-{depth}-{seq}"),
        }
    }
}

/// Summarize an optional field; an absent field renders like `null`.
fn render_field(value: Option<&Value>) -> String {
    render_value(value.unwrap_or(&Value::Null))
}
