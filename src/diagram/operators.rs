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
/// `operators.rs` -- Display symbols for binary and boolean operators
/// ===================================================================
// Imports
// -------
//
// ### Third-party
use serde_json::Value;

/// Operator identifiers, as the parser names them, paired with the symbol the
/// diagram shows.
pub const OPERATOR_SYMBOL_ARR: &[(&str, &str)] = &[
    ("Add", "+"),
    ("Sub", "-"),
    ("Mult", "*"),
    ("Div", "/"),
    ("Mod", "%"),
    ("Pow", "^"),
    ("And", "and"),
    ("Or", "or"),
];

/// Shown when the operator carries no identifier at all.
const UNKNOWN_OPERATOR: &str = "?";

pub fn operator_symbol(identifier: &str) -> Option<&'static str> {
    OPERATOR_SYMBOL_ARR
        .iter()
        .find(|(name, _)| *name == identifier)
        .map(|(_, symbol)| *symbol)
}

/// Render the `op` field of a `BinOp` or `BoolOp`. The identifier is either the
/// field itself (`"op": "Add"`) or, as Python's `ast` module serializes it,
/// the discriminator of an operator node (`"op": {"type": "Add"}`).
/// Identifiers missing from [`OPERATOR_SYMBOL_ARR`] are shown as-is.
pub fn render_operator(op: Option<&Value>) -> String {
    let identifier = match op {
        Some(Value::String(identifier)) => Some(identifier.as_str()),
        Some(Value::Object(map)) => map.get("type").and_then(Value::as_str),
        _ => None,
    };
    match identifier.filter(|identifier| !identifier.is_empty()) {
        Some(identifier) => operator_symbol(identifier).unwrap_or(identifier).to_string(),
        None => UNKNOWN_OPERATOR.to_string(),
    }
}
