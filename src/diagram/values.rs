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
/// `values.rs` -- Summarize a subtree as a short label
/// ====================================================
// Imports
// -------
//
// ### Third-party
use serde_json::Value;

/// Shown for anything which can't be summarized in a word or two.
pub const ELLIPSIS: &str = "...";

// Code
// ----
//
/// Reduce `value` to a short string for use inside a label, such as the `x`
/// and `range` in `for x in range`. Rather than expanding the subtree, this
/// looks for the one field which names it:
///
/// 1.  strings, numbers, and booleans render as their literal text;
/// 2.  an identifier node (`Name`) renders as its `id`;
/// 3.  a node with a `value` field (`Constant`, `Attribute`, ...) renders as
///     that field;
/// 4.  an old-style `Num` node renders its `n`.
///
/// An `id` or `n` counts when it's a non-empty string, a number, or a
/// boolean.
///
/// Everything else is [`ELLIPSIS`]. Each step either stops or descends into a
/// direct child, so this always terminates.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Object(map) => {
            if let Some(id) = map.get("id").and_then(scalar_text) {
                id
            } else if let Some(inner) = map.get("value") {
                render_value(inner)
            } else if let Some(n) = map.get("n").and_then(scalar_text) {
                n
            } else {
                ELLIPSIS.to_string()
            }
        }
        Value::Null | Value::Array(_) => ELLIPSIS.to_string(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
