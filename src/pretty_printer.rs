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
/// `pretty_printer.rs` -- Format a parsed tree for display next to its diagram
/// =========================================================================
///
/// The output is indented JSON, two spaces per level, with object keys in the
/// order the parser emitted them. Reading it back with any JSON parser gives
/// the original tree.
// Imports
// -------
//
// ### Third-party
use serde_json::Value;

#[cfg(test)]
mod tests;

/// One level of indentation.
const INDENT_UNIT: &str = "  ";

// Code
// ----
//
/// Format `value` as though it were nested `indent` levels deep: the first
/// line isn't indented (it follows a key or list marker), while nested lines
/// and the closing bracket are.
pub fn format(value: &Value, indent: usize) -> String {
    let mut formatted = String::new();
    write_value(value, indent, &mut formatted);
    formatted
}

fn write_value(value: &Value, indent: usize, formatted: &mut String) {
    match value {
        Value::Null => formatted.push_str("null"),
        Value::Bool(flag) => formatted.push_str(if *flag { "true" } else { "false" }),
        Value::Number(number) => formatted.push_str(&number.to_string()),
        Value::String(_) => write_string(value, formatted),
        Value::Array(item_arr) => {
            if item_arr.is_empty() {
                formatted.push_str("[]");
                return;
            }
            formatted.push_str("[\n");
            for (index, item) in item_arr.iter().enumerate() {
                if index > 0 {
                    formatted.push_str(",\n");
                }
                push_indent(indent + 1, formatted);
                write_value(item, indent + 1, formatted);
            }
            formatted.push('\n');
            push_indent(indent, formatted);
            formatted.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                formatted.push_str("{}");
                return;
            }
            formatted.push_str("{\n");
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    formatted.push_str(",\n");
                }
                push_indent(indent + 1, formatted);
                write_string(&Value::String(key.clone()), formatted);
                formatted.push_str(": ");
                write_value(item, indent + 1, formatted);
            }
            formatted.push('\n');
            push_indent(indent, formatted);
            formatted.push('}');
        }
    }
}

/// Write a quoted, escaped JSON string. `value` must be a `Value::String`;
/// serde's `Display` implementation does the escaping.
fn write_string(value: &Value, formatted: &mut String) {
    formatted.push_str(&value.to_string());
}

fn push_indent(indent: usize, formatted: &mut String) {
    for _ in 0..indent {
        formatted.push_str(INDENT_UNIT);
    }
}
