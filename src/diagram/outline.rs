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
/// `outline.rs` -- A plain-text view of a diagram forest
/// ======================================================
///
/// Each node becomes one line, `<kind> <label>`, indented two spaces per
/// level:
///
/// ```text
/// function def greet()
///   return return ...
/// assign result = ...
/// ```
// Imports
// -------
//
// ### Local
use super::DisplayNode;

/// Shown instead of an outline when the forest is empty.
pub const EMPTY_DIAGRAM_PLACEHOLDER: &str = "No parseable code structure found";

// Code
// ----
//
/// Render `forest` as an indented outline. With `max_depth`, only that many
/// levels are shown (at least one); a node whose children were cut off ends
/// with the number of hidden children, as in `call print() (+2)`.
pub fn outline(forest: &[DisplayNode], max_depth: Option<usize>) -> String {
    if forest.is_empty() {
        return EMPTY_DIAGRAM_PLACEHOLDER.to_string();
    }
    let max_depth = max_depth.map(|max_depth| max_depth.max(1));
    let mut line_vec = Vec::new();
    outline_level(forest, 1, max_depth, &mut line_vec);
    line_vec.join("\n")
}

fn outline_level(
    forest: &[DisplayNode],
    level: usize,
    max_depth: Option<usize>,
    line_vec: &mut Vec<String>,
) {
    let indent = "  ".repeat(level - 1);
    for node in forest {
        let is_last_level = max_depth == Some(level);
        if is_last_level && !node.children.is_empty() {
            line_vec.push(format!(
                "{indent}{} {} (+{})",
                node.kind,
                node.label,
                node.children.len()
            ));
        } else {
            line_vec.push(format!("{indent}{} {}", node.kind, node.label));
            outline_level(&node.children, level + 1, max_depth, line_vec);
        }
    }
}
