/// Copyright (C) 2025 The waddl developers.
///
/// This file is part of waddl. waddl is free software: you can redistribute it
/// and/or modify it under the terms of the GNU General Public License as
/// published by the Free Software Foundation, either version 3 of the License,
/// or (at your option) any later version.
///
/// waddl is distributed in the hope that it will be useful, but WITHOUT ANY
/// WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
/// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
/// details.
///
/// You should have received a copy of the GNU General Public License along with
/// waddl. If not, see [http://www.gnu.org/licenses](http://www.gnu.org/licenses).
///
/// `test_macros.rs` -- Reusable macros for testing
/// ===============================================
///
/// The unit tests under `src/` and the integration tests under `tests/` both
/// need these, so they live in their own crate.
// Macros
// ------
//
// Extract a known enum variant or fail. More concise than the alternative (`if
// let`, or `let else`). The macro does not handle nested patterns like
// `Some(Report::Diagram(forest))`.
#[macro_export]
macro_rules! cast {
    // For an enum containing a single value (the typical case).
    ($target: expr, $pat: path) => {{
        if let $pat(a) = $target {
            a
        } else {
            // If the variant and value mismatch, report the expected pattern.
            panic!("mismatch variant when cast to {}", stringify!($pat));
        }
    }};
    // For an enum variant with named fields, return a tuple of the requested
    // fields. The caller must name every field it wants back.
    ($target: expr, $pat: path, $( $field: ident),*) => {{
        if let $pat { $($field,)* .. } = $target {
            ($($field,)*)
        } else {
            panic!("mismatch variant when cast to {}", stringify!($pat));
        }
    }};
}
