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
/// `tests.rs` -- Unit tests for the pretty-printer
/// ================================================
// Imports
// -------
//
// ### Third-party
use indoc::indoc;
use serde_json::{json, Value};

// ### Local
use super::format;

// Tests
// -----
#[test]
fn test_scalars() {
    assert_eq!(format(&Value::Null, 0), "null");
    assert_eq!(format(&json!(true), 0), "true");
    assert_eq!(format(&json!(-12), 0), "-12");
    assert_eq!(format(&json!(0.25), 0), "0.25");
    assert_eq!(format(&json!("say \"hi\"\n"), 0), r#""say \"hi\"\n""#);
    assert_eq!(format(&json!([]), 3), "[]");
    assert_eq!(format(&json!({}), 3), "{}");
}

#[test]
fn test_nested() {
    let tree = json!({
        "type": "Return",
        "value": {"type": "Constant", "value": 5, "kind": null},
        "decorators": [],
        "lineno": 2
    });
    assert_eq!(
        format(&tree, 0),
        indoc!(
            r#"
            {
              "type": "Return",
              "value": {
                "type": "Constant",
                "value": 5,
                "kind": null
              },
              "decorators": [],
              "lineno": 2
            }"#
        )
    );

    // A non-zero indent shifts everything after the first line.
    assert_eq!(format(&json!([1, [2]]), 1), "[\n    1,\n    [\n      2\n    ]\n  ]");
}

#[test]
fn test_key_order() {
    let tree: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": {"y": 3, "b": 4}}"#).unwrap();
    assert_eq!(
        format(&tree, 0),
        "{\n  \"z\": 1,\n  \"a\": 2,\n  \"m\": {\n    \"y\": 3,\n    \"b\": 4\n  }\n}"
    );
}

// The output matches serde's own pretty-printer and reads back to the same
// tree.
#[test]
fn test_round_trip() {
    for tree in [
        json!(null),
        json!("tab\tand unicode \u{e9}\u{1F986}"),
        json!([1, -2.5, 1e300, true, null, "", [], {}]),
        json!({
            "type": "Module",
            "body": [
                {"type": "Expr", "value": {"type": "Call", "func": {"id": "print"}, "args": ["\\"]}},
                {"type": "Assign", "targets": [{"id": "x"}], "value": {"n": 18446744073709551615u64}}
            ],
            "": {"nested": [[[]]]}
        }),
    ] {
        let formatted = format(&tree, 0);
        assert_eq!(formatted, serde_json::to_string_pretty(&tree).unwrap());
        let reparsed: Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(reparsed, tree);
    }
}
