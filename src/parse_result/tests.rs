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
/// `tests.rs` -- Unit tests for parse results
/// ==========================================
// Imports
// -------
//
// ### Third-party
use assertables::{assert_contains, assert_starts_with};
use indoc::indoc;
use log::Level;
use serde_json::json;
use test_utils::{cast, testing_logger};

// ### Local
use super::{
    run, run_source, ParseOutcome, ParseResponse, Report, SourceParser, EMPTY_RESPONSE_MESSAGE,
    SECTION_RULE,
};
use crate::diagram::{DisplayKind, EMPTY_DIAGRAM_PLACEHOLDER};

/// Answers each parse with a canned outcome, remembering what it was asked.
struct CannedParser {
    outcome_vec: Vec<ParseOutcome>,
    source_vec: Vec<String>,
}

impl SourceParser for CannedParser {
    fn parse(&mut self, source: &str) -> ParseOutcome {
        self.source_vec.push(source.to_string());
        self.outcome_vec.remove(0)
    }
}

// Tests
// -----
#[test]
fn test_envelope() {
    let tree = json!({"type": "Return", "value": {"n": 5}});

    // A tree wins, even next to an error.
    assert_eq!(
        ParseOutcome::from_json(r#"{"parsed": {"type": "Return", "value": {"n": 5}}, "error": null}"#),
        Ok(ParseOutcome::Parsed(tree.clone()))
    );
    assert_eq!(
        ParseOutcome::from(ParseResponse {
            parsed: Some(tree.clone()),
            error: Some(json!("ignored")),
        }),
        ParseOutcome::Parsed(tree)
    );

    // Otherwise the error is passed through verbatim.
    assert_eq!(
        ParseOutcome::from_json(r#"{"parsed": null, "error": "invalid syntax (line 2)"}"#),
        Ok(ParseOutcome::Failed("invalid syntax (line 2)".to_string()))
    );
    assert_eq!(
        ParseOutcome::from_json(r#"{"error": {"detail": "bad"}}"#),
        Ok(ParseOutcome::Failed(r#"{"detail":"bad"}"#.to_string()))
    );

    // Neither.
    for text in [r#"{"parsed": null}"#, r#"{"error": null}"#, r#"{"parsed": null, "error": null}"#] {
        assert_eq!(
            ParseOutcome::from_json(text),
            Ok(ParseOutcome::Failed(EMPTY_RESPONSE_MESSAGE.to_string()))
        );
    }
    assert_eq!(
        ParseOutcome::from(ParseResponse::default()),
        ParseOutcome::Failed(EMPTY_RESPONSE_MESSAGE.to_string())
    );
}

#[test]
fn test_bare_tree() {
    assert_eq!(
        ParseOutcome::from_json(r#"{"type": "Module", "body": []}"#),
        Ok(ParseOutcome::Parsed(json!({"type": "Module", "body": []})))
    );
    // Not an envelope: empty, or with fields of its own.
    assert_eq!(
        ParseOutcome::from_json("{}"),
        Ok(ParseOutcome::Parsed(json!({})))
    );
    assert_eq!(
        ParseOutcome::from_json(r#"{"type": "Expr", "error": "x"}"#),
        Ok(ParseOutcome::Parsed(json!({"type": "Expr", "error": "x"})))
    );
    assert_eq!(
        ParseOutcome::from_json("[1, 2]"),
        Ok(ParseOutcome::Parsed(json!([1, 2])))
    );
}

#[test]
fn test_invalid_json() {
    let err = ParseOutcome::from_json("{\"parsed\": ").unwrap_err();
    assert_starts_with!(err, "Unable to decode the parse result as JSON: ");
}

#[test]
fn test_run_parsed() {
    let report = run(ParseOutcome::Parsed(json!({"type": "Return", "value": {"n": 5}})));
    let (forest, formatted) = cast!(&report, Report::Diagram, forest, formatted);
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].kind, DisplayKind::Return);
    assert_eq!(forest[0].label, "return 5");
    assert!(forest[0].children.is_empty());
    assert_eq!(
        formatted,
        indoc!(
            r#"
            {
              "type": "Return",
              "value": {
                "n": 5
              }
            }"#
        )
    );
    assert_eq!(
        report.to_text(None),
        format!("return return 5\n{SECTION_RULE}\n{formatted}")
    );
}

#[test]
fn test_run_empty_tree() {
    let report = run(ParseOutcome::Parsed(json!({"type": "Module", "body": []})));
    let (forest, _) = cast!(&report, Report::Diagram, forest, formatted);
    assert!(forest.is_empty());
    assert_starts_with!(report.to_text(Some(2)), EMPTY_DIAGRAM_PLACEHOLDER);
}

#[test]
fn test_run_failed() {
    testing_logger::setup();
    let report = run(ParseOutcome::Failed("invalid syntax (line 2)".to_string()));
    assert_eq!(cast!(&report, Report::Error), "invalid syntax (line 2)");
    assert_eq!(report.to_text(None), "invalid syntax (line 2)");
    assert_eq!(
        testing_logger::bodies_at(Level::Warn),
        vec!["Parse failed: invalid syntax (line 2)".to_string()]
    );
}

#[test]
fn test_run_source() {
    let mut parser = CannedParser {
        outcome_vec: vec![
            ParseOutcome::Failed("unexpected EOF".to_string()),
            ParseOutcome::Parsed(json!({"type": "Expr", "value": {"n": 7}})),
        ],
        source_vec: Vec::new(),
    };
    assert_eq!(
        run_source(&mut parser, "print("),
        Report::Error("unexpected EOF".to_string())
    );
    let report = run_source(&mut parser, "7");
    assert_contains!(report.to_text(None), "expression 7");
    assert_eq!(parser.source_vec, vec!["print(".to_string(), "7".to_string()]);
}

#[test]
fn test_serialize() {
    assert_eq!(
        serde_json::to_value(Report::Error("boom".to_string())).unwrap(),
        json!({"error": "boom"})
    );
    let report = run(ParseOutcome::Parsed(json!({"type": "Return", "value": {"n": 5}})));
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["diagram"]["forest"][0]["kind"], json!("return"));
    assert_eq!(value["diagram"]["forest"][0]["label"], json!("return 5"));
}
