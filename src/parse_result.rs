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
/// `parse_result.rs` -- Turn the parser's answer into a diagram or an error
/// ========================================================================
///
/// The parsing service answers every submission with an envelope holding
/// either the parsed tree or a description of what went wrong:
///
/// ```json
/// { "parsed": { "type": "Module", "body": [] }, "error": null }
/// ```
///
/// A run shows exactly one of two things: the diagram of the tree (with the
/// formatted tree beside it), or the error message. A failed parse is never
/// transformed.
// Imports
// -------
//
// ### Third-party
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ### Local
use crate::diagram::{outline, transform, DisplayNode};
use crate::pretty_printer;

#[cfg(test)]
mod tests;

// Globals
// -------
//
/// Reported when the envelope holds neither a tree nor an error.
pub const EMPTY_RESPONSE_MESSAGE: &str = "The parser returned neither a tree nor an error.";

/// Separates the outline from the formatted tree in a text report.
pub const SECTION_RULE: &str = "----------------------------------------";

// Data structures
// ---------------
//
/// The envelope returned by the parsing service.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResponse {
    /// The syntax tree; `null` or absent when the parse failed.
    #[serde(default)]
    pub parsed: Option<Value>,
    /// Why the parse failed. Normally a string, but any JSON is accepted.
    #[serde(default)]
    pub error: Option<Value>,
}

/// What a parse produced.
#[derive(Debug, PartialEq)]
pub enum ParseOutcome {
    Parsed(Value),
    Failed(String),
}

/// Something which parses source text, such as a client of the parsing
/// service.
pub trait SourceParser {
    fn parse(&mut self, source: &str) -> ParseOutcome;
}

/// The result of one run.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Report {
    Diagram {
        forest: Vec<DisplayNode>,
        /// The parsed tree, pretty-printed.
        formatted: String,
    },
    Error(String),
}

// Code
// ----
impl From<ParseResponse> for ParseOutcome {
    fn from(response: ParseResponse) -> Self {
        // A tree wins over an error.
        if let Some(parsed) = response.parsed {
            return ParseOutcome::Parsed(parsed);
        }
        match response.error {
            Some(Value::String(message)) => ParseOutcome::Failed(message),
            None | Some(Value::Null) => ParseOutcome::Failed(EMPTY_RESPONSE_MESSAGE.to_string()),
            Some(other) => ParseOutcome::Failed(other.to_string()),
        }
    }
}

impl ParseOutcome {
    /// Read a parser answer from JSON text: either the service's envelope or
    /// a bare tree.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(text)
            .map_err(|err| format!("Unable to decode the parse result as JSON: {err}"))?;
        if !is_envelope(&value) {
            return Ok(ParseOutcome::Parsed(value));
        }
        let response: ParseResponse = serde_json::from_value(value)
            .map_err(|err| format!("Unable to decode the parse response: {err}"))?;
        Ok(response.into())
    }
}

/// An envelope is an object with at least one of the envelope's fields and
/// nothing else. A tree node always has other fields (`type`, at least).
fn is_envelope(value: &Value) -> bool {
    match value.as_object() {
        Some(map) => {
            !map.is_empty() && map.keys().all(|key| key == "parsed" || key == "error")
        }
        None => false,
    }
}

/// Produce the diagram for a successful parse, or pass the error through.
pub fn run(outcome: ParseOutcome) -> Report {
    match outcome {
        ParseOutcome::Parsed(tree) => Report::Diagram {
            forest: transform(&tree, 0),
            formatted: pretty_printer::format(&tree, 0),
        },
        ParseOutcome::Failed(message) => {
            warn!("Parse failed: {message}");
            Report::Error(message)
        }
    }
}

/// Parse `source` with `parser`, then [`run`] the outcome.
pub fn run_source<P: SourceParser + ?Sized>(parser: &mut P, source: &str) -> Report {
    run(parser.parse(source))
}

impl Report {
    /// A plain-text rendition: the outline of the diagram, a rule, then the
    /// formatted tree; or just the error message.
    pub fn to_text(&self, max_depth: Option<usize>) -> String {
        match self {
            Report::Diagram { forest, formatted } => {
                format!("{}\n{SECTION_RULE}\n{formatted}", outline(forest, max_depth))
            }
            Report::Error(message) => message.clone(),
        }
    }
}
