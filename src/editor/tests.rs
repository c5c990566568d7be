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
/// `tests.rs` -- Unit tests for the editor's language tracker
/// ==========================================================
// Imports
// -------
//
// ### Third-party
use log::Level;
use test_utils::testing_logger;

// ### Local
use super::{HighlightingHost, LanguageTracker, WELCOME_SAMPLE};
use crate::classifier::{classify, Language};

/// Records every language it's asked to highlight.
#[derive(Default)]
struct RecordingHost {
    language_vec: Vec<Language>,
}

impl HighlightingHost for RecordingHost {
    fn set_language(&mut self, language: Language) {
        self.language_vec.push(language);
    }
}

const GO_TEXT: &str = "package main\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n";

#[test]
fn test_welcome_sample() {
    assert_eq!(classify(WELCOME_SAMPLE), Language::Python);
    assert!(WELCOME_SAMPLE.starts_with("# Welcome to Waddl!\n"));
    assert!(WELCOME_SAMPLE.ends_with("print(f\"Count: {i}\")"));
}

#[test]
fn test_initial_language() {
    let tracker = LanguageTracker::new(WELCOME_SAMPLE, RecordingHost::default());
    assert_eq!(tracker.language(), Language::Python);
    assert_eq!(tracker.host().language_vec, vec![Language::Python]);

    let tracker = LanguageTracker::new(GO_TEXT, RecordingHost::default());
    assert_eq!(tracker.language(), Language::Go);
    assert_eq!(tracker.into_host().language_vec, vec![Language::Go]);
}

#[test]
fn test_update() {
    testing_logger::setup();
    let mut tracker = LanguageTracker::new(WELCOME_SAMPLE, RecordingHost::default());

    // An edit which keeps the language doesn't bother the host.
    let edited = format!("{WELCOME_SAMPLE}\nprint(\"done\")\n");
    assert_eq!(tracker.update(&edited), None);
    assert_eq!(tracker.update(""), None);
    assert!(testing_logger::bodies_at(Level::Info).is_empty());

    // A change does.
    assert_eq!(tracker.update(GO_TEXT), Some(Language::Go));
    assert_eq!(tracker.language(), Language::Go);
    assert_eq!(tracker.update(GO_TEXT), None);
    assert_eq!(tracker.update(WELCOME_SAMPLE), Some(Language::Python));
    assert_eq!(
        tracker.host().language_vec,
        vec![Language::Python, Language::Go, Language::Python]
    );
    assert_eq!(
        testing_logger::bodies_at(Level::Info),
        vec![
            "Editor language changed from python to go.".to_string(),
            "Editor language changed from go to python.".to_string(),
        ]
    );
}
