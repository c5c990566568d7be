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
/// `classifier.rs` -- Guess the programming language of a text
/// ============================================================
///
/// The editor highlights whatever the user types, so it needs a language
/// before any parse happens. This is a cheap heuristic: every line is tested
/// against each language's [patterns](classifier/supported_languages.rs), and
/// each pattern which matches earns that language one point. The language
/// with the most points wins.
///
/// Properties:
///
/// *   The result is a pure function of the text.
/// *   Blank (whitespace-only) lines never change the result.
/// *   Ties go to the language registered first.
/// *   A text which no pattern matches is [`DEFAULT_LANGUAGE`].
// Imports
// -------
//
// ### Standard library
use std::{fmt, str::FromStr};

// ### Third-party
use lazy_static::lazy_static;
use log::trace;
use regex::RegexSet;
use serde::{Deserialize, Serialize};

// ### Local
mod supported_languages;
use supported_languages::LANGUAGE_PATTERNS_ARR;


// Data structures
// ---------------
//
/// A language the editor knows how to highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
    Java,
    Cpp,
    Rust,
    Go,
    Php,
    Sql,
    Html,
    Css,
    Json,
    Markdown,
}

/// The language assumed when nothing in the text points elsewhere.
pub const DEFAULT_LANGUAGE: Language = Language::Python;

impl Language {
    /// The identifier the highlighting host uses for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Php => "php",
            Language::Sql => "sql",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Markdown => "markdown",
        }
    }

    /// Every supported language, in registration (tie-breaking) order.
    pub fn all() -> impl Iterator<Item = Language> {
        LANGUAGE_PATTERNS_ARR.iter().map(|patterns| patterns.language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::all()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| format!("Unsupported language '{s}'."))
    }
}

/// The patterns which vote for one language. See
/// [supported\_languages.rs](classifier/supported_languages.rs).
pub struct LanguagePatterns<'a> {
    pub language: Language,
    /// Regexes, each tried against a single line of the text.
    pub pattern_arr: &'a [&'a str],
}

/// A language's patterns, compiled into a set so that one pass over a line
/// reports every pattern which matched.
struct LanguagePatternsCompiled {
    language: Language,
    pattern_set: RegexSet,
}

/// Points earned by each language, in registration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreTable {
    score_arr: Vec<(Language, usize)>,
}

// Globals
// -------
lazy_static! {
    static ref LANGUAGE_PATTERNS_COMPILED_VEC: Vec<LanguagePatternsCompiled> =
        LANGUAGE_PATTERNS_ARR
            .iter()
            .map(|patterns| LanguagePatternsCompiled {
                language: patterns.language,
                // The patterns are constants; a failure here is a bug caught
                // by the tests.
                pattern_set: RegexSet::new(patterns.pattern_arr).unwrap(),
            })
            .collect();
}

// Code
// ----
impl ScoreTable {
    fn new() -> Self {
        ScoreTable {
            score_arr: Language::all().map(|language| (language, 0)).collect(),
        }
    }

    /// The points earned by `language`.
    pub fn score(&self, language: Language) -> usize {
        self.score_arr
            .iter()
            .find(|(scored_language, _)| *scored_language == language)
            .map_or(0, |(_, score)| *score)
    }

    /// Each language with its points, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, usize)> + '_ {
        self.score_arr.iter().copied()
    }

    /// The language with strictly more points than every language registered
    /// before it, or `None` if no language scored.
    pub fn winner(&self) -> Option<Language> {
        let mut best: Option<(Language, usize)> = None;
        for (language, score) in self.iter() {
            if score > best.map_or(0, |(_, best_score)| best_score) {
                best = Some((language, score));
            }
        }
        best.map(|(language, _)| language)
    }
}

impl fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut is_first = true;
        for (language, score) in self.iter() {
            if !is_first {
                f.write_str(", ")?;
            }
            write!(f, "{language}: {score}")?;
            is_first = false;
        }
        Ok(())
    }
}

/// Score `text` against every supported language.
pub fn score(text: &str) -> ScoreTable {
    let mut score_table = ScoreTable::new();
    // Blank lines can't vote.
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        for (index, compiled) in LANGUAGE_PATTERNS_COMPILED_VEC.iter().enumerate() {
            debug_assert_eq!(score_table.score_arr[index].0, compiled.language);
            score_table.score_arr[index].1 += compiled.pattern_set.matches(line).iter().count();
        }
    }
    score_table
}

/// Guess the language of `text`.
pub fn classify(text: &str) -> Language {
    let score_table = score(text);
    trace!("Language scores: {score_table}");
    score_table.winner().unwrap_or(DEFAULT_LANGUAGE)
}
