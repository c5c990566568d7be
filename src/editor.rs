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
/// `editor.rs` -- Keep the editor's highlighting language in step with its
/// content
/// ========================================================================
// Imports
// -------
//
// ### Third-party
use log::info;

// ### Local
use crate::classifier::{classify, Language};

#[cfg(test)]
mod tests;

// Globals
// -------
//
/// The program the editor opens with.
pub const WELCOME_SAMPLE: &str = r#"# Welcome to Waddl!
# Enter your Python code here

def greet(name):
    """A simple greeting function"""
    return f"Hello, {name}!"

# Example usage
result = greet("Waddl")
print(result)

# You can add more Python code here
for i in range(3):
    print(f"Count: {i}")"#;

// Data structures
// ---------------
//
/// The text widget which highlights the editor's content.
pub trait HighlightingHost {
    /// Highlight the content as `language` from now on.
    fn set_language(&mut self, language: Language);
}

/// Re-classifies the editor's content after each change, telling the host
/// only when the language actually changes.
pub struct LanguageTracker<H: HighlightingHost> {
    host: H,
    language: Language,
}

// Code
// ----
impl<H: HighlightingHost> LanguageTracker<H> {
    /// Classify the initial `text` and hand the result to `host`.
    pub fn new(text: &str, mut host: H) -> Self {
        let language = classify(text);
        host.set_language(language);
        LanguageTracker { host, language }
    }

    /// The language the host is currently highlighting.
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Call after every change to the content. Returns the new language if it
    /// differs from the previous one.
    pub fn update(&mut self, text: &str) -> Option<Language> {
        let language = classify(text);
        if language == self.language {
            return None;
        }
        info!("Editor language changed from {} to {language}.", self.language);
        self.language = language;
        self.host.set_language(language);
        Some(language)
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
