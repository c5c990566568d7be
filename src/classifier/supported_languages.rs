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
/// `supported_languages.rs` -- Patterns which identify each supported language
/// =========================================================================
///
/// The [classifier](../classifier.rs) scores a text by counting, line by line,
/// how many of each language's patterns match. This file holds those patterns.
///
/// Ordering
/// --------
///
/// Ordering matters: when two languages tie, the one listed first wins. Python
/// comes first, since it's what the editor starts with.
///
/// Writing patterns
/// ----------------
///
/// Each pattern is tried against a single line, so a construct which spans
/// lines can only be recognized by one of its lines. Every pattern must
/// require some non-blank content: blank lines never vote. Prefer idioms
/// which no other supported language shares; for example, Rust and JavaScript
/// both have `let x = 1;`, so neither language claims a plain `let`.
// Imports
// -------
//
// ### Local
use super::{Language, LanguagePatterns};

// Define patterns for each supported language
// -------------------------------------------
pub const LANGUAGE_PATTERNS_ARR: &[LanguagePatterns] = &[
    // ### Python
    LanguagePatterns {
        language: Language::Python,
        pattern_arr: &[
            r"^#!.*\bpython[0-9.]*\b",
            r"^\s*def\s+\w+\s*\(.*\)\s*(->\s*[^:]+)?:\s*$",
            r"^\s*class\s+\w+(\s*\(.*\))?\s*:\s*$",
            r"^\s*import\s+[\w.]+(\s+as\s+\w+)?(\s*,\s*[\w.]+(\s+as\s+\w+)?)*\s*$",
            r"^\s*from\s+[\w.]+\s+import\s+",
            r"^\s*(elif\s.+|else|try|finally|except.*)\s*:\s*$",
            r"^\s*(if|while|for|with)\s.+:\s*$",
            r#"^\s*if\s+__name__\s*==\s*['"]__main__['"]\s*:"#,
            r"\bprint\s*\(",
            r"\b(range|enumerate|isinstance|zip)\s*\(",
            r#"\bf["'][^"']*\{"#,
            r"\blambda\s+\w*\s*:",
            r"\b(True|False)\b",
            r"^\s*pass\s*$",
            r"\.py\b",
        ],
    },
    // ### JavaScript
    LanguagePatterns {
        language: Language::Javascript,
        pattern_arr: &[
            r"^#!.*\bnode\b",
            r"^\s*(const|var)\s+[\w$]+\s*=",
            r"^\s*(let|const|var)\s+\{[^}]*\}\s*=",
            r"\bfunction\s*\*?\s*[\w$]*\s*\(",
            r"=\s*(async\s*)?\([^)]*\)\s*=>",
            r"\(([\w$]+(\s*,\s*[\w$]+)*)?\)\s*=>",
            r"\bconsole\.(log|error|warn|info|debug)\s*\(",
            r#"\brequire\s*\(\s*['"]"#,
            r#"^\s*import\s+.*\bfrom\s+['"]"#,
            r"^\s*export\s+(default\s+)?(async\s+)?(function|class|const|let|var)\b",
            r"^\s*module\.exports\s*=",
            r"\bdocument\.(getElementById|querySelector(All)?|createElement)\s*\(",
            r"\bJSON\.(parse|stringify)\s*\(",
            r"\bnew\s+Promise\s*\(",
            r"\bundefined\b",
            r"===|!==",
            r"\.js\b",
        ],
    },
    // ### Java
    LanguagePatterns {
        language: Language::Java,
        pattern_arr: &[
            r"^\s*package\s+[\w.]+\s*;\s*$",
            r"^\s*import\s+(static\s+)?[\w.]+(\.\*)?\s*;\s*$",
            r"^\s*(public|private|protected)\s+(abstract\s+|final\s+|static\s+)*(class|interface|enum|record)\s+\w+",
            r"\bpublic\s+static\s+void\s+main\s*\(",
            r"\bSystem\.(out|err)\.(println|print|printf)\s*\(",
            r"^\s*@(Override|Deprecated|SuppressWarnings|FunctionalInterface|Test)\b",
            r"\b(String|int|long|double|boolean)\[\]\s+\w+",
            r"\bnew\s+(ArrayList|HashMap|HashSet|LinkedList|StringBuilder)\s*[<(]",
            r"\b(List|Map|Set|Optional)<[A-Z]\w*(,\s*[A-Z]\w*)?>\s+\w+\s*=",
            r"\bthrows\s+[A-Z]\w*(Exception|Error)\b",
            r"\bString\s+\w+\s*=",
            r"\.java\b",
        ],
    },
    // ### C/C++
    LanguagePatterns {
        language: Language::Cpp,
        pattern_arr: &[
            r#"^\s*#\s*include\s*[<"]"#,
            r"\bstd::\w+",
            r"^\s*using\s+namespace\s+\w+(::\w+)*\s*;",
            r"\b(cout|cin|cerr|endl)\b",
            r"^\s*template\s*<",
            r"^\s*(public|private|protected)\s*:\s*$",
            r"\bint\s+main\s*\(",
            r"^\s*#\s*(define|ifndef|ifdef|endif|pragma)\b",
            r"\b(nullptr|constexpr|virtual|typename)\b",
            r"\b(unsigned|signed)\s+(int|char|long|short)\b",
            r"\bdelete\s*(\[\])?\s*\w+\s*;",
            r"^\s*printf\s*\(",
            r"\.(cpp|cc|cxx|hpp|hh|h)\b",
        ],
    },
    // ### Rust
    LanguagePatterns {
        language: Language::Rust,
        pattern_arr: &[
            r"^\s*(pub(\([\w:]+\))?\s+)?(const\s+)?(async\s+)?(unsafe\s+)?fn\s+\w+",
            r"^\s*use\s+[\w:]+(::\{[^}]*\}|::\*)?\s*;\s*$",
            r"^\s*(pub(\([\w:]+\))?\s+)?(mod|trait)\s+\w+",
            r"^\s*pub(\([\w:]+\))?\s+(struct|enum|type)\s+\w+",
            r"^\s*#!?\[\w+",
            r"^\s*impl\b",
            r"\blet\s+mut\s+\w+",
            r"\blet\s+\w+\s*:\s*[\w&<>\[\]()]+\s*=",
            r"\b(println|eprintln|print|format|vec|panic|assert|assert_eq|write|writeln|todo|unreachable)!\s*[(\[]",
            r"->\s*(Self|Option<|Result<|Vec<|Box<|&|impl\s|String|u8|u16|u32|u64|usize|i32|i64|f64|\(\))",
            r"\b(Some|Ok|Err)\s*\(",
            r"\bmatch\s+[\w.&*]+\s*\{",
            r"&(mut\s+)?self\b",
            r"::(new|from|default)\s*\(",
            r"\.unwrap\(\)|\)\?;",
            r"\.rs\b",
        ],
    },
    // ### Go
    LanguagePatterns {
        language: Language::Go,
        pattern_arr: &[
            r"^\s*package\s+\w+\s*$",
            r"^\s*func\s+(\([^)]*\)\s*)?\w+\s*\(",
            r#"^\s*import\s+(\(\s*$|"[\w./-]+"\s*$)"#,
            r"\bfmt\.(Print|Println|Printf|Sprintf|Errorf|Fprintf)\s*\(",
            r"\b\w+(\s*,\s*\w+)*\s*:=",
            r"^\s*type\s+\w+\s+(struct|interface)\s*\{",
            r"\bgo\s+(func\b|\w+\()",
            r"\bdefer\s+\w+",
            r"\berr\s*!=\s*nil\b",
            r"\bchan\s+\w+",
            r"\bmake\s*\(\s*(\[\]|map\[|chan\b)",
            r"\bfor\s+\w+(\s*,\s*\w+)?\s*:=\s*range\b",
            r"\bnil\b",
            r"\.go\b",
        ],
    },
    // ### PHP
    LanguagePatterns {
        language: Language::Php,
        pattern_arr: &[
            r"<\?php",
            r"\$\w+\s*=[^=]",
            r"\becho\s+",
            r"\$this->\w+",
            r"\$\w+->\w+",
            r"^\s*(public|private|protected)\s+(static\s+)?function\s+\w+",
            r"\bfunction\s+\w+\s*\([^)]*\$\w+",
            r"^\s*namespace\s+[\w\\]+\s*;",
            r"^\s*use\s+\w+(\\\w+)+(\s+as\s+\w+)?\s*;",
            r"\?>",
            r#"\b(require|include)(_once)?\s+['"]"#,
            r"\b(require_once|include_once)\s*\(",
            r"\$_(GET|POST|SERVER|SESSION|COOKIE|REQUEST)\b",
            r"\b(isset|unset|empty|count|strlen|explode|implode)\s*\(\s*\$",
            r"=>\s*\$\w+|\$\w+\s*=>",
            r"\.php\b",
        ],
    },
    // ### SQL
    //
    // Keywords are matched without regard to case, except where a lowercase
    // keyword would also start a line in another language (Rust's `where`
    // clauses, for example).
    LanguagePatterns {
        language: Language::Sql,
        pattern_arr: &[
            r"(?i)^\s*SELECT\s",
            r"(?i)\bFROM\s+[\w.]+(\s+(AS\s+)?\w+)?\s*(WHERE\b|JOIN\b|;|$)",
            r"(?i)^\s*INSERT\s+INTO\b",
            r"(?i)^\s*UPDATE\s+\w+\s+SET\b",
            r"(?i)^\s*DELETE\s+FROM\b",
            r"(?i)^\s*CREATE\s+(TABLE|INDEX|UNIQUE\s+INDEX|VIEW|DATABASE|SCHEMA)\b",
            r"(?i)^\s*(ALTER|DROP)\s+(TABLE|INDEX|VIEW|DATABASE|SCHEMA)\b",
            r"^\s*(WHERE|GROUP\s+BY|ORDER\s+BY|HAVING|LIMIT\s+\d+|((LEFT|RIGHT|INNER|OUTER|CROSS)\s+)?JOIN)\b",
            r"\b(VARCHAR|INTEGER|PRIMARY\s+KEY|FOREIGN\s+KEY|NOT\s+NULL|AUTO_INCREMENT|REFERENCES)\b",
            r"(?i)\bVALUES\s*\(",
            r"^\s*--(\s|$)",
            r"\.sql\b",
        ],
    },
    // ### HTML
    LanguagePatterns {
        language: Language::Html,
        pattern_arr: &[
            r"(?i)^\s*<!DOCTYPE\s+html",
            r"(?i)</?html\b",
            r"(?i)</?(head|body|title|meta|link)\b",
            r"</?(div|span|p|a|ul|ol|li|table|tr|td|th|h[1-6]|section|header|footer|nav|main|article|form|input|button|img|label|select|option)\b[^>]*>",
            r"(?i)<(script|style)\b",
            r"<!--.*-->",
            r#"<\w+(\s+[\w-]+(="[^"]*")?)*\s+(class|id|href|src|style|type|rel|name|content)="[^"]*""#,
            r"&(nbsp|amp|lt|gt|quot|copy);",
            r"(?i)\.html?\b",
        ],
    },
    // ### CSS
    LanguagePatterns {
        language: Language::Css,
        pattern_arr: &[
            r"^\s*[.#][\w-]+[\s,>+~:.#\[\]=\w-]*\{\s*$",
            r"^\s*(html|body|h[1-6]|p|a|div|span|ul|ol|li|table|img|button|input|nav|header|footer|section|main|\*)[\s,>+~:.#\[\]=\w-]*\{\s*$",
            r"^\s*-?[a-z][a-z-]*\s*:\s*[^;{}]+;\s*$",
            r"^\s*@(media|import|keyframes|font-face|charset|supports)\b",
            r"\b\d+(\.\d+)?(px|em|rem|vh|vw|pt)\b",
            r"#[0-9a-fA-F]{3}([0-9a-fA-F]{3})?\b",
            r"\b(rgba?|hsla?)\s*\(",
            r"!important\b",
            r"\.css\b",
        ],
    },
    // ### JSON
    LanguagePatterns {
        language: Language::Json,
        pattern_arr: &[
            r"^\s*[\[{]\s*$",
            r#"^\s*"[^"]*"\s*:\s*("([^"\\]|\\.)*"|-?\d+(\.\d+)?([eE][+-]?\d+)?|true|false|null|\{|\[)\s*,?\s*$"#,
            r#"^\s*\{\s*"[^"]*"\s*:"#,
            r#"^\s*("([^"\\]|\\.)*"|-?\d+(\.\d+)?|true|false|null)\s*,\s*$"#,
            r#"^\s*\[\s*(("([^"\\]|\\.)*"|-?\d+(\.\d+)?([eE][+-]?\d+)?|true|false|null)(\s*,\s*("([^"\\]|\\.)*"|-?\d+(\.\d+)?([eE][+-]?\d+)?|true|false|null))*)?\s*\]\s*,?\s*$"#,
            r"^\s*[}\]]\s*,\s*$",
            r"\.json\b",
        ],
    },
    // ### Markdown
    //
    // A single `#` heading is left out: it reads the same as a Python comment.
    LanguagePatterns {
        language: Language::Markdown,
        pattern_arr: &[
            r"^#{2,6}\s+\S",
            r"^(={3,}|-{3,})\s*$",
            r"^\s*[-+*]\s+\[[ xX]\]\s",
            r"^[-+]\s+\S",
            r"^\d+\.\s+\S",
            r"!?\[[^\]]+\]\((https?://|\.{0,2}/|#|mailto:)[^)]*\)",
            r"^\s*(```|~~~)",
            r"\*\*[^*\s][^*]*\*\*",
            r"^>\s",
            r"^\|.*\|\s*$",
            r"\.md\b",
        ],
    },
];
