//! Keyword heuristics for spotting obvious language/selection mismatches
//!
//! This is substring containment, not parsing. False positives and
//! negatives are expected; the check only catches code pasted under a
//! clearly wrong language.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::ProgrammingLanguage;

/// Signature substrings per language, initialized once and never mutated
static KEYWORD_TABLE: Lazy<HashMap<ProgrammingLanguage, &'static [&'static str]>> =
    Lazy::new(|| {
        HashMap::from([
            (
                ProgrammingLanguage::Python,
                &["def ", "import ", "self", "print(", "lambda", "None"][..],
            ),
            (
                ProgrammingLanguage::JavaScript,
                &["function ", "console.log", "var ", "let ", "const ", "=>"][..],
            ),
            (
                ProgrammingLanguage::TypeScript,
                &["interface ", "type ", ": string", ": number", "export ", "import "][..],
            ),
            (
                ProgrammingLanguage::Java,
                &["public class", "System.out.println", "void main", "import java.", "new "][..],
            ),
            (
                ProgrammingLanguage::Cpp,
                &["#include", "std::", "cout <<", "cin >>", "int main(", "using namespace"][..],
            ),
            (
                ProgrammingLanguage::CSharp,
                &[
                    "using System;",
                    "namespace ",
                    "public class",
                    "Console.WriteLine",
                    "static void Main",
                ][..],
            ),
        ])
    });

/// Matches submitted code against the keyword table
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher;

impl KeywordMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Keywords registered for a language
    pub fn keywords(&self, language: ProgrammingLanguage) -> &'static [&'static str] {
        KEYWORD_TABLE.get(&language).copied().unwrap_or(&[])
    }

    /// True iff at least one of the language's keywords occurs in `code`
    pub fn matches(&self, code: &str, language: ProgrammingLanguage) -> bool {
        self.keywords(language).iter().any(|kw| code.contains(kw))
    }

    /// Same as [`matches`](Self::matches) for a language given by name.
    /// Unknown names have no keywords and never match.
    pub fn matches_declared(&self, code: &str, declared_language: &str) -> bool {
        declared_language
            .parse::<ProgrammingLanguage>()
            .map(|language| self.matches(code, language))
            .unwrap_or(false)
    }
}
