use serde::{Deserialize, Serialize};

use super::{KeywordMatcher, ProgrammingLanguage};
use crate::domain::DomainError;

/// Source code submitted for analysis, with the language the user selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSubmission {
    text: String,
    language: ProgrammingLanguage,
}

impl CodeSubmission {
    pub fn new(text: impl Into<String>, language: ProgrammingLanguage) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> ProgrammingLanguage {
        self.language
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Check the submission before any remote call is made
    pub fn validate(&self, matcher: &KeywordMatcher) -> Result<(), DomainError> {
        if self.is_blank() {
            return Err(DomainError::validation("Please paste or upload your code."));
        }

        if !matcher.matches(&self.text, self.language) {
            return Err(DomainError::validation(
                "Language mismatch. Please check your code and language selection.",
            ));
        }

        Ok(())
    }

    pub fn complexity(&self) -> CodeComplexity {
        CodeComplexity::measure(&self.text)
    }
}

/// Line-count stand-in for a complexity metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeComplexity {
    pub lines: usize,
}

impl CodeComplexity {
    pub fn measure(code: &str) -> Self {
        Self {
            lines: code.matches('\n').count() + 1,
        }
    }

    pub fn label(&self) -> String {
        format!("{} lines", self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_submission_is_rejected() {
        let submission = CodeSubmission::new("   \n\t", ProgrammingLanguage::Python);
        let err = submission.validate(&KeywordMatcher::new()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("paste or upload"));
    }

    #[test]
    fn test_mismatched_language_is_rejected() {
        let submission = CodeSubmission::new("print('hi')", ProgrammingLanguage::Java);
        let err = submission.validate(&KeywordMatcher::new()).unwrap_err();
        assert!(err.to_string().contains("Language mismatch"));
    }

    #[test]
    fn test_matching_submission_is_accepted() {
        let submission = CodeSubmission::new("def foo(): pass", ProgrammingLanguage::Python);
        assert!(submission.validate(&KeywordMatcher::new()).is_ok());
    }

    #[test]
    fn test_complexity_counts_lines() {
        assert_eq!(CodeComplexity::measure("").lines, 1);
        assert_eq!(CodeComplexity::measure("a\nb\nc").label(), "3 lines");
        assert_eq!(CodeComplexity::measure("a\n").lines, 2);
    }
}
