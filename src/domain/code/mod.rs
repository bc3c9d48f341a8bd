//! Submitted code, declared languages and audience options

mod keywords;
mod language;
mod options;
mod submission;

pub use keywords::KeywordMatcher;
pub use language::ProgrammingLanguage;
pub use options::{
    EXAMPLE_QUESTIONS, ExplanationLanguage, ExplanationOptions, SkillLevel, UserRole,
};
pub use submission::{CodeComplexity, CodeSubmission};
