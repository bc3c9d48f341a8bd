//! Domain layer - Core business logic and entities

pub mod code;
pub mod diff;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod workflow;

pub use code::{
    CodeComplexity, CodeSubmission, EXAMPLE_QUESTIONS, ExplanationLanguage, ExplanationOptions,
    KeywordMatcher, ProgrammingLanguage, SkillLevel, UserRole,
};
pub use diff::DiffFormatter;
pub use error::DomainError;
pub use llm::{
    LlmGateway, LlmReply, Message, MessageRole, REMOTE_ERROR_PREFIX, is_coding_question,
};
pub use prompt::{CodeFilter, FenceFilter, PassthroughFilter, PromptBuilder};
pub use workflow::{ReportMetadata, WorkflowReport, WorkflowStep, WorkflowStepName};
