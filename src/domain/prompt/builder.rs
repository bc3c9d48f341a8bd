use std::sync::Arc;

use super::filter::{CodeFilter, PassthroughFilter};
use crate::domain::code::{ExplanationOptions, ProgrammingLanguage};
use crate::domain::llm::Message;

pub const SYSTEM_PROMPT: &str = "You are a helpful coding assistant.";

/// Assembles the prompts and message lists for every workflow step
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    filter: Arc<dyn CodeFilter>,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::with_filter(Arc::new(PassthroughFilter))
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: Arc<dyn CodeFilter>) -> Self {
        Self { filter }
    }

    /// Explanation prompt, or a direct-answer prompt when a question is given
    pub fn build_explanation_prompt(
        &self,
        code: &str,
        language: ProgrammingLanguage,
        options: &ExplanationOptions,
        question: Option<&str>,
    ) -> String {
        let code = self.filter.apply(code);
        let lang_instruction = if options.explanation_language.is_default() {
            String::new()
        } else {
            format!(" Respond in {}.", options.explanation_language)
        };

        match question.filter(|q| !q.is_empty()) {
            Some(question) => format!("{question}\n\nCode:\n{code}\n{lang_instruction}"),
            None => format!(
                "Explain this {} code for a {} {}.{}\n{}",
                language, options.skill_level, options.role, lang_instruction, code
            ),
        }
    }

    pub fn refactor_messages(&self, code: &str, language: ProgrammingLanguage) -> Vec<Message> {
        let code = self.filter.apply(code);
        vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(format!("Refactor this {language} code: {code}")),
        ]
    }

    pub fn review_prompt(&self, code: &str, language: ProgrammingLanguage) -> String {
        let code = self.filter.apply(code);
        format!("Review this {language} code for errors and improvements: {code}")
    }

    pub fn error_detection_prompt(&self, code: &str, language: ProgrammingLanguage) -> String {
        let code = self.filter.apply(code);
        format!("Find bugs in this {language} code: {code}")
    }

    pub fn test_generation_prompt(&self, code: &str, language: ProgrammingLanguage) -> String {
        let code = self.filter.apply(code);
        format!("Generate tests for this {language} code: {code}")
    }

    /// Instruction asking for the code back with comments added
    pub fn comment_prompt(&self, code: &str, language: ProgrammingLanguage) -> String {
        let code = self.filter.apply(code);
        format!(
            "Add clear, helpful comments to this {language} code. \
             Keep the code unchanged except for adding comments. \
             Return the full code with comments:\n\n{code}"
        )
    }

    pub fn comment_messages(&self, code: &str, language: ProgrammingLanguage) -> Vec<Message> {
        vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(self.comment_prompt(code, language)),
        ]
    }

    pub fn coding_question_messages(&self, question: &str) -> Vec<Message> {
        vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(format!(
                "Is the following question about programming or code? \
                 Answer only 'yes' or 'no'. Question: {question}"
            )),
        ]
    }
}
