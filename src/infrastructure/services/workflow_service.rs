//! Workflow service - runs the code workflows against the LLM gateway

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    CodeSubmission, DiffFormatter, DomainError, ExplanationOptions, KeywordMatcher, LlmGateway,
    PromptBuilder, ReportMetadata, WorkflowReport, WorkflowStep, WorkflowStepName,
    is_coding_question,
};

/// Sequences prompt building and gateway calls for each workflow.
///
/// Only validation failures are returned as errors, and they are returned
/// before any remote call. Remote failures end up as step output.
pub struct WorkflowService {
    gateway: Arc<dyn LlmGateway>,
    prompts: PromptBuilder,
    matcher: KeywordMatcher,
    differ: DiffFormatter,
}

impl WorkflowService {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            prompts: PromptBuilder::default(),
            matcher: KeywordMatcher::new(),
            differ: DiffFormatter::new(),
        }
    }

    pub fn with_prompt_builder(mut self, prompts: PromptBuilder) -> Self {
        self.prompts = prompts;
        self
    }

    /// Explain, Refactor, Review, ErrorDetection and TestGeneration.
    ///
    /// The steps are independent and run concurrently; the report always
    /// lists them in that order. The diff compares the submitted code with
    /// the Refactor output.
    pub async fn run_full_workflow(
        &self,
        submission: &CodeSubmission,
        options: &ExplanationOptions,
    ) -> Result<WorkflowReport, DomainError> {
        submission.validate(&self.matcher)?;

        let run_id = Uuid::new_v4();
        let start = Instant::now();
        let code = submission.text();
        let language = submission.language();

        info!(
            run_id = %run_id,
            language = %language,
            skill_level = %options.skill_level,
            role = %options.role,
            "Running full code workflow"
        );

        let explain_prompt = self
            .prompts
            .build_explanation_prompt(code, language, options, None);
        let refactor_messages = self.prompts.refactor_messages(code, language);
        let refactor_prompt = refactor_messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        let review_prompt = self.prompts.review_prompt(code, language);
        let error_prompt = self.prompts.error_detection_prompt(code, language);
        let test_prompt = self.prompts.test_generation_prompt(code, language);

        let (explain, refactor, review, errors, tests) = tokio::join!(
            self.gateway.call_primary(&explain_prompt),
            self.gateway.call_secondary(refactor_messages),
            self.gateway.call_primary(&review_prompt),
            self.gateway.call_primary(&error_prompt),
            self.gateway.call_primary(&test_prompt),
        );

        let diff = self.differ.diff(code, &refactor.display_text());

        let steps = vec![
            WorkflowStep::new(WorkflowStepName::Explain, explain_prompt, explain),
            WorkflowStep::new(WorkflowStepName::Refactor, refactor_prompt, refactor),
            WorkflowStep::new(WorkflowStepName::Review, review_prompt, review),
            WorkflowStep::new(WorkflowStepName::ErrorDetection, error_prompt, errors),
            WorkflowStep::new(WorkflowStepName::TestGeneration, test_prompt, tests),
        ];

        let degraded = steps.iter().filter(|s| !s.output.is_success()).count();
        if degraded > 0 {
            warn!(run_id = %run_id, degraded, "Workflow completed with remote errors");
        }

        info!(
            run_id = %run_id,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Code workflow complete"
        );

        Ok(WorkflowReport::new(
            ReportMetadata::new(language, options),
            steps,
            diff,
        ))
    }

    /// Answer a natural-language question about the submitted code
    pub async fn run_semantic_search(
        &self,
        submission: &CodeSubmission,
        question: &str,
        options: &ExplanationOptions,
    ) -> Result<WorkflowStep, DomainError> {
        if submission.is_blank() || question.trim().is_empty() {
            return Err(DomainError::validation("Both code and question are required."));
        }
        submission.validate(&self.matcher)?;

        info!(language = %submission.language(), "Running semantic search");

        let prompt = self.prompts.build_explanation_prompt(
            submission.text(),
            submission.language(),
            options,
            Some(question),
        );
        let answer = self.gateway.call_primary(&prompt).await;

        Ok(WorkflowStep::new(WorkflowStepName::SemanticAnswer, prompt, answer))
    }

    /// Return the submitted code with explanatory comments added
    pub async fn run_comment_generation(
        &self,
        submission: &CodeSubmission,
    ) -> Result<WorkflowStep, DomainError> {
        submission.validate(&self.matcher)?;

        info!(language = %submission.language(), "Generating code comments");

        let messages = self
            .prompts
            .comment_messages(submission.text(), submission.language());
        let prompt = messages
            .last()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        let commented = self.gateway.call_secondary(messages).await;

        Ok(WorkflowStep::new(WorkflowStepName::Comment, prompt, commented))
    }

    /// Whether a question is about programming; `false` on any failure
    pub async fn classify_question(&self, question: &str) -> Result<bool, DomainError> {
        if question.trim().is_empty() {
            return Err(DomainError::validation("A question is required."));
        }

        Ok(is_coding_question(self.gateway.as_ref(), question).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EndpointConfig, LlmConfig};
    use crate::domain::llm::MockLlmGateway;
    use crate::domain::{
        ExplanationLanguage, LlmReply, Message, ProgrammingLanguage, SkillLevel, UserRole,
    };
    use crate::infrastructure::llm::ChatGateway;
    use mockall::Sequence;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn python(code: &str) -> CodeSubmission {
        CodeSubmission::new(code, ProgrammingLanguage::Python)
    }

    fn options() -> ExplanationOptions {
        ExplanationOptions::new(
            SkillLevel::Beginner,
            UserRole::Student,
            ExplanationLanguage::English,
        )
    }

    fn service(gateway: MockLlmGateway) -> WorkflowService {
        WorkflowService::new(Arc::new(gateway))
    }

    #[tokio::test]
    async fn test_empty_code_makes_no_calls() {
        let mut gateway = MockLlmGateway::new();
        gateway.expect_call_primary().times(0);
        gateway.expect_call_secondary().times(0);

        let err = service(gateway)
            .run_full_workflow(&python("   "), &options())
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_language_mismatch_makes_no_calls() {
        let mut gateway = MockLlmGateway::new();
        gateway.expect_call_primary().times(0);
        gateway.expect_call_secondary().times(0);

        let submission = CodeSubmission::new("print('hi')", ProgrammingLanguage::Java);
        let err = service(gateway)
            .run_full_workflow(&submission, &options())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Language mismatch"));
    }

    #[tokio::test]
    async fn test_full_workflow_calls_steps_in_order() {
        let code = "def foo(): pass";
        let mut gateway = MockLlmGateway::new();
        let mut seq = Sequence::new();

        gateway
            .expect_call_primary()
            .withf(|prompt: &str| prompt.starts_with("Explain this Python code"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| LlmReply::text("explanation"));
        gateway
            .expect_call_secondary()
            .withf(|messages: &Vec<Message>| {
                messages[1].content == "Refactor this Python code: def foo(): pass"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| LlmReply::text("def foo() -> None:\n    pass"));
        gateway
            .expect_call_primary()
            .withf(|prompt: &str| prompt.starts_with("Review this Python code"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| LlmReply::text("review"));
        gateway
            .expect_call_primary()
            .withf(|prompt: &str| prompt.starts_with("Find bugs in this Python code"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| LlmReply::text("bugs"));
        gateway
            .expect_call_primary()
            .withf(|prompt: &str| prompt.starts_with("Generate tests for this Python code"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| LlmReply::text("tests"));

        let report = service(gateway)
            .run_full_workflow(&python(code), &options())
            .await
            .unwrap();

        assert_eq!(report.step_names(), WorkflowStepName::FULL_WORKFLOW.to_vec());
        assert_eq!(
            report.step(WorkflowStepName::Refactor).unwrap().prompt,
            "Refactor this Python code: def foo(): pass"
        );
        assert_eq!(
            report.diff,
            "--- Original\n+++ Refactored\n@@ -1 +1,2 @@\n-def foo(): pass\n+def foo() -> None:\n+    pass"
        );
        for step in report.steps() {
            assert!(step.prompt.contains(code));
        }
    }

    #[tokio::test]
    async fn test_remote_errors_do_not_abort_workflow() {
        let mut gateway = MockLlmGateway::new();
        gateway
            .expect_call_primary()
            .times(4)
            .returning(|_| LlmReply::remote_error("service unavailable"));
        gateway
            .expect_call_secondary()
            .times(1)
            .returning(|_| LlmReply::remote_error("service unavailable"));

        let report = service(gateway)
            .run_full_workflow(&python("import os"), &options())
            .await
            .unwrap();

        assert_eq!(report.steps().len(), 5);
        assert!(report.steps().iter().all(|s| !s.output.is_success()));
        assert!(report.to_text().contains("## TestGeneration\n[Primary API Error] service unavailable"));
    }

    #[tokio::test]
    async fn test_report_metadata() {
        let mut gateway = MockLlmGateway::new();
        gateway
            .expect_call_primary()
            .returning(|_| LlmReply::text("ok"));
        gateway
            .expect_call_secondary()
            .returning(|_| LlmReply::text("lambda: None"));

        let opts = ExplanationOptions::new(
            SkillLevel::Expert,
            UserRole::FrontendDeveloper,
            ExplanationLanguage::Chinese,
        );
        let report = service(gateway)
            .run_full_workflow(&python("lambda: None"), &opts)
            .await
            .unwrap();

        assert_eq!(report.metadata.language, ProgrammingLanguage::Python);
        assert_eq!(report.metadata.skill_level, SkillLevel::Expert);
        assert_eq!(report.metadata.role, UserRole::FrontendDeveloper);
        assert_eq!(report.diff, "");
        assert!(report
            .step(WorkflowStepName::Explain)
            .unwrap()
            .prompt
            .contains("Respond in Chinese."));
    }

    #[tokio::test]
    async fn test_semantic_search_requires_question() {
        let mut gateway = MockLlmGateway::new();
        gateway.expect_call_primary().times(0);

        let err = service(gateway)
            .run_semantic_search(&python("def foo(): pass"), "  ", &options())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Validation error: Both code and question are required."
        );
    }

    #[tokio::test]
    async fn test_semantic_search_single_primary_call() {
        let mut gateway = MockLlmGateway::new();
        gateway
            .expect_call_primary()
            .withf(|prompt: &str| {
                prompt == "What does this function do?\n\nCode:\ndef foo(): pass\n"
            })
            .times(1)
            .returning(|_| LlmReply::text("Nothing."));
        gateway.expect_call_secondary().times(0);

        let step = service(gateway)
            .run_semantic_search(&python("def foo(): pass"), "What does this function do?", &options())
            .await
            .unwrap();

        assert_eq!(step.name, WorkflowStepName::SemanticAnswer);
        assert_eq!(step.output, LlmReply::text("Nothing."));
    }

    #[tokio::test]
    async fn test_comment_generation_validates() {
        let mut gateway = MockLlmGateway::new();
        gateway.expect_call_secondary().times(0);

        let submission = CodeSubmission::new("x = 1", ProgrammingLanguage::Cpp);
        let err = service(gateway)
            .run_comment_generation(&submission)
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_comment_generation_falls_back_to_primary_on_500() {
        let server = MockServer::start().await;
        let code = "def add(a, b):\n    return a + b";
        let instruction = PromptBuilder::new().comment_prompt(code, ProgrammingLanguage::Python);

        Mock::given(method("POST"))
            .and(path("/secondary"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/primary"))
            .and(body_json(serde_json::json!({
                "model": "primary-model",
                "messages": [{ "role": "user", "content": instruction }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "content": "# adds\ndef add(a, b):\n    return a + b" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = LlmConfig {
            timeout_secs: 5,
            primary: EndpointConfig::new(format!("{}/primary", server.uri()), "primary-model"),
            secondary: EndpointConfig::new(format!("{}/secondary", server.uri()), "code-chat"),
        };
        let gateway = ChatGateway::from_config(&config).unwrap();
        let service = WorkflowService::new(Arc::new(gateway));

        let step = service.run_comment_generation(&python(code)).await.unwrap();

        assert_eq!(step.name, WorkflowStepName::Comment);
        assert_eq!(step.prompt, instruction);
        assert_eq!(
            step.output,
            LlmReply::text("# adds\ndef add(a, b):\n    return a + b")
        );
    }

    #[tokio::test]
    async fn test_classify_question() {
        let mut gateway = MockLlmGateway::new();
        gateway
            .expect_call_secondary()
            .times(1)
            .returning(|_| LlmReply::text("yes"));

        let service = service(gateway);
        assert!(service.classify_question("Is this recursive?").await.unwrap());
        assert!(service.classify_question("").await.is_err());
    }
}
