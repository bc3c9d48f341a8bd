//! Request and response bodies for the code workflow endpoints

use serde::{Deserialize, Serialize};

use crate::domain::{
    CodeComplexity, CodeSubmission, EXAMPLE_QUESTIONS, ExplanationLanguage, ExplanationOptions,
    ProgrammingLanguage, ReportMetadata, SkillLevel, UserRole, WorkflowReport, WorkflowStep,
    WorkflowStepName,
};

/// Code plus its declared language
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionBody {
    pub code: String,
    pub language: ProgrammingLanguage,
}

impl SubmissionBody {
    pub fn to_submission(&self) -> CodeSubmission {
        CodeSubmission::new(self.code.clone(), self.language)
    }
}

/// POST /v1/workflows/full
#[derive(Debug, Clone, Deserialize)]
pub struct FullWorkflowRequest {
    #[serde(flatten)]
    pub submission: SubmissionBody,
    #[serde(flatten)]
    pub options: ExplanationOptions,
}

/// POST /v1/semantic-search
#[derive(Debug, Clone, Deserialize)]
pub struct SemanticSearchRequest {
    #[serde(flatten)]
    pub submission: SubmissionBody,
    pub question: String,
    #[serde(flatten)]
    pub options: ExplanationOptions,
}

/// POST /v1/comments
#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    #[serde(flatten)]
    pub submission: SubmissionBody,
}

/// POST /v1/questions/classify
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyQuestionRequest {
    pub question: String,
}

/// POST /v1/complexity
#[derive(Debug, Clone, Deserialize)]
pub struct ComplexityRequest {
    pub code: String,
}

/// One step as shown to API callers
#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub step: WorkflowStepName,
    pub output: String,
    pub success: bool,
}

impl From<&WorkflowStep> for StepView {
    fn from(step: &WorkflowStep) -> Self {
        Self {
            step: step.name,
            output: step.output.display_text(),
            success: step.output.is_success(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FullWorkflowResponse {
    pub metadata: ReportMetadata,
    pub steps: Vec<StepView>,
    pub diff: String,
    pub complexity: String,
    pub report: String,
}

impl FullWorkflowResponse {
    pub fn new(report: &WorkflowReport, complexity: CodeComplexity) -> Self {
        Self {
            metadata: report.metadata.clone(),
            steps: report.steps().iter().map(StepView::from).collect(),
            diff: report.diff.clone(),
            complexity: complexity.label(),
            report: report.to_text(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SemanticSearchResponse {
    pub answer: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub commented_code: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyQuestionResponse {
    pub is_coding_question: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplexityResponse {
    pub lines: usize,
    pub label: String,
}

impl From<CodeComplexity> for ComplexityResponse {
    fn from(complexity: CodeComplexity) -> Self {
        Self {
            lines: complexity.lines,
            label: complexity.label(),
        }
    }
}

/// Choices offered by the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct OptionsResponse {
    pub programming_languages: Vec<ProgrammingLanguage>,
    pub skill_levels: Vec<SkillLevel>,
    pub roles: Vec<UserRole>,
    pub explanation_languages: Vec<ExplanationLanguage>,
    pub example_questions: Vec<&'static str>,
}

impl Default for OptionsResponse {
    fn default() -> Self {
        Self {
            programming_languages: ProgrammingLanguage::ALL.to_vec(),
            skill_levels: SkillLevel::ALL.to_vec(),
            roles: UserRole::ALL.to_vec(),
            explanation_languages: ExplanationLanguage::ALL.to_vec(),
            example_questions: EXAMPLE_QUESTIONS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow_request_flattens_options() {
        let request: FullWorkflowRequest = serde_json::from_value(serde_json::json!({
            "code": "def foo(): pass",
            "language": "Python",
            "skill_level": "Expert",
            "role": "Data Scientist"
        }))
        .unwrap();

        assert_eq!(request.submission.language, ProgrammingLanguage::Python);
        assert_eq!(request.options.skill_level, SkillLevel::Expert);
        assert_eq!(request.options.role, UserRole::DataScientist);
        assert_eq!(request.options.explanation_language, ExplanationLanguage::English);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let result = serde_json::from_value::<CommentRequest>(serde_json::json!({
            "code": "x",
            "language": "Fortran"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_options_response_lists_everything() {
        let json = serde_json::to_value(OptionsResponse::default()).unwrap();
        assert_eq!(json["programming_languages"][4], "C++");
        assert_eq!(json["roles"][1], "Frontend Developer");
        assert_eq!(json["example_questions"].as_array().unwrap().len(), 6);
    }
}
