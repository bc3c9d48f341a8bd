//! Workflow step and report entities

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::code::{ExplanationOptions, ProgrammingLanguage, SkillLevel, UserRole};
use crate::domain::llm::LlmReply;

/// Named unit of work in a code workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowStepName {
    Explain,
    Refactor,
    Review,
    ErrorDetection,
    TestGeneration,
    Comment,
    SemanticAnswer,
}

impl WorkflowStepName {
    /// Step order of the full workflow
    pub const FULL_WORKFLOW: [WorkflowStepName; 5] = [
        Self::Explain,
        Self::Refactor,
        Self::Review,
        Self::ErrorDetection,
        Self::TestGeneration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explain => "Explain",
            Self::Refactor => "Refactor",
            Self::Review => "Review",
            Self::ErrorDetection => "ErrorDetection",
            Self::TestGeneration => "TestGeneration",
            Self::Comment => "Comment",
            Self::SemanticAnswer => "SemanticAnswer",
        }
    }
}

impl fmt::Display for WorkflowStepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one step: the prompt that was sent and what came back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub name: WorkflowStepName,
    pub prompt: String,
    pub output: LlmReply,
}

impl WorkflowStep {
    pub fn new(name: WorkflowStepName, prompt: impl Into<String>, output: LlmReply) -> Self {
        Self {
            name,
            prompt: prompt.into(),
            output,
        }
    }
}

/// Context recorded in the report header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub language: ProgrammingLanguage,
    pub skill_level: SkillLevel,
    pub role: UserRole,
}

impl ReportMetadata {
    pub fn new(language: ProgrammingLanguage, options: &ExplanationOptions) -> Self {
        Self {
            generated_at: Utc::now(),
            language,
            skill_level: options.skill_level,
            role: options.role,
        }
    }
}

/// Ordered results of a full workflow run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowReport {
    pub metadata: ReportMetadata,
    steps: Vec<WorkflowStep>,
    /// Unified diff of the submitted code against the Refactor output
    pub diff: String,
}

impl WorkflowReport {
    pub const FILE_NAME: &'static str = "ai_workflow_report.txt";

    pub fn new(metadata: ReportMetadata, steps: Vec<WorkflowStep>, diff: impl Into<String>) -> Self {
        Self {
            metadata,
            steps,
            diff: diff.into(),
        }
    }

    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    pub fn step(&self, name: WorkflowStepName) -> Option<&WorkflowStep> {
        self.steps.iter().find(|step| step.name == name)
    }

    pub fn step_names(&self) -> Vec<WorkflowStepName> {
        self.steps.iter().map(|step| step.name).collect()
    }

    /// Plain-text document offered for download
    pub fn to_text(&self) -> String {
        let mut report = format!(
            "AI Workflow Report\nGenerated on: {}\nLanguage: {}\nSkill Level: {}\nRole: {}\n\n",
            self.metadata.generated_at.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.metadata.language,
            self.metadata.skill_level,
            self.metadata.role,
        );

        for step in &self.steps {
            report.push_str(&format!("## {}\n{}\n\n---\n\n", step.name, step.output));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_report() -> WorkflowReport {
        let metadata = ReportMetadata {
            generated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            language: ProgrammingLanguage::Python,
            skill_level: SkillLevel::Expert,
            role: UserRole::BackendDeveloper,
        };
        let steps = vec![
            WorkflowStep::new(
                WorkflowStepName::Explain,
                "Explain this",
                LlmReply::text("It defines foo."),
            ),
            WorkflowStep::new(
                WorkflowStepName::Refactor,
                "Refactor this",
                LlmReply::remote_error("quota exceeded"),
            ),
        ];
        WorkflowReport::new(metadata, steps, "")
    }

    #[test]
    fn test_report_text_layout() {
        let text = sample_report().to_text();
        assert_eq!(
            text,
            "AI Workflow Report\n\
             Generated on: 2024-05-01 12:30:00.000000\n\
             Language: Python\n\
             Skill Level: Expert\n\
             Role: Backend Developer\n\n\
             ## Explain\nIt defines foo.\n\n---\n\n\
             ## Refactor\n[Primary API Error] quota exceeded\n\n---\n\n"
        );
    }

    #[test]
    fn test_step_lookup() {
        let report = sample_report();
        assert_eq!(
            report.step_names(),
            vec![WorkflowStepName::Explain, WorkflowStepName::Refactor]
        );
        assert!(report.step(WorkflowStepName::Refactor).is_some());
        assert!(report.step(WorkflowStepName::Review).is_none());
    }

    #[test]
    fn test_full_workflow_order() {
        let names: Vec<&str> = WorkflowStepName::FULL_WORKFLOW
            .iter()
            .map(WorkflowStepName::as_str)
            .collect();
        assert_eq!(
            names,
            vec!["Explain", "Refactor", "Review", "ErrorDetection", "TestGeneration"]
        );
    }
}
