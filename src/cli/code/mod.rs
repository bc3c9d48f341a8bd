//! One-shot code commands

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Args;
use tracing::{info, warn};

use crate::domain::{
    CodeSubmission, ExplanationLanguage, ExplanationOptions, ProgrammingLanguage, SkillLevel,
    UserRole, WorkflowReport,
};

/// Default file name for `comment --output` without a value
pub const COMMENTED_CODE_FILE_NAME: &str = "commented_code.txt";

/// Source file and its language
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Source file to submit
    #[arg(long, short)]
    pub file: PathBuf,

    /// Language of the file; inferred from the extension when omitted
    #[arg(long, short)]
    pub language: Option<ProgrammingLanguage>,
}

impl InputArgs {
    async fn load(&self) -> anyhow::Result<CodeSubmission> {
        let language = match self.language {
            Some(language) => language,
            None => infer_language(&self.file)?,
        };

        let code = tokio::fs::read_to_string(&self.file)
            .await
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        Ok(CodeSubmission::new(code, language))
    }
}

/// How the explanation should be pitched
#[derive(Args, Debug)]
pub struct AudienceArgs {
    #[arg(long, default_value_t = SkillLevel::default())]
    pub skill: SkillLevel,

    #[arg(long, default_value_t = UserRole::default())]
    pub role: UserRole,

    /// Language the explanation is written in
    #[arg(long = "explain-in", default_value_t = ExplanationLanguage::default())]
    pub explain_in: ExplanationLanguage,
}

impl AudienceArgs {
    fn options(&self) -> ExplanationOptions {
        ExplanationOptions::new(self.skill, self.role, self.explain_in)
    }
}

#[derive(Args, Debug)]
pub struct WorkflowArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub audience: AudienceArgs,

    /// Write the report to a file instead of stdout
    #[arg(long, short, num_args = 0..=1, default_missing_value = WorkflowReport::FILE_NAME)]
    pub output: Option<PathBuf>,

    /// Also print the diff between the original and refactored code
    #[arg(long)]
    pub diff: bool,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Question about the code
    #[arg(long, short)]
    pub question: String,

    #[command(flatten)]
    pub audience: AudienceArgs,
}

#[derive(Args, Debug)]
pub struct CommentArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the commented code to a file instead of stdout
    #[arg(long, short, num_args = 0..=1, default_missing_value = COMMENTED_CODE_FILE_NAME)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[arg(long, short)]
    pub question: String,
}

/// Run the full workflow once and emit the text report
pub async fn run_workflow(args: WorkflowArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let state = crate::create_app_state(&config)?;
    let submission = args.input.load().await?;

    let report = state
        .workflow_service
        .run_full_workflow(&submission, &args.audience.options())
        .await?;

    emit(&report.to_text(), args.output.as_deref()).await?;

    if args.diff {
        if report.diff.is_empty() {
            println!("(refactored code is identical to the original)");
        } else {
            println!("{}", report.diff);
        }
    }

    Ok(())
}

/// Answer a question about the file and print the answer
pub async fn run_ask(args: AskArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let state = crate::create_app_state(&config)?;
    let submission = args.input.load().await?;

    let step = state
        .workflow_service
        .run_semantic_search(&submission, &args.question, &args.audience.options())
        .await?;

    if !step.output.is_success() {
        warn!("Endpoint returned an error; printing it as the answer");
    }
    println!("{}", step.output);

    Ok(())
}

/// Add comments to the file and emit the result
pub async fn run_comment(args: CommentArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let state = crate::create_app_state(&config)?;
    let submission = args.input.load().await?;

    let step = state
        .workflow_service
        .run_comment_generation(&submission)
        .await?;

    emit(&step.output.display_text(), args.output.as_deref()).await
}

/// Print `yes` or `no`
pub async fn run_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let state = crate::create_app_state(&config)?;

    let is_coding = state
        .workflow_service
        .classify_question(&args.question)
        .await?;

    println!("{}", if is_coding { "yes" } else { "no" });

    Ok(())
}

fn infer_language(path: &Path) -> anyhow::Result<ProgrammingLanguage> {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        bail!(
            "Cannot infer the language of {}; pass --language",
            path.display()
        );
    };

    match ProgrammingLanguage::from_extension(extension) {
        Some(language) => Ok(language),
        None => bail!("Unsupported file extension '.{}'; pass --language", extension),
    }
}

async fn emit(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, text)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "Output written");
        }
        None => println!("{}", text),
    }

    Ok(())
}
