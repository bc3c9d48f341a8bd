//! CLI for Code Genie
//!
//! - `serve`: HTTP API server
//! - `workflow`, `ask`, `comment`, `classify`: one-shot runs against a file
//!   or question, printing to stdout or writing to a file

pub mod code;
pub mod serve;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Code Genie - LLM-backed code explanation, refactoring and review
#[derive(Parser)]
#[command(name = "code-genie")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Run the full workflow on a source file and emit the text report
    Workflow(code::WorkflowArgs),

    /// Ask a question about a source file
    Ask(code::AskArgs),

    /// Add explanatory comments to a source file
    Comment(code::CommentArgs),

    /// Check whether a question is about programming
    Classify(code::ClassifyArgs),
}

/// Load `.env` and layered configuration, then install logging
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);
    debug!(?config, "Configuration loaded");

    Ok(config)
}
