use clap::Parser;
use code_genie::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Workflow(args) => cli::code::run_workflow(args).await,
        Command::Ask(args) => cli::code::run_ask(args).await,
        Command::Comment(args) => cli::code::run_comment(args).await,
        Command::Classify(args) => cli::code::run_classify(args).await,
    }
}
