//! commit-gate - commit message gate for CI pipelines
//!
//! CLI binary run as a workflow step. Inputs and the trigger context come from
//! the runner environment; outputs and failures go back through it.

use anyhow::Result;
use clap::Parser;
use commit_gate::action::{ActionEnv, Publisher, WorkflowCommands};
use commit_gate::matcher::MatchPhrase;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "commit-gate")]
#[command(about = "Check that every commit in a push or pull request matches a phrase")]
#[command(version)]
struct Cli {
    /// Phrase every commit message must contain
    #[arg(long, default_value = "[skip]")]
    phrase: String,

    /// Treat the phrase as a regular expression
    #[arg(long)]
    pattern: bool,

    /// Log every comparison
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries workflow commands.
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let env = ActionEnv::from_process();
    let mut publisher = WorkflowCommands::from_env(&env);

    match run(&cli, &env, &mut publisher).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            publisher.set_failed(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, env: &ActionEnv, publisher: &mut WorkflowCommands) -> Result<()> {
    let phrase = if cli.pattern {
        MatchPhrase::pattern(&cli.phrase)?
    } else {
        MatchPhrase::literal(cli.phrase.as_str())
    };

    cli::run_check(&phrase, env, publisher).await?;
    Ok(())
}
