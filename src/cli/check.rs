//! Check command - run the gate against the current workflow event

use crate::cli::style::{check, cross, Stylize};
use anstream::println;
use commit_gate::action::{load_trigger_context, ActionEnv, GateInputs, Publisher};
use commit_gate::error::Result;
use commit_gate::gate::{run_gate, GateReport};
use commit_gate::matcher::MatchPhrase;
use commit_gate::platform::GitHubService;
use commit_gate::progress::TracingProgress;

/// Run the gate with inputs and context from `env`
///
/// Prints a summary of the search and returns the report.
pub async fn run_check(
    phrase: &MatchPhrase,
    env: &ActionEnv,
    publisher: &mut dyn Publisher,
) -> Result<GateReport> {
    let inputs = GateInputs::from_env(env)?;
    let source = GitHubService::new(&inputs.github_token, env.api_url())?;
    let ctx = load_trigger_context(env)?;

    let report = run_gate(&inputs, &ctx, &source, publisher, phrase, &TracingProgress).await?;
    print_summary(phrase, &report);

    Ok(report)
}

fn print_summary(phrase: &MatchPhrase, report: &GateReport) {
    match &report.search.first_non_matching {
        None => {
            println!(
                "{} All commits match {}",
                check(),
                format!("\"{phrase}\"").accent()
            );
        }
        Some(commit) => {
            let sha_short = commit.sha.get(..7).unwrap_or(&commit.sha);
            let first_line = commit.message.lines().next().unwrap_or_default();
            println!(
                "{} Commit {} does not match {}",
                cross().for_stdout(),
                sha_short.accent(),
                format!("\"{phrase}\"").accent()
            );
            println!("  {}", first_line.muted());
        }
    }

    for (name, value) in &report.outputs {
        println!("  {} = {}", name.emphasis(), value);
    }
}
