//! Gate run orchestration
//!
//! Chains trigger resolution, commit listing, and matching, then publishes
//! the step outputs.

use crate::action::{GateInputs, Publisher};
use crate::commits::get_commits;
use crate::error::Result;
use crate::matcher::{search_all_commit_messages, MatchPhrase, SearchResult};
use crate::platform::CommitSource;
use crate::progress::ScanProgress;
use crate::trigger::resolve_trigger;
use crate::types::{Trigger, TriggerContext};
use tracing::info;

/// Output flag published for every run
pub const BAN_OUTPUT: &str = "run_ban";

/// Value published for every output flag
pub const OUTPUT_ENABLED: &str = "1";

/// Result of a gate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    /// Match-all outcome over the commits in scope
    pub search: SearchResult,
    /// Outputs published, in publish order
    pub outputs: Vec<(String, String)>,
}

/// List the commits for `trigger` and check them against `phrase`
pub async fn search_in_commits(
    source: &dyn CommitSource,
    trigger: &Trigger,
    phrase: &MatchPhrase,
    progress: &dyn ScanProgress,
) -> Result<SearchResult> {
    let commits = get_commits(source, trigger, progress).await?;
    info!(count = commits.len(), "commits in scope");

    Ok(search_all_commit_messages(&commits, phrase, progress))
}

/// Name of the per-job output flag
pub fn job_output_name(job_id: &str) -> String {
    format!("run_{job_id}")
}

/// Run the gate end to end
///
/// Both output flags are published whenever the search completes, whatever
/// its outcome. They go out as one batch, so a run that fails publishes
/// neither.
pub async fn run_gate(
    inputs: &GateInputs,
    ctx: &TriggerContext,
    source: &dyn CommitSource,
    publisher: &mut dyn Publisher,
    phrase: &MatchPhrase,
    progress: &dyn ScanProgress,
) -> Result<GateReport> {
    let trigger = resolve_trigger(ctx, inputs.pr_id.as_deref())?;
    let search = search_in_commits(source, &trigger, phrase, progress).await?;
    info!(
        all_matched = search.all_matched,
        first_non_matching = ?search.first_non_matching.as_ref().map(|c| c.sha.as_str()),
        "search finished"
    );

    info!("job: {}", inputs.job_id);
    info!("job matrix:\n{}", inputs.job_matrix);

    let outputs = vec![
        (job_output_name(&inputs.job_id), OUTPUT_ENABLED.to_string()),
        (BAN_OUTPUT.to_string(), OUTPUT_ENABLED.to_string()),
    ];
    for (name, value) in &outputs {
        info!("{name} = {value}");
    }
    publisher.set_outputs(&outputs)?;

    Ok(GateReport { search, outputs })
}
