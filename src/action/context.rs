//! Trigger context loading from the runner environment

use crate::action::ActionEnv;
use crate::error::{Error, Result};
use crate::types::{EventKind, TriggerContext};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Fields of the webhook payload the gate reads
#[derive(Debug, Default, Deserialize)]
struct EventPayload {
    /// SHA of the most recent commit on the ref before the push
    before: Option<String>,
}

/// Build the trigger context from `GITHUB_*` variables
///
/// `GITHUB_REPOSITORY` is required. The event payload at `GITHUB_EVENT_PATH`
/// is optional; when it is missing a push has no `before` boundary.
pub fn load_trigger_context(env: &ActionEnv) -> Result<TriggerContext> {
    let event_name = env.var("GITHUB_EVENT_NAME").unwrap_or_default();
    let git_ref = env.var("GITHUB_REF").unwrap_or_default().to_string();

    let (owner, repo) = env
        .var("GITHUB_REPOSITORY")
        .and_then(|r| r.split_once('/'))
        .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty())
        .ok_or_else(|| {
            Error::Context(
                "context.repo requires a GITHUB_REPOSITORY environment variable like 'owner/repo'"
                    .to_string(),
            )
        })?;

    let payload = match env.var("GITHUB_EVENT_PATH") {
        Some(path) => read_payload(Path::new(path))?,
        None => EventPayload::default(),
    };

    let event_kind = EventKind::from_event_name(event_name);
    debug!(event_name, %event_kind, %git_ref, owner, repo, before = ?payload.before, "loaded trigger context");

    Ok(TriggerContext {
        event_kind,
        git_ref,
        owner: owner.to_string(),
        repo: repo.to_string(),
        before_sha: payload.before,
    })
}

fn read_payload(path: &Path) -> Result<EventPayload> {
    if !path.exists() {
        warn!("GITHUB_EVENT_PATH {} does not exist", path.display());
        return Ok(EventPayload::default());
    }

    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
