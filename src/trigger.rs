//! Trigger resolution
//!
//! Maps the run context onto either a push range or a pull request number.

use crate::error::{Error, Result};
use crate::types::{EventKind, Trigger, TriggerContext};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

static PULL_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)refs/pull/([0-9A-Za-z_]+)/merge").expect("pull ref pattern is valid")
});

/// Resolve the trigger for a run
///
/// Push events keep the `before` boundary from the context. Every other event
/// needs a pull request number, taken from `override_id` when given and from
/// the ref otherwise.
pub fn resolve_trigger(ctx: &TriggerContext, override_id: Option<&str>) -> Result<Trigger> {
    debug!(event = %ctx.event_kind, git_ref = %ctx.git_ref, "resolving trigger");

    match ctx.event_kind {
        EventKind::Push => Ok(Trigger::Push {
            owner: ctx.owner.clone(),
            repo: ctx.repo.clone(),
            before_sha: ctx.before_sha.clone(),
        }),
        EventKind::PullRequest => Ok(Trigger::PullRequest {
            owner: ctx.owner.clone(),
            repo: ctx.repo.clone(),
            pull_id: resolve_pull_request_id(&ctx.git_ref, override_id)?,
        }),
    }
}

/// Determine the pull request number
///
/// A non-empty `override_id` wins over the ref. The result must be a plain
/// decimal number without a leading zero.
pub fn resolve_pull_request_id(git_ref: &str, override_id: Option<&str>) -> Result<u64> {
    let candidate = match override_id.filter(|id| !id.is_empty()) {
        Some(id) => Some(id),
        None => {
            info!("Searching for pull request ID in ref: {git_ref}");
            extract_pull_ref_id(git_ref)
        }
    };

    let id = candidate.ok_or(Error::MissingIdentifier)?;
    parse_pull_request_id(id)
}

fn extract_pull_ref_id(git_ref: &str) -> Option<&str> {
    PULL_REF_RE
        .captures(git_ref)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn parse_pull_request_id(id: &str) -> Result<u64> {
    let invalid = || Error::InvalidIdentifierFormat(id.to_string());

    if !id.bytes().all(|b| b.is_ascii_digit()) || id.starts_with('0') {
        return Err(invalid());
    }

    id.parse().map_err(|_| invalid())
}
