//! Core types for commit-gate

use serde::{Deserialize, Serialize};
use std::fmt;

/// A commit reduced to what the matcher needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit message
    pub message: String,
    /// Commit SHA
    pub sha: String,
}

/// A commit as returned by the GitHub REST listing endpoints
///
/// Only the fields the gate reads are modelled; the rest of the payload is
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoCommit {
    /// Commit SHA
    pub sha: String,
    /// Git commit data
    pub commit: RepoCommitDetails,
}

/// The `commit` object nested in a [`RepoCommit`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoCommitDetails {
    /// Full commit message
    pub message: String,
    /// API URL of the git commit object
    #[serde(default)]
    pub url: String,
}

impl From<RepoCommit> for Commit {
    fn from(c: RepoCommit) -> Self {
        Self {
            message: c.commit.message,
            sha: c.sha,
        }
    }
}

/// Kind of event that triggered the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Direct push to a branch
    Push,
    /// Pull request (any event that is not a push)
    PullRequest,
}

impl EventKind {
    /// Classify a workflow event name
    ///
    /// Only `push` is special; every other event is resolved through the
    /// pull request ref.
    pub fn from_event_name(name: &str) -> Self {
        if name == "push" {
            Self::Push
        } else {
            Self::PullRequest
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => write!(f, "push"),
            Self::PullRequest => write!(f, "pull request"),
        }
    }
}

/// Metadata describing why the current run was invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContext {
    /// Event kind
    pub event_kind: EventKind,
    /// Git ref the run was triggered for (e.g. `refs/pull/7/merge`)
    pub git_ref: String,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// SHA of the branch tip before the push (push events only)
    pub before_sha: Option<String>,
}

/// Resolved trigger, carrying only the fields relevant to its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Push range: every listed commit newer than `before_sha`
    Push {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
        /// Boundary commit, exclusive
        before_sha: Option<String>,
    },
    /// Pull request commits
    PullRequest {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
        /// Pull request number
        pull_id: u64,
    },
}

/// Where a listed commit came from, for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOrigin {
    /// Repository listing scoped to a push
    Push,
    /// Pull request listing
    PullRequest(u64),
}

impl fmt::Display for CommitOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => write!(f, "push"),
            Self::PullRequest(id) => write!(f, "pull request: {id}"),
        }
    }
}
