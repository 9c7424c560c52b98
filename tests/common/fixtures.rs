//! Test data factories for commit-gate types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use commit_gate::action::GateInputs;
use commit_gate::types::{EventKind, RepoCommit, RepoCommitDetails, TriggerContext};

pub const OWNER: &str = "testowner";
pub const REPO: &str = "testrepo";

/// Create a listed commit
pub fn make_repo_commit(sha: &str, message: &str) -> RepoCommit {
    RepoCommit {
        sha: sha.to_string(),
        commit: RepoCommitDetails {
            message: message.to_string(),
            url: format!("https://api.github.com/repos/{OWNER}/{REPO}/git/commits/{sha}"),
        },
    }
}

/// Listing used by the push scenarios, newest first
pub fn push_listing(second_message: &str) -> Vec<RepoCommit> {
    vec![
        make_repo_commit("c3", "[skip] fix"),
        make_repo_commit("c2", second_message),
        make_repo_commit("c1", "init"),
    ]
}

/// Push context with a `before` boundary
pub fn push_context(before: Option<&str>) -> TriggerContext {
    TriggerContext {
        event_kind: EventKind::Push,
        git_ref: "refs/heads/main".to_string(),
        owner: OWNER.to_string(),
        repo: REPO.to_string(),
        before_sha: before.map(ToString::to_string),
    }
}

/// Pull request context for a ref
pub fn pr_context(git_ref: &str) -> TriggerContext {
    TriggerContext {
        event_kind: EventKind::PullRequest,
        git_ref: git_ref.to_string(),
        owner: OWNER.to_string(),
        repo: REPO.to_string(),
        before_sha: None,
    }
}

/// Gate inputs for a job
pub fn gate_inputs(job_id: &str) -> GateInputs {
    GateInputs {
        github_token: "test-token".to_string(),
        pr_id: None,
        job_id: job_id.to_string(),
        job_matrix: "{\"os\":\"ubuntu-latest\"}".to_string(),
    }
}

/// JSON body of a REST commit listing
pub fn listing_json(commits: &[RepoCommit]) -> String {
    serde_json::to_string(commits).unwrap()
}
