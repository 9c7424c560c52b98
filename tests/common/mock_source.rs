//! Mock commit source for testing

#![allow(dead_code)]

use async_trait::async_trait;
use commit_gate::error::{Error, Result};
use commit_gate::platform::CommitSource;
use commit_gate::types::RepoCommit;
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `list_pull_request_commits`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullCommitsCall {
    pub owner: String,
    pub repo: String,
    pub pull_number: u64,
}

/// Simple mock commit source
///
/// Features:
/// - Configurable repository and per-PR listings
/// - Call tracking for verification
/// - Error injection for failure path testing
#[derive(Default)]
pub struct MockCommitSource {
    repo_commits: Mutex<Vec<RepoCommit>>,
    pr_commits: Mutex<HashMap<u64, Vec<RepoCommit>>>,
    // Call tracking
    repo_calls: Mutex<Vec<(String, String)>>,
    pr_calls: Mutex<Vec<PullCommitsCall>>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
}

impl MockCommitSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the repository listing
    pub fn set_repo_commits(&self, commits: Vec<RepoCommit>) {
        *self.repo_commits.lock().unwrap() = commits;
    }

    /// Set the listing for a pull request
    pub fn set_pr_commits(&self, pull_number: u64, commits: Vec<RepoCommit>) {
        self.pr_commits.lock().unwrap().insert(pull_number, commits);
    }

    /// Make both listing calls fail
    pub fn fail_listing(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    pub fn get_repo_calls(&self) -> Vec<(String, String)> {
        self.repo_calls.lock().unwrap().clone()
    }

    pub fn get_pr_calls(&self) -> Vec<PullCommitsCall> {
        self.pr_calls.lock().unwrap().clone()
    }

    /// Total listing calls of either kind
    pub fn call_count(&self) -> usize {
        self.get_repo_calls().len() + self.get_pr_calls().len()
    }

    fn injected_error(&self) -> Result<()> {
        match self.error_on_list.lock().unwrap().as_ref() {
            Some(msg) => Err(Error::Platform(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CommitSource for MockCommitSource {
    async fn list_repository_commits(&self, owner: &str, repo: &str) -> Result<Vec<RepoCommit>> {
        self.repo_calls
            .lock()
            .unwrap()
            .push((owner.to_string(), repo.to_string()));
        self.injected_error()?;

        Ok(self.repo_commits.lock().unwrap().clone())
    }

    async fn list_pull_request_commits(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Vec<RepoCommit>> {
        self.pr_calls.lock().unwrap().push(PullCommitsCall {
            owner: owner.to_string(),
            repo: repo.to_string(),
            pull_number,
        });
        self.injected_error()?;

        Ok(self
            .pr_commits
            .lock()
            .unwrap()
            .get(&pull_number)
            .cloned()
            .unwrap_or_default())
    }
}
