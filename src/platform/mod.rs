//! Commit sources
//!
//! The remote collaborator that lists commits for a repository or a pull
//! request. The gate only depends on the [`CommitSource`] trait; GitHub is the
//! production implementation.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::RepoCommit;
use async_trait::async_trait;

/// Remote commit listing operations
///
/// Implementations return commits in the order the host lists them and
/// propagate request failures unchanged.
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// List the commits of a repository (first page, host default order)
    async fn list_repository_commits(&self, owner: &str, repo: &str) -> Result<Vec<RepoCommit>>;

    /// List the commits of a pull request
    async fn list_pull_request_commits(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Vec<RepoCommit>>;
}
