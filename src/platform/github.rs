//! GitHub commit source implementation

use crate::error::{Error, Result};
use crate::platform::CommitSource;
use crate::types::RepoCommit;
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `base_uri` points at a non-default REST endpoint, such as a GitHub
    /// Enterprise `https://host/api/v3` or the `GITHUB_API_URL` of a runner.
    pub fn new(token: &str, base_uri: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = base_uri {
            builder = builder
                .base_uri(uri)
                .map_err(|e| Error::Platform(format!("invalid API URL {uri}: {e}")))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::Platform(e.to_string()))?;

        Ok(Self { client })
    }
}

/// Keep the API's own message (e.g. `Not Found`, `Bad credentials`) for
/// errors GitHub answered; octocrab's display drops it.
fn request_error(e: octocrab::Error) -> Error {
    match e {
        octocrab::Error::GitHub { source, .. } => Error::Platform(source.message),
        other => Error::GitHub(other),
    }
}

#[async_trait]
impl CommitSource for GitHubService {
    async fn list_repository_commits(&self, owner: &str, repo: &str) -> Result<Vec<RepoCommit>> {
        let route = format!("/repos/{owner}/{repo}/commits");
        debug!(%route, "listing repository commits");

        let commits: Vec<RepoCommit> = self
            .client
            .get(route, None::<&()>)
            .await
            .map_err(request_error)?;
        Ok(commits)
    }

    async fn list_pull_request_commits(
        &self,
        owner: &str,
        repo: &str,
        pull_number: u64,
    ) -> Result<Vec<RepoCommit>> {
        let route = format!("/repos/{owner}/{repo}/pulls/{pull_number}/commits");
        debug!(%route, "listing pull request commits");

        let commits: Vec<RepoCommit> = self
            .client
            .get(route, None::<&()>)
            .await
            .map_err(request_error)?;
        Ok(commits)
    }
}
