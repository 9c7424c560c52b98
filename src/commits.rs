//! Commit listing for a resolved trigger

use crate::error::Result;
use crate::platform::CommitSource;
use crate::progress::ScanProgress;
use crate::types::{Commit, CommitOrigin, RepoCommit, Trigger};

/// Fetch the commits in scope for `trigger`, in listing order
///
/// For a push, the repository listing is cut at the first commit whose SHA
/// equals `before_sha` (exclusive). When the boundary never appears the whole
/// listing is returned. For a pull request the listing is returned as is.
pub async fn get_commits(
    source: &dyn CommitSource,
    trigger: &Trigger,
    progress: &dyn ScanProgress,
) -> Result<Vec<Commit>> {
    match trigger {
        Trigger::Push {
            owner,
            repo,
            before_sha,
        } => {
            let listed = source.list_repository_commits(owner, repo).await?;
            let total = listed.len();
            let scoped = take_until_boundary(listed, before_sha.as_deref());

            if scoped.len() == total {
                progress.on_boundary_missing(before_sha.as_deref(), total);
            }

            Ok(into_commits(scoped, CommitOrigin::Push, progress))
        }
        Trigger::PullRequest {
            owner,
            repo,
            pull_id,
        } => {
            let listed = source
                .list_pull_request_commits(owner, repo, *pull_id)
                .await?;
            Ok(into_commits(
                listed,
                CommitOrigin::PullRequest(*pull_id),
                progress,
            ))
        }
    }
}

fn take_until_boundary(listed: Vec<RepoCommit>, before_sha: Option<&str>) -> Vec<RepoCommit> {
    listed
        .into_iter()
        .take_while(|c| Some(c.sha.as_str()) != before_sha)
        .collect()
}

fn into_commits(
    listed: Vec<RepoCommit>,
    origin: CommitOrigin,
    progress: &dyn ScanProgress,
) -> Vec<Commit> {
    listed
        .into_iter()
        .map(|c| {
            progress.on_commit_found(&c, origin);
            Commit::from(c)
        })
        .collect()
}
