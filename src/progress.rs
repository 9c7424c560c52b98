//! Progress callback trait for interface-agnostic scan updates
//!
//! The lister and matcher report what they look at through this trait so that
//! logging stays out of their control flow.

use crate::matcher::MatchPhrase;
use crate::types::{Commit, CommitOrigin, RepoCommit};
use tracing::{debug, info, warn};

/// Progress callback trait
///
/// Implement this trait to observe a scan.
/// - [`TracingProgress`] forwards events to `tracing`
/// - [`NoopProgress`] discards them
pub trait ScanProgress: Send + Sync {
    /// Called for every commit that lands in the scanned range
    fn on_commit_found(&self, commit: &RepoCommit, origin: CommitOrigin);

    /// Called when a push listing never reached its `before` boundary
    fn on_boundary_missing(&self, before_sha: Option<&str>, listed: usize);

    /// Called before a commit message is tested against the phrase
    fn on_compare(&self, phrase: &MatchPhrase, commit: &Commit);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

impl ScanProgress for NoopProgress {
    fn on_commit_found(&self, _commit: &RepoCommit, _origin: CommitOrigin) {}
    fn on_boundary_missing(&self, _before_sha: Option<&str>, _listed: usize) {}
    fn on_compare(&self, _phrase: &MatchPhrase, _commit: &Commit) {}
}

/// Progress callback that emits `tracing` events
pub struct TracingProgress;

impl ScanProgress for TracingProgress {
    fn on_commit_found(&self, commit: &RepoCommit, origin: CommitOrigin) {
        info!(
            "Found commit sha: {} in {origin}. {}",
            commit.sha, commit.commit.url
        );
    }

    fn on_boundary_missing(&self, before_sha: Option<&str>, listed: usize) {
        warn!(
            before = before_sha.unwrap_or("<none>"),
            listed, "push boundary not found in listing, scanning every listed commit"
        );
    }

    fn on_compare(&self, phrase: &MatchPhrase, commit: &Commit) {
        debug!(
            "Searching for \"{phrase}\" in \"{}\" sha: {}",
            commit.message, commit.sha
        );
    }
}
