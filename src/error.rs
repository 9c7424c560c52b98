//! Error types for commit-gate

use thiserror::Error;

/// Errors surfaced by the gate
///
/// Every variant renders the plain message that is reported back to the
/// pipeline through the failure channel.
#[derive(Error, Debug)]
pub enum Error {
    /// No pull request number in the ref and no override input
    #[error("Pull request ID was not found, in action's ref.")]
    MissingIdentifier,

    /// Pull request number is not a plain decimal without a leading zero
    #[error("Invalid pull request ID: {0}")]
    InvalidIdentifierFormat(String),

    /// GitHub API request failed
    #[error(transparent)]
    GitHub(#[from] octocrab::Error),

    /// Commit source failed for a reason not tied to a specific client
    #[error("{0}")]
    Platform(String),

    /// Required input parameter absent
    #[error("Input required and not supplied: {0}")]
    MissingParameter(String),

    /// Trigger context is malformed
    #[error("{0}")]
    Context(String),

    /// Match phrase given as a pattern does not compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Event payload could not be decoded
    #[error("Invalid event payload: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for commit-gate operations
pub type Result<T> = std::result::Result<T, Error>;
