//! commit-gate - commit message gate for CI pipelines
//!
//! Resolves the commits behind a push or pull request, checks that every
//! message matches a phrase, and publishes the step outputs downstream jobs
//! key off.

pub mod action;
pub mod commits;
pub mod error;
pub mod gate;
pub mod matcher;
pub mod platform;
pub mod progress;
pub mod trigger;
pub mod types;
