//! CLI commands
//!
//! Command implementations for the `commit-gate` binary.

mod check;
mod style;

pub use check::run_check;
