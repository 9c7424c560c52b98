//! Host automation platform plumbing (GitHub Actions)
//!
//! Reads inputs and the trigger context from the runner environment and
//! publishes outputs and failures back through workflow files and commands.

mod context;
mod inputs;
mod output;

pub use context::load_trigger_context;
pub use inputs::{ActionEnv, GateInputs};
pub use output::{Publisher, WorkflowCommands};
