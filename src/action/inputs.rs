//! Action inputs

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::env;

/// Snapshot of the runner environment
///
/// Captured once so that input lookup and context loading see the same
/// values, and so tests can supply their own.
#[derive(Debug, Clone, Default)]
pub struct ActionEnv {
    vars: HashMap<String, String>,
}

impl ActionEnv {
    /// Capture the current process environment (non-UTF-8 entries are skipped)
    pub fn from_process() -> Self {
        Self::from_vars(
            env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Build from explicit key/value pairs
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw environment variable
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Read an action input
    ///
    /// Input `name` lives in `INPUT_<NAME>` with spaces replaced by `_`.
    /// Values are trimmed and an empty value counts as absent.
    pub fn get_input(&self, name: &str) -> Option<String> {
        let key = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
        self.var(&key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(ToString::to_string)
    }

    /// Read an input that must be present
    pub fn get_required_input(&self, name: &str) -> Result<String> {
        self.get_input(name)
            .ok_or_else(|| Error::MissingParameter(name.to_string()))
    }

    /// REST API base URL of the runner's GitHub instance
    pub fn api_url(&self) -> Option<&str> {
        self.var("GITHUB_API_URL").filter(|v| !v.is_empty())
    }
}

/// Inputs consumed by the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateInputs {
    /// Token used for the GitHub API
    pub github_token: String,
    /// Pull request number overriding the one in the ref
    pub pr_id: Option<String>,
    /// Job identifier, republished as `run_<job_id>`
    pub job_id: String,
    /// Job matrix, logged only
    pub job_matrix: String,
}

impl GateInputs {
    /// Read all gate inputs; `github-token` is required
    pub fn from_env(env: &ActionEnv) -> Result<Self> {
        Ok(Self {
            github_token: env.get_required_input("github-token")?,
            pr_id: env.get_input("pr-id"),
            job_id: env.get_input("job_id").unwrap_or_default(),
            job_matrix: env.get_input("job_matrix").unwrap_or_default(),
        })
    }
}
