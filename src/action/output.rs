//! Output and failure publishing

use crate::action::ActionEnv;
use crate::error::Result;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Sink for step outputs and the failure report
pub trait Publisher: Send {
    /// Publish a batch of named output values
    ///
    /// Either every output in the batch is published or none is.
    fn set_outputs(&mut self, outputs: &[(String, String)]) -> Result<()>;

    /// Publish a single named output value
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        self.set_outputs(&[(name.to_string(), value.to_string())])
    }

    /// Report the run as failed with `message`
    fn set_failed(&mut self, message: &str);
}

/// Publisher speaking the GitHub Actions file and workflow-command protocol
///
/// Outputs go to the file named by `GITHUB_OUTPUT` when set, otherwise to a
/// `::set-output` command on the writer. Failures become `::error::` commands.
pub struct WorkflowCommands<W: Write + Send = io::Stdout> {
    output_file: Option<PathBuf>,
    out: W,
}

impl WorkflowCommands {
    /// Publisher for the current runner, writing commands to stdout
    pub fn from_env(env: &ActionEnv) -> Self {
        Self::with_writer(
            env.var("GITHUB_OUTPUT")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            io::stdout(),
        )
    }
}

impl<W: Write + Send> WorkflowCommands<W> {
    /// Publisher with an explicit output file and command writer
    pub const fn with_writer(output_file: Option<PathBuf>, out: W) -> Self {
        Self { output_file, out }
    }

    /// Command writer
    pub const fn writer(&self) -> &W {
        &self.out
    }

    fn append_output_file(path: &Path, entries: &str) -> Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(entries.as_bytes())?;
        Ok(())
    }
}

fn output_file_entry(name: &str, value: &str) -> String {
    if value.contains('\n') {
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
    } else {
        format!("{name}={value}\n")
    }
}

fn set_output_command(name: &str, value: &str) -> String {
    format!(
        "::set-output name={}::{}\n",
        escape_property(name),
        escape_data(value)
    )
}

impl<W: Write + Send> Publisher for WorkflowCommands<W> {
    fn set_outputs(&mut self, outputs: &[(String, String)]) -> Result<()> {
        debug!(?outputs, "setting outputs");

        // One write per batch so a failure leaves no output behind.
        match &self.output_file {
            Some(path) => {
                let entries: String = outputs
                    .iter()
                    .map(|(name, value)| output_file_entry(name, value))
                    .collect();
                Self::append_output_file(path, &entries)
            }
            None => {
                let commands: String = outputs
                    .iter()
                    .map(|(name, value)| set_output_command(name, value))
                    .collect();
                self.out.write_all(commands.as_bytes())?;
                Ok(())
            }
        }
    }

    fn set_failed(&mut self, message: &str) {
        // Nothing left to report to if the runner's stdout is gone.
        let _ = writeln!(self.out, "::error::{}", escape_data(message));
        let _ = self.out.flush();
    }
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
