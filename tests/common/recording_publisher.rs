//! In-memory publisher for testing

#![allow(dead_code)]

use commit_gate::action::Publisher;
use commit_gate::error::{Error, Result};

/// Records outputs and failures instead of talking to a runner
#[derive(Default)]
pub struct RecordingPublisher {
    pub outputs: Vec<(String, String)>,
    pub failures: Vec<String>,
    /// Fail when writing the output at this position in a batch
    pub fail_at: Option<usize>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publisher whose `index`-th output in a batch cannot be written
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl Publisher for RecordingPublisher {
    fn set_outputs(&mut self, outputs: &[(String, String)]) -> Result<()> {
        let mut staged = Vec::with_capacity(outputs.len());
        for (i, output) in outputs.iter().enumerate() {
            if self.fail_at == Some(i) {
                return Err(Error::Io(std::io::Error::other("output file not writable")));
            }
            staged.push(output.clone());
        }
        self.outputs.extend(staged);
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}
