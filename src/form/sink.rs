//! Submission sink abstraction
//!
//! The sink receives the form state once it validates. Sending it anywhere
//! (HTTP, a queue) is left to implementors of [`SubmissionSink`].

use super::value::FormState;
use anyhow::Result;

/// Receiver for validated form payloads, mockable in tests
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Accept one validated payload
    fn submit(&mut self, payload: &FormState) -> Result<()>;
}

/// Sink that logs each payload as JSON and keeps the most recent one
#[derive(Debug, Default)]
pub struct LogSink {
    submissions: usize,
    last_payload: Option<String>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of payloads accepted so far
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    /// Pretty JSON of the last accepted payload
    pub fn last_payload(&self) -> Option<&str> {
        self.last_payload.as_deref()
    }
}

impl SubmissionSink for LogSink {
    fn submit(&mut self, payload: &FormState) -> Result<()> {
        let json = serde_json::to_string_pretty(payload)?;
        self.submissions += 1;
        tracing::info!(
            submission = self.submissions,
            fields = payload.leaf_count(),
            "Form submitted"
        );
        tracing::debug!("Submitted payload: {json}");
        self.last_payload = Some(json);
        Ok(())
    }
}
