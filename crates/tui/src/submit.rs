//! Submission handling.
//!
//! The form never performs network I/O; on explicit submission the
//! consolidated state snapshot goes to a diagnostic sink. The sink is a
//! trait so tests can capture snapshots instead of reading log output.

use crate::form::FormState;

/// Receiver for submitted form snapshots.
pub trait SubmitSink {
    fn deliver(&self, snapshot: &FormState);
}

/// Production sink: logs the snapshot as one JSON payload.
#[derive(Debug, Default)]
pub struct TracingSink;

impl SubmitSink for TracingSink {
    fn deliver(&self, snapshot: &FormState) {
        match serde_json::to_string(snapshot) {
            Ok(payload) => {
                tracing::info!(target: "intake::submission", %payload, "Form submitted");
            }
            Err(e) => {
                tracing::error!(target: "intake::submission", error = %e, "Failed to serialize submission");
            }
        }
    }
}
