//! Port for structured answer logging.
//!
//! Separate from `tracing`-based diagnostics: this port records every
//! dispatched answer in a machine-readable form (JSONL).

use serde_json::Value;

/// A structured dispatch event for logging.
pub struct AnswerEvent {
    /// Event type identifier (e.g., "answer_dispatched").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AnswerEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging answer events.
///
/// `log` is synchronous and non-fallible; logging failures are ignored.
pub trait AnswerLogger: Send + Sync {
    fn log(&self, event: AnswerEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoAnswerLogger;

impl AnswerLogger for NoAnswerLogger {
    fn log(&self, _event: AnswerEvent) {}
}
