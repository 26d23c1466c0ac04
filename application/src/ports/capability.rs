//! Shared contract for fallback-stage backends.

use thiserror::Error;

/// Errors a retrieval or summarization backend can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend returned HTTP {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("No backends configured")]
    NoBackends,

    #[error("Operation cancelled")]
    Cancelled,
}

impl CapabilityError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CapabilityError::Cancelled)
    }
}

/// A backend that can take part in a [`FallbackStage`](crate::FallbackStage).
pub trait Capability: Send + Sync {
    /// Short name used in logs (e.g. `remote-retriever`).
    fn name(&self) -> &str;
}
