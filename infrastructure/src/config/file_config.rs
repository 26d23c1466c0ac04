//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use liveqa_application::{AnswerParams, DispatchParams};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("timeout_ms cannot be 0")]
    InvalidTimeout,

    #[error("answer_size must be greater than 3, got {0}")]
    AnswerSizeTooSmall(usize),

    #[error("pid cannot be empty")]
    EmptyPid,

    #[error("at least one producer descriptor is required")]
    NoProducers,
}

/// Process-wide configuration, read-only after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Producer identity stamped on every answer
    pub pid: String,
    /// Maximum answer content length in bytes
    pub answer_size: usize,
    /// Dispatch budget per question, in milliseconds
    pub timeout_ms: u64,
    /// Passages requested from each retriever
    pub retrieval_limit: usize,
    /// Timeout for a single remote backend call, in milliseconds
    pub request_timeout_ms: u64,
    /// Address the HTTP boundary listens on
    pub listen: String,
    /// Paths of producer descriptor JSON files
    pub producers: Vec<PathBuf>,
    /// Optional JSONL file receiving one record per dispatched answer
    pub answer_log: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            pid: "liveqa".to_string(),
            answer_size: 1000,
            timeout_ms: 50_000,
            retrieval_limit: 10,
            request_timeout_ms: 20_000,
            listen: "127.0.0.1:8080".to_string(),
            producers: Vec::new(),
            answer_log: None,
        }
    }
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_ms == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.answer_size <= 3 {
            return Err(ConfigValidationError::AnswerSizeTooSmall(self.answer_size));
        }
        if self.pid.trim().is_empty() {
            return Err(ConfigValidationError::EmptyPid);
        }
        if self.producers.is_empty() {
            return Err(ConfigValidationError::NoProducers);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn answer_params(&self) -> AnswerParams {
        AnswerParams::default()
            .with_pid(self.pid.clone())
            .with_answer_size(self.answer_size)
            .with_retrieval_limit(self.retrieval_limit)
    }

    pub fn dispatch_params(&self) -> DispatchParams {
        DispatchParams::default()
            .with_pid(self.pid.clone())
            .with_timeout(self.timeout())
    }
}
