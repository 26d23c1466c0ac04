//! Answer parameters shared by every two-stage producer.

use serde::{Deserialize, Serialize};

/// Process-wide answer shaping, read-only after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerParams {
    /// Producer identity stamped on every answer.
    pub pid: String,
    /// Maximum answer content length in bytes.
    pub answer_size: usize,
    /// Maximum number of passages requested from a retriever.
    pub retrieval_limit: usize,
}

impl Default for AnswerParams {
    fn default() -> Self {
        Self {
            pid: "liveqa".to_string(),
            answer_size: 1000,
            retrieval_limit: 10,
        }
    }
}

impl AnswerParams {
    // ==================== Builder Methods ====================

    pub fn with_pid(mut self, pid: impl Into<String>) -> Self {
        self.pid = pid.into();
        self
    }

    pub fn with_answer_size(mut self, size: usize) -> Self {
        self.answer_size = size;
        self
    }

    pub fn with_retrieval_limit(mut self, limit: usize) -> Self {
        self.retrieval_limit = limit;
        self
    }
}
