//! Dispatch parameters: the race coordinator's budget.

use std::time::Duration;

/// Controls how long the dispatcher waits for producers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchParams {
    /// Identity stamped on the synthesized timeout answer.
    pub pid: String,
    /// Hard time budget for one question.
    pub timeout: Duration,
}

impl Default for DispatchParams {
    fn default() -> Self {
        Self {
            pid: "liveqa".to_string(),
            timeout: Duration::from_secs(50),
        }
    }
}

impl DispatchParams {
    pub fn with_pid(mut self, pid: impl Into<String>) -> Self {
        self.pid = pid.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
