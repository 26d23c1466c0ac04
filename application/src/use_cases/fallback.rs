//! Fallback stage
//!
//! An ordered list of backends for one capability. Backends are tried in
//! registration order; the first success wins and later backends are never
//! invoked. If every backend fails, the last failure is returned.
//!
//! The same combinator drives both pipeline stages of
//! [`TwoStageAnswerProducer`](super::two_stage::TwoStageAnswerProducer):
//!
//! ```text
//! retrieval:      remote-retriever  → canned-retriever
//! summarization:  remote-summarizer → canned-summarizer
//! ```

use crate::ports::capability::{Capability, CapabilityError};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Ordered first-success-wins combinator over backends of type `B`.
pub struct FallbackStage<B: ?Sized> {
    label: &'static str,
    backends: Vec<Arc<B>>,
}

impl<B: ?Sized + Capability> FallbackStage<B> {
    pub fn new(label: &'static str, backends: Vec<Arc<B>>) -> Self {
        Self { label, backends }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Backend names in the order they are tried.
    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Invoke `call` on each backend in order until one succeeds.
    ///
    /// Returns [`CapabilityError::NoBackends`] if the stage is empty.
    pub async fn run<'a, T, F, Fut>(&'a self, mut call: F) -> Result<T, CapabilityError>
    where
        F: FnMut(&'a B) -> Fut,
        Fut: Future<Output = Result<T, CapabilityError>>,
    {
        let mut last_error = CapabilityError::NoBackends;

        for backend in &self.backends {
            match call(backend.as_ref()).await {
                Ok(value) => {
                    debug!("{} stage: {} succeeded", self.label, backend.name());
                    return Ok(value);
                }
                Err(e) => {
                    warn!("{} stage: {} failed: {}", self.label, backend.name(), e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
