//! Retriever port
//!
//! Fetches passages relevant to a question, up to a limit.

use super::capability::{Capability, CapabilityError};
use async_trait::async_trait;
use liveqa_domain::{Passage, Question};

/// Passage returned by [`CannedRetriever`] for every question.
pub const CANNED_PASSAGE: &str = "That's your question, eh?";

/// Retrieval backend.
#[async_trait]
pub trait Retriever: Capability {
    /// Retrieve at most `limit` passages for `question`.
    async fn retrieve(
        &self,
        question: &Question,
        limit: usize,
    ) -> Result<Vec<Passage>, CapabilityError>;
}

/// Degraded retriever that returns one fixed passage and never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedRetriever;

impl Capability for CannedRetriever {
    fn name(&self) -> &str {
        "canned-retriever"
    }
}

#[async_trait]
impl Retriever for CannedRetriever {
    async fn retrieve(
        &self,
        _question: &Question,
        _limit: usize,
    ) -> Result<Vec<Passage>, CapabilityError> {
        Ok(vec![CANNED_PASSAGE.to_string()])
    }
}
