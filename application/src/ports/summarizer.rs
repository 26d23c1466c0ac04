//! Summarizer port
//!
//! Condenses retrieved passages into answer text.

use super::capability::{Capability, CapabilityError};
use async_trait::async_trait;
use liveqa_domain::{Passage, Question};

/// Summary returned by [`CannedSummarizer`] for every question.
pub const CANNED_SUMMARY: &str = "Sorry, I could not find a good answer to that.";

/// Summarization backend.
#[async_trait]
pub trait Summarizer: Capability {
    /// Summarize `passages` as an answer to `question`, aiming for at most
    /// `max_length` bytes.
    async fn summarize(
        &self,
        passages: &[Passage],
        question: &Question,
        max_length: usize,
    ) -> Result<String, CapabilityError>;
}

/// Degraded summarizer that returns a fixed summary and never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedSummarizer;

impl Capability for CannedSummarizer {
    fn name(&self) -> &str {
        "canned-summarizer"
    }
}

#[async_trait]
impl Summarizer for CannedSummarizer {
    async fn summarize(
        &self,
        _passages: &[Passage],
        _question: &Question,
        _max_length: usize,
    ) -> Result<String, CapabilityError> {
        Ok(CANNED_SUMMARY.to_string())
    }
}
