//! Remote summarization backend.

use super::protocol::{SummarizationRequest, SummarizationResponse, post_json};
use async_trait::async_trait;
use liveqa_application::{Capability, CapabilityError, Summarizer};
use liveqa_domain::{Passage, Question};
use tracing::debug;

/// [`Summarizer`] backed by a remote JSON endpoint.
pub struct RemoteSummarizer {
    client: reqwest::Client,
    url: String,
}

impl RemoteSummarizer {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Capability for RemoteSummarizer {
    fn name(&self) -> &str {
        "remote-summarizer"
    }
}

#[async_trait]
impl Summarizer for RemoteSummarizer {
    async fn summarize(
        &self,
        passages: &[Passage],
        question: &Question,
        max_length: usize,
    ) -> Result<String, CapabilityError> {
        debug!(
            "POST {} for {} ({} passages)",
            self.url,
            question.qid(),
            passages.len()
        );
        let request = SummarizationRequest {
            passages,
            question,
            max_length,
        };
        let response: SummarizationResponse =
            post_json(&self.client, &self.url, &request).await?;
        Ok(response.summary)
    }
}
