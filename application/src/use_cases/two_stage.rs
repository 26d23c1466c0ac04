//! Two-stage answer producer
//!
//! Retrieval fallback stage, then summarization fallback stage:
//!
//! ```text
//! Question ──▶ retrieval stage ──passages──▶ summarization stage ──▶ Answer
//!               (first success)                (first success)
//! ```
//!
//! A failed retrieval stage does not stop the pipeline: summarization still
//! runs, over an empty passage list. If summarization fails too, the
//! producer answers with an error answer.

use crate::config::AnswerParams;
use crate::ports::answer_producer::AnswerProducer;
use crate::ports::capability::CapabilityError;
use crate::ports::retriever::Retriever;
use crate::ports::summarizer::Summarizer;
use crate::use_cases::fallback::FallbackStage;
use crate::use_cases::shared::until_cancelled;
use async_trait::async_trait;
use liveqa_domain::{Answer, Passage, Question, truncate};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// [`AnswerProducer`] composed of a retrieval and a summarization stage.
pub struct TwoStageAnswerProducer {
    name: String,
    retrievers: FallbackStage<dyn Retriever>,
    summarizers: FallbackStage<dyn Summarizer>,
    params: AnswerParams,
}

impl TwoStageAnswerProducer {
    pub fn new(
        name: impl Into<String>,
        retrievers: Vec<Arc<dyn Retriever>>,
        summarizers: Vec<Arc<dyn Summarizer>>,
        params: AnswerParams,
    ) -> Self {
        Self {
            name: name.into(),
            retrievers: FallbackStage::new("retrieval", retrievers),
            summarizers: FallbackStage::new("summarization", summarizers),
            params,
        }
    }

    pub fn params(&self) -> &AnswerParams {
        &self.params
    }

    pub fn retrievers(&self) -> &FallbackStage<dyn Retriever> {
        &self.retrievers
    }

    pub fn summarizers(&self) -> &FallbackStage<dyn Summarizer> {
        &self.summarizers
    }

    async fn retrieve(
        &self,
        question: &Question,
        cancellation: &CancellationToken,
    ) -> Result<Vec<Passage>, CapabilityError> {
        let limit = self.params.retrieval_limit;
        until_cancelled(
            cancellation,
            self.retrievers.run(|r| r.retrieve(question, limit)),
        )
        .await
    }

    async fn summarize(
        &self,
        passages: &[Passage],
        question: &Question,
        cancellation: &CancellationToken,
    ) -> Result<String, CapabilityError> {
        let max_length = self.params.answer_size;
        until_cancelled(
            cancellation,
            self.summarizers
                .run(|s| s.summarize(passages, question, max_length)),
        )
        .await
    }
}

#[async_trait]
impl AnswerProducer for TwoStageAnswerProducer {
    fn name(&self) -> &str {
        &self.name
    }

    async fn produce(&self, question: &Question, cancellation: &CancellationToken) -> Answer {
        let pid = self.params.pid.as_str();

        let mut retrieval_error = None;
        let passages = match self.retrieve(question, cancellation).await {
            Ok(passages) => {
                debug!(
                    "{}: retrieved {} passages for {}",
                    self.name,
                    passages.len(),
                    question.qid()
                );
                passages
            }
            Err(e) if e.is_cancelled() => return Answer::error(pid, question, e),
            Err(e) => {
                warn!(
                    "{}: retrieval failed for {}, summarizing without passages: {}",
                    self.name,
                    question.qid(),
                    e
                );
                retrieval_error = Some(e);
                Vec::new()
            }
        };

        match self.summarize(&passages, question, cancellation).await {
            Ok(summary) => {
                let answer =
                    Answer::normal(pid, question, truncate(&summary, self.params.answer_size));
                info!(
                    "{}: answered {} in {} ms",
                    self.name,
                    question.qid(),
                    answer.time_ms()
                );
                answer
            }
            Err(e) => {
                warn!(
                    "{}: summarization failed for {}: {}",
                    self.name,
                    question.qid(),
                    e
                );
                // An empty summarization stage says nothing; report the retrieval failure.
                let error = match (e, retrieval_error) {
                    (CapabilityError::NoBackends, Some(retrieval)) => retrieval,
                    (e, _) => e,
                };
                Answer::error(pid, question, error)
            }
        }
    }
}
