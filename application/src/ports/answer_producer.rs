//! Answer producer port
//!
//! An answer producer is one strategy raced by the
//! [`QuestionDispatcher`](crate::QuestionDispatcher).

use async_trait::async_trait;
use liveqa_domain::{Answer, Question};
use tokio_util::sync::CancellationToken;

/// A strategy that computes exactly one [`Answer`] for a question.
///
/// Failures are reported as error answers, never as `Err`, so the dispatcher
/// always receives a delivery from a producer that runs to completion.
/// Implementations should return promptly once `cancellation` fires.
#[async_trait]
pub trait AnswerProducer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Produce an answer for `question`.
    async fn produce(&self, question: &Question, cancellation: &CancellationToken) -> Answer;
}
