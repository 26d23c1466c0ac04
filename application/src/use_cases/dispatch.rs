//! Question dispatch use case
//!
//! Races every registered [`AnswerProducer`] against a hard time budget.
//!
//! ```text
//!                    ┌─▶ producer 1 ─┐
//! Question ─ spawn ──┼─▶ producer 2 ─┼─▶ result channel ─▶ current best
//!                    └─▶ producer N ─┘
//!
//! wait on: new answer | deadline | all tasks terminated
//! ```
//!
//! The most recently observed answer wins. If nothing arrives before the
//! deadline, a timeout answer is returned instead. When every producer task
//! has terminated, the dispatcher returns immediately without waiting out
//! the budget.
//!
//! Completion is tracked through the [`JoinSet`], so a task that ends
//! without delivering (e.g. a panicking producer) still counts as finished.
//! The result channel holds one slot per producer, so deliveries never block.
//! On return, the dispatch's [`CancellationToken`] is cancelled and the
//! remaining tasks drop their in-flight work.

use crate::config::DispatchParams;
use crate::ports::answer_logger::{AnswerEvent, AnswerLogger, NoAnswerLogger};
use crate::ports::answer_producer::AnswerProducer;
use liveqa_domain::{Answer, AnswerWrapper, Question};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while building a dispatcher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("No answer producers registered")]
    NoProducers,
}

/// The race coordinator.
pub struct QuestionDispatcher {
    producers: Vec<Arc<dyn AnswerProducer>>,
    params: DispatchParams,
    logger: Arc<dyn AnswerLogger>,
    cancellation: CancellationToken,
}

impl QuestionDispatcher {
    /// Create a dispatcher over a non-empty set of producers.
    pub fn new(
        producers: Vec<Arc<dyn AnswerProducer>>,
        params: DispatchParams,
    ) -> Result<Self, DispatchError> {
        if producers.is_empty() {
            return Err(DispatchError::NoProducers);
        }
        Ok(Self {
            producers,
            params,
            logger: Arc::new(NoAnswerLogger),
            cancellation: CancellationToken::new(),
        })
    }

    pub fn with_logger(mut self, logger: Arc<dyn AnswerLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Use `token` as the parent of every per-dispatch token.
    ///
    /// Cancelling it (e.g. on shutdown) stops all in-flight producers. A
    /// dispatch stopped this way without any delivery returns an error answer.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn params(&self) -> &DispatchParams {
        &self.params
    }

    pub fn producer_count(&self) -> usize {
        self.producers.len()
    }

    /// Resolve exactly one answer for `question` within the time budget.
    pub async fn dispatch(&self, question: Question) -> AnswerWrapper {
        let question = Arc::new(question);
        let token = self.cancellation.child_token();
        let (tx, mut rx) = mpsc::channel::<Answer>(self.producers.len());

        info!(
            "Dispatching {} to {} producers (budget {} ms)",
            question.qid(),
            self.producers.len(),
            self.params.timeout.as_millis()
        );

        let mut tasks = JoinSet::new();
        for producer in &self.producers {
            let producer = Arc::clone(producer);
            let question = Arc::clone(&question);
            let token = token.clone();
            let tx = tx.clone();

            tasks.spawn(async move {
                tokio::select! {
                    _ = token.cancelled() => {
                        debug!("{} stopped: dispatch finished", producer.name());
                    }
                    answer = producer.produce(&question, &token) => {
                        debug!("{} delivered a {} answer", producer.name(), answer.status());
                        let _ = tx.send(answer).await;
                    }
                }
            });
        }
        drop(tx);

        let deadline = tokio::time::sleep(self.params.timeout);
        tokio::pin!(deadline);

        let mut best: Option<Answer> = None;
        let mut delivered = 0usize;
        let mut timed_out = false;

        loop {
            tokio::select! {
                biased;
                Some(answer) = rx.recv() => {
                    delivered += 1;
                    best = Some(answer);
                }
                joined = tasks.join_next() => match joined {
                    Some(Ok(())) => {}
                    Some(Err(e)) => warn!("Producer task ended without delivering: {}", e),
                    None => {
                        // Every sender is gone; pick up anything still buffered.
                        while let Ok(answer) = rx.try_recv() {
                            delivered += 1;
                            best = Some(answer);
                        }
                        debug!("All producers finished for {}", question.qid());
                        break;
                    }
                },
                _ = &mut deadline => {
                    timed_out = true;
                    break;
                }
            }
        }

        token.cancel();
        tasks.detach_all();

        let answer = best.unwrap_or_else(|| {
            if self.cancellation.is_cancelled() {
                Answer::error(
                    self.params.pid.as_str(),
                    &question,
                    format!("Question {} abandoned: server shutting down", question.qid()),
                )
            } else {
                Answer::timeout(self.params.pid.as_str(), &question, self.params.timeout)
            }
        });

        if timed_out {
            info!(
                "Budget expired for {} after {} of {} deliveries",
                question.qid(),
                delivered,
                self.producers.len()
            );
        }
        info!(
            "Answer for {} ({}) from {} in {} ms",
            answer.qid(),
            answer.status(),
            answer.pid(),
            answer.time_ms()
        );

        self.logger.log(AnswerEvent::new(
            "answer_dispatched",
            serde_json::json!({
                "qid": answer.qid(),
                "pid": answer.pid(),
                "status": answer.status().as_str(),
                "time_ms": answer.time_ms(),
                "content_bytes": answer.content().len(),
                "producers": self.producers.len(),
                "delivered": delivered,
                "timed_out": timed_out,
            }),
        ));

        AnswerWrapper::new(answer)
    }
}
