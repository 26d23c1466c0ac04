//! Answer value objects

use super::question::Question;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How an answer came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerStatus {
    /// A producer completed its pipeline.
    Normal,
    /// Nothing was delivered within the dispatch budget.
    Timeout,
    /// A producer exhausted every fallback backend.
    Error,
}

impl AnswerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerStatus::Normal => "normal",
            AnswerStatus::Timeout => "timeout",
            AnswerStatus::Error => "error",
        }
    }

    /// Whether the answer carries real content for the client.
    pub fn is_answered(&self) -> bool {
        matches!(self, AnswerStatus::Normal)
    }
}

impl std::fmt::Display for AnswerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single resolved response to a [`Question`] (Value Object)
///
/// Never mutated after construction. Every constructor computes `time_ms`
/// from the originating question's receive timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pid: String,
    qid: String,
    time_ms: u64,
    content: String,
    resources: Vec<String>,
    status: AnswerStatus,
}

impl Answer {
    /// A successful answer.
    pub fn normal(pid: impl Into<String>, question: &Question, content: impl Into<String>) -> Self {
        Self::build(pid, question, AnswerStatus::Normal, content.into())
    }

    /// The answer the dispatcher falls back to when its budget runs out.
    pub fn timeout(pid: impl Into<String>, question: &Question, budget: Duration) -> Self {
        let content = format!(
            "No answer for question {} within {} ms",
            question.qid(),
            budget.as_millis()
        );
        Self::build(pid, question, AnswerStatus::Timeout, content)
    }

    /// An answer describing why a producer failed.
    pub fn error(pid: impl Into<String>, question: &Question, error: impl std::fmt::Display) -> Self {
        Self::build(pid, question, AnswerStatus::Error, error.to_string())
    }

    fn build(
        pid: impl Into<String>,
        question: &Question,
        status: AnswerStatus,
        content: String,
    ) -> Self {
        Self {
            pid: pid.into(),
            qid: question.qid().to_string(),
            time_ms: question.elapsed_ms(),
            content,
            resources: Vec::new(),
            status,
        }
    }

    pub fn pid(&self) -> &str {
        &self.pid
    }

    pub fn qid(&self) -> &str {
        &self.qid
    }

    /// Milliseconds between the question arriving and this answer being built.
    pub fn time_ms(&self) -> u64 {
        self.time_ms
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Resources in the comma-separated form clients expect.
    pub fn resources_joined(&self) -> String {
        self.resources.join(",")
    }

    pub fn status(&self) -> AnswerStatus {
        self.status
    }
}

/// Serialization envelope around one [`Answer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerWrapper {
    answer: Answer,
}

impl AnswerWrapper {
    pub fn new(answer: Answer) -> Self {
        Self { answer }
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    pub fn into_answer(self) -> Answer {
        self.answer
    }
}

impl From<Answer> for AnswerWrapper {
    fn from(answer: Answer) -> Self {
        Self::new(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn question() -> Question {
        Question::new("q1", "What is Rust?").unwrap()
    }

    #[test]
    fn test_normal_answer() {
        let answer = Answer::normal("pid-1", &question(), "A systems language");
        assert_eq!(answer.pid(), "pid-1");
        assert_eq!(answer.qid(), "q1");
        assert_eq!(answer.content(), "A systems language");
        assert_eq!(answer.status(), AnswerStatus::Normal);
        assert!(answer.resources().is_empty());
        assert_eq!(answer.resources_joined(), "");
    }

    #[test]
    fn test_timeout_answer_mentions_budget() {
        let answer = Answer::timeout("pid-1", &question(), Duration::from_millis(2000));
        assert_eq!(answer.status(), AnswerStatus::Timeout);
        assert!(answer.content().contains("2000 ms"));
        assert!(answer.content().contains("q1"));
    }

    #[test]
    fn test_error_answer_carries_message() {
        let answer = Answer::error("pid-1", &question(), "connection refused");
        assert_eq!(answer.status(), AnswerStatus::Error);
        assert_eq!(answer.content(), "connection refused");
    }

    #[test]
    fn test_time_is_measured_from_question() {
        let q = question().with_received_at(Utc::now() - chrono::Duration::milliseconds(800));
        let answer = Answer::normal("pid-1", &q, "x");
        assert!(answer.time_ms() >= 800);
    }

    #[test]
    fn test_status_helpers() {
        assert!(AnswerStatus::Normal.is_answered());
        assert!(!AnswerStatus::Timeout.is_answered());
        assert!(!AnswerStatus::Error.is_answered());
        assert_eq!(AnswerStatus::Timeout.to_string(), "timeout");
    }

    #[test]
    fn test_wrapper() {
        let answer = Answer::normal("pid-1", &question(), "x");
        let wrapper = AnswerWrapper::from(answer.clone());
        assert_eq!(wrapper.answer(), &answer);
        assert_eq!(wrapper.into_answer(), answer);
    }
}
