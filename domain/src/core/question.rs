//! Question value object

use super::error::DomainError;
use crate::text::query_terms;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unit of retrieved text handed from retrieval to summarization.
pub type Passage = String;

/// A question to be answered (Value Object)
///
/// Created at the HTTP boundary when a request arrives and read-only
/// thereafter. `received_at` is the reference point for every answer's
/// elapsed time, so timings are end-to-end from the client's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    qid: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    category: String,
    received_at: DateTime<Utc>,
}

impl Question {
    /// Create a new question received now.
    ///
    /// Returns [`DomainError::InvalidQuestion`] if `qid` is empty or only
    /// whitespace. An empty body is allowed; some clients only send a title.
    pub fn new(qid: impl Into<String>, body: impl Into<String>) -> Result<Self, DomainError> {
        let qid = qid.into();
        if qid.trim().is_empty() {
            return Err(DomainError::InvalidQuestion("qid is empty".to_string()));
        }
        Ok(Self {
            qid,
            title: String::new(),
            body: body.into(),
            category: String::new(),
            received_at: Utc::now(),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Override the receive timestamp (used when the boundary stamped it earlier).
    pub fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = received_at;
        self
    }

    pub fn qid(&self) -> &str {
        &self.qid
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// Milliseconds elapsed since the question was received.
    ///
    /// Clamped to zero if the clock went backwards.
    pub fn elapsed_ms(&self) -> u64 {
        (Utc::now() - self.received_at).num_milliseconds().max(0) as u64
    }

    /// Lower-cased, punctuation-free terms of the title and body.
    pub fn query_terms(&self) -> Vec<String> {
        let mut terms = query_terms(&self.title);
        terms.extend(query_terms(&self.body));
        terms
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.qid, self.body)
    }
}
