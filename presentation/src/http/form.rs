//! Question form decoding

use chrono::{DateTime, Utc};
use liveqa_domain::{DomainError, Question};
use serde::Deserialize;

/// Question fields as submitted in the query string or a urlencoded body.
///
/// Both lower-case and capitalized keys are accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuestionForm {
    #[serde(alias = "Qid")]
    pub qid: String,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Body")]
    pub body: String,
    #[serde(alias = "Category")]
    pub category: String,
}

impl QuestionForm {
    /// Build a [`Question`] stamped with `received_at`.
    pub fn into_question(self, received_at: DateTime<Utc>) -> Result<Question, DomainError> {
        Ok(Question::new(self.qid, self.body)?
            .with_title(self.title)
            .with_category(self.category)
            .with_received_at(received_at))
    }
}
