//! Core domain concepts.
//!
//! - [`question::Question`]: a question received from a client
//! - [`answer::Answer`]: the single answer resolved for a question
//! - [`error::DomainError`]: domain-level errors

pub mod answer;
pub mod error;
pub mod question;
