//! Domain layer for liveqa
//!
//! This crate contains the core value objects and pure text helpers.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: an immutable unit of work, stamped with the time it arrived
//! - **Answer**: the single resolved response to a question, tagged
//!   normal / timeout / error
//! - **Passage**: a unit of retrieved text consumed by summarization

pub mod core;
pub mod text;

// Re-export commonly used types
pub use core::{
    answer::{Answer, AnswerStatus, AnswerWrapper},
    error::DomainError,
    question::{Passage, Question},
};
pub use text::{normalize, query_terms, sanitize, truncate};
