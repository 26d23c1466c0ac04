//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! Each capability also ships a canned implementation here that never fails,
//! used as the last fallback backend.

pub mod answer_logger;
pub mod answer_producer;
pub mod capability;
pub mod retriever;
pub mod summarizer;
