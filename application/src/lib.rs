//! Application layer for liveqa
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AnswerParams, DispatchParams};
pub use ports::{
    answer_logger::{AnswerEvent, AnswerLogger, NoAnswerLogger},
    answer_producer::AnswerProducer,
    capability::{Capability, CapabilityError},
    retriever::{CannedRetriever, Retriever},
    summarizer::{CannedSummarizer, Summarizer},
};
pub use use_cases::dispatch::{DispatchError, QuestionDispatcher};
pub use use_cases::fallback::FallbackStage;
pub use use_cases::two_stage::TwoStageAnswerProducer;
