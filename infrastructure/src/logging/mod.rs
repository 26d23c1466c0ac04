//! Logging infrastructure for structured answer records.
//!
//! Provides [`JsonlAnswerLogger`], a JSONL file writer that implements
//! the [`AnswerLogger`](liveqa_application::AnswerLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlAnswerLogger;
