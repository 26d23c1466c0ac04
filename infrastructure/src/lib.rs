//! Infrastructure layer for liveqa
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod remote;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, ProducerDescriptor,
};
pub use logging::JsonlAnswerLogger;
pub use remote::{
    RemoteRetriever, RemoteSummarizer, factory::two_stage_producer, http_client,
};
