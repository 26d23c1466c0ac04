//! Presentation layer for liveqa
//!
//! This crate contains the CLI definition, the HTTP boundary that decodes
//! questions and renders answers, and the XML answer renderer.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{AppState, build_router, serve};
pub use output::xml::XmlRenderer;
