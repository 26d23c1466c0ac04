//! HTTP boundary
//!
//! Decodes questions from request parameters, hands them to the
//! [`QuestionDispatcher`](liveqa_application::QuestionDispatcher) and
//! writes the chosen answer back as an XML document.

mod error;
mod form;
mod handler;
mod router;
mod server;

pub use error::ApiError;
pub use form::QuestionForm;
pub use router::{AppState, build_router};
pub use server::serve;
