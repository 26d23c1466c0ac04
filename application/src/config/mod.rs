//! Application-level configuration.
//!
//! - [`AnswerParams`]: how a two-stage producer shapes its answers
//! - [`DispatchParams`]: the dispatcher's time budget and identity

pub mod answer_params;
pub mod dispatch_params;

pub use answer_params::AnswerParams;
pub use dispatch_params::DispatchParams;
