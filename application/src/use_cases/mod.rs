//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch;
pub mod fallback;
pub(crate) mod shared;
pub mod two_stage;
