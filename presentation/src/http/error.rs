//! Error responses for the HTTP boundary

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use liveqa_domain::DomainError;
use thiserror::Error;

/// Errors surfaced to HTTP clients before a question reaches the dispatcher.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}
