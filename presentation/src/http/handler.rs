//! Request handlers

use super::error::ApiError;
use super::form::QuestionForm;
use super::router::AppState;
use crate::output::xml::XmlRenderer;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::header;
use axum::response::IntoResponse;
use chrono::Utc;
use tracing::info;

pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Answer one question.
///
/// Accepts the fields from the query string (GET) or a urlencoded body (POST).
pub async fn answer_question(
    State(state): State<AppState>,
    form: Result<Form<QuestionForm>, FormRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let received_at = Utc::now();
    let Form(form) = form.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let question = form.into_question(received_at)?;

    info!("QID {}", question.qid());

    let wrapper = state.dispatcher.dispatch(question).await;
    let answer = wrapper.answer();
    info!(
        "Answer to {} from {} ({}, {} ms)",
        answer.qid(),
        answer.pid(),
        answer.status(),
        answer.time_ms()
    );

    Ok((
        [(header::CONTENT_TYPE, XML_CONTENT_TYPE)],
        XmlRenderer::render_document(&wrapper),
    ))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
