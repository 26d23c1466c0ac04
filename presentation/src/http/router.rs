//! Route table

use super::handler::{answer_question, health};
use axum::Router;
use axum::routing::get;
use liveqa_application::QuestionDispatcher;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<QuestionDispatcher>,
}

impl AppState {
    pub fn new(dispatcher: QuestionDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}

/// Build the HTTP router.
///
/// - `GET /` and `POST /` answer a question
/// - `GET /health` reports liveness
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(answer_question).post(answer_question))
        .route("/health", get(health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::xml::XML_DECLARATION;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use liveqa_application::{AnswerProducer, DispatchParams};
    use liveqa_domain::{Answer, Question};
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;
    use tower::ServiceExt;

    /// Echoes the question back as the answer content.
    struct EchoProducer;

    #[async_trait]
    impl AnswerProducer for EchoProducer {
        fn name(&self) -> &str {
            "echo"
        }

        async fn produce(&self, question: &Question, _cancellation: &CancellationToken) -> Answer {
            Answer::normal(
                "echo",
                question,
                format!("{} | {} | {}", question.title(), question.body(), question.category()),
            )
        }
    }

    fn app() -> Router {
        let dispatcher = QuestionDispatcher::new(
            vec![Arc::new(EchoProducer)],
            DispatchParams::default().with_timeout(Duration::from_secs(5)),
        )
        .unwrap();
        build_router(AppState::new(dispatcher))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_with_query_returns_xml_answer() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/?qid=q1&title=Hi&body=Why%20%3Crust%3E&category=Tech")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("application/xml"));

        let body = body_string(response).await;
        assert!(body.starts_with(XML_DECLARATION));
        assert!(body.contains(r#"answered="yes""#));
        assert!(body.contains(r#"pid="echo""#));
        assert!(body.contains(r#"qid="q1""#));
        assert!(body.contains("<content>Hi | Why &lt;rust&gt; | Tech</content>"));
    }

    #[tokio::test]
    async fn test_post_form_with_capitalized_keys() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("Qid=q2&Title=T&Body=B&Category=C"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(r#"qid="q2""#));
        assert!(body.contains("<content>T | B | C</content>"));
    }

    #[tokio::test]
    async fn test_missing_qid_is_bad_request() {
        let response = app()
            .oneshot(Request::builder().uri("/?body=hello").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_qid_is_bad_request() {
        let response = app()
            .oneshot(Request::builder().uri("/?qid=&body=hello").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }
}
