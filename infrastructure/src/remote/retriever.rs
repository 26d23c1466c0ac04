//! Remote retrieval backend.

use super::protocol::{RetrievalRequest, RetrievalResponse, post_json};
use async_trait::async_trait;
use liveqa_application::{Capability, CapabilityError, Retriever};
use liveqa_domain::{Passage, Question};
use tracing::debug;

/// [`Retriever`] backed by a remote JSON endpoint.
pub struct RemoteRetriever {
    client: reqwest::Client,
    url: String,
}

impl RemoteRetriever {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Capability for RemoteRetriever {
    fn name(&self) -> &str {
        "remote-retriever"
    }
}

#[async_trait]
impl Retriever for RemoteRetriever {
    async fn retrieve(
        &self,
        question: &Question,
        limit: usize,
    ) -> Result<Vec<Passage>, CapabilityError> {
        debug!("POST {} for {} (limit {})", self.url, question.qid(), limit);
        let request = RetrievalRequest { question, limit };
        let response: RetrievalResponse = post_json(&self.client, &self.url, &request).await?;
        Ok(response.passages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::test_server;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    fn client() -> reqwest::Client {
        crate::remote::http_client(std::time::Duration::from_secs(5)).unwrap()
    }

    fn question() -> Question {
        Question::new("q1", "What is Rust?").unwrap()
    }

    #[tokio::test]
    async fn test_retrieves_passages() {
        let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let recorder = Arc::clone(&seen);
        let router = Router::new().route(
            "/retrieve",
            post(move |Json(body): Json<Value>| {
                let recorder = Arc::clone(&recorder);
                async move {
                    *recorder.lock().unwrap() = Some(body);
                    Json(json!({ "passages": ["first", "second"] }))
                }
            }),
        );
        let base = test_server::spawn(router).await;

        let retriever = RemoteRetriever::new(client(), format!("{base}/retrieve"));
        let passages = retriever.retrieve(&question(), 7).await.unwrap();

        assert_eq!(passages, vec!["first".to_string(), "second".to_string()]);
        let body = seen.lock().unwrap().clone().unwrap();
        assert_eq!(body["limit"], 7);
        assert_eq!(body["question"]["qid"], "q1");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let router = Router::new().route(
            "/retrieve",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "busy") }),
        );
        let base = test_server::spawn(router).await;

        let retriever = RemoteRetriever::new(client(), format!("{base}/retrieve"));
        let result = retriever.retrieve(&question(), 10).await;

        assert_eq!(result, Err(CapabilityError::Status(503)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported() {
        let router = Router::new().route(
            "/retrieve",
            post(|| async { Json(json!({ "documents": [] })) }),
        );
        let base = test_server::spawn(router).await;

        let retriever = RemoteRetriever::new(client(), format!("{base}/retrieve"));
        let result = retriever.retrieve(&question(), 10).await;

        assert!(matches!(result, Err(CapabilityError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let retriever = RemoteRetriever::new(client(), "http://127.0.0.1:1/retrieve");
        let result = retriever.retrieve(&question(), 10).await;

        assert!(matches!(result, Err(CapabilityError::Transport(_))));
    }
}
