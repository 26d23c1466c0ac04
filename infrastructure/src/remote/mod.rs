//! Remote capability adapters
//!
//! [`RemoteRetriever`] and [`RemoteSummarizer`] speak a small JSON-over-HTTP
//! protocol: the call's arguments are POSTed as a JSON body and the result
//! is parsed from the JSON response.
//!
//! | Capability    | Request                                   | Response                 |
//! |---------------|-------------------------------------------|--------------------------|
//! | Retrieval     | `{question, limit}`                       | `{passages: [string]}`   |
//! | Summarization | `{passages, question, maxLength}`         | `{summary: string}`      |
//!
//! Transport errors, non-success statuses and malformed bodies all surface
//! as [`CapabilityError`](liveqa_application::CapabilityError), which the
//! fallback stage absorbs.

pub mod factory;
mod protocol;
mod retriever;
mod summarizer;

pub use retriever::RemoteRetriever;
pub use summarizer::RemoteSummarizer;

use std::time::Duration;

/// Build the shared HTTP client used by every remote backend.
///
/// `request_timeout` bounds each backend call end to end.
pub fn http_client(request_timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(request_timeout)
        .user_agent(concat!("liveqa/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[cfg(test)]
pub(crate) mod test_server {
    //! Local HTTP server for exercising the remote adapters.

    use axum::Router;

    /// Serve `router` on an ephemeral local port and return its base URL.
    pub async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }
}
