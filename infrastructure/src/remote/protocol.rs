//! Wire types and the shared POST-JSON exchange.

use liveqa_application::CapabilityError;
use liveqa_domain::{Passage, Question};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct RetrievalRequest<'a> {
    pub question: &'a Question,
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RetrievalResponse {
    pub passages: Vec<Passage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummarizationRequest<'a> {
    pub passages: &'a [Passage],
    pub question: &'a Question,
    pub max_length: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummarizationResponse {
    pub summary: String,
}

/// POST `body` as JSON to `url` and decode the JSON response.
pub(crate) async fn post_json<B, R>(
    client: &reqwest::Client,
    url: &str,
    body: &B,
) -> Result<R, CapabilityError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = client
        .post(url)
        .json(body)
        .send()
        .await
        .map_err(|e| CapabilityError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CapabilityError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| CapabilityError::Transport(format!("Failed to read response body: {}", e)))?;

    serde_json::from_slice(&bytes).map_err(|e| CapabilityError::Decode(e.to_string()))
}
