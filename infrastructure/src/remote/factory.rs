//! Wiring for two-stage producers built from descriptors.

use super::{RemoteRetriever, RemoteSummarizer};
use crate::config::ProducerDescriptor;
use liveqa_application::{
    AnswerParams, CannedRetriever, CannedSummarizer, Retriever, Summarizer,
    TwoStageAnswerProducer,
};
use std::sync::Arc;

/// Build a two-stage producer: remote backends first, canned ones as the
/// last resort for each stage.
pub fn two_stage_producer(
    name: impl Into<String>,
    descriptor: &ProducerDescriptor,
    client: reqwest::Client,
    params: AnswerParams,
) -> TwoStageAnswerProducer {
    let retrievers: Vec<Arc<dyn Retriever>> = vec![
        Arc::new(RemoteRetriever::new(
            client.clone(),
            descriptor.retriever_url.clone(),
        )),
        Arc::new(CannedRetriever),
    ];
    let summarizers: Vec<Arc<dyn Summarizer>> = vec![
        Arc::new(RemoteSummarizer::new(
            client,
            descriptor.summarizer_url.clone(),
        )),
        Arc::new(CannedSummarizer),
    ];

    TwoStageAnswerProducer::new(name, retrievers, summarizers, params)
}
