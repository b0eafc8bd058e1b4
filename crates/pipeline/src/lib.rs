//! Facade tying the pipeline together: chunked summarization, concept
//! graph construction, and the podcast/enhancement passes, with result
//! caching and basic metrics on top.

pub mod cache;
pub mod config;
pub mod metrics;

pub use cache::{CacheStats, ResponseCache};
pub use config::{AppConfig, CacheConfig, LlmConfig};
pub use metrics::{Metrics, MetricsSnapshot};

use std::sync::Arc;

use anyhow::Result;
use llm::CompletionClient;
use mindmap::{GraphBuilder, MindMap};
use summarize::Summarizer;
use tracing::info;
use uuid::Uuid;

use crate::metrics::TimedOperation;

/// Entry point for the surrounding application. One instance serves
/// many requests; all per-request state stays on the stack.
pub struct DocumentAnalyzer<C> {
    summarizer: Summarizer<C>,
    builder: GraphBuilder<C>,
    cache: Option<ResponseCache>,
    metrics: Arc<Metrics>,
}

impl<C: CompletionClient + Clone> DocumentAnalyzer<C> {
    pub fn new(client: C, config: AppConfig) -> Self {
        let cache = config
            .cache
            .enabled
            .then(|| ResponseCache::new(config.cache.max_entries));

        Self {
            summarizer: Summarizer::new(client.clone(), config.chunking),
            builder: GraphBuilder::new(client),
            cache,
            metrics: Metrics::new(),
        }
    }

    pub fn with_defaults(client: C) -> Self {
        Self::new(client, AppConfig::default())
    }

    /// Summarize a document. Degrades to an extractive summary when the
    /// backend is over capacity, unauthorized, or unreachable; other
    /// backend errors surface to the caller.
    pub async fn summarize(&self, document_text: &str) -> Result<String> {
        if let Some(cached) = self
            .cache
            .as_ref()
            .and_then(|c| c.get_summary(document_text))
        {
            self.metrics.record_cache_hit();
            return Ok(cached);
        }

        let request_id = Uuid::new_v4();
        let timer = TimedOperation::start();
        let result = self.summarizer.summarize(document_text).await;
        self.metrics.record_summary(timer.elapsed(), result.is_ok());

        let summary = result?;
        info!(
            %request_id,
            document_chars = document_text.chars().count(),
            summary_chars = summary.chars().count(),
            "summary generated"
        );

        if let Some(cache) = &self.cache {
            cache.set_summary(document_text, summary.clone());
        }
        Ok(summary)
    }

    /// Build the concept graph for a summary. Never fails: invalid or
    /// missing generative output drops to the heuristic path.
    pub async fn build_concept_graph(&self, summary_text: &str) -> MindMap {
        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get_graph(summary_text)) {
            self.metrics.record_cache_hit();
            return cached;
        }

        let request_id = Uuid::new_v4();
        let timer = TimedOperation::start();
        let graph = self.builder.build(summary_text).await;
        self.metrics.record_graph(timer.elapsed());

        info!(
            %request_id,
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "concept graph built"
        );

        if let Some(cache) = &self.cache {
            cache.set_graph(summary_text, graph.clone());
        }
        graph
    }

    /// Turn a summary into a podcast-style script.
    pub async fn podcast_script(&self, summary_text: &str) -> Result<String> {
        self.summarizer.podcast_script(summary_text).await
    }

    /// Add learning structure to a summary; returns the input unchanged
    /// on backend failure.
    pub async fn enhance_for_learning(&self, summary_text: &str) -> String {
        self.summarizer.enhance_for_learning(summary_text).await
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

/// Install the process-wide tracing subscriber.
pub fn init_tracing() {
    tracing_subscriber::fmt::init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm::{LlmError, MockClient};
    use mindmap::NodeKind;

    #[tokio::test]
    async fn summarize_then_build_graph() {
        let client = MockClient::new("The onboarding process has a clear benefit for teams.");
        let analyzer = DocumentAnalyzer::with_defaults(client);

        let summary = analyzer.summarize("A document about onboarding.").await.unwrap();
        assert!(!summary.is_empty());

        // The mock's reply is not JSON, so the graph comes from the
        // heuristic path and must still be well-formed.
        let graph = analyzer.build_concept_graph(&summary).await;
        assert_eq!(graph.validate(), Ok(()));
        assert_eq!(
            graph
                .nodes
                .iter()
                .filter(|n| n.kind == NodeKind::Central)
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn summary_cache_skips_the_backend() {
        let client = MockClient::new("A summary.");
        let analyzer = DocumentAnalyzer::with_defaults(client.clone());

        analyzer.summarize("Same document text.").await.unwrap();
        analyzer.summarize("Same document text.").await.unwrap();

        assert_eq!(client.call_count(), 1);
        assert_eq!(analyzer.metrics().cache_hits, 1);
    }

    #[tokio::test]
    async fn graph_cache_skips_the_backend() {
        let client = MockClient::failing(LlmError::Unavailable("down".into()));
        let analyzer = DocumentAnalyzer::with_defaults(client.clone());

        let first = analyzer
            .build_concept_graph("The review process brings a benefit to the team overall.")
            .await;
        let second = analyzer
            .build_concept_graph("The review process brings a benefit to the team overall.")
            .await;

        assert_eq!(first, second);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn disabled_cache_always_calls_through() {
        let client = MockClient::new("A summary.");
        let mut config = AppConfig::default();
        config.cache.enabled = false;
        let analyzer = DocumentAnalyzer::new(client.clone(), config);

        analyzer.summarize("Same document text.").await.unwrap();
        analyzer.summarize("Same document text.").await.unwrap();
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn failed_summaries_are_counted() {
        let client = MockClient::failing(LlmError::Backend("boom".into()));
        let analyzer = DocumentAnalyzer::with_defaults(client);

        assert!(analyzer.summarize("Some document.").await.is_err());
        let snapshot = analyzer.metrics();
        assert_eq!(snapshot.summaries_requested, 1);
        assert_eq!(snapshot.summaries_failed, 1);
    }
}
