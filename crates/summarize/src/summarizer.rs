use anyhow::{Context, Result};
use ingest::{Chunker, ChunkerConfig};
use llm::{CompletionClient, LlmError};
use tracing::warn;

use crate::fallback::fallback_summary;
use crate::prompt;

/// Hierarchical map/reduce summarizer.
///
/// Short documents get one direct generative summary. Long documents
/// are chunked, summarized per chunk, and reduced into one final
/// summary. When the backend is over capacity, unauthorized, or
/// unreachable, the extractive fallback over the full original text is
/// returned instead; other backend errors propagate.
pub struct Summarizer<C> {
    client: C,
    chunker: Chunker,
}

impl<C: CompletionClient> Summarizer<C> {
    pub fn new(client: C, chunking: ChunkerConfig) -> Self {
        Self {
            client,
            chunker: Chunker::new(chunking),
        }
    }

    pub fn with_defaults(client: C) -> Self {
        Self::new(client, ChunkerConfig::default())
    }

    /// Produce one summary for `document_text`.
    pub async fn summarize(&self, document_text: &str) -> Result<String> {
        let chunks = self.chunker.split(document_text);

        if chunks.is_empty() {
            return Ok(String::new());
        }

        if chunks.len() == 1 {
            let prompt = prompt::build_direct_prompt(&chunks[0].text);
            return match self.client.complete(prompt::DIRECT_SYSTEM, &prompt).await {
                Ok(summary) => Ok(summary.trim().to_string()),
                Err(e) => self.degrade(document_text, e),
            };
        }

        // Map: summarize each chunk independently, skipping failures.
        let mut chunk_summaries = Vec::new();
        for chunk in &chunks {
            let prompt = prompt::build_chunk_prompt(&chunk.text);
            match self.client.complete(prompt::CHUNK_SYSTEM, &prompt).await {
                Ok(summary) => chunk_summaries.push(summary.trim().to_string()),
                Err(e) => {
                    warn!(chunk = chunk.index, error = %e, "skipping chunk summary");
                }
            }
        }

        if chunk_summaries.is_empty() {
            warn!("no chunk summaries survived, using extractive fallback");
            return Ok(fallback_summary(document_text));
        }

        // Reduce: one final pass over the surviving chunk summaries,
        // in chunk order.
        let combined = chunk_summaries.join("\n\n");
        let prompt = prompt::build_reduce_prompt(&combined);
        match self.client.complete(prompt::REDUCE_SYSTEM, &prompt).await {
            Ok(summary) => Ok(summary.trim().to_string()),
            Err(e) => self.degrade(document_text, e),
        }
    }

    /// Turn a summary into a conversational podcast script.
    pub async fn podcast_script(&self, summary_text: &str) -> Result<String> {
        let prompt = prompt::build_podcast_prompt(summary_text);
        let script = self
            .client
            .complete(prompt::PODCAST_SYSTEM, &prompt)
            .await
            .context("generating podcast script")?;
        Ok(script.trim().to_string())
    }

    /// Add learning structure to a summary. On any backend error the
    /// input summary is returned unchanged.
    pub async fn enhance_for_learning(&self, summary_text: &str) -> String {
        let prompt = prompt::build_enhance_prompt(summary_text);
        match self.client.complete(prompt::ENHANCE_SYSTEM, &prompt).await {
            Ok(enhanced) => enhanced.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "summary enhancement failed, keeping original");
                summary_text.to_string()
            }
        }
    }

    fn degrade(&self, document_text: &str, error: LlmError) -> Result<String> {
        match error {
            LlmError::ContextExceeded(_)
            | LlmError::Unauthorized(_)
            | LlmError::Unavailable(_) => {
                warn!(error = %error, "generative summary unavailable, using extractive fallback");
                Ok(fallback_summary(document_text))
            }
            other => Err(other).context("generating summary"),
        }
    }
}
