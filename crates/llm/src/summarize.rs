use std::sync::Arc;

use condense_common::config::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_SHORT_THRESHOLD};
use condense_common::{AppConfig, CondenseError, Result};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::backend::CompletionBackend;
use crate::chunking::chunk_text;
use crate::prompts;

/// Summary output shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// Prose summary
    Standard,

    /// Bullet-point summary
    Bullets,
}

/// Tunables for the direct-vs-chunked decision
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    /// Texts at or below this length are summarized with a single call
    pub short_threshold: usize,

    /// Chunk target size for longer texts
    pub chunk_size: usize,

    /// Overlap between consecutive chunks
    pub chunk_overlap: usize,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            short_threshold: DEFAULT_SHORT_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl From<&AppConfig> for SummarizeOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            short_threshold: config.short_threshold,
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
        }
    }
}

/// Summarizer for long text using map-reduce strategy
///
/// Short inputs go straight to the backend in one call. Longer inputs are
/// chunked, each chunk is summarized independently (concurrently, results
/// kept in chunk order), and one final call merges the partial summaries.
pub struct Summarizer {
    backend: Arc<dyn CompletionBackend>,
    options: SummarizeOptions,
}

impl Summarizer {
    /// Create new summarizer
    pub fn new(backend: Arc<dyn CompletionBackend>, options: SummarizeOptions) -> Self {
        Self { backend, options }
    }

    /// Summarize text in the requested mode
    pub async fn summarize(&self, text: &str, mode: SummaryMode) -> Result<String> {
        if text.trim().is_empty() {
            return Err(CondenseError::EmptyInput);
        }

        info!(
            "Starting summarization - Mode: {:?}, Text length: {} chars",
            mode,
            text.len()
        );

        // Short text: single direct call
        if text.len() <= self.options.short_threshold {
            debug!("Text is short, using direct summarization");
            return self.backend.complete(&prompts::map_prompt(mode, text)).await;
        }

        // Map phase: one independent call per chunk, dispatched concurrently.
        // try_join_all keeps results in chunk order and fails fast, so a map
        // failure means the reduce call is never issued.
        let chunks = chunk_text(text, self.options.chunk_size, self.options.chunk_overlap)?;
        info!("Split text into {} chunks", chunks.len());

        let map_calls = chunks.into_iter().map(|chunk| {
            let prompt = prompts::map_prompt(mode, &chunk.text);
            let backend = Arc::clone(&self.backend);
            async move { backend.complete(&prompt).await }
        });

        let partial_summaries = try_join_all(map_calls).await?;

        // Reduce phase: merge partial summaries in chunk order
        let combined = partial_summaries.join("\n");
        debug!(
            "Combined {} partial summaries - Length: {} chars",
            partial_summaries.len(),
            combined.len()
        );

        self.backend.complete(&prompts::reduce_prompt(&combined)).await
    }

    /// Prose summary
    pub async fn summarize_standard(&self, text: &str) -> Result<String> {
        self.summarize(text, SummaryMode::Standard).await
    }

    /// Bullet-point summary
    pub async fn summarize_bullets(&self, text: &str) -> Result<String> {
        self.summarize(text, SummaryMode::Bullets).await
    }
}
