use async_trait::async_trait;
use condense_common::Result;

/// Common trait for completion backends
///
/// The summarizer only needs a prompt-in/text-out call, so tests can swap
/// the HTTP client for a mock.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Generate text from a prompt
    async fn complete(&self, prompt: &str) -> Result<String>;
}
