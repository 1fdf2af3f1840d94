use condense_common::{AppConfig, Result};
use condense_llm::{ChatClient, SummarizeOptions, Summarizer};
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Map-reduce summarizer over the shared chat client
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    /// Create new application state
    ///
    /// The chat client is constructed once here and shared read-only by
    /// every request.
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = ChatClient::from_config(&config)?;
        let summarizer = Summarizer::new(Arc::new(client), SummarizeOptions::from(&config));

        Ok(Self {
            config,
            summarizer: Arc::new(summarizer),
        })
    }
}
