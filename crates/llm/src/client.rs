use async_trait::async_trait;
use condense_common::{AppConfig, CondenseError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::backend::CompletionBackend;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// Sampling temperature for all summarization calls
const TEMPERATURE: f32 = 0.3;

/// Per-request timeout
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(120);

/// OpenAI-compatible chat completions client
///
/// Built once at startup and shared read-only across requests. Failed calls
/// are not retried here; retry policy belongs to the caller.
#[derive(Debug, Clone)]
pub struct ChatClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl ChatClient {
    /// Create new chat client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CondenseError::backend(format!("Failed to create HTTP client: {}", e)))?;

        info!("Chat client initialized: {} (model: {})", base_url, model);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            model,
            client,
        })
    }

    /// Create client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.base_url, &config.api_key, &config.model)
    }

    /// Model identifier this client generates with
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a single completion request
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: Some(TEMPERATURE),
            max_tokens: None,
        };

        debug!(
            "Sending completion request - Model: {}, Prompt length: {}",
            request.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CondenseError::backend(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CondenseError::backend(format!(
                "API returned {}: {}",
                status,
                body.trim()
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| CondenseError::backend(format!("Failed to parse response: {}", e)))?;

        let content = result
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CondenseError::backend("No choices in API response"))?;

        debug!("Received completion - Length: {}", content.len());

        Ok(content)
    }
}

#[async_trait]
impl CompletionBackend for ChatClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        ChatClient::complete(self, prompt).await
    }
}
