use crate::error::CondenseError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default character threshold below which text is summarized in one call
pub const DEFAULT_SHORT_THRESHOLD: usize = 1500;

/// Default chunk target size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 1200;

/// Default overlap between consecutive chunks in characters
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Condense application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the LLM endpoint
    pub api_key: String,

    /// Model identifier (e.g., "gpt-4o-mini")
    pub model: String,

    /// Base URL of the OpenAI-compatible API (e.g., "https://api.openai.com/v1")
    pub base_url: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Texts at or below this length are summarized with a single call
    pub short_threshold: usize,

    /// Chunk target size for longer texts
    pub chunk_size: usize,

    /// Overlap between consecutive chunks
    pub chunk_overlap: usize,
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, CondenseError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            api_key: Self::require_env("API_KEY")?,
            model: Self::require_env("MODEL_NAME")?,
            base_url: Self::require_env("BASE_URL")?,
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
            short_threshold: Self::get_env_usize("SHORT_THRESHOLD", DEFAULT_SHORT_THRESHOLD),
            chunk_size: Self::get_env_usize("CHUNK_SIZE", DEFAULT_CHUNK_SIZE),
            chunk_overlap: Self::get_env_usize("CHUNK_OVERLAP", DEFAULT_CHUNK_OVERLAP),
        };

        config.validate()?;

        Ok(config)
    }

    /// Read a required environment variable, failing when missing or empty
    fn require_env(key: &str) -> Result<String, CondenseError> {
        match std::env::var(key) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(CondenseError::config(format!(
                "Missing required configuration value: {}",
                key
            ))),
        }
    }

    /// Read a usize from an environment variable with a default
    fn get_env_usize(key: &str, default: usize) -> usize {
        std::env::var(key)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(default)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CondenseError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(CondenseError::config(
                "Base URL must start with http:// or https://",
            ));
        }

        if self.server_port == 0 {
            return Err(CondenseError::config("Server port cannot be 0"));
        }

        if self.chunk_size == 0 {
            return Err(CondenseError::config("Chunk size cannot be 0"));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(CondenseError::config(format!(
                "Chunk overlap ({}) must be smaller than chunk size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }

        Ok(())
    }
}
