use condense_llm::SummaryMode;
use serde::{Deserialize, Serialize};

/// Summarization request
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Source text
    pub text: String,

    /// Summary shape
    #[serde(default = "default_mode")]
    pub mode: SummaryMode,
}

fn default_mode() -> SummaryMode {
    SummaryMode::Standard
}

/// Summarization response
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// Final summary text
    pub summary: String,

    /// Mode used
    pub mode: SummaryMode,

    /// Source length in characters
    pub original_chars: usize,

    /// Summary length in characters
    pub summary_chars: usize,

    /// Length reduction percentage, one decimal place
    pub compression: f64,
}

/// Percentage reduction from original to summary length, one decimal place
pub fn compression_ratio(original_chars: usize, summary_chars: usize) -> f64 {
    if original_chars == 0 {
        return 0.0;
    }
    ((1.0 - summary_chars as f64 / original_chars as f64) * 1000.0).round() / 10.0
}

/// Upload response with the decoded text
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Original filename
    pub filename: String,

    /// Character count
    pub chars: usize,

    /// Word count
    pub words: usize,

    /// Decoded file content
    pub text: String,
}

/// Download request carrying the summary to send back as a file
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    /// Summary text
    pub summary: String,

    /// Download filename
    #[serde(default)]
    pub filename: Option<String>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Configured model identifier
    pub model: String,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
