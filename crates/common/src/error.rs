/// Condense error types
#[derive(Debug, thiserror::Error)]
pub enum CondenseError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input text is empty or whitespace-only
    #[error("Input text is empty")]
    EmptyInput,

    /// Failure reported by the LLM backend (auth, rate limit, network, bad response)
    #[error("LLM backend error: {0}")]
    Backend(String),

    /// Invalid chunking parameters
    #[error("Chunking error: {0}")]
    Chunking(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CondenseError {
    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create backend error
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        Self::Backend(msg.into())
    }

    /// Create chunking error
    pub fn chunking<S: Into<String>>(msg: S) -> Self {
        Self::Chunking(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }
}

// HTTP response conversion (used by the server crate)
impl CondenseError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyInput => 400,
            Self::InvalidInput(_) => 400,
            Self::NotFound(_) => 404,
            Self::Backend(_) => 502,
            Self::Config(_) => 500,
            Self::Chunking(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}
