mod gemini;

pub use gemini::GeminiGenerator;

/// Text generation provider interface
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Generate a text completion for a single prompt
    async fn generate(&self, prompt: &str) -> Result<Generation, GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("The model returned no text")]
    EmptyResponse,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
