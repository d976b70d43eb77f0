use async_trait::async_trait;
use thiserror::Error;

/// One completion round-trip request.
///
/// Optional fields override the backend's configured defaults.
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub model: Option<String>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }
}

/// Failures of the remote completion call. No retries happen anywhere.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("completion API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode completion response: {0}")]
    Decode(String),
}

/// Boundary over the remote model call.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    fn name(&self) -> &str;
    fn model(&self) -> &str;

    /// One blocking round-trip returning the extracted text payload.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}
