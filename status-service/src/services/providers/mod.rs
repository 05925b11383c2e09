//! Hosted model provider abstraction.
//!
//! The rewrite endpoint only needs single-shot text generation; the trait
//! keeps the concrete API swappable and lets tests stand in a mock server.

pub mod gemini;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidRequest(msg) => AppError::BadRequest(anyhow::anyhow!(msg)),
            ProviderError::ContentFiltered => {
                AppError::BadRequest(anyhow::anyhow!("The model declined to rewrite this text"))
            }
            other => AppError::BadGateway(other.to_string()),
        }
    }
}

/// Result of a completed generation.
pub struct ProviderResponse {
    pub text: Option<String>,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub finish_reason: FinishReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
}

/// Generation parameters for a model request.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,
    /// Maximum output tokens.
    pub max_tokens: Option<i32>,
}

/// Trait for single-shot text generation providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    async fn health_check(&self) -> Result<(), ProviderError>;
}
