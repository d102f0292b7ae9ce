//! LLM Gateway port
//!
//! Defines the interface for communicating with the local model server.

use async_trait::async_trait;
use study_domain::{GenerationOptions, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A single, non-streaming generation call as sent to the server.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: Model,
    pub prompt: String,
    pub options: Option<GenerationOptions>,
}

/// Gateway for LLM communication
///
/// Implementations (adapters) live in the infrastructure layer. Every
/// method makes exactly one attempt; retrying is never the adapter's job.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Models the server can serve
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;

    /// Run one generation and return the raw response text
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError>;
}
