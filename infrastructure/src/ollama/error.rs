//! Error types for the Ollama adapter

use study_application::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when communicating with the Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Cannot reach model server at {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Model server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl OllamaError {
    /// Classify a transport-level failure for `url`.
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            OllamaError::Timeout
        } else if error.is_decode() {
            OllamaError::Decode(error.to_string())
        } else {
            OllamaError::Connect {
                url: url.to_string(),
                message: error.to_string(),
            }
        }
    }
}

impl From<OllamaError> for GatewayError {
    fn from(error: OllamaError) -> Self {
        match error {
            OllamaError::Timeout => GatewayError::Timeout,
            OllamaError::Status { .. } => GatewayError::RequestFailed(error.to_string()),
            OllamaError::Decode(_) => GatewayError::InvalidResponse(error.to_string()),
            OllamaError::ClientBuild(_) | OllamaError::Connect { .. } => {
                GatewayError::ConnectionError(error.to_string())
            }
        }
    }
}
