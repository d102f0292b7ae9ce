//! Infrastructure layer for study-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileGenerationConfig, FileOllamaConfig,
    FileOutputConfig, FileOutputFormat, FileSamplingConfig, Severity,
};
pub use ollama::{
    error::{OllamaError, Result},
    gateway::{DEFAULT_HOST, OllamaLlmGateway},
};
