//! Application layer for study-assistant
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod model_gateway;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use model_gateway::ModelGateway;
pub use ports::{
    llm_gateway::{GatewayError, GenerateRequest, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::request_state::RequestState;
pub use use_cases::study_assistant::{StudyAssistant, StudyGuideError};
