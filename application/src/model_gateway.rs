//! Model gateway service
//!
//! Wraps an [`LlmGateway`] adapter with the active model selection and
//! the infallible connectivity and listing operations.

use crate::ports::llm_gateway::{GatewayError, GenerateRequest, LlmGateway};
use std::sync::{Arc, RwLock};
use study_domain::{GenerationOptions, Model};
use tracing::{debug, warn};

/// Entry point to the model server for the use cases.
///
/// The active model is an explicit value given at construction. It can
/// be changed later; each request reads it once, when it is issued.
pub struct ModelGateway {
    backend: Arc<dyn LlmGateway>,
    model: RwLock<Model>,
}

impl ModelGateway {
    pub fn new(backend: Arc<dyn LlmGateway>, model: Model) -> Self {
        Self {
            backend,
            model: RwLock::new(model),
        }
    }

    /// `true` when the server answers a model listing; never fails.
    pub async fn check_connection(&self) -> bool {
        match self.backend.available_models().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Model server connection failed: {}", e);
                false
            }
        }
    }

    /// Models offered by the server.
    ///
    /// Never empty: when the server cannot be reached (or lists nothing)
    /// the active model is returned on its own.
    pub async fn list_models(&self) -> Vec<Model> {
        match self.backend.available_models().await {
            Ok(models) if !models.is_empty() => models,
            Ok(_) => vec![self.model()],
            Err(e) => {
                warn!("Error fetching models: {}", e);
                vec![self.model()]
            }
        }
    }

    /// Select the model for subsequent requests. Any name is accepted.
    pub fn set_model(&self, model: impl Into<Model>) {
        let model = model.into();
        debug!("Active model set to {}", model);
        *self.model.write().unwrap_or_else(|e| e.into_inner()) = model;
    }

    /// The currently selected model
    pub fn model(&self) -> Model {
        self.model.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// One generation attempt with the currently selected model.
    pub async fn generate(
        &self,
        prompt: &str,
        options: Option<GenerationOptions>,
    ) -> Result<String, GatewayError> {
        let request = GenerateRequest {
            model: self.model(),
            prompt: prompt.to_string(),
            options,
        };
        debug!(
            "Generating with {} ({} prompt chars)",
            request.model,
            request.prompt.chars().count()
        );
        self.backend.generate(&request).await
    }
}
