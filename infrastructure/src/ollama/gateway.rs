//! Ollama LLM Gateway implementation

use crate::ollama::error::{OllamaError, Result};
use crate::ollama::protocol::{
    GENERATE_PATH, GenerateBody, GenerateResponse, TAGS_PATH, TagsResponse,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use study_application::ports::llm_gateway::{GatewayError, GenerateRequest, LlmGateway};
use study_domain::Model;
use tracing::{debug, info};

/// Default address of a local Ollama server
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// LLM Gateway implementation for a local Ollama server
pub struct OllamaLlmGateway {
    client: reqwest::Client,
    host: String,
}

impl OllamaLlmGateway {
    /// Create a gateway using the transport's default timeout behaviour
    pub fn new(host: impl Into<String>) -> Result<Self> {
        Self::with_timeout(host, None)
    }

    /// Create a gateway whose requests give up after `timeout`
    pub fn with_timeout(host: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| OllamaError::ClientBuild(e.to_string()))?;

        let host = host.into();
        info!("OllamaLlmGateway initialized for {}", host);

        Ok(Self { client, host })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.host.trim_end_matches('/'), path)
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| OllamaError::from_reqwest(url, e))
    }

    async fn fetch_models(&self) -> Result<Vec<Model>> {
        let url = self.endpoint(TAGS_PATH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(&url, e))?;

        let tags: TagsResponse = Self::decode(&url, response).await?;
        Ok(tags.models.into_iter().map(|m| Model::new(m.name)).collect())
    }

    async fn post_generate(&self, request: &GenerateRequest) -> Result<String> {
        let url = self.endpoint(GENERATE_PATH);
        let body = GenerateBody {
            model: request.model.as_str(),
            prompt: &request.prompt,
            stream: false,
            options: request.options,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(&url, e))?;

        let generated: GenerateResponse = Self::decode(&url, response).await?;
        debug!(
            "Model {} returned {} chars",
            request.model,
            generated.response.chars().count()
        );
        Ok(generated.response)
    }
}

#[async_trait]
impl LlmGateway for OllamaLlmGateway {
    async fn available_models(&self) -> std::result::Result<Vec<Model>, GatewayError> {
        Ok(self.fetch_models().await?)
    }

    async fn generate(&self, request: &GenerateRequest) -> std::result::Result<String, GatewayError> {
        Ok(self.post_generate(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on port 1, so connections are refused immediately.
    const UNREACHABLE: &str = "http://127.0.0.1:1";

    #[test]
    fn test_endpoint_joins_paths() {
        let gateway = OllamaLlmGateway::new("http://localhost:11434/").unwrap();
        assert_eq!(
            gateway.endpoint(GENERATE_PATH),
            "http://localhost:11434/api/generate"
        );
        let gateway = OllamaLlmGateway::new(DEFAULT_HOST).unwrap();
        assert_eq!(gateway.endpoint(TAGS_PATH), "http://localhost:11434/api/tags");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        let gateway =
            OllamaLlmGateway::with_timeout(UNREACHABLE, Some(Duration::from_secs(5))).unwrap();

        let models = gateway.available_models().await;
        assert!(matches!(models, Err(GatewayError::ConnectionError(_))));

        let request = GenerateRequest {
            model: Model::default(),
            prompt: "hello".to_string(),
            options: None,
        };
        let generated = gateway.generate(&request).await;
        assert!(matches!(generated, Err(GatewayError::ConnectionError(_))));
    }
}
