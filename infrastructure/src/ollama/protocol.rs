//! Ollama HTTP API wire types
//!
//! Only the fields this adapter reads or writes are modelled; unknown
//! response fields are ignored.

use serde::{Deserialize, Serialize};
use study_domain::GenerationOptions;

pub const TAGS_PATH: &str = "api/tags";
pub const GENERATE_PATH: &str = "api/generate";

/// Body of `POST /api/generate`
#[derive(Debug, Serialize)]
pub struct GenerateBody<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerationOptions>,
}

/// Response of a non-streaming `POST /api/generate`
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// Response of `GET /api/tags`
#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
}
