//! Model value object representing a locally served LLM

use serde::{Deserialize, Serialize};

/// Identifier of a model served by the local model server (Value Object)
///
/// The server decides which names exist, so any string is accepted
/// without validation. Tags such as `llama3.2:3b` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
    /// Model selected when nothing else is configured
    pub const DEFAULT_NAME: &'static str = "llama3.2";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::new(Self::DEFAULT_NAME)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::new(s))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Model::new(s)
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Model(s)
    }
}
