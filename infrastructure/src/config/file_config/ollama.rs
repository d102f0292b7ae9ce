//! Model server configuration from TOML (`[ollama]` section)

use super::{ConfigIssue, Severity};
use crate::ollama::gateway::DEFAULT_HOST;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use study_domain::Model;

/// Raw model server configuration from TOML
///
/// # Example
///
/// ```toml
/// [ollama]
/// host = "http://localhost:11434"
/// model = "llama3.2"
/// timeout_secs = 120   # optional; unset means the HTTP client default
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    pub host: String,
    pub model: String,
    pub timeout_secs: Option<u64>,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            model: Model::DEFAULT_NAME.to_string(),
            timeout_secs: None,
        }
    }
}

impl FileOllamaConfig {
    pub fn model(&self) -> Model {
        Model::new(self.model.clone())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.host.trim().is_empty() {
            issues.push(ConfigIssue::new(
                Severity::Error,
                "ollama.host",
                "server host cannot be empty",
            ));
        } else if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                "ollama.host",
                format!("'{}' has no http:// or https:// scheme", self.host),
            ));
        }
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                "ollama.model",
                "model name is empty; requests will likely be rejected",
            ));
        }
        if self.timeout_secs == Some(0) {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                "ollama.timeout_secs",
                "a timeout of 0 seconds fails every request",
            ));
        }
        issues
    }
}
