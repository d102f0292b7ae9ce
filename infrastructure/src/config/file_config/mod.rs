//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain and application
//! types where needed.

mod generation;
mod ollama;
mod output;

pub use generation::{FileGenerationConfig, FileSamplingConfig};
pub use ollama::FileOllamaConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model server settings
    pub ollama: FileOllamaConfig,
    /// Per-task sampling options
    pub generation: FileGenerationConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key, e.g. `ollama.host`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(severity: Severity, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.ollama.validate();
        issues.extend(self.generation.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_domain::{GenerationOptions, Model, TaskKind};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[ollama]
host = "http://gpu-box:11434"
model = "mistral"
timeout_secs = 90

[generation.quiz]
temperature = 0.3
top_p = 0.8

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama.host, "http://gpu-box:11434");
        assert_eq!(config.ollama.model(), Model::new("mistral"));
        assert_eq!(config.ollama.timeout().unwrap().as_secs(), 90);
        assert_eq!(config.output.format, FileOutputFormat::Json);
        assert!(!config.output.color);

        let params = config.generation.to_generation_params();
        assert_eq!(
            params.for_task(TaskKind::Quiz),
            Some(GenerationOptions::new(0.3, 0.8))
        );
        // Untouched sections keep their defaults
        assert_eq!(
            params.for_task(TaskKind::Emotion),
            Some(GenerationOptions::emotion())
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[ollama]
model = "phi3"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama.model, "phi3");
        assert_eq!(config.ollama.host, "http://localhost:11434");
        assert!(config.ollama.timeout().is_none());
        assert_eq!(config.output.format, FileOutputFormat::Text);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.ollama.model(), Model::default());
        assert_eq!(
            config.generation.to_generation_params(),
            study_application::GenerationParams::default()
        );
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_issues() {
        let mut config = FileConfig::default();
        config.ollama.host = "  ".to_string();
        config.ollama.model = String::new();
        config.generation.quiz = Some(FileSamplingConfig {
            temperature: 3.5,
            top_p: 1.5,
        });

        let issues = config.validate();
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "ollama.host",
                "ollama.model",
                "generation.quiz.temperature",
                "generation.quiz.top_p"
            ]
        );
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_validate_host_without_scheme() {
        let mut config = FileConfig::default();
        config.ollama.host = "localhost:11434".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
