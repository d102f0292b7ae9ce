//! Sampling configuration from TOML (`[generation]` section)

use super::{ConfigIssue, Severity};
use serde::{Deserialize, Serialize};
use study_application::GenerationParams;
use study_domain::{GenerationOptions, TaskKind};

/// Sampling options for one task
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FileSamplingConfig {
    pub temperature: f64,
    pub top_p: f64,
}

impl From<FileSamplingConfig> for GenerationOptions {
    fn from(config: FileSamplingConfig) -> Self {
        GenerationOptions::new(config.temperature, config.top_p)
    }
}

/// Per-task sampling options
///
/// # Example
///
/// ```toml
/// [generation.emotion]
/// temperature = 0.7
/// top_p = 0.9
///
/// [generation.quiz]
/// temperature = 0.3
/// top_p = 0.8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub study_guide: Option<FileSamplingConfig>,
    pub emotion: Option<FileSamplingConfig>,
    pub concept_map: Option<FileSamplingConfig>,
    pub quiz: Option<FileSamplingConfig>,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let emotion = GenerationOptions::emotion();
        Self {
            study_guide: None,
            emotion: Some(FileSamplingConfig {
                temperature: emotion.temperature,
                top_p: emotion.top_p,
            }),
            concept_map: None,
            quiz: None,
        }
    }
}

impl FileGenerationConfig {
    fn entries(&self) -> [(TaskKind, Option<FileSamplingConfig>); 4] {
        [
            (TaskKind::StudyGuide, self.study_guide),
            (TaskKind::Emotion, self.emotion),
            (TaskKind::ConceptMap, self.concept_map),
            (TaskKind::Quiz, self.quiz),
        ]
    }

    pub fn to_generation_params(&self) -> GenerationParams {
        self.entries()
            .into_iter()
            .fold(GenerationParams::default(), |params, (task, sampling)| {
                params.with_task_options(task, sampling.map(GenerationOptions::from))
            })
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (task, sampling) in self.entries() {
            let Some(sampling) = sampling else {
                continue;
            };
            if !(0.0..=2.0).contains(&sampling.temperature) {
                issues.push(ConfigIssue::new(
                    Severity::Warning,
                    format!("generation.{}.temperature", task),
                    format!("{} is outside 0.0..=2.0", sampling.temperature),
                ));
            }
            if !(0.0..=1.0).contains(&sampling.top_p) {
                issues.push(ConfigIssue::new(
                    Severity::Warning,
                    format!("generation.{}.top_p", task),
                    format!("{} is outside 0.0..=1.0", sampling.top_p),
                ));
            }
        }
        issues
    }
}
