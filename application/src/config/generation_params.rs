//! Sampling options per task kind.

use serde::{Deserialize, Serialize};
use study_domain::{GenerationOptions, TaskKind};

/// Sampling options sent with each task's generate call.
///
/// `None` means the request carries no `options` object and the server
/// uses its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub study_guide: Option<GenerationOptions>,
    pub emotion: Option<GenerationOptions>,
    pub concept_map: Option<GenerationOptions>,
    pub quiz: Option<GenerationOptions>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            study_guide: None,
            emotion: Some(GenerationOptions::emotion()),
            concept_map: None,
            quiz: None,
        }
    }
}

impl GenerationParams {
    pub fn for_task(&self, task: TaskKind) -> Option<GenerationOptions> {
        match task {
            TaskKind::StudyGuide => self.study_guide,
            TaskKind::Emotion => self.emotion,
            TaskKind::ConceptMap => self.concept_map,
            TaskKind::Quiz => self.quiz,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_task_options(mut self, task: TaskKind, options: Option<GenerationOptions>) -> Self {
        match task {
            TaskKind::StudyGuide => self.study_guide = options,
            TaskKind::Emotion => self.emotion = options,
            TaskKind::ConceptMap => self.concept_map = options,
            TaskKind::Quiz => self.quiz = options,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_only_emotion_has_options() {
        let params = GenerationParams::default();
        assert_eq!(
            params.for_task(TaskKind::Emotion),
            Some(GenerationOptions::new(0.7, 0.9))
        );
        assert_eq!(params.for_task(TaskKind::StudyGuide), None);
        assert_eq!(params.for_task(TaskKind::ConceptMap), None);
        assert_eq!(params.for_task(TaskKind::Quiz), None);
    }

    #[test]
    fn test_override() {
        let params = GenerationParams::default()
            .with_task_options(TaskKind::Quiz, Some(GenerationOptions::new(0.2, 0.5)));
        assert_eq!(
            params.for_task(TaskKind::Quiz),
            Some(GenerationOptions::new(0.2, 0.5))
        );
    }
}
