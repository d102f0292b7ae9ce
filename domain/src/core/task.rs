//! Task kinds served by the study assistant

use serde::{Deserialize, Serialize};

/// The kind of generative task a request performs.
///
/// Every task kind has its own prompt, its own extraction rules and,
/// except for [`TaskKind::StudyGuide`], its own fallback result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Free-form markdown study guide
    StudyGuide,
    /// Emotional tone analysis with supportive guidance
    Emotion,
    /// Concept map (graph of key concepts)
    ConceptMap,
    /// Multiple-choice quiz
    Quiz,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::StudyGuide => "study_guide",
            TaskKind::Emotion => "emotion",
            TaskKind::ConceptMap => "concept_map",
            TaskKind::Quiz => "quiz",
        }
    }

    /// Whether a failed request can be answered with a fallback result.
    ///
    /// Only the study guide surfaces its failure to the caller.
    pub fn has_fallback(&self) -> bool {
        !matches!(self, TaskKind::StudyGuide)
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
