//! Emotion analysis entities

use serde::{Deserialize, Serialize};

/// The fixed set of emotions an analysis can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Frustrated,
    Anxious,
    Excited,
    #[default]
    Neutral,
    Overwhelmed,
    Confident,
    Stressed,
    Motivated,
}

impl Emotion {
    pub const ALL: [Emotion; 10] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Frustrated,
        Emotion::Anxious,
        Emotion::Excited,
        Emotion::Neutral,
        Emotion::Overwhelmed,
        Emotion::Confident,
        Emotion::Stressed,
        Emotion::Motivated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Frustrated => "frustrated",
            Emotion::Anxious => "anxious",
            Emotion::Excited => "excited",
            Emotion::Neutral => "neutral",
            Emotion::Overwhelmed => "overwhelmed",
            Emotion::Confident => "confident",
            Emotion::Stressed => "stressed",
            Emotion::Motivated => "motivated",
        }
    }

    /// Match a label reported by a model, ignoring case and surrounding
    /// whitespace. Returns `None` for anything outside the fixed set.
    pub fn from_label(label: &str) -> Option<Emotion> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(label))
    }

    /// Like [`Emotion::from_label`], but indeterminate labels become
    /// [`Emotion::Neutral`].
    pub fn from_label_or_neutral(label: &str) -> Emotion {
        Self::from_label(label).unwrap_or_default()
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of analysing a student's message for emotional tone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionAnalysis {
    pub emotion: Emotion,
    /// Always within `0..=100`
    pub confidence: u8,
    pub suggestions: Vec<String>,
    pub affirmation: String,
    pub learning_adjustments: Vec<String>,
    pub coping_strategies: Vec<String>,
}

impl EmotionAnalysis {
    /// Upper bound of [`EmotionAnalysis::confidence`]
    pub const MAX_CONFIDENCE: u8 = 100;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(Emotion::from_label("Frustrated"), Some(Emotion::Frustrated));
        assert_eq!(Emotion::from_label("  ANXIOUS "), Some(Emotion::Anxious));
        assert_eq!(Emotion::from_label("bored"), None);
    }

    #[test]
    fn test_unknown_label_defaults_to_neutral() {
        assert_eq!(Emotion::from_label_or_neutral("ecstatic"), Emotion::Neutral);
        assert_eq!(Emotion::from_label_or_neutral(""), Emotion::Neutral);
    }

    #[test]
    fn test_every_variant_round_trips_through_its_label() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_label(emotion.as_str()), Some(emotion));
        }
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let analysis = EmotionAnalysis {
            emotion: Emotion::Happy,
            confidence: 90,
            suggestions: vec![],
            affirmation: String::new(),
            learning_adjustments: vec!["a".to_string()],
            coping_strategies: vec![],
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["emotion"], "happy");
        assert_eq!(json["learningAdjustments"][0], "a");
        assert!(json.get("copingStrategies").is_some());
    }
}
