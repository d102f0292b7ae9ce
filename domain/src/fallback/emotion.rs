//! Keyword-driven emotion analysis used when the model path fails.

use crate::study::{Emotion, EmotionAnalysis};

/// Confidence reported by every heuristic analysis
pub const FALLBACK_CONFIDENCE: u8 = 75;

struct EmotionRule {
    emotion: Emotion,
    keywords: &'static [&'static str],
    affirmation: &'static str,
    suggestions: [&'static str; 3],
}

/// Checked in order; the first rule with a matching keyword wins.
const RULES: &[EmotionRule] = &[
    EmotionRule {
        emotion: Emotion::Frustrated,
        keywords: &["frustrated", "angry", "annoyed"],
        affirmation: "It's completely normal to feel frustrated while learning. These feelings show you care about your progress! 💪",
        suggestions: [
            "Take a 10-minute break to reset your mindset",
            "Try a different study approach or environment",
            "Focus on one small concept at a time",
        ],
    },
    EmotionRule {
        emotion: Emotion::Anxious,
        keywords: &["anxious", "worried", "nervous"],
        affirmation: "Your anxiety shows how much you care about succeeding. Let's channel that energy positively! 🌱",
        suggestions: [
            "Practice deep breathing: 4 counts in, 4 counts hold, 4 counts out",
            "Create a structured study plan to reduce uncertainty",
            "Start with easier topics to build confidence",
        ],
    },
    EmotionRule {
        emotion: Emotion::Overwhelmed,
        keywords: &["overwhelmed", "too much", "stressed"],
        affirmation: "Feeling overwhelmed is a sign you're taking on challenges - that's growth! Let's break it down together. 🧩",
        suggestions: [
            "List all tasks and prioritize the most important ones",
            "Use the Pomodoro technique: 25 minutes study, 5 minutes break",
            "Focus on progress, not perfection",
        ],
    },
    EmotionRule {
        emotion: Emotion::Excited,
        keywords: &["excited", "motivated", "enthusiastic"],
        affirmation: "Your enthusiasm is wonderful! This positive energy will fuel your learning journey. ✨",
        suggestions: [
            "Channel this energy into creating a detailed study plan",
            "Set specific, achievable goals to maintain momentum",
            "Share your excitement with study partners or friends",
        ],
    },
];

const NEUTRAL_AFFIRMATION: &str =
    "You're doing great! Learning is a journey, and every step forward counts. 🌟";

const NEUTRAL_SUGGESTIONS: [&str; 3] = [
    "Take a short break and try some deep breathing exercises",
    "Break down your study material into smaller, manageable chunks",
    "Consider discussing your feelings with a friend or mentor",
];

const LEARNING_ADJUSTMENTS: [&str; 2] = [
    "Adjust study pace based on your current emotional state",
    "Use active learning techniques like summarizing or teaching others",
];

const COPING_STRATEGIES: [&str; 2] = [
    "Practice mindfulness or meditation for 5-10 minutes",
    "Maintain a regular sleep schedule and healthy habits",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Analyse `text` by case-insensitive keyword matching.
pub fn fallback_emotion(text: &str) -> EmotionAnalysis {
    let lower = text.to_lowercase();
    let rule = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)));

    let (emotion, affirmation, suggestions) = match rule {
        Some(rule) => (rule.emotion, rule.affirmation, &rule.suggestions),
        None => (Emotion::Neutral, NEUTRAL_AFFIRMATION, &NEUTRAL_SUGGESTIONS),
    };

    EmotionAnalysis {
        emotion,
        confidence: FALLBACK_CONFIDENCE,
        suggestions: owned(suggestions),
        affirmation: affirmation.to_string(),
        learning_adjustments: owned(&LEARNING_ADJUSTMENTS),
        coping_strategies: owned(&COPING_STRATEGIES),
    }
}
