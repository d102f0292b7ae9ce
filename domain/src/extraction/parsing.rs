//! Task-specific extraction of study entities from model output.
//!
//! Each function locates the first JSON object in the raw text, parses it
//! strictly and applies documented defaults to absent optional fields:
//!
//! | Field kind | Default |
//! |------------|---------|
//! | `emotion` | `neutral` (also for labels outside the fixed set) |
//! | `confidence` | `80` |
//! | list fields | empty list |
//! | string fields | empty string |
//!
//! The result is either a complete value that satisfies every entity
//! invariant, or an [`ExtractionError`].

use super::scanner::find_json_object;
use crate::core::error::{ExtractionError, ValidationError};
use crate::study::{ConceptNode, Emotion, EmotionAnalysis, OPTION_COUNT, QuizQuestion};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// Confidence reported when the model omits it
pub const DEFAULT_CONFIDENCE: u8 = 80;

fn parse_object<T: DeserializeOwned>(raw: &str) -> Result<T, ExtractionError> {
    let span = find_json_object(raw)?;
    Ok(serde_json::from_str(span)?)
}

/// Ids may come back as numbers; both forms are accepted.
fn json_value_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ==================== Emotion ====================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEmotion {
    emotion: Option<String>,
    confidence: Option<f64>,
    suggestions: Option<Vec<String>>,
    affirmation: Option<String>,
    learning_adjustments: Option<Vec<String>>,
    coping_strategies: Option<Vec<String>>,
}

/// Extract an [`EmotionAnalysis`] from a model response.
pub fn extract_emotion(raw: &str) -> Result<EmotionAnalysis, ExtractionError> {
    let parsed: RawEmotion = parse_object(raw)?;

    let confidence = parsed
        .confidence
        .map(|c| c.round().clamp(0.0, f64::from(EmotionAnalysis::MAX_CONFIDENCE)) as u8)
        .unwrap_or(DEFAULT_CONFIDENCE);

    Ok(EmotionAnalysis {
        emotion: parsed
            .emotion
            .as_deref()
            .map(Emotion::from_label_or_neutral)
            .unwrap_or_default(),
        confidence,
        suggestions: parsed.suggestions.unwrap_or_default(),
        affirmation: parsed.affirmation.unwrap_or_default(),
        learning_adjustments: parsed.learning_adjustments.unwrap_or_default(),
        coping_strategies: parsed.coping_strategies.unwrap_or_default(),
    })
}

// ==================== Concept map ====================

#[derive(Deserialize)]
struct RawConceptMap {
    concepts: Option<Vec<RawConcept>>,
}

#[derive(Deserialize)]
struct RawConcept {
    id: Option<serde_json::Value>,
    label: Option<String>,
    connections: Option<Vec<serde_json::Value>>,
}

/// Extract unplaced concept nodes from a model response.
///
/// Connections to unknown ids and self-loops are dropped, and repeated
/// connections are collapsed. Duplicate node ids are rejected.
pub fn extract_concepts(raw: &str) -> Result<Vec<ConceptNode>, ExtractionError> {
    let parsed: RawConceptMap = parse_object(raw)?;
    let concepts = parsed
        .concepts
        .ok_or(ExtractionError::MissingField("concepts"))?;

    let ids: Vec<String> = concepts
        .iter()
        .enumerate()
        .map(|(index, c)| {
            c.id.as_ref()
                .and_then(json_value_to_string)
                .unwrap_or_else(|| format!("concept-{}", index))
        })
        .collect();

    let mut known = HashSet::new();
    for id in &ids {
        if !known.insert(id.as_str()) {
            return Err(ValidationError::DuplicateNodeId(id.clone()).into());
        }
    }

    let nodes = concepts
        .into_iter()
        .zip(ids.iter())
        .map(|(concept, id)| {
            let mut connections: Vec<String> = Vec::new();
            for target in concept.connections.unwrap_or_default() {
                let Some(target) = json_value_to_string(&target) else {
                    continue;
                };
                if target != *id
                    && known.contains(target.as_str())
                    && !connections.contains(&target)
                {
                    connections.push(target);
                }
            }
            ConceptNode::new(id.clone(), concept.label.unwrap_or_default())
                .with_connections(connections)
        })
        .collect();

    Ok(nodes)
}

// ==================== Quiz ====================

#[derive(Deserialize)]
struct RawQuiz {
    questions: Option<Vec<RawQuestion>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    id: Option<serde_json::Value>,
    question: Option<String>,
    options: Option<Vec<String>>,
    correct_answer: Option<f64>,
    explanation: Option<String>,
}

/// Extract quiz questions from a model response.
///
/// A question without exactly four options, or whose `correctAnswer`
/// does not index one of them, invalidates the whole quiz.
pub fn extract_quiz(raw: &str) -> Result<Vec<QuizQuestion>, ExtractionError> {
    let parsed: RawQuiz = parse_object(raw)?;
    let questions = parsed
        .questions
        .ok_or(ExtractionError::MissingField("questions"))?;

    questions
        .into_iter()
        .enumerate()
        .map(|(index, q)| -> Result<QuizQuestion, ExtractionError> {
            let id = q
                .id
                .as_ref()
                .and_then(json_value_to_string)
                .unwrap_or_else(|| format!("q{}", index + 1));

            let options = q.options.unwrap_or_default();
            let count = options.len();
            let options: [String; OPTION_COUNT] = options
                .try_into()
                .map_err(|_| ValidationError::OptionCount { id: id.clone(), count })?;

            // Models sometimes write indices as `1.0`
            let answer = q.correct_answer.map(|a| a.round() as i64).unwrap_or(0);
            let answer = usize::try_from(answer).map_err(|_| ValidationError::AnswerOutOfRange {
                id: id.clone(),
                index: answer,
            })?;

            Ok(QuizQuestion::new(
                id,
                q.question.unwrap_or_default(),
                options,
                answer,
                q.explanation.unwrap_or_default(),
            )?)
        })
        .collect()
}
