//! Quiz entities

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Number of answer options every question carries
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice question.
///
/// The option count is fixed by the type and `correct_answer` is checked
/// on construction, so a `QuizQuestion` always points at a real option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_answer: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if correct_answer >= OPTION_COUNT {
            return Err(ValidationError::AnswerOutOfRange {
                id,
                index: correct_answer as i64,
            });
        }
        Ok(Self {
            id,
            question: question.into(),
            options,
            correct_answer,
            explanation: explanation.into(),
        })
    }

    /// Text of the correct option, `None` if `correct_answer` was set
    /// out of range without going through [`QuizQuestion::new`].
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> [String; OPTION_COUNT] {
        ["a", "b", "c", "d"].map(String::from)
    }

    #[test]
    fn test_new_rejects_out_of_range_answer() {
        let err = QuizQuestion::new("q1", "?", options(), 4, "").unwrap_err();
        assert_eq!(
            err,
            ValidationError::AnswerOutOfRange {
                id: "q1".to_string(),
                index: 4
            }
        );
    }

    #[test]
    fn test_correct_option() {
        let q = QuizQuestion::new("q1", "?", options(), 2, "because").unwrap();
        assert_eq!(q.correct_option(), Some("c"));
    }

    #[test]
    fn test_deserialized_out_of_range_answer_has_no_correct_option() {
        let raw = r#"{"id": "q9", "question": "?", "options": ["a", "b", "c", "d"],
                      "correctAnswer": 7, "explanation": ""}"#;
        let q: QuizQuestion = serde_json::from_str(raw).unwrap();
        assert_eq!(q.correct_option(), None);
    }

    #[test]
    fn test_serializes_correct_answer_camel_case() {
        let q = QuizQuestion::new("q1", "?", options(), 0, "").unwrap();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["correctAnswer"], 0);
        assert_eq!(json["options"].as_array().unwrap().len(), 4);
    }
}
