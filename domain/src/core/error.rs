//! Domain error types

use thiserror::Error;

/// Failure to recover a structured value from model output text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("No JSON object found in model response")]
    NoJsonObject,

    #[error("JSON object in model response is never closed")]
    Unterminated,

    #[error("Malformed JSON in model response: {0}")]
    Parse(String),

    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("Invalid result: {0}")]
    Invalid(#[from] ValidationError),
}

/// A parsed value that violates an entity invariant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate concept id: {0}")]
    DuplicateNodeId(String),

    #[error("Question {id} has {count} options, expected 4")]
    OptionCount { id: String, count: usize },

    #[error("Question {id} has correct answer {index} outside its options")]
    AnswerOutOfRange { id: String, index: i64 },
}

impl From<serde_json::Error> for ExtractionError {
    fn from(e: serde_json::Error) -> Self {
        ExtractionError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ExtractionError::from(ValidationError::OptionCount {
            id: "q1".to_string(),
            count: 3,
        });
        assert_eq!(
            error.to_string(),
            "Invalid result: Question q1 has 3 options, expected 4"
        );
    }

    #[test]
    fn test_serde_error_becomes_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(ExtractionError::from(err), ExtractionError::Parse(_)));
    }
}
