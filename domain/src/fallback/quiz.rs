//! Canned quiz used when the model path fails.

use crate::study::QuizQuestion;

/// A single placeholder question; it does not reflect the input content.
pub fn fallback_quiz() -> Vec<QuizQuestion> {
    vec![QuizQuestion {
        id: "1".to_string(),
        question: "Based on the study material, what is the primary concept being discussed?"
            .to_string(),
        options: [
            "Theoretical framework development",
            "Practical application methods",
            "Historical context analysis",
            "Future predictions and trends",
        ]
        .map(String::from),
        correct_answer: 1,
        explanation: "The material focuses primarily on practical application methods, as evidenced by the examples and case studies presented.".to_string(),
    }]
}
