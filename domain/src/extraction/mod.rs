//! Extraction of structured results from free-form model output.
//!
//! Pure domain logic: no I/O, just text scanning and strict JSON parsing.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`find_json_object`] | First complete top-level JSON object span |
//! | [`extract_emotion`] | [`EmotionAnalysis`](crate::study::EmotionAnalysis) |
//! | [`extract_concepts`] | Unplaced [`ConceptNode`](crate::study::ConceptNode)s |
//! | [`extract_quiz`] | [`QuizQuestion`](crate::study::QuizQuestion)s |

pub mod parsing;
mod scanner;

pub use parsing::{DEFAULT_CONFIDENCE, extract_concepts, extract_emotion, extract_quiz};
pub use scanner::find_json_object;
