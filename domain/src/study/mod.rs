//! Study entities returned to callers.
//!
//! None of these are persisted; ownership moves to the caller on return.

pub mod concept;
pub mod emotion;
pub mod guide;
pub mod quiz;

pub use concept::ConceptNode;
pub use emotion::{Emotion, EmotionAnalysis};
pub use guide::StudyGuide;
pub use quiz::{OPTION_COUNT, QuizQuestion};
