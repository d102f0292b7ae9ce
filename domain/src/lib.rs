//! Domain layer for study-assistant
//!
//! This crate contains the study entities and the pure logic around them.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Task kinds
//!
//! Four generative tasks are served: study guide, emotion analysis,
//! concept map and quiz. Each has a prompt ([`PromptTemplate`]) and,
//! except for the study guide, an extraction rule and a fallback.
//!
//! ## Extraction
//!
//! Model output is free-form text. [`extraction`] recovers the first JSON
//! object from it and turns it into a fully defaulted entity, or fails.
//!
//! ## Fallback
//!
//! [`fallback`] produces conservative heuristic results that never need
//! the model.
//!
//! ## Layout
//!
//! [`LayoutAssigner`] places concept nodes on a circle and colors them.

pub mod core;
pub mod extraction;
pub mod fallback;
pub mod layout;
pub mod prompt;
pub mod study;

// Re-export commonly used types
pub use self::core::{
    error::{ExtractionError, ValidationError},
    model::Model,
    options::GenerationOptions,
    task::TaskKind,
};
pub use layout::{HueRule, LayoutAssigner};
pub use prompt::PromptTemplate;
pub use study::{ConceptNode, Emotion, EmotionAnalysis, OPTION_COUNT, QuizQuestion, StudyGuide};

// Re-export extraction and fallback entry points
pub use extraction::{extract_concepts, extract_emotion, extract_quiz, find_json_object};
pub use fallback::{fallback_concepts, fallback_emotion, fallback_quiz};
