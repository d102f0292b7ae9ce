//! Prompt domain
//!
//! Deterministic prompt construction for every task kind. Pure: no I/O.

mod template;

pub use template::{CONCEPT_MAP_SCHEMA, EMOTION_SCHEMA, PromptTemplate, QUIZ_SCHEMA};
