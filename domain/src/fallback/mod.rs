//! Heuristic results substituted when the model is unreachable or its
//! output cannot be used.
//!
//! Every function here is model-independent and deterministic. The study
//! guide has no fallback.

mod concept;
mod emotion;
mod quiz;

pub use concept::fallback_concepts;
pub use emotion::{FALLBACK_CONFIDENCE, fallback_emotion};
pub use quiz::fallback_quiz;
