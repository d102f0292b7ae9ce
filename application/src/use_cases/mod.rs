//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod request_state;
pub mod study_assistant;
