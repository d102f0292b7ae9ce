//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: identifier of a locally served model
//! - [`task::TaskKind`]: the four generative tasks
//! - [`options::GenerationOptions`]: sampling parameters sent with a request
//! - [`error::ExtractionError`]: domain-level errors

pub mod error;
pub mod model;
pub mod options;
pub mod task;
