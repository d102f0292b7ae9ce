//! Sampling options attached to a generation request

use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the model server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub temperature: f64,
    pub top_p: f64,
}

impl GenerationOptions {
    pub fn new(temperature: f64, top_p: f64) -> Self {
        Self { temperature, top_p }
    }

    /// Options used for emotion analysis: warm enough for empathetic wording
    pub fn emotion() -> Self {
        Self::new(0.7, 0.9)
    }
}
