//! Concept map entities

use serde::{Deserialize, Serialize};

/// One vertex of a concept map.
///
/// `connections` only reference ids of other nodes in the same map and
/// never the node itself. `x`, `y` and `color` are assigned by
/// [`crate::layout::LayoutAssigner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptNode {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub connections: Vec<String>,
    pub color: String,
}

impl ConceptNode {
    /// Create an unplaced node (origin, no color).
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x: 0.0,
            y: 0.0,
            connections: Vec::new(),
            color: String::new(),
        }
    }

    pub fn with_connections(mut self, connections: Vec<String>) -> Self {
        self.connections = connections;
        self
    }
}
