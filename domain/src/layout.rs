//! Circular layout for concept maps.
//!
//! Node `i` of `n` sits at angle `i·2π/n` on a circle of radius 150
//! centred at (200, 200). Colors are HSL hues spread by a [`HueRule`].

use crate::study::ConceptNode;
use std::f64::consts::PI;

pub const CENTER_X: f64 = 200.0;
pub const CENTER_Y: f64 = 200.0;
pub const RADIUS: f64 = 150.0;

/// How hues are assigned along the circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HueRule {
    /// `i·360/n`: hues spread evenly over the whole wheel
    Even,
    /// `i·step`, independent of the node count
    FixedStep(f64),
}

impl HueRule {
    /// Rule used for heuristic concept maps
    pub const FALLBACK: HueRule = HueRule::FixedStep(60.0);
}

/// Assigns positions and colors to concept nodes, in list order.
pub struct LayoutAssigner;

impl LayoutAssigner {
    /// Place every node and color it. Deterministic for a given order.
    pub fn assign(nodes: &mut [ConceptNode], rule: HueRule) {
        let count = nodes.len();
        for (index, node) in nodes.iter_mut().enumerate() {
            let (x, y) = Self::position(index, count);
            node.x = x;
            node.y = y;
            node.color = Self::color(Self::hue(index, count, rule));
        }
    }

    /// Position of node `index` among `count` nodes.
    pub fn position(index: usize, count: usize) -> (f64, f64) {
        if count == 0 {
            return (CENTER_X, CENTER_Y);
        }
        let angle = index as f64 * 2.0 * PI / count as f64;
        (CENTER_X + RADIUS * angle.cos(), CENTER_Y + RADIUS * angle.sin())
    }

    pub fn hue(index: usize, count: usize, rule: HueRule) -> f64 {
        match rule {
            HueRule::Even if count == 0 => 0.0,
            HueRule::Even => index as f64 * 360.0 / count as f64,
            HueRule::FixedStep(step) => index as f64 * step,
        }
    }

    pub fn color(hue: f64) -> String {
        format!("hsl({}, 70%, 60%)", hue)
    }
}
