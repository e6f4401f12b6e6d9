//! Ring floor boundaries.
//!
//! The ring is drawn in perspective, so its floor is a trapezoid: the
//! horizontal limits depend on how far back (Y) a fighter stands.

use bevy::prelude::*;
use serde::Deserialize;

pub const RING_MIN_X: f32 = 18.0;
pub const RING_MAX_X: f32 = 144.0;
pub const RING_MIN_Y: f32 = 11.0;
pub const RING_MAX_Y: f32 = 50.0;
/// How quickly the side ropes lean inward with depth.
pub const RING_SLOPE: f32 = 3.16;

/// Trapezoidal region fighters are confined to.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RingBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub slope: f32,
}

impl Default for RingBounds {
    fn default() -> Self {
        Self {
            min_x: RING_MIN_X,
            max_x: RING_MAX_X,
            min_y: RING_MIN_Y,
            max_y: RING_MAX_Y,
            slope: RING_SLOPE,
        }
    }
}

impl RingBounds {
    /// Horizontal limits at depth `y`.
    pub fn x_range(&self, y: f32) -> (f32, f32) {
        let lean = y / self.slope;
        (self.min_x + lean, self.max_x - lean)
    }

    /// Clamp a position onto the ring floor.
    ///
    /// Y is clamped first; the X limits are computed from the clamped Y.
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        let y = position.y.clamp(self.min_y, self.max_y);
        let (left, right) = self.x_range(y);
        let x = if position.x < left {
            left
        } else if position.x > right {
            right
        } else {
            position.x
        };
        Vec2::new(x, y)
    }

    /// Whether a position already lies on the ring floor.
    pub fn contains(&self, position: Vec2) -> bool {
        self.clamp(position) == position
    }
}
