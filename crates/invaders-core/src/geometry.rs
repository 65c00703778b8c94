//! Axis-aligned bounding boxes and the overlap test used for every collision.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in playfield coordinates (y grows downward).
///
/// Intervals are half-open: two boxes that only share an edge do not overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of the given full `size` centred on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        intersects(self, other)
    }
}

/// True iff `a` and `b` overlap on both axes. Symmetric in its arguments.
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}
