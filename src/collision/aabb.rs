// Defines an Axis-Aligned Bounding Box

use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a new AABB.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        // Ensure min coordinates are <= max coordinates
        AABB {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Creates an AABB from its top-left corner and size.
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        AABB::new(pos, pos + size)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Checks if this AABB overlaps with another AABB.
    /// Boxes that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &AABB) -> bool {
        let x_overlap = self.max.x > other.min.x && self.min.x < other.max.x;
        let y_overlap = self.max.y > other.min.y && self.min.y < other.max.y;
        x_overlap && y_overlap
    }

    /// Checks if `other` lies entirely inside this AABB (edges inclusive).
    pub fn contains(&self, other: &AABB) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// Splits the box into four equal quadrants: top-left, top-right,
    /// bottom-left, bottom-right (y grows downward).
    pub fn quadrants(&self) -> [AABB; 4] {
        let half = self.size() / 2.0;
        let mid = self.min + half;
        [
            AABB::from_pos_size(self.min, half),
            AABB::from_pos_size(Vec2::new(mid.x, self.min.y), half),
            AABB::from_pos_size(Vec2::new(self.min.x, mid.y), half),
            AABB::from_pos_size(mid, half),
        ]
    }
}
