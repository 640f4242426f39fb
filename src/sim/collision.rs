//! Axis-aligned box geometry for the bird, pipes and play-area bounds
//!
//! Screen space: origin top-left, y grows downward. All overlap tests are
//! strict, so boxes that only share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and a size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Shrink the box by `amount` on every side.
    ///
    /// The box never inverts: an inset larger than half an extent collapses
    /// that axis to its center line.
    pub fn inset(&self, amount: f32) -> Self {
        if amount <= 0.0 {
            return *self;
        }
        let center = (self.min + self.max) * 0.5;
        let min = (self.min + Vec2::splat(amount)).min(center);
        let max = (self.max - Vec2::splat(amount)).max(center);
        Self { min, max }
    }

    /// Horizontal extents overlap (strict)
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }

    /// Vertical extents overlap (strict)
    #[inline]
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.max.y > other.min.y && self.min.y < other.max.y
    }

    /// Full 2D overlap (strict)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// Point inside the box (edges inclusive); used for tap hit-testing
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Check whether a body box breaches the playable area: touching the floor
/// line or reaching the top of the screen.
pub fn hits_bounds(body: &Aabb, floor_y: f32) -> bool {
    body.max.y >= floor_y || body.min.y <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_inset() {
        let a = Aabb::new(0.0, 0.0, 10.0, 20.0);
        let shrunk = a.inset(2.0);
        assert_eq!(shrunk, Aabb::new(2.0, 2.0, 6.0, 16.0));

        // Zero and negative tolerance leave the box alone
        assert_eq!(a.inset(0.0), a);
        assert_eq!(a.inset(-3.0), a);

        // Oversized inset collapses instead of inverting
        let collapsed = a.inset(100.0);
        assert!(collapsed.width() >= 0.0);
        assert!(collapsed.height() >= 0.0);
    }

    #[test]
    fn test_hits_bounds() {
        let floor_y = 456.0;
        assert!(!hits_bounds(&Aabb::new(10.0, 100.0, 34.0, 24.0), floor_y));
        assert!(hits_bounds(&Aabb::new(10.0, floor_y - 24.0, 34.0, 24.0), floor_y));
        assert!(hits_bounds(&Aabb::new(10.0, 0.0, 34.0, 24.0), floor_y));
        assert!(hits_bounds(&Aabb::new(10.0, -5.0, 34.0, 24.0), floor_y));
    }

    #[test]
    fn test_contains() {
        let a = Aabb::new(10.0, 10.0, 20.0, 20.0);
        assert!(a.contains(Vec2::new(10.0, 10.0)));
        assert!(a.contains(Vec2::new(20.0, 25.0)));
        assert!(!a.contains(Vec2::new(31.0, 20.0)));
    }
}
