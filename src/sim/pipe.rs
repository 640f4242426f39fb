//! A pipe pair: top and bottom segments around a vertical gap
//!
//! Pairs are recycled by the pool, so a pair cycles through
//! `init` (active) -> `update` until off-screen (inactive) -> `init` again.
//! An inactive pair is parked at `x = -width` and ignored by every test.

use serde::{Deserialize, Serialize};

use super::Updatable;
use super::body::Bird;
use super::collision::Aabb;
use crate::consts::PIPE_WIDTH;

/// Which half of the pair a segment is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    Top,
    Bottom,
}

/// Geometry for one half of a pair (no behavior of its own)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Top edge
    pub y: f32,
    pub height: f32,
}

impl Segment {
    pub fn bounds(&self, x: f32, width: f32) -> Aabb {
        Aabb::new(x, self.y, width, self.height)
    }
}

/// One gapped obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    pub x: f32,
    pub width: f32,
    /// Y where the opening starts (= top segment height)
    pub gap_start: f32,
    pub gap_size: f32,
    pub speed: f32,
    pub active: bool,
    /// Score already awarded for this activation
    pub passed: bool,
    pub top: Segment,
    pub bottom: Segment,
}

impl Default for PipePair {
    fn default() -> Self {
        Self::new(PIPE_WIDTH)
    }
}

impl PipePair {
    /// An inactive pair parked off-screen
    pub fn new(width: f32) -> Self {
        Self {
            x: -width,
            width,
            gap_start: 0.0,
            gap_size: 0.0,
            speed: 0.0,
            active: false,
            passed: false,
            top: Segment {
                kind: SegmentKind::Top,
                y: 0.0,
                height: 0.0,
            },
            bottom: Segment {
                kind: SegmentKind::Bottom,
                y: 0.0,
                height: 0.0,
            },
        }
    }

    /// (Re)activate the pair at `x` with a gap starting at `gap_start`.
    ///
    /// The bottom segment runs from the end of the gap down to
    /// `playable_height` (the floor line).
    pub fn init(&mut self, x: f32, gap_start: f32, gap_size: f32, speed: f32, playable_height: f32) {
        self.x = x;
        self.gap_start = gap_start;
        self.gap_size = gap_size;
        self.speed = speed;
        self.top = Segment {
            kind: SegmentKind::Top,
            y: 0.0,
            height: gap_start.max(0.0),
        };
        let bottom_y = gap_start + gap_size;
        self.bottom = Segment {
            kind: SegmentKind::Bottom,
            y: bottom_y,
            height: (playable_height - bottom_y).max(0.0),
        };
        self.active = true;
        self.passed = false;
    }

    /// Deactivate and park off-screen
    pub fn reset(&mut self) {
        self.active = false;
        self.passed = false;
        self.x = -self.width;
    }

    /// Right edge of the column
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top_bounds(&self) -> Aabb {
        self.top.bounds(self.x, self.width)
    }

    pub fn bottom_bounds(&self) -> Aabb {
        self.bottom.bounds(self.x, self.width)
    }

    /// Strict AABB test of a body box (shrunk by `tolerance`) against both segments
    pub fn is_colliding(&self, body: &Aabb, tolerance: f32) -> bool {
        if !self.active {
            return false;
        }
        let body = body.inset(tolerance);
        body.overlaps(&self.top_bounds()) || body.overlaps(&self.bottom_bounds())
    }

    /// One-shot pass trigger: true the first time the bird's x is beyond the
    /// right edge, false forever after until the next `init`.
    pub fn has_passed(&mut self, bird: &Bird) -> bool {
        if !self.active || self.passed {
            return false;
        }
        if bird.pos.x > self.right() {
            self.passed = true;
            return true;
        }
        false
    }
}

impl Updatable for PipePair {
    fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.x -= self.speed * dt;
        // Strict: a pair whose right edge sits exactly on x = 0 stays active
        if self.x + self.width < 0.0 {
            self.active = false;
            self.x = -self.width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::body::BodyParams;
    use glam::Vec2;

    fn active_pair(x: f32) -> PipePair {
        let mut pair = PipePair::default();
        pair.init(x, 100.0, PIPE_GAP, PIPE_SPEED, PLAYABLE_HEIGHT);
        pair
    }

    fn bird_at(x: f32, y: f32) -> Bird {
        let mut bird = Bird::with_params(BodyParams::default());
        bird.pos = Vec2::new(x, y);
        bird
    }

    #[test]
    fn test_default_is_parked_and_inactive() {
        let pair = PipePair::default();
        assert_eq!(pair.x, -PIPE_WIDTH);
        assert!(!pair.active);
        assert_eq!(pair.width, PIPE_WIDTH);
    }

    #[test]
    fn test_init_segment_heights() {
        let pair = active_pair(200.0);
        assert!(pair.active);
        assert!(!pair.passed);
        assert_eq!(pair.top.height, 100.0);
        assert_eq!(pair.bottom.y, 100.0 + PIPE_GAP);
        assert_eq!(pair.bottom.height, PLAYABLE_HEIGHT - (100.0 + PIPE_GAP));
    }

    #[test]
    fn test_update_inactive_does_not_move() {
        let mut pair = PipePair::default();
        let before = pair.x;
        pair.update(1.23);
        assert_eq!(pair.x, before);
    }

    #[test]
    fn test_update_scrolls_left() {
        let mut pair = active_pair(200.0);
        pair.update(0.5);
        assert!((pair.x - (200.0 - PIPE_SPEED * 0.5)).abs() < 0.001);
        assert!(pair.active);
    }

    #[test]
    fn test_update_zero_dt_keeps_position() {
        let mut pair = active_pair(200.0);
        pair.update(0.0);
        assert_eq!(pair.x, 200.0);
    }

    #[test]
    fn test_deactivation_boundary() {
        let eps = 0.5;

        // Ends just past the left edge: deactivates
        let mut pair = active_pair(0.0);
        pair.speed = 0.0;
        pair.x = -PIPE_WIDTH - eps;
        pair.update(0.016);
        assert!(!pair.active);
        assert_eq!(pair.x, -PIPE_WIDTH);

        // Still overlapping the screen: stays active
        let mut pair = active_pair(0.0);
        pair.speed = 0.0;
        pair.x = -PIPE_WIDTH + eps;
        pair.update(0.016);
        assert!(pair.active);

        // Right edge exactly on x = 0: stays active (strict comparison)
        let mut pair = active_pair(0.0);
        pair.speed = 0.0;
        pair.x = -PIPE_WIDTH;
        pair.update(0.016);
        assert!(pair.active);
    }

    #[test]
    fn test_collision_with_top_segment() {
        let pair = active_pair(BIRD_START_X);
        let bird = bird_at(BIRD_START_X, 50.0);
        assert!(pair.is_colliding(&bird.bounds(), 0.0));
    }

    #[test]
    fn test_collision_with_bottom_segment() {
        let pair = active_pair(BIRD_START_X);
        let bird = bird_at(BIRD_START_X, 100.0 + PIPE_GAP + 10.0);
        assert!(pair.is_colliding(&bird.bounds(), 0.0));
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let pair = active_pair(BIRD_START_X);
        let bird = bird_at(BIRD_START_X, 100.0 + 20.0);
        assert!(!pair.is_colliding(&bird.bounds(), 0.0));
    }

    #[test]
    fn test_no_collision_outside_column() {
        let pair = active_pair(250.0);
        let bird = bird_at(BIRD_START_X, 10.0);
        assert!(!pair.is_colliding(&bird.bounds(), 0.0));
    }

    #[test]
    fn test_touching_gap_edge_is_not_a_hit() {
        let pair = active_pair(BIRD_START_X);
        // Bird top exactly on the top segment's bottom edge
        let bird = bird_at(BIRD_START_X, 100.0);
        assert!(!pair.is_colliding(&bird.bounds(), 0.0));
    }

    #[test]
    fn test_tolerance_shrinks_hitbox() {
        let pair = active_pair(BIRD_START_X);
        // Bird pokes 3px into the top segment
        let bird = bird_at(BIRD_START_X, 97.0);
        assert!(pair.is_colliding(&bird.bounds(), 0.0));
        assert!(!pair.is_colliding(&bird.bounds(), 4.0));
    }

    #[test]
    fn test_inactive_never_collides() {
        let mut pair = active_pair(BIRD_START_X);
        pair.reset();
        let bird = bird_at(pair.x, 10.0);
        assert!(!pair.is_colliding(&bird.bounds(), 0.0));
    }

    #[test]
    fn test_has_passed_is_one_shot() {
        let mut pair = active_pair(0.0);
        let bird = bird_at(PIPE_WIDTH + 1.0, 120.0);
        assert!(pair.has_passed(&bird));
        for _ in 0..10 {
            assert!(!pair.has_passed(&bird));
        }

        // A fresh activation can score again
        pair.init(0.0, 100.0, PIPE_GAP, PIPE_SPEED, PLAYABLE_HEIGHT);
        assert!(pair.has_passed(&bird));
    }

    #[test]
    fn test_has_passed_requires_strictly_beyond_edge() {
        let mut pair = active_pair(0.0);
        let bird = bird_at(PIPE_WIDTH, 120.0);
        assert!(!pair.has_passed(&bird));
        assert!(!pair.passed);
    }

    #[test]
    fn test_has_passed_false_when_inactive() {
        let mut pair = PipePair::default();
        let bird = bird_at(500.0, 120.0);
        assert!(!pair.has_passed(&bird));
    }

    #[test]
    fn test_reset_is_repeatable() {
        let mut pair = active_pair(120.0);
        pair.reset();
        let snapshot = pair.clone();
        pair.reset();
        assert_eq!(pair, snapshot);
        assert_eq!(pair.x, -PIPE_WIDTH);
        assert!(!pair.active);
    }
}
