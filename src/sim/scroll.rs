//! Endlessly wrapping parallax strips (background and floor)

use serde::{Deserialize, Serialize};

use super::Updatable;

/// A strip that scrolls left, wrapping modulo its width so `x` stays in
/// `[-width, 0]`.
///
/// Drawn twice while `x < 0` so the seam never shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollingLayer {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per second
    pub speed: f32,
}

impl ScrollingLayer {
    pub fn new(y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            x: 0.0,
            y,
            width,
            height,
            speed,
        }
    }

    /// X positions of the copies that need drawing this frame
    pub fn tile_offsets(&self) -> impl Iterator<Item = f32> {
        let second = (self.x < 0.0).then_some(self.x + self.width);
        std::iter::once(self.x).chain(second)
    }
}

impl Updatable for ScrollingLayer {
    fn update(&mut self, dt: f32) {
        if self.width <= 0.0 {
            return;
        }
        self.x -= self.speed * dt;
        if self.x + self.width < 0.0 {
            self.x = self.x.rem_euclid(self.width) - self.width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_and_wrap() {
        let mut layer = ScrollingLayer::new(0.0, 100.0, 50.0, 50.0);
        layer.update(1.0);
        assert_eq!(layer.x, -50.0);
        layer.update(1.0);
        // Exactly one width gone by: not yet wrapped
        assert_eq!(layer.x, -100.0);
        // Past one width: keeps the overshoot instead of snapping to 0
        layer.update(0.1);
        assert!((layer.x + 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_large_step_keeps_seam_phase() {
        let mut layer = ScrollingLayer::new(0.0, 100.0, 50.0, 50.0);
        // 515 px in one step is 5 widths plus 15
        layer.update(10.3);
        assert!((layer.x + 15.0).abs() < 1e-2);
        assert!(layer.x >= -layer.width && layer.x <= 0.0);
    }

    #[test]
    fn test_tile_offsets() {
        let mut layer = ScrollingLayer::new(0.0, 100.0, 50.0, 50.0);
        assert_eq!(layer.tile_offsets().collect::<Vec<_>>(), vec![0.0]);
        layer.update(0.5);
        assert_eq!(layer.tile_offsets().collect::<Vec<_>>(), vec![-25.0, 75.0]);
    }
}
