//! Fade-to-black used when swapping scenes

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TRANSITION_DURATION};
use crate::renderer::DrawList;
use crate::renderer::vertex::colors;
use crate::sim::Updatable;

/// Where the scene manager is in a swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// No swap in progress
    Running,
    /// Old scene fading to black
    FadeOut,
    /// New scene fading in from black
    FadeIn,
}

/// One timed fade leg
#[derive(Debug, Clone)]
pub struct TransitionEffect {
    duration: f32,
    elapsed: f32,
}

impl Default for TransitionEffect {
    fn default() -> Self {
        Self::new(TRANSITION_DURATION)
    }
}

impl TransitionEffect {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    /// 0.0 at the start of the leg, 1.0 when finished
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Black overlay at `alpha`
    pub fn draw_overlay(alpha: f32, out: &mut DrawList) {
        if alpha <= 0.0 {
            return;
        }
        let mut color = colors::BLACK;
        color[3] = alpha.min(1.0);
        out.fill(Vec2::ZERO, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), color);
    }
}

impl Updatable for TransitionEffect {
    fn update(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let mut fade = TransitionEffect::new(0.5);
        assert_eq!(fade.progress(), 0.0);
        fade.update(0.25);
        assert_eq!(fade.progress(), 0.5);
        fade.update(1.0);
        assert!(fade.is_finished());
        fade.restart();
        assert!(!fade.is_finished());
    }

    #[test]
    fn test_zero_duration_is_instant() {
        assert!(TransitionEffect::new(0.0).is_finished());
    }

    #[test]
    fn test_transparent_overlay_is_skipped() {
        let mut out = DrawList::new();
        TransitionEffect::draw_overlay(0.0, &mut out);
        assert!(out.is_empty());
        TransitionEffect::draw_overlay(0.3, &mut out);
        assert_eq!(out.len(), 1);
    }
}
