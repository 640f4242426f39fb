//! Game-over panel: slides up, then counts the score up to the final value

use glam::Vec2;

use super::digits::{Align, draw_number};
use crate::consts::{PANEL_COUNT_RATE, PANEL_SLIDE_DURATION, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::{DrawList, Skin};
use crate::sim::Updatable;

const TITLE_SIZE: Vec2 = Vec2::new(192.0, 42.0);
const PANEL_SIZE: Vec2 = Vec2::new(226.0, 114.0);
const NEW_BEST_SIZE: Vec2 = Vec2::new(32.0, 14.0);
const TITLE_Y: f32 = 110.0;
/// Resting y of the panel's top edge
const PANEL_Y: f32 = 170.0;
const SCORE_SCALE: f32 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct GameOverPanel {
    visible: bool,
    final_score: u32,
    best_score: u32,
    new_best: bool,
    /// Seconds since `show`
    elapsed: f32,
    animate: bool,
}

impl GameOverPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the panel for a finished round
    pub fn show(&mut self, score: u32, best: u32, new_best: bool, animate: bool) {
        self.visible = true;
        self.final_score = score;
        self.best_score = best;
        self.new_best = new_best;
        self.elapsed = 0.0;
        self.animate = animate;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_new_best(&self) -> bool {
        self.new_best
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Slide progress, 0.0 (off-screen) to 1.0 (resting)
    pub fn slide(&self) -> f32 {
        if !self.animate || PANEL_SLIDE_DURATION <= 0.0 {
            return 1.0;
        }
        (self.elapsed / PANEL_SLIDE_DURATION).min(1.0)
    }

    /// Score currently shown while counting up
    pub fn displayed_score(&self) -> u32 {
        if !self.animate {
            return self.final_score;
        }
        let counting = (self.elapsed - PANEL_SLIDE_DURATION).max(0.0);
        let shown = (counting * PANEL_COUNT_RATE) as u32;
        shown.min(self.final_score)
    }

    /// Slid in and finished counting
    pub fn is_done(&self) -> bool {
        self.visible && self.slide() >= 1.0 && self.displayed_score() == self.final_score
    }

    pub fn panel_y(&self) -> f32 {
        // Ease out from the bottom of the screen
        let t = self.slide();
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        SCREEN_HEIGHT + (PANEL_Y - SCREEN_HEIGHT) * eased
    }

    pub fn draw(&self, skin: &Skin, out: &mut DrawList) {
        if !self.visible {
            return;
        }
        let title_x = (SCREEN_WIDTH - TITLE_SIZE.x) * 0.5;
        out.sprite(skin.game_over, Vec2::new(title_x, TITLE_Y), TITLE_SIZE);

        let panel = Vec2::new((SCREEN_WIDTH - PANEL_SIZE.x) * 0.5, self.panel_y());
        out.sprite(skin.score_panel, panel, PANEL_SIZE);

        let right = panel.x + PANEL_SIZE.x - 22.0;
        draw_number(
            self.displayed_score(),
            Vec2::new(right, panel.y + 35.0),
            Align::Right,
            SCORE_SCALE,
            skin,
            out,
        );
        draw_number(
            self.best_score,
            Vec2::new(right, panel.y + 76.0),
            Align::Right,
            SCORE_SCALE,
            skin,
            out,
        );
        if self.new_best && self.is_done() {
            out.sprite(
                skin.new_best,
                Vec2::new(panel.x + 140.0, panel.y + 58.0),
                NEW_BEST_SIZE,
            );
        }
    }
}

impl Updatable for GameOverPanel {
    fn update(&mut self, dt: f32) {
        if self.visible {
            self.elapsed += dt.max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_then_count_up() {
        let mut panel = GameOverPanel::new();
        panel.show(10, 12, false, true);
        assert_eq!(panel.panel_y(), SCREEN_HEIGHT);
        assert_eq!(panel.displayed_score(), 0);

        panel.update(PANEL_SLIDE_DURATION);
        assert_eq!(panel.panel_y(), PANEL_Y);
        assert!(!panel.is_done());

        panel.update(5.0 / PANEL_COUNT_RATE + 0.001);
        assert_eq!(panel.displayed_score(), 5);

        panel.update(10.0);
        assert_eq!(panel.displayed_score(), 10);
        assert!(panel.is_done());
    }

    #[test]
    fn test_reduced_motion_shows_final_immediately() {
        let mut panel = GameOverPanel::new();
        panel.show(42, 42, true, false);
        assert_eq!(panel.displayed_score(), 42);
        assert_eq!(panel.panel_y(), PANEL_Y);
        assert!(panel.is_done());
        assert!(panel.is_new_best());
    }

    #[test]
    fn test_hidden_until_shown() {
        let mut panel = GameOverPanel::new();
        panel.update(1.0);
        assert!(!panel.is_visible());
        assert!(!panel.is_done());
        panel.show(1, 1, false, true);
        panel.reset();
        assert!(!panel.is_visible());
    }
}
