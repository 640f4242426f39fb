//! "Get ready" title and tap hint shown before the first flap

use glam::Vec2;

use crate::consts::SCREEN_WIDTH;
use crate::renderer::{DrawList, Skin};
use crate::sim::Updatable;

const TITLE_SIZE: Vec2 = Vec2::new(184.0, 50.0);
const HINT_SIZE: Vec2 = Vec2::new(114.0, 98.0);
const TITLE_Y: f32 = 120.0;
const HINT_Y: f32 = 200.0;
/// Hint pulse (radians/s)
const PULSE_SPEED: f32 = 4.0;

#[derive(Debug, Clone, Default)]
pub struct GetReady {
    elapsed: f32,
}

impl GetReady {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Tap hint opacity, pulsing between 0.5 and 1.0
    pub fn hint_alpha(&self) -> f32 {
        0.75 + 0.25 * (self.elapsed * PULSE_SPEED).cos()
    }

    pub fn draw(&self, skin: &Skin, out: &mut DrawList) {
        let title_x = (SCREEN_WIDTH - TITLE_SIZE.x) * 0.5;
        out.sprite(skin.get_ready, Vec2::new(title_x, TITLE_Y), TITLE_SIZE);
        let hint_x = (SCREEN_WIDTH - HINT_SIZE.x) * 0.5;
        out.sprite_ex(
            skin.tap_hint,
            Vec2::new(hint_x, HINT_Y),
            HINT_SIZE,
            0.0,
            self.hint_alpha(),
        );
    }
}

impl Updatable for GetReady {
    fn update(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }
}
