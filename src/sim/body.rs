//! The bird: one falling body with a single upward impulse
//!
//! `x` stays at the spawn column for the whole run; only `y` moves. The render
//! angle is derived from `velocity_y` every update and is never read back by
//! the physics.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Updatable;
use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Physics parameters copied out of `Tuning`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyParams {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub terminal_velocity: f32,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            terminal_velocity: TERMINAL_VELOCITY,
        }
    }
}

impl From<&Tuning> for BodyParams {
    fn from(tuning: &Tuning) -> Self {
        Self {
            gravity: tuning.gravity,
            jump_impulse: tuning.jump_impulse,
            terminal_velocity: tuning.terminal_velocity,
        }
    }
}

/// The player-controlled bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    /// Where `reset` puts the bird back
    pub start: Vec2,
    pub velocity_y: f32,
    pub width: f32,
    pub height: f32,
    /// Render tilt in degrees (positive = nose down)
    pub angle: f32,
    pub physics_enabled: bool,
    pub hover_enabled: bool,
    pub is_dying: bool,
    /// Seconds spent hovering (drives the idle bob)
    hover_time: f32,
    /// Current wing frame
    pub frame: usize,
    frame_time: f32,
    params: BodyParams,
}

impl Bird {
    pub fn new(start: Vec2, width: f32, height: f32, params: BodyParams) -> Self {
        let mut bird = Self {
            pos: start,
            start,
            velocity_y: 0.0,
            width,
            height,
            angle: 0.0,
            physics_enabled: false,
            hover_enabled: true,
            is_dying: false,
            hover_time: 0.0,
            frame: 0,
            frame_time: 0.0,
            params,
        };
        bird.reset();
        bird
    }

    /// Bird at the standard spawn point with default physics
    pub fn with_params(params: BodyParams) -> Self {
        Self::new(
            Vec2::new(BIRD_START_X, BIRD_START_Y),
            BIRD_WIDTH,
            BIRD_HEIGHT,
            params,
        )
    }

    /// Hitbox in screen space
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Flap: set velocity to the jump impulse
    pub fn jump(&mut self) {
        if !self.physics_enabled || self.is_dying {
            return;
        }
        self.velocity_y = self.params.jump_impulse;
    }

    /// Start the death fall. Only the first call has any effect.
    pub fn die(&mut self) {
        if self.is_dying {
            return;
        }
        self.is_dying = true;
        self.physics_enabled = true;
        self.hover_enabled = false;
        self.velocity_y = self.params.jump_impulse * 0.5;
    }

    /// Back to the idle hover at the spawn point
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.velocity_y = 0.0;
        self.angle = 0.0;
        self.physics_enabled = false;
        self.hover_enabled = true;
        self.is_dying = false;
        self.hover_time = 0.0;
        self.frame = 0;
        self.frame_time = 0.0;
    }

    /// Switch from idle hover to live physics
    pub fn start_flight(&mut self) {
        self.hover_enabled = false;
        self.physics_enabled = true;
    }

    fn apply_hover(&mut self, dt: f32) {
        self.hover_time += dt;
        self.pos.y = self.start.y + HOVER_AMPLITUDE * (self.hover_time * HOVER_FREQUENCY).sin();
        self.angle = 0.0;
    }

    fn apply_physics(&mut self, dt: f32) {
        let p = self.params;
        self.velocity_y = (self.velocity_y + p.gravity * dt).clamp(p.jump_impulse, p.terminal_velocity);
        self.pos.y += self.velocity_y * dt;

        if self.is_dying {
            self.angle = (self.angle + DEATH_ROTATION_RATE * dt).min(MAX_DOWN_ANGLE);
        } else {
            self.angle = self.tilt_for_velocity();
        }
    }

    /// Tilt proportional to vertical speed, capped at the up/down limits
    fn tilt_for_velocity(&self) -> f32 {
        let p = self.params;
        if self.velocity_y < 0.0 {
            let ratio = if p.jump_impulse < 0.0 {
                (self.velocity_y / p.jump_impulse).min(1.0)
            } else {
                1.0
            };
            MAX_UP_ANGLE * ratio
        } else if p.terminal_velocity > 0.0 {
            MAX_DOWN_ANGLE * (self.velocity_y / p.terminal_velocity).min(1.0)
        } else {
            0.0
        }
    }

    fn animate(&mut self, dt: f32) {
        if self.is_dying {
            return;
        }
        self.frame_time += dt;
        let steps = (self.frame_time / BIRD_FRAME_DURATION) as usize;
        self.frame = (self.frame + steps % BIRD_FRAME_COUNT) % BIRD_FRAME_COUNT;
        self.frame_time = self.frame_time.rem_euclid(BIRD_FRAME_DURATION);
    }
}

impl Updatable for Bird {
    fn update(&mut self, dt: f32) {
        // Also rejects NaN and infinity
        if !(dt > 0.0 && dt.is_finite()) {
            return;
        }
        if self.hover_enabled {
            self.apply_hover(dt);
        } else if self.physics_enabled {
            self.apply_physics(dt);
        }
        self.animate(dt);
    }
}
