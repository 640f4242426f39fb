//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so a run can be
//! re-tuned from a JSON file without recompiling. Defaults come from `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Velocity set by a flap (negative = up)
    pub jump_impulse: f32,
    /// Maximum fall speed
    pub terminal_velocity: f32,
    /// Pipe scroll speed (pixels/s)
    pub pipe_speed: f32,
    /// Vertical opening between the two pipes
    pub pipe_gap: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Minimum bottom-pipe height
    pub pipe_min_margin: f32,
    /// Pairs allocated up front
    pub pool_size: usize,
    /// Hitbox inset on the bird
    pub collision_tolerance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            terminal_velocity: TERMINAL_VELOCITY,
            pipe_speed: PIPE_SPEED,
            pipe_gap: PIPE_GAP,
            spawn_interval: PIPE_INTERVAL,
            pipe_min_margin: PIPE_MIN_MARGIN,
            pool_size: PIPE_POOL_SIZE,
            collision_tolerance: COLLISION_TOLERANCE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load tuning from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Largest exclusive upper bound for a gap start above `floor_y`
    pub fn max_gap_start(&self, floor_y: f32) -> f32 {
        floor_y - self.pipe_min_margin - self.pipe_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "pipe_gap": 120.0 }"#).unwrap();
        assert_eq!(tuning.pipe_gap, 120.0);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.pool_size, PIPE_POOL_SIZE);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_max_gap_start() {
        let tuning = Tuning::default();
        let max = tuning.max_gap_start(PLAYABLE_HEIGHT);
        assert!((max - (PLAYABLE_HEIGHT - PIPE_MIN_MARGIN - PIPE_GAP)).abs() < f32::EPSILON);
    }
}
