//! Flappy - a side-scrolling arcade core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (bird physics, pipe pool, collisions, game phases)
//! - `scene`: Scene host trait, scene manager with fades, the game scene
//! - `renderer`: Draw lists and vertex tessellation for the host renderer
//! - `ui`: Score glyphs, get-ready banner, game-over panel
//! - `assets` / `audio` / `highscores`: collaborator seams (textures, sounds, score table)
//! - `settings` / `tuning`: Player preferences and data-driven game balance

pub mod assets;
pub mod audio;
pub mod error;
pub mod highscores;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{AssetError, ConfigError, ScoreError};
pub use highscores::{HighScores, PlayerRecord, ScoreStore};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta the host should ever pass to `update` (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Frame delta used by the headless host (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Render buffer dimensions
    pub const SCREEN_WIDTH: f32 = 288.0;
    pub const SCREEN_HEIGHT: f32 = 512.0;
    pub const FLOOR_HEIGHT: f32 = 56.0;
    /// Everything above the floor line
    pub const PLAYABLE_HEIGHT: f32 = SCREEN_HEIGHT - FLOOR_HEIGHT;

    /// Bird physics (pixels, seconds)
    pub const GRAVITY: f32 = 1000.0;
    pub const JUMP_IMPULSE: f32 = -430.0;
    pub const TERMINAL_VELOCITY: f32 = 600.0;
    /// Render tilt in degrees, positive = nose down
    pub const MAX_UP_ANGLE: f32 = -25.0;
    pub const MAX_DOWN_ANGLE: f32 = 90.0;
    /// Nose-dive rotation while dying (degrees/s)
    pub const DEATH_ROTATION_RATE: f32 = 480.0;

    /// Bird hitbox and spawn point
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;
    pub const BIRD_START_X: f32 = SCREEN_WIDTH / 4.0;
    pub const BIRD_START_Y: f32 = SCREEN_HEIGHT / 2.0;

    /// Idle hover before the first flap
    pub const HOVER_AMPLITUDE: f32 = 6.0;
    pub const HOVER_FREQUENCY: f32 = 6.0;

    /// Wing animation
    pub const BIRD_FRAME_COUNT: usize = 3;
    pub const BIRD_FRAME_DURATION: f32 = 0.1;

    /// Pipes
    pub const PIPE_POOL_SIZE: usize = 4;
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_SPEED: f32 = 170.0;
    pub const PIPE_GAP: f32 = 150.0;
    pub const PIPE_INTERVAL: f32 = 1.25;
    /// Minimum height of the bottom pipe
    pub const PIPE_MIN_MARGIN: f32 = 20.0;

    /// Hitbox inset applied to the bird (0 = exact AABB)
    pub const COLLISION_TOLERANCE: f32 = 0.0;

    /// Points per pipe cleared
    pub const SCORE_INCREMENT: u32 = 1;

    /// Parallax scroll speeds (pixels/s)
    pub const BACKGROUND_SCROLL_SPEED: f32 = 30.0;
    pub const FLOOR_SCROLL_SPEED: f32 = BACKGROUND_SCROLL_SPEED + 60.0;

    /// Death flash fade (seconds)
    pub const FLASH_DURATION: f32 = 0.4;
    /// Scene fade in/out (seconds)
    pub const TRANSITION_DURATION: f32 = 0.5;

    /// Mute toggle in the top-left corner (x, y, size)
    pub const SOUND_BUTTON_X: f32 = 10.0;
    pub const SOUND_BUTTON_Y: f32 = 10.0;
    pub const SOUND_BUTTON_SIZE: f32 = 20.0;

    /// Game-over panel timing (seconds)
    pub const PANEL_SLIDE_DURATION: f32 = 0.4;
    /// Score count-up speed on the game-over panel (points/s)
    pub const PANEL_COUNT_RATE: f32 = 30.0;
}
