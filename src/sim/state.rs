//! Game state and core simulation types
//!
//! `GameState` owns everything a round needs: the bird, the pipe pool, the
//! score, the spawn timer and the RNG. Phase changes happen only in `tick`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{BodyParams, Bird};
use super::effects::Flash;
use super::pool::PipePool;
use super::scroll::ScrollingLayer;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird hovering, waiting for the first flap
    Init,
    /// Pipes spawning, score counting
    Playing,
    /// Bird falling after a hit
    Dying,
    /// Round over, waiting for restart input
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Init => "Init",
            GamePhase::Playing => "Playing",
            GamePhase::Dying => "Dying",
            GamePhase::GameOver => "GameOver",
        }
    }
}

/// Things that happened during a tick, drained by the scene for audio and
/// persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Bird flapped
    Flap,
    /// A pipe pair was cleared
    Point { score: u32 },
    /// Bird hit a pipe or the bounds
    Hit,
    /// Death fall started
    Die { score: u32 },
    /// Round finished (bird left the screen)
    GameOver { score: u32 },
    /// Round restarted
    Restart,
}

/// Per-round score counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increase(&mut self) {
        self.value = self.value.saturating_add(SCORE_INCREMENT);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap RNG, seeded once and kept across restarts
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub bird: Bird,
    pub pipes: PipePool,
    pub score: Score,
    /// Seconds since the last spawn
    pub spawn_timer: f32,
    /// White flash after a hit
    pub flash: Flash,
    pub background: ScrollingLayer,
    pub floor: ScrollingLayer,
    pub tuning: Tuning,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Init,
            bird: Bird::with_params(BodyParams::from(&tuning)),
            pipes: PipePool::new(tuning.pool_size),
            score: Score::default(),
            spawn_timer: 0.0,
            flash: Flash::new(FLASH_DURATION),
            background: ScrollingLayer::new(
                0.0,
                SCREEN_WIDTH,
                PLAYABLE_HEIGHT,
                BACKGROUND_SCROLL_SPEED,
            ),
            floor: ScrollingLayer::new(
                PLAYABLE_HEIGHT,
                SCREEN_WIDTH,
                FLOOR_HEIGHT,
                FLOOR_SCROLL_SPEED,
            ),
            tuning,
            events: Vec::new(),
        };
        state.restart();
        state
    }

    /// Y of the floor line (bottom of the playable area)
    pub fn floor_y(&self) -> f32 {
        self.floor.y
    }

    /// Back to `Init` without touching the pool's allocation
    pub fn restart(&mut self) {
        self.bird.reset();
        self.pipes.reset();
        self.score.reset();
        self.flash.reset();
        self.spawn_timer = 0.0;
        self.phase = GamePhase::Init;
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Comparable summary of the gameplay-relevant state
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            score: self.score.value(),
            bird_x: self.bird.pos.x,
            bird_y: self.bird.pos.y,
            velocity_y: self.bird.velocity_y,
            angle: self.bird.angle,
            physics_enabled: self.bird.physics_enabled,
            hover_enabled: self.bird.hover_enabled,
            is_dying: self.bird.is_dying,
            active_pipes: self.pipes.active_count(),
            spawn_timer: self.spawn_timer,
        }
    }
}

/// Plain-data view of a `GameState` for comparisons and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub bird_x: f32,
    pub bird_y: f32,
    pub velocity_y: f32,
    pub angle: f32,
    pub physics_enabled: bool,
    pub hover_enabled: bool,
    pub is_dying: bool,
    pub active_pipes: usize,
    pub spawn_timer: f32,
}
