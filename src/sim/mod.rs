//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (pool index)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod effects;
pub mod pipe;
pub mod pool;
pub mod scroll;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use body::{Bird, BodyParams};
pub use collision::{Aabb, hits_bounds};
pub use effects::Flash;
pub use pipe::{PipePair, Segment, SegmentKind};
pub use pool::PipePool;
pub use scroll::ScrollingLayer;
pub use state::{GameEvent, GamePhase, GameSnapshot, GameState, Score};
pub use tick::{TickInput, check_collisions, handle_input, spawn_pipe, tick};

/// Anything advanced once per frame by the elapsed seconds
pub trait Updatable {
    fn update(&mut self, dt: f32);
}
