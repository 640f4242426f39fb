//! Demo-mode player
//!
//! Looks at the nearest pipe still ahead of (or under) the bird and flaps
//! whenever the bird falls below a line near the bottom of that gap. Used by
//! the headless host and the attract screen.

use super::pipe::PipePair;
use super::state::{GamePhase, GameState};
use super::tick::TickInput;
use crate::consts::PLAYABLE_HEIGHT;

/// Fraction of the gap (from its top) the bird's center is held above
const GAP_AIM: f32 = 0.8;

/// Pick this frame's input for `state`
pub fn autopilot_input(state: &GameState) -> TickInput {
    let flap = match state.phase {
        GamePhase::Init | GamePhase::GameOver => true,
        GamePhase::Dying => false,
        GamePhase::Playing => {
            let bird = &state.bird;
            let center_y = bird.pos.y + bird.height * 0.5;
            let target_y = next_pipe(state)
                .map(|pipe| pipe.gap_start + pipe.gap_size * GAP_AIM)
                .unwrap_or(PLAYABLE_HEIGHT * 0.5);
            center_y > target_y && bird.velocity_y > 0.0
        }
    };
    TickInput { flap }
}

/// Closest active pair whose right edge has not yet passed the bird
fn next_pipe(state: &GameState) -> Option<&PipePair> {
    let bird_x = state.bird.pos.x;
    state
        .pipes
        .active()
        .filter(|pipe| pipe.right() >= bird_x)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
}
