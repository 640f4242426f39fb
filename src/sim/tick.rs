//! Per-frame simulation step
//!
//! Drives the `Init -> Playing -> Dying -> GameOver -> Init` phase machine.
//! The caller clamps `dt` before passing it in.

use rand::Rng;

use super::Updatable;
use super::collision::hits_bounds;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary action (space / tap)
    pub flap: bool,
}

/// Apply the primary action according to the current phase
pub fn handle_input(state: &mut GameState, input: &TickInput) {
    if !input.flap {
        return;
    }
    match state.phase {
        GamePhase::Init => {
            state.bird.start_flight();
            state.bird.jump();
            state.phase = GamePhase::Playing;
            state.events.push(GameEvent::Flap);
            log::info!("Round started (seed {})", state.seed);
        }
        GamePhase::Playing => {
            state.bird.jump();
            state.events.push(GameEvent::Flap);
        }
        GamePhase::Dying => {}
        GamePhase::GameOver => {
            state.restart();
            state.events.push(GameEvent::Restart);
            log::info!("Round restarted");
        }
    }
}

/// Advance the game state by `dt` seconds, applying `input` first
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    handle_input(state, input);
    if !(dt > 0.0 && dt.is_finite()) {
        return;
    }

    match state.phase {
        GamePhase::Init => {
            let layers: [&mut dyn Updatable; 3] =
                [&mut state.background, &mut state.floor, &mut state.bird];
            for layer in layers {
                layer.update(dt);
            }
        }

        GamePhase::Playing => {
            let layers: [&mut dyn Updatable; 4] = [
                &mut state.background,
                &mut state.floor,
                &mut state.pipes,
                &mut state.bird,
            ];
            for layer in layers {
                layer.update(dt);
            }
            update_playing(state, dt);
        }

        GamePhase::Dying => {
            state.bird.update(dt);
            state.flash.update(dt);

            if state.bird.pos.y >= SCREEN_HEIGHT && state.flash.is_finished() {
                state.phase = GamePhase::GameOver;
                let score = state.score.value();
                state.events.push(GameEvent::GameOver { score });
                log::info!("Game over with score {}", score);
            }
        }

        GamePhase::GameOver => {}
    }
}

/// Spawn timer, collisions and pass scoring
fn update_playing(state: &mut GameState, dt: f32) {
    state.spawn_timer += dt;
    if state.spawn_timer >= state.tuning.spawn_interval {
        spawn_pipe(state);
        state.spawn_timer = 0.0;
    }

    if check_collisions(state) {
        initiate_death(state);
        return;
    }

    let bird = &state.bird;
    let mut cleared = 0;
    for pipe in state.pipes.pipes_mut() {
        if pipe.has_passed(bird) {
            cleared += 1;
        }
    }
    for _ in 0..cleared {
        state.score.increase();
        state.events.push(GameEvent::Point {
            score: state.score.value(),
        });
    }
}

/// Activate a pair at the right edge with a uniformly random gap
pub fn spawn_pipe(state: &mut GameState) {
    let floor_y = state.floor_y();
    let max_gap_start = state.tuning.max_gap_start(floor_y);
    let gap_start = if max_gap_start > 0.0 {
        state.rng.random_range(0.0..max_gap_start)
    } else {
        0.0
    };

    let gap = state.tuning.pipe_gap;
    let speed = state.tuning.pipe_speed;
    state
        .pipes
        .get_pipe()
        .init(SCREEN_WIDTH, gap_start, gap, speed, floor_y);
    log::debug!("Spawned pipe with gap at {:.1}", gap_start);
}

/// Bounds first, then pipes; stops at the first hit
pub fn check_collisions(state: &GameState) -> bool {
    let body = state.bird.bounds();
    if hits_bounds(&body, state.floor_y()) {
        return true;
    }
    let tolerance = state.tuning.collision_tolerance;
    state
        .pipes
        .active()
        .any(|pipe| pipe.is_colliding(&body, tolerance))
}

/// Playing -> Dying; a no-op from any other phase
fn initiate_death(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.phase = GamePhase::Dying;
    state.bird.die();
    state.flash.trigger();
    let score = state.score.value();
    state.events.push(GameEvent::Hit);
    state.events.push(GameEvent::Die { score });
    log::info!("Bird died with score {}", score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    const DT: f32 = 1.0 / 60.0;

    fn flap() -> TickInput {
        TickInput { flap: true }
    }

    fn start(state: &mut GameState) {
        tick(state, &flap(), DT);
    }

    #[test]
    fn test_tick_init_to_playing() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Init);

        // Tick without flap - should stay in Init
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Init);
        assert!(state.bird.hover_enabled);

        handle_input(&mut state, &flap());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bird.velocity_y, JUMP_IMPULSE);
        assert!(state.bird.physics_enabled);
        assert!(!state.bird.hover_enabled);
        assert_eq!(state.drain_events(), vec![GameEvent::Flap]);
    }

    #[test]
    fn test_no_spawn_in_init() {
        let mut state = GameState::new(1);
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.pipes.active_count(), 0);
        assert_eq!(state.phase, GamePhase::Init);
    }

    #[test]
    fn test_spawn_after_interval() {
        let mut state = GameState::new(99);
        start(&mut state);
        // Freeze the bird mid-air
        state.bird.pos.y = 200.0;
        state.bird.physics_enabled = false;

        tick(&mut state, &TickInput::default(), PIPE_INTERVAL);
        assert_eq!(state.pipes.active_count(), 1);
        assert_eq!(state.spawn_timer, 0.0);

        let pipe = state.pipes.active().next().unwrap();
        let max = PLAYABLE_HEIGHT - PIPE_MIN_MARGIN - PIPE_GAP;
        assert!(pipe.gap_start >= 0.0 && pipe.gap_start < max);
        assert_eq!(pipe.x, SCREEN_WIDTH);
    }

    #[test]
    fn test_spawn_gaps_are_in_range() {
        let mut state = GameState::new(2024);
        let max = state.tuning.max_gap_start(state.floor_y());
        for _ in 0..200 {
            spawn_pipe(&mut state);
        }
        assert!(state.pipes.active().all(|p| p.gap_start >= 0.0 && p.gap_start < max));
        // Not all the same value
        let first = state.pipes.active().next().unwrap().gap_start;
        assert!(state.pipes.active().any(|p| p.gap_start != first));
    }

    #[test]
    fn test_degenerate_gap_does_not_panic() {
        let mut state = GameState::new(5);
        state.tuning.pipe_gap = PLAYABLE_HEIGHT * 2.0;
        spawn_pipe(&mut state);
        let pipe = state.pipes.active().next().unwrap();
        assert_eq!(pipe.gap_start, 0.0);
        assert_eq!(pipe.bottom.height, 0.0);
    }

    #[test]
    fn test_floor_collision_starts_dying() {
        let mut state = GameState::new(3);
        start(&mut state);
        state.bird.pos.y = state.floor_y() - state.bird.height + 1.0;
        state.bird.velocity_y = 0.0;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Dying);
        assert!(state.bird.is_dying);
        assert!(state.flash.is_active());
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Hit));
        assert!(events.contains(&GameEvent::Die { score: 0 }));
    }

    #[test]
    fn test_ceiling_collision_starts_dying() {
        let mut state = GameState::new(3);
        start(&mut state);
        state.bird.pos.y = -10.0;
        state.bird.velocity_y = JUMP_IMPULSE;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Dying);
    }

    #[test]
    fn test_pipe_collision_starts_dying() {
        let mut state = GameState::new(3);
        start(&mut state);
        state.bird.pos.y = 40.0;
        state.bird.velocity_y = 0.0;
        let floor_y = state.floor_y();
        state
            .pipes
            .get_pipe()
            .init(state.bird.pos.x, 150.0, PIPE_GAP, 0.0, floor_y);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Dying);
    }

    #[test]
    fn test_passing_pipe_scores_once() {
        let mut state = GameState::new(3);
        start(&mut state);
        state.drain_events();
        state.bird.pos.y = 200.0;
        state.bird.velocity_y = 0.0;
        // Pair already behind the bird, not moving
        let floor_y = state.floor_y();
        state
            .pipes
            .get_pipe()
            .init(state.bird.pos.x - PIPE_WIDTH - 1.0, 150.0, PIPE_GAP, 0.0, floor_y);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.score.value(), 1);
        assert_eq!(state.drain_events(), vec![GameEvent::Point { score: 1 }]);

        state.bird.pos.y = 200.0;
        state.bird.velocity_y = 0.0;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.score.value(), 1);
    }

    #[test]
    fn test_no_scoring_on_death_tick() {
        let mut state = GameState::new(3);
        start(&mut state);
        let floor_y = state.floor_y();
        state
            .pipes
            .get_pipe()
            .init(state.bird.pos.x - PIPE_WIDTH - 1.0, 150.0, PIPE_GAP, 0.0, floor_y);
        state.bird.pos.y = floor_y;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Dying);
        assert_eq!(state.score.value(), 0);
    }

    #[test]
    fn test_dying_freezes_pipes_and_ignores_flap() {
        let mut state = GameState::new(3);
        start(&mut state);
        let floor_y = state.floor_y();
        state
            .pipes
            .get_pipe()
            .init(200.0, 150.0, PIPE_GAP, PIPE_SPEED, floor_y);
        state.bird.pos.y = floor_y;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Dying);

        let pipe_x = state.pipes.active().next().unwrap().x;
        let floor_x = state.floor.x;
        let v = state.bird.velocity_y;
        handle_input(&mut state, &flap());
        assert_eq!(state.bird.velocity_y, v);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.pipes.active().next().unwrap().x, pipe_x);
        assert_eq!(state.floor.x, floor_x);
    }

    #[test]
    fn test_dying_to_game_over_once_offscreen() {
        let mut state = GameState::new(3);
        start(&mut state);
        state.bird.pos.y = state.floor_y();
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Dying);
        state.drain_events();

        let mut frames = 0;
        while state.phase == GamePhase::Dying && frames < 600 {
            tick(&mut state, &TickInput::default(), DT);
            frames += 1;
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.bird.pos.y >= SCREEN_HEIGHT);
        assert!(state.flash.is_finished());
        assert_eq!(state.drain_events(), vec![GameEvent::GameOver { score: 0 }]);
    }

    #[test]
    fn test_game_over_flap_restarts() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::GameOver;
        state.score.increase();
        handle_input(&mut state, &flap());
        assert_eq!(state.phase, GamePhase::Init);
        assert_eq!(state.score.value(), 0);
        assert!(state.events.contains(&GameEvent::Restart));
    }

    #[test]
    fn test_restart_is_idempotent() {
        let mut state = GameState::new(11);
        start(&mut state);
        for _ in 0..3 {
            spawn_pipe(&mut state);
        }
        state.score.increase();
        state.phase = GamePhase::GameOver;

        handle_input(&mut state, &flap());
        let first = state.snapshot();
        state.phase = GamePhase::GameOver;
        handle_input(&mut state, &flap());
        let second = state.snapshot();

        assert_eq!(first, second);
        assert_eq!(first.score, 0);
        assert_eq!(first.active_pipes, 0);
        assert_eq!(first.bird_y, BIRD_START_Y);
        assert_eq!(first.velocity_y, 0.0);
    }

    #[test]
    fn test_restart_keeps_pool_allocation() {
        let mut state = GameState::new(11);
        for _ in 0..(PIPE_POOL_SIZE + 3) {
            spawn_pipe(&mut state);
        }
        let grown = state.pipes.len();
        state.restart();
        assert_eq!(state.pipes.len(), grown);
        assert_eq!(state.pipes.active_count(), 0);
    }

    #[test]
    fn test_zero_dt_only_applies_input() {
        let mut state = GameState::new(1);
        let before = state.snapshot();
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_non_finite_dt_only_applies_input() {
        let mut state = GameState::new(1);
        start(&mut state);
        let before = state.snapshot();
        tick(&mut state, &TickInput::default(), f32::NAN);
        tick(&mut state, &TickInput::default(), f32::INFINITY);
        assert_eq!(state.snapshot(), before);
        assert!(state.bird.pos.y.is_finite());
    }
}
