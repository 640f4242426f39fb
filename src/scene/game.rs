//! The playable scene
//!
//! Wraps a `GameState` with everything around the simulation: input mapping,
//! sound, score persistence and the overlays. The simulation itself never
//! sees any of these collaborators; it raises `GameEvent`s and this scene
//! reacts to them after each tick.

use std::any::Any;

use glam::Vec2;

use super::Scene;
use crate::assets::ResourceProvider;
use crate::audio::{AudioSink, SoundEffect};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, SOUND_BUTTON_SIZE, SOUND_BUTTON_X, SOUND_BUTTON_Y};
use crate::error::AssetError;
use crate::highscores::{PlayerRecord, ScoreStore};
use crate::input::InputEvent;
use crate::renderer::vertex::colors;
use crate::renderer::{DrawList, Drawable, Skin, draw_layer};
use crate::settings::Settings;
use crate::sim::{
    GameEvent, GamePhase, GameState, TickInput, Updatable, autopilot_input, handle_input, tick,
};
use crate::ui::{Align, GameOverPanel, GetReady, draw_number};

/// Live score position (top center)
const HUD_SCORE_Y: f32 = 40.0;

/// Collaborators handed to the scene at construction
pub struct GameContext {
    pub audio: Box<dyn AudioSink>,
    pub scores: Box<dyn ScoreStore>,
    pub player: PlayerRecord,
}

pub struct GameScene {
    state: GameState,
    skin: Skin,
    ctx: GameContext,
    get_ready: GetReady,
    game_over: GameOverPanel,
    /// Autopilot drives the bird
    demo: bool,
    draw_flash: bool,
    panel_motion: bool,
    rounds_finished: u32,
}

impl GameScene {
    /// Resolve textures and wire collaborators; fails on a missing texture
    pub fn new(
        state: GameState,
        resources: &dyn ResourceProvider,
        ctx: GameContext,
        settings: &Settings,
    ) -> Result<Self, AssetError> {
        let skin = Skin::load(resources)?;
        Ok(Self {
            state,
            skin,
            ctx,
            get_ready: GetReady::new(),
            game_over: GameOverPanel::new(),
            demo: false,
            draw_flash: settings.effective_flash(),
            panel_motion: settings.effective_panel_motion(),
            rounds_finished: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn game_over_panel(&self) -> &GameOverPanel {
        &self.game_over
    }

    pub fn set_demo(&mut self, demo: bool) {
        self.demo = demo;
    }

    /// Rounds that reached `GameOver`
    pub fn rounds_finished(&self) -> u32 {
        self.rounds_finished
    }

    /// React to everything the last input/tick raised
    fn handle_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Flap => self.ctx.audio.play(SoundEffect::Flap),
                GameEvent::Point { .. } => self.ctx.audio.play(SoundEffect::Point),
                GameEvent::Hit => self.ctx.audio.play(SoundEffect::Hit),
                GameEvent::Die { score } => {
                    self.ctx.audio.play(SoundEffect::Die);
                    self.ctx.player.last_score = score;
                }
                GameEvent::GameOver { score } => self.finish_round(score),
                GameEvent::Restart => {
                    self.game_over.reset();
                    self.get_ready.reset();
                    self.ctx.audio.play(SoundEffect::Swoosh);
                }
            }
        }
    }

    /// Read the previous best, record this round and show the panel
    fn finish_round(&mut self, score: u32) {
        let name = self.ctx.player.name.clone();
        let previous = self.ctx.scores.best_score(&name);
        if let Err(err) = self.ctx.scores.register_or_update(&name, score) {
            log::warn!("Could not record score for {}: {}", name, err);
        }
        let new_best = score > previous;
        self.game_over
            .show(score, previous.max(score), new_best, self.panel_motion);
        self.ctx.audio.play(SoundEffect::Swoosh);
        self.rounds_finished += 1;
        log::info!(
            "Round {} finished: {} scored {} (best {})",
            self.rounds_finished,
            name,
            score,
            previous.max(score)
        );
    }
}

impl Scene for GameScene {
    fn process_event(&mut self, event: &InputEvent) {
        if event.is_sound_toggle() {
            self.ctx.audio.toggle_mute();
        } else if event.is_primary_action() {
            handle_input(&mut self.state, &TickInput { flap: true });
            self.handle_events();
        }
    }

    fn update(&mut self, dt: f32) {
        if !dt.is_finite() {
            return;
        }
        let input = if self.demo {
            autopilot_input(&self.state)
        } else {
            TickInput::default()
        };
        tick(&mut self.state, &input, dt);
        self.handle_events();

        match self.state.phase {
            GamePhase::Init => self.get_ready.update(dt),
            GamePhase::GameOver => self.game_over.update(dt),
            GamePhase::Playing | GamePhase::Dying => {}
        }
    }

    fn draw(&self, out: &mut DrawList) {
        let skin = &self.skin;
        let state = &self.state;

        out.fill(Vec2::ZERO, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), colors::SKY);
        draw_layer(&state.background, skin.background, out);
        state.pipes.draw(skin, out);
        draw_layer(&state.floor, skin.floor, out);
        state.bird.draw(skin, out);

        if state.phase == GamePhase::Playing {
            draw_number(
                state.score.value(),
                Vec2::new(SCREEN_WIDTH * 0.5, HUD_SCORE_Y),
                Align::Center,
                1.0,
                skin,
                out,
            );
        }

        let sound = if self.ctx.audio.is_muted() {
            skin.sound_off
        } else {
            skin.sound_on
        };
        out.sprite(
            sound,
            Vec2::new(SOUND_BUTTON_X, SOUND_BUTTON_Y),
            Vec2::splat(SOUND_BUTTON_SIZE),
        );

        if state.phase == GamePhase::Init {
            self.get_ready.draw(skin, out);
        }
        self.game_over.draw(skin, out);

        if self.draw_flash {
            state.flash.draw(skin, out);
        }
    }

    fn name(&self) -> &'static str {
        "game"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
