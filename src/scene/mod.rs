//! Scene hosting
//!
//! A `Scene` is anything the host can feed events, tick and draw. The
//! `SceneManager` owns the current one and swaps it, optionally through a
//! fade-out/fade-in.

use std::any::Any;

pub mod game;
pub mod transition;

pub use game::{GameContext, GameScene};
pub use transition::{TransitionEffect, TransitionState};

use crate::input::InputEvent;
use crate::renderer::DrawList;
use crate::sim::Updatable;

/// Top-level unit the host drives once per frame
pub trait Scene {
    fn process_event(&mut self, event: &InputEvent);
    fn update(&mut self, dt: f32);
    fn draw(&self, out: &mut DrawList);

    fn name(&self) -> &'static str;

    /// Concrete access for hosts that know what they put in
    fn as_any(&self) -> &dyn Any;
}

pub struct SceneManager {
    current: Box<dyn Scene>,
    next: Option<Box<dyn Scene>>,
    state: TransitionState,
    effect: TransitionEffect,
}

impl SceneManager {
    pub fn new(scene: Box<dyn Scene>) -> Self {
        log::info!("Scene: {}", scene.name());
        Self {
            current: scene,
            next: None,
            state: TransitionState::Running,
            effect: TransitionEffect::default(),
        }
    }

    pub fn with_effect(mut self, effect: TransitionEffect) -> Self {
        self.effect = effect;
        self
    }

    /// Swap to `scene`, fading if `fade` is set.
    ///
    /// Returns false (and drops `scene`) while another swap is in progress.
    pub fn set_current_scene(&mut self, scene: Box<dyn Scene>, fade: bool) -> bool {
        if self.state != TransitionState::Running {
            log::debug!("Scene swap to {} ignored mid-transition", scene.name());
            return false;
        }
        if !fade {
            log::info!("Scene: {} -> {}", self.current.name(), scene.name());
            self.current = scene;
            return true;
        }
        self.next = Some(scene);
        self.state = TransitionState::FadeOut;
        self.effect.restart();
        true
    }

    pub fn current(&self) -> &dyn Scene {
        self.current.as_ref()
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        self.state != TransitionState::Running
    }

    /// Events only reach a scene that is fully on screen
    pub fn process_event(&mut self, event: &InputEvent) {
        if self.state == TransitionState::Running {
            self.current.process_event(event);
        }
    }

    pub fn update(&mut self, dt: f32) {
        match self.state {
            TransitionState::Running => self.current.update(dt),
            TransitionState::FadeOut => {
                self.effect.update(dt);
                if self.effect.is_finished() {
                    if let Some(next) = self.next.take() {
                        log::info!("Scene: {} -> {}", self.current.name(), next.name());
                        self.current = next;
                    }
                    self.state = TransitionState::FadeIn;
                    self.effect.restart();
                }
            }
            TransitionState::FadeIn => {
                self.current.update(dt);
                self.effect.update(dt);
                if self.effect.is_finished() {
                    self.state = TransitionState::Running;
                }
            }
        }
    }

    pub fn draw(&self, out: &mut DrawList) {
        self.current.draw(out);
        let alpha = match self.state {
            TransitionState::Running => 0.0,
            TransitionState::FadeOut => self.effect.progress(),
            TransitionState::FadeIn => 1.0 - self.effect.progress(),
        };
        TransitionEffect::draw_overlay(alpha, out);
    }
}
