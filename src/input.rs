//! Host-neutral input events
//!
//! The host translates its own keyboard/touch events into these. Space and
//! taps are the primary action; a tap on the sound button is not.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SOUND_BUTTON_SIZE, SOUND_BUTTON_X, SOUND_BUTTON_Y};
use crate::sim::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Touch or click in screen coordinates
    Tap { x: f32, y: f32 },
    Other,
}

/// Hit box of the mute toggle
pub fn sound_button_rect() -> Aabb {
    Aabb::new(
        SOUND_BUTTON_X,
        SOUND_BUTTON_Y,
        SOUND_BUTTON_SIZE,
        SOUND_BUTTON_SIZE,
    )
}

impl InputEvent {
    /// Tap landing on the mute toggle
    pub fn is_sound_toggle(&self) -> bool {
        match *self {
            InputEvent::Tap { x, y } => sound_button_rect().contains(Vec2::new(x, y)),
            _ => false,
        }
    }

    /// Space, or a tap anywhere except the sound button
    pub fn is_primary_action(&self) -> bool {
        match self {
            InputEvent::KeyDown(Key::Space) => true,
            InputEvent::Tap { .. } => !self.is_sound_toggle(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_actions() {
        assert!(InputEvent::KeyDown(Key::Space).is_primary_action());
        assert!(InputEvent::Tap { x: 150.0, y: 300.0 }.is_primary_action());
        assert!(!InputEvent::KeyUp(Key::Space).is_primary_action());
        assert!(!InputEvent::KeyDown(Key::Escape).is_primary_action());
        assert!(!InputEvent::Other.is_primary_action());
    }

    #[test]
    fn test_sound_button_tap_is_not_primary() {
        let tap = InputEvent::Tap {
            x: SOUND_BUTTON_X + 5.0,
            y: SOUND_BUTTON_Y + 5.0,
        };
        assert!(tap.is_sound_toggle());
        assert!(!tap.is_primary_action());
        assert!(!InputEvent::KeyDown(Key::Space).is_sound_toggle());
    }
}
