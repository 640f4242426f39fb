//! Timed visual effects that gate gameplay transitions

use serde::{Deserialize, Serialize};

use super::Updatable;

/// Full-screen flash that fades out linearly after being triggered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub duration: f32,
    pub elapsed: f32,
    /// Opacity, 1.0 when triggered down to 0.0
    pub alpha: f32,
    active: bool,
}

impl Flash {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            alpha: 0.0,
            active: false,
        }
    }

    pub fn trigger(&mut self) {
        self.active = true;
        self.alpha = 1.0;
        self.elapsed = 0.0;
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.alpha = 0.0;
        self.elapsed = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_finished(&self) -> bool {
        !self.active
    }
}

impl Updatable for Flash {
    fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        self.alpha = if self.duration > 0.0 {
            1.0 - self.elapsed / self.duration
        } else {
            0.0
        };
        if self.alpha <= 0.0 {
            self.alpha = 0.0;
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_fades_and_finishes() {
        let mut flash = Flash::new(0.4);
        assert!(flash.is_finished());

        flash.trigger();
        assert!(!flash.is_finished());
        assert_eq!(flash.alpha, 1.0);

        flash.update(0.2);
        assert!((flash.alpha - 0.5).abs() < 0.001);

        flash.update(0.25);
        assert!(flash.is_finished());
        assert_eq!(flash.alpha, 0.0);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_update() {
        let mut flash = Flash::new(0.0);
        flash.trigger();
        flash.update(0.016);
        assert!(flash.is_finished());
    }
}
