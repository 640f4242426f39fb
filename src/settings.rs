//! Player preferences
//!
//! Persisted as JSON next to the score table. A missing file means defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name scores are recorded under
    pub player_name: String,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Visual Effects ===
    /// White flash on death
    pub screen_flash: bool,

    // === Accessibility ===
    /// Reduced motion (no flash, no panel slide)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: "PLAYER".to_string(),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            screen_flash: true,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective flash drawing (respects reduced_motion)
    pub fn effective_flash(&self) -> bool {
        self.screen_flash && !self.reduced_motion
    }

    /// Effective panel animation (respects reduced_motion)
    pub fn effective_panel_motion(&self) -> bool {
        !self.reduced_motion
    }

    /// Load settings from `path`, falling back to defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("Using default settings");
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
