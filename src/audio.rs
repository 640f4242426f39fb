//! Sound effect dispatch
//!
//! The game only decides *which* effect to play. Volume and mute are applied by
//! `AudioManager`, and the actual synthesis/playback lives behind an
//! `AudioBackend` supplied by the host.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Bird flaps
    Flap,
    /// Pipe pair cleared
    Point,
    /// Bird hits a pipe or the bounds
    Hit,
    /// Death fall begins
    Die,
    /// Panel slides in / scene changes
    Swoosh,
}

/// Oscillator waveform for a synthesized effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// A single frequency sweep a backend can synthesize without sample files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub waveform: Waveform,
    pub freq_start: f32,
    pub freq_end: f32,
    /// Seconds
    pub duration: f32,
    /// Relative loudness before volume is applied
    pub gain: f32,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Flap => "flap",
            SoundEffect::Point => "point",
            SoundEffect::Hit => "hit",
            SoundEffect::Die => "die",
            SoundEffect::Swoosh => "swoosh",
        }
    }

    /// Procedural recipe for backends without sample files
    pub fn tone(&self) -> Tone {
        match self {
            // Short upward chirp
            SoundEffect::Flap => Tone {
                waveform: Waveform::Triangle,
                freq_start: 400.0,
                freq_end: 700.0,
                duration: 0.08,
                gain: 0.4,
            },
            // Bright ding
            SoundEffect::Point => Tone {
                waveform: Waveform::Sine,
                freq_start: 988.0,
                freq_end: 1319.0,
                duration: 0.15,
                gain: 0.5,
            },
            // Low thud
            SoundEffect::Hit => Tone {
                waveform: Waveform::Square,
                freq_start: 180.0,
                freq_end: 60.0,
                duration: 0.12,
                gain: 0.6,
            },
            // Falling whistle
            SoundEffect::Die => Tone {
                waveform: Waveform::Sawtooth,
                freq_start: 600.0,
                freq_end: 120.0,
                duration: 0.5,
                gain: 0.4,
            },
            SoundEffect::Swoosh => Tone {
                waveform: Waveform::Triangle,
                freq_start: 300.0,
                freq_end: 900.0,
                duration: 0.25,
                gain: 0.25,
            },
        }
    }
}

/// Fire-and-forget effect playback as seen by the game
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    fn is_muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Flip mute; returns the new state
    fn toggle_mute(&mut self) -> bool {
        let muted = !self.is_muted();
        self.set_muted(muted);
        muted
    }
}

/// Host playback device
pub trait AudioBackend {
    /// Play `effect` at `volume` (0.0 - 1.0, never 0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that logs the tone it would synthesize; used by the headless host
#[derive(Debug, Default)]
pub struct LogBackend {
    played: usize,
    /// Total length of every tone played so far
    seconds: f32,
}

impl LogBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects played so far
    pub fn played(&self) -> usize {
        self.played
    }

    /// Seconds of audio synthesized so far
    pub fn seconds(&self) -> f32 {
        self.seconds
    }
}

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        let tone = effect.tone();
        self.played += 1;
        self.seconds += tone.duration;
        log::trace!(
            "sfx {}: {:?} {:.0}->{:.0} Hz for {:.2}s at {:.2}",
            effect.as_str(),
            tone.waveform,
            tone.freq_start,
            tone.freq_end,
            tone.duration,
            tone.gain * volume
        );
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(LogBackend::new()))
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with volumes and mute taken from settings
    pub fn from_settings(backend: Box<dyn AudioBackend>, settings: &crate::Settings) -> Self {
        let mut audio = Self::new(backend);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.muted = settings.muted;
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        log::info!("Audio {}", if muted { "muted" } else { "unmuted" });
    }
}
