//! Sound cue selection and volume mixing.
//!
//! The simulation reports [`GameEvent`]s; the mixer maps each one to a
//! [`SoundEffect`] at the effective volume. Actual playback is a backend
//! concern, which keeps this module as testable as the simulation.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// The three sounds the game knows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball struck a paddle
    Bounce,
    /// A point was scored mid-match
    Score,
    /// A player reached the winning score
    GameOver,
}

/// Volume state and event-to-sound mapping
#[derive(Debug, Clone)]
pub struct AudioMixer {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioMixer {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut mixer = Self::new();
        mixer.set_master_volume(settings.master_volume);
        mixer.set_sfx_volume(settings.sfx_volume);
        mixer.muted = settings.muted;
        mixer
    }

    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Pick the sound for an event, or `None` when nothing would be heard
    pub fn cue(&self, event: &GameEvent) -> Option<(SoundEffect, f32)> {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            return None;
        }
        let effect = match event {
            GameEvent::PaddleHit { .. } => SoundEffect::Bounce,
            GameEvent::PointScored { .. } => SoundEffect::Score,
            GameEvent::MatchOver { .. } => SoundEffect::GameOver,
        };
        Some((effect, volume))
    }
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self::new()
    }
}
