//! Audio cues
//!
//! The simulation only reports events; this module maps them to sound cues
//! and forwards them to whatever back end the platform provides. Cues are
//! fire-and-forget.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Fire pressed (plays even when the shot is on cooldown)
    LaserFired,
    /// At least one meteor destroyed this frame
    Explosion,
    /// Background track, looped
    Music,
}

impl SoundCue {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::FirePressed { .. } => Some(SoundCue::LaserFired),
            GameEvent::Explosion { .. } => Some(SoundCue::Explosion),
            GameEvent::MeteorSpawned { .. } | GameEvent::SessionEnded { .. } => None,
        }
    }
}

/// Device-side playback
pub trait AudioBackend {
    /// Play a cue once at `volume` (0.0 - 1.0)
    fn play(&mut self, cue: SoundCue, volume: f32);
    /// Start a cue looping forever at `volume`
    fn play_looped(&mut self, cue: SoundCue, volume: f32);
}

/// Back end that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, cue: SoundCue, volume: f32) {
        log::debug!("Sound {:?} at volume {:.2}", cue, volume);
    }

    fn play_looped(&mut self, cue: SoundCue, volume: f32) {
        log::debug!("Looping {:?} at volume {:.2}", cue, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music_started: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            music_started: false,
        }
    }

    /// Manager with volumes and mute taken from settings
    pub fn from_settings(backend: B, settings: &Settings) -> Self {
        let mut manager = Self::new(backend);
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_music_volume(settings.music_volume);
        manager.set_muted(settings.muted);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn effective_volume(&self, cue: SoundCue) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = match cue {
            SoundCue::Music => self.music_volume,
            SoundCue::LaserFired | SoundCue::Explosion => self.sfx_volume,
        };
        self.master_volume * channel
    }

    /// Play a one-shot cue
    pub fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume(cue);
        if vol <= 0.0 {
            return;
        }
        self.backend.play(cue, vol);
    }

    /// Start the background loop. Only the first call has an effect.
    pub fn start_music(&mut self) {
        if self.music_started {
            return;
        }
        self.music_started = true;
        let vol = self.effective_volume(SoundCue::Music);
        self.backend.play_looped(SoundCue::Music, vol);
    }

    /// Play the cues for a frame's events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for cue in events.iter().filter_map(SoundCue::for_event) {
            self.play(cue);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Records every cue it is asked to play
    #[derive(Debug, Default)]
    pub struct RecordingBackend {
        pub played: Vec<(SoundCue, f32)>,
        pub looped: Vec<(SoundCue, f32)>,
    }

    impl AudioBackend for RecordingBackend {
        fn play(&mut self, cue: SoundCue, volume: f32) {
            self.played.push((cue, volume));
        }

        fn play_looped(&mut self, cue: SoundCue, volume: f32) {
            self.looped.push((cue, volume));
        }
    }
}
