//! Game loop driver
//!
//! Owns one session and the platform pieces around it. Each `step` samples
//! the clock, drains input, advances the simulation, plays the frame's
//! sound cues and hands a draw list to the renderer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::assets::Assets;
use crate::audio::{AudioBackend, AudioManager};
use crate::platform::{InputEvent, InputSource, TimeSource};
use crate::renderer::{Frame, Renderer};
use crate::settings::Settings;
use crate::sim::{EndReason, GameState, TickInput, tick};

/// Result of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u64,
    pub frames: u64,
    pub end_reason: Option<EndReason>,
    pub meteors_destroyed: u32,
    pub lasers_fired: u32,
}

impl SessionSummary {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            frames: state.frame,
            end_reason: state.end_reason(),
            meteors_destroyed: state.stats.meteors_destroyed,
            lasers_fired: state.stats.lasers_fired,
        }
    }
}

pub struct GameLoop<T, I, R, B>
where
    T: TimeSource,
    I: InputSource,
    R: Renderer,
    B: AudioBackend,
{
    state: GameState,
    clock: T,
    input: I,
    renderer: R,
    audio: AudioManager<B>,
    assets: Arc<Assets>,
    settings: Settings,
}

impl<T, I, R, B> GameLoop<T, I, R, B>
where
    T: TimeSource,
    I: InputSource,
    R: Renderer,
    B: AudioBackend,
{
    /// Start a session now and kick off the music loop
    pub fn new(
        settings: Settings,
        assets: Arc<Assets>,
        seed: u64,
        clock: T,
        input: I,
        renderer: R,
        backend: B,
    ) -> Self {
        let state = GameState::new(
            settings.session_config(seed),
            assets.sprites.clone(),
            clock.now_ms(),
        );
        let mut audio = AudioManager::from_settings(backend, &settings);
        audio.start_music();
        Self {
            state,
            clock,
            input,
            renderer,
            audio,
            assets,
            settings,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &AudioManager<B> {
        &self.audio
    }

    /// Run one frame. Returns false once the session has ended.
    pub fn step(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }

        let dt = self.clock.tick(self.settings.target_fps);
        let now_ms = self.clock.now_ms();

        let mut input = TickInput::default();
        for event in self.input.poll_events() {
            match event {
                InputEvent::Quit => input.quit = true,
                InputEvent::Fire => input.fire_presses += 1,
            }
        }
        input.pointer = self.input.pointer();

        tick(&mut self.state, &input, dt, now_ms);

        let events = self.state.take_events();
        self.audio.handle_events(&events);

        let frame = Frame::build(
            &self.state,
            &self.assets.background,
            self.settings.debug_overlay,
        );
        self.renderer.draw(&frame);

        self.state.is_running()
    }

    /// Step until the session ends
    pub fn run(&mut self) -> SessionSummary {
        while self.step() {}
        let summary = SessionSummary::from_state(&self.state);
        log::info!(
            "Session over after {} frames: score {}, {} meteors destroyed, {} lasers fired ({:?})",
            summary.frames,
            summary.score,
            summary.meteors_destroyed,
            summary.lasers_fired,
            summary.end_reason
        );
        summary
    }
}
