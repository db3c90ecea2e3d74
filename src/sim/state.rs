//! Session state and core simulation types
//!
//! `GameState` is the single aggregate for one session: it owns the ship,
//! every laser and meteor, the spawn timer and the score. Only the frame step
//! and the collision pass insert into or remove from its collections.

use std::sync::Arc;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::laser::Laser;
use super::mask::Sprite;
use super::meteor::{Meteor, MeteorParams};
use super::ship::Ship;
use super::spawn::{SpawnScheduler, spawn_position};
use crate::consts::*;

/// Session lifecycle. `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    Ended { reason: EndReason },
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A meteor struck the ship
    ShipHit,
    /// External quit signal (window closed)
    Quit,
}

/// Things that happened during a frame, consumed by audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fire was pressed. The fire cue plays even when the shot was on cooldown.
    FirePressed { laser_spawned: bool },
    MeteorSpawned { id: u32 },
    /// One or more meteors were shot down this frame (at most one per frame)
    Explosion { meteors: u32 },
    SessionEnded { reason: EndReason },
}

/// Immutable sprite templates shared by every entity of a kind
#[derive(Debug, Clone)]
pub struct SpriteSet {
    pub ship: Arc<Sprite>,
    pub laser: Arc<Sprite>,
    pub meteor: Arc<Sprite>,
}

/// Per-session parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub seed: u64,
    /// Visible area (width, height)
    pub width: u32,
    pub height: u32,
    /// Per-pixel collisions; bounding rects when false
    pub mask_collisions: bool,
    pub spawn_period_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            width: WIN_WIDTH,
            height: WIN_HEIGHT,
            mask_collisions: true,
            spawn_period_ms: SPAWN_PERIOD_MS,
        }
    }
}

/// Running totals, reported when the session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub lasers_fired: u32,
    pub meteors_spawned: u32,
    pub meteors_destroyed: u32,
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Visible area (width, height)
    pub bounds: Vec2,
    pub mask_collisions: bool,
    /// Clock reading when the session started (ms)
    pub start_ms: u64,
    /// Clock reading of the latest frame (ms)
    pub now_ms: u64,
    /// Frames simulated so far
    pub frame: u64,
    /// Whole seconds survived
    pub score: u64,
    pub ship: Ship,
    /// Live lasers (ascending id)
    pub lasers: Vec<Laser>,
    /// Live meteors (ascending id)
    pub meteors: Vec<Meteor>,
    pub spawner: SpawnScheduler,
    /// Events produced since the last `take_events`
    pub events: Vec<GameEvent>,
    pub stats: SessionStats,
    sprites: SpriteSet,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Start a session at clock reading `start_ms` with the ship centered
    pub fn new(config: SessionConfig, sprites: SpriteSet, start_ms: u64) -> Self {
        let bounds = Vec2::new(config.width as f32, config.height as f32);
        log::info!(
            "Session started (seed {}, {}x{}, masks {})",
            config.seed,
            config.width,
            config.height,
            config.mask_collisions
        );
        Self {
            seed: config.seed,
            phase: GamePhase::Running,
            bounds,
            mask_collisions: config.mask_collisions,
            start_ms,
            now_ms: start_ms,
            frame: 0,
            score: 0,
            ship: Ship::new(Arc::clone(&sprites.ship), bounds / 2.0),
            lasers: Vec::new(),
            meteors: Vec::new(),
            spawner: SpawnScheduler::new(config.spawn_period_ms),
            events: Vec::new(),
            stats: SessionStats::default(),
            sprites,
            rng: Pcg32::seed_from_u64(config.seed),
            next_id: 1,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        match self.phase {
            GamePhase::Running => None,
            GamePhase::Ended { reason } => Some(reason),
        }
    }

    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Milliseconds since the session started
    pub fn elapsed_ms(&self) -> u64 {
        self.now_ms.saturating_sub(self.start_ms)
    }

    /// Recompute the score from elapsed time; frozen once the session ends
    pub fn update_score(&mut self) {
        if self.is_running() {
            self.score = (self.elapsed_ms() as f64 / 1000.0).round() as u64;
        }
    }

    /// Handle one fire press at the current time
    pub fn fire(&mut self) -> bool {
        let id = self.next_id;
        let laser = self.ship.shoot(self.now_ms, &self.sprites.laser, id);
        let laser_spawned = laser.is_some();
        if let Some(laser) = laser {
            self.next_id += 1;
            self.lasers.push(laser);
            self.stats.lasers_fired += 1;
        }
        self.events.push(GameEvent::FirePressed { laser_spawned });
        laser_spawned
    }

    /// Create a meteor at a random spawn position with random parameters
    pub fn spawn_meteor(&mut self) -> u32 {
        let anchor = spawn_position(&mut self.rng, self.bounds.x as u32);
        let params = MeteorParams::roll(&mut self.rng);
        self.insert_meteor(anchor, params)
    }

    /// Add a meteor with explicit placement and parameters
    pub fn insert_meteor(&mut self, anchor: Vec2, params: MeteorParams) -> u32 {
        let id = self.next_entity_id();
        self.meteors
            .push(Meteor::new(id, &self.sprites.meteor, anchor, params));
        self.stats.meteors_spawned += 1;
        self.events.push(GameEvent::MeteorSpawned { id });
        log::debug!(
            "Meteor {} spawned at ({:.0}, {:.0}) speed {} scale {:.2}",
            id,
            anchor.x,
            anchor.y,
            params.speed,
            params.scale
        );
        id
    }

    /// Move to the terminal state. Later calls are ignored.
    pub fn end(&mut self, reason: EndReason) {
        if !self.is_running() {
            return;
        }
        self.update_score();
        self.phase = GamePhase::Ended { reason };
        self.events.push(GameEvent::SessionEnded { reason });
        log::info!(
            "Session ended ({:?}) after {} frames, score {}",
            reason,
            self.frame,
            self.score
        );
    }

    /// Drain the events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_new_session() {
        let state = state(1);
        assert!(state.is_running());
        assert_eq!(state.ship.center, Vec2::new(640.0, 360.0));
        assert!(state.lasers.is_empty());
        assert!(state.meteors.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_fire_always_reports_press() {
        let mut state = state(1);
        assert!(state.fire());
        assert!(!state.fire());
        assert_eq!(state.lasers.len(), 1);
        assert_eq!(
            state.take_events(),
            vec![
                GameEvent::FirePressed {
                    laser_spawned: true
                },
                GameEvent::FirePressed {
                    laser_spawned: false
                },
            ]
        );
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_spawn_meteor_uses_spawn_row() {
        let mut state = state(42);
        let id = state.spawn_meteor();
        let meteor = &state.meteors[0];
        assert_eq!(meteor.id, id);
        assert_eq!(meteor.anchor.y, SPAWN_Y);
        assert!((100.0..=1180.0).contains(&meteor.anchor.x));
    }

    #[test]
    fn test_same_seed_same_meteors() {
        let mut a = state(99);
        let mut b = state(99);
        for _ in 0..10 {
            a.spawn_meteor();
            b.spawn_meteor();
        }
        for (ma, mb) in a.meteors.iter().zip(&b.meteors) {
            assert_eq!(ma.anchor, mb.anchor);
            assert_eq!(ma.speed, mb.speed);
            assert_eq!(ma.scale, mb.scale);
        }
    }

    #[test]
    fn test_score_rounds_and_freezes() {
        let mut state = state(1);
        state.now_ms = 1499;
        state.update_score();
        assert_eq!(state.score, 1);
        state.now_ms = 1500;
        state.update_score();
        assert_eq!(state.score, 2);

        state.end(EndReason::Quit);
        state.now_ms = 10_000;
        state.update_score();
        assert_eq!(state.score, 2);
        assert_eq!(state.end_reason(), Some(EndReason::Quit));

        // Terminal: a second end is ignored
        state.end(EndReason::ShipHit);
        assert_eq!(state.end_reason(), Some(EndReason::Quit));
    }
}
