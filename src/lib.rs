//! Meteor Shooter - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Frame simulation (entities, spawning, collisions, session state)
//! - `game`: Loop driver wiring time, input, audio and rendering around `sim`
//! - `renderer`: Per-frame draw description handed to an external back end
//! - `platform`: Time and input sources
//! - `assets`: Sprite templates (loaded from disk or generated)
//! - `settings`: Data-driven configuration

pub mod assets;
pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::Assets;
pub use error::Error;
pub use game::{GameLoop, SessionSummary};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Visible area
    pub const WIN_WIDTH: u32 = 1280;
    pub const WIN_HEIGHT: u32 = 720;
    pub const TITLE: &str = "Meteor Shooter";
    /// Frame cap
    pub const TARGET_FPS: u32 = 60;

    /// Minimum time between two lasers (milliseconds)
    pub const SHIP_FIRE_COOLDOWN_MS: u64 = 300;

    /// Laser speed (pixels/s, upward)
    pub const LASER_SPEED: f32 = 300.0;

    /// Meteor size multiplier range (uniform)
    pub const METEOR_SCALE_MIN: f32 = 0.5;
    pub const METEOR_SCALE_MAX: f32 = 1.5;
    /// Horizontal drift range; vertical component is always 1
    pub const METEOR_DRIFT_MAX: f32 = 0.5;
    /// Fall speed range (pixels/s, integer draw)
    pub const METEOR_SPEED_MIN: i32 = 200;
    pub const METEOR_SPEED_MAX: i32 = 600;
    /// Rotation speed range (degrees/s, integer draw)
    pub const METEOR_SPIN_MIN: i32 = 20;
    pub const METEOR_SPIN_MAX: i32 = 50;

    /// Spawn period (milliseconds)
    pub const SPAWN_PERIOD_MS: u64 = 500;
    /// Horizontal keep-out from each screen edge for spawns
    pub const SPAWN_MARGIN: i32 = 100;
    /// Mid-top anchor height of a fresh meteor (above the screen)
    pub const SPAWN_Y: f32 = -100.0;

    /// Alpha above which a pixel counts as solid for collisions
    pub const MASK_ALPHA_THRESHOLD: u8 = 127;

    /// Score label placement (offset from bottom edge) and box padding
    pub const SCORE_BOTTOM_OFFSET: f32 = 50.0;
    pub const SCORE_BOX_PADDING: f32 = 20.0;
    /// Score label glyph height; width is estimated at 0.6 of it per glyph
    pub const SCORE_FONT_SIZE: f32 = 50.0;
    /// Stroke width of the score box and debug outlines
    pub const OUTLINE_WIDTH: f32 = 2.0;
}
