//! Game settings
//!
//! Read once at startup from a JSON file. Every field is optional in the file;
//! missing ones fall back to the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{SPAWN_MARGIN, SPAWN_PERIOD_MS, TARGET_FPS, WIN_HEIGHT, WIN_WIDTH};
use crate::sim::SessionConfig;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "METEOR_SHOOTER_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    /// Frame cap
    pub target_fps: u32,

    // === Gameplay ===
    /// Red outlines around every entity rect
    pub debug_overlay: bool,
    /// Per-pixel collisions (bounding rects when off)
    pub mask_collisions: bool,
    /// Fixed RNG seed; random per session when unset
    pub seed: Option<u64>,

    // === Assets ===
    /// Directory holding ship.png, laser.png, meteor.png and background.png.
    /// Generated placeholders are used when unset.
    pub asset_dir: Option<PathBuf>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Headless demo ===
    /// Frames before the autopilot quits (0 = play until hit)
    pub demo_frames: u32,
    /// Autopilot fires every N frames
    pub demo_fire_every: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WIN_WIDTH,
            window_height: WIN_HEIGHT,
            target_fps: TARGET_FPS,

            debug_overlay: true,
            mask_collisions: true,
            seed: None,

            asset_dir: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            demo_frames: 3600,
            demo_fire_every: 12,
        }
    }
}

impl Settings {
    /// Load from the file named by `METEOR_SHOOTER_SETTINGS`, or defaults.
    /// The result is always validated.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_or_default(std::env::var_os(SETTINGS_ENV))
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<impl AsRef<Path>>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let settings = Self::default();
                settings.validate()?;
                log::info!("Using default settings");
                Ok(settings)
            }
        }
    }

    /// Load and validate a settings file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let min_width = 2 * SPAWN_MARGIN as u32;
        if self.window_width <= min_width {
            return Err(SettingsError::Invalid {
                field: "window_width",
                reason: format!(
                    "{} leaves no room between the {}px spawn margins",
                    self.window_width, SPAWN_MARGIN
                ),
            });
        }
        if self.window_height == 0 {
            return Err(SettingsError::Invalid {
                field: "window_height",
                reason: "must be positive".to_string(),
            });
        }
        if self.target_fps == 0 {
            return Err(SettingsError::Invalid {
                field: "target_fps",
                reason: "must be positive".to_string(),
            });
        }
        for (field, vol) in [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
            ("music_volume", self.music_volume),
        ] {
            if !vol.is_finite() {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("{vol} is not a number"),
                });
            }
        }
        Ok(())
    }

    /// Simulation parameters for one session
    pub fn session_config(&self, seed: u64) -> SessionConfig {
        SessionConfig {
            seed,
            width: self.window_width,
            height: self.window_height,
            mask_collisions: self.mask_collisions,
            spawn_period_ms: SPAWN_PERIOD_MS,
        }
    }
}
