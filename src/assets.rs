//! Sprite templates
//!
//! Loaded once at startup and shared read-only afterwards. Meteors derive
//! scaled and rotated copies; the templates themselves never change.

use std::path::Path;
use std::sync::Arc;

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::sim::{Sprite, SpriteSet};

pub const SHIP_FILE: &str = "ship.png";
pub const LASER_FILE: &str = "laser.png";
pub const METEOR_FILE: &str = "meteor.png";
pub const BACKGROUND_FILE: &str = "background.png";

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),
}

/// Every visual the game draws
#[derive(Debug, Clone)]
pub struct Assets {
    pub sprites: SpriteSet,
    pub background: RgbaImage,
}

impl Assets {
    /// Load the four images from `dir`
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        let assets = Self {
            sprites: SpriteSet {
                ship: Arc::new(Sprite::new(load_image(&dir.join(SHIP_FILE))?)),
                laser: Arc::new(Sprite::new(load_image(&dir.join(LASER_FILE))?)),
                meteor: Arc::new(Sprite::new(load_image(&dir.join(METEOR_FILE))?)),
            },
            background: load_image(&dir.join(BACKGROUND_FILE))?,
        };
        log::info!("Loaded assets from {}", dir.display());
        Ok(assets)
    }

    /// Generated stand-ins so the game runs without image files
    pub fn placeholder(width: u32, height: u32) -> Self {
        Self {
            sprites: SpriteSet {
                ship: Arc::new(Sprite::new(ship_image(64, 48))),
                laser: Arc::new(Sprite::new(RgbaImage::from_pixel(
                    6,
                    36,
                    Rgba([255, 80, 80, 255]),
                ))),
                meteor: Arc::new(Sprite::new(meteor_image(96))),
            },
            background: RgbaImage::from_pixel(width.max(1), height.max(1), Rgba([14, 10, 30, 255])),
        }
    }
}

fn load_image(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.is_file() {
        return Err(AssetError::NotFound(path.display().to_string()));
    }
    log::debug!("Loading image from: {:?}", path);
    let img = image::open(path)
        .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path.display(), e)))?;
    Ok(img.to_rgba8())
}

/// Upward-pointing triangle filling the image
fn ship_image(w: u32, h: u32) -> RgbaImage {
    let half = w as f32 / 2.0;
    RgbaImage::from_fn(w, h, |x, y| {
        let cx = x as f32 + 0.5 - half;
        let reach = half * (y as f32 + 0.5) / h as f32;
        if cx.abs() <= reach {
            Rgba([220, 220, 235, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Disc inscribed in a square, corners transparent
fn meteor_image(size: u32) -> RgbaImage {
    let r = size as f32 / 2.0;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - r;
        let dy = y as f32 + 0.5 - r;
        if dx * dx + dy * dy <= (r - 2.0) * (r - 2.0) {
            Rgba([130, 110, 95, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}
