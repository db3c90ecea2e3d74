//! Laser projectiles

use std::sync::Arc;

use glam::Vec2;

use super::entity::{Entity, UpdateContext};
use super::mask::{Mask, Sprite};
use super::rect::Rect;
use crate::consts::LASER_SPEED;

/// A projectile travelling straight up at constant speed
#[derive(Debug, Clone)]
pub struct Laser {
    pub id: u32,
    pub center: Vec2,
    /// Upward speed (pixels/s)
    pub speed: f32,
    pub removed: bool,
    sprite: Arc<Sprite>,
}

impl Laser {
    pub fn new(id: u32, sprite: Arc<Sprite>, center: Vec2) -> Self {
        Self {
            id,
            center,
            speed: LASER_SPEED,
            removed: false,
            sprite,
        }
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl Entity for Laser {
    fn update(&mut self, dt: f32, _ctx: &UpdateContext) {
        self.center.y -= self.speed * dt;
        if self.rect().bottom() < 0.0 {
            self.removed = true;
        }
    }

    fn rect(&self) -> Rect {
        Rect::from_center(self.center, self.sprite.size())
    }

    fn mask(&self) -> &Mask {
        &self.sprite.mask
    }

    fn is_removed(&self) -> bool {
        self.removed
    }
}
