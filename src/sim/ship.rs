//! The player's ship

use std::sync::Arc;

use glam::Vec2;

use super::entity::{Entity, UpdateContext};
use super::laser::Laser;
use super::mask::{Mask, Sprite};
use super::rect::Rect;
use crate::consts::SHIP_FIRE_COOLDOWN_MS;

/// Pointer-driven player ship (one per session)
#[derive(Debug, Clone)]
pub struct Ship {
    /// Center of the sprite, mirrors the pointer every frame
    pub center: Vec2,
    /// Time of the last successful shot (ms); `None` until the first one
    pub last_fire_ms: Option<u64>,
    /// Minimum gap between shots (ms)
    pub cooldown_ms: u64,
    sprite: Arc<Sprite>,
}

impl Ship {
    pub fn new(sprite: Arc<Sprite>, center: Vec2) -> Self {
        Self {
            center,
            last_fire_ms: None,
            cooldown_ms: SHIP_FIRE_COOLDOWN_MS,
            sprite,
        }
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Whether a shot at `now_ms` would produce a laser
    pub fn can_fire(&self, now_ms: u64) -> bool {
        match self.last_fire_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.cooldown_ms,
        }
    }

    /// Try to fire. Returns a laser at the ship's center when the cooldown
    /// has elapsed; otherwise nothing happens.
    pub fn shoot(&mut self, now_ms: u64, laser_sprite: &Arc<Sprite>, id: u32) -> Option<Laser> {
        if !self.can_fire(now_ms) {
            return None;
        }
        self.last_fire_ms = Some(now_ms);
        Some(Laser::new(id, Arc::clone(laser_sprite), self.center))
    }
}

impl Entity for Ship {
    fn update(&mut self, _dt: f32, ctx: &UpdateContext) {
        self.center = ctx.pointer;
    }

    fn rect(&self) -> Rect {
        Rect::from_center(self.center, self.sprite.size())
    }

    fn mask(&self) -> &Mask {
        &self.sprite.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn sprite(w: u32, h: u32) -> Arc<Sprite> {
        Arc::new(Sprite::new(RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))))
    }

    #[test]
    fn test_update_follows_pointer() {
        let mut ship = Ship::new(sprite(40, 30), Vec2::new(640.0, 360.0));
        let ctx = UpdateContext {
            pointer: Vec2::new(12.0, 700.0),
            bounds: Vec2::new(1280.0, 720.0),
        };
        ship.update(0.016, &ctx);
        assert_eq!(ship.center, Vec2::new(12.0, 700.0));
        assert_eq!(ship.rect().center(), ship.center);
    }

    #[test]
    fn test_first_shot_always_allowed() {
        let mut ship = Ship::new(sprite(40, 30), Vec2::new(100.0, 100.0));
        let laser = ship.shoot(0, &sprite(4, 20), 1).expect("first shot fires");
        assert_eq!(laser.center, Vec2::new(100.0, 100.0));
        assert_eq!(ship.last_fire_ms, Some(0));
    }

    #[test]
    fn test_cooldown_gates_shots() {
        let laser = sprite(4, 20);
        let mut ship = Ship::new(sprite(40, 30), Vec2::ZERO);

        assert!(ship.shoot(1000, &laser, 1).is_some());
        assert!(ship.shoot(1250, &laser, 2).is_none());
        // Exactly the cooldown is still too soon
        assert!(ship.shoot(1300, &laser, 3).is_none());
        // A blocked shot does not reset the timer
        assert_eq!(ship.last_fire_ms, Some(1000));
        assert!(ship.shoot(1301, &laser, 4).is_some());
        assert_eq!(ship.last_fire_ms, Some(1301));
    }
}
