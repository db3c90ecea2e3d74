//! Falling, spinning meteors
//!
//! Simulation state (anchor, rotation) is advanced by `update`. The rotated
//! visual and its mask are derived from that state by `derive_shape`, which
//! the frame step runs for every live meteor before collisions.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, UpdateContext};
use super::mask::{Mask, Sprite};
use super::rect::Rect;
use crate::consts::*;

/// Per-instance randomized parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeteorParams {
    /// Size multiplier applied to the template
    pub scale: f32,
    /// Fall direction; y is always 1 and the vector is not normalized
    pub direction: Vec2,
    /// Pixels/s along `direction`
    pub speed: f32,
    /// Degrees/s
    pub rotation_speed: f32,
}

impl MeteorParams {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scale: rng.random_range(METEOR_SCALE_MIN..=METEOR_SCALE_MAX),
            direction: Vec2::new(rng.random_range(-METEOR_DRIFT_MAX..=METEOR_DRIFT_MAX), 1.0),
            speed: rng.random_range(METEOR_SPEED_MIN..=METEOR_SPEED_MAX) as f32,
            rotation_speed: rng.random_range(METEOR_SPIN_MIN..=METEOR_SPIN_MAX) as f32,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Meteor {
    pub id: u32,
    /// Mid-top point of the unrotated silhouette; the fall line follows it
    pub anchor: Vec2,
    pub direction: Vec2,
    pub speed: f32,
    pub scale: f32,
    /// Accumulated rotation (degrees, unbounded)
    pub rotation: f32,
    pub rotation_speed: f32,
    pub removed: bool,
    /// Template scaled once at creation
    base: Sprite,
    /// `base` rotated by `shape_rotation`
    shape: Sprite,
    shape_rotation: f32,
}

impl Meteor {
    pub fn new(id: u32, template: &Sprite, anchor: Vec2, params: MeteorParams) -> Self {
        let base = template.scaled(params.scale);
        let shape = base.clone();
        Self {
            id,
            anchor,
            direction: params.direction,
            speed: params.speed,
            scale: params.scale,
            rotation: 0.0,
            rotation_speed: params.rotation_speed,
            removed: false,
            base,
            shape,
            shape_rotation: 0.0,
        }
    }

    /// Rebuild the rotated visual and mask if the rotation moved since the
    /// last derive. The rect stays anchored on `anchor`.
    pub fn derive_shape(&mut self) {
        if self.is_shape_current() {
            return;
        }
        self.shape = self.base.rotated(self.rotation);
        self.shape_rotation = self.rotation;
    }

    /// Whether the visual and mask match the current rotation
    pub fn is_shape_current(&self) -> bool {
        self.shape_rotation == self.rotation
    }

    /// Current (rotated) visual
    pub fn sprite(&self) -> &Sprite {
        &self.shape
    }

    /// Scaled, unrotated visual
    pub fn base_sprite(&self) -> &Sprite {
        &self.base
    }
}

impl Entity for Meteor {
    fn update(&mut self, dt: f32, ctx: &UpdateContext) {
        self.anchor += self.direction * self.speed * dt;
        if self.rect().top() >= ctx.bounds.y {
            self.removed = true;
            return;
        }
        self.rotation += self.rotation_speed * dt;
    }

    fn rect(&self) -> Rect {
        Rect::from_midtop(self.anchor, self.shape.size())
    }

    fn mask(&self) -> &Mask {
        &self.shape.mask
    }

    fn is_removed(&self) -> bool {
        self.removed
    }
}
