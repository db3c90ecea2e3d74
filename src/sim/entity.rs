//! Shared entity capability
//!
//! Ship, Laser and Meteor form a closed set of entity kinds. They share this
//! trait for per-frame updates, bounds and collision masks; the session owns
//! each kind in its own collection.

use glam::Vec2;

use super::mask::Mask;
use super::rect::Rect;

/// Per-frame context handed to every `update`
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext {
    /// Current pointer position in screen space
    pub pointer: Vec2,
    /// Visible area (width, height)
    pub bounds: Vec2,
}

/// Something the simulation advances, draws and collides
pub trait Entity {
    /// Advance by `dt` seconds. May set the removal flag.
    fn update(&mut self, dt: f32, ctx: &UpdateContext);

    /// Bounding rectangle of the current visual
    fn rect(&self) -> Rect;

    /// Collision mask aligned with `rect()`
    fn mask(&self) -> &Mask;

    /// Set once the entity should leave the live set
    fn is_removed(&self) -> bool {
        false
    }
}

/// Whether two entities touch.
///
/// With `use_masks` the solid pixels must overlap; otherwise bounding
/// rectangles are compared.
pub fn overlaps<A: Entity + ?Sized, B: Entity + ?Sized>(a: &A, b: &B, use_masks: bool) -> bool {
    let (ra, rb) = (a.rect(), b.rect());
    if !ra.intersects(&rb) {
        return false;
    }
    if !use_masks {
        return true;
    }
    let offset = rb.pixel_origin() - ra.pixel_origin();
    a.mask().overlap(b.mask(), offset).is_some()
}
