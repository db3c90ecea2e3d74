//! Frame simulation module
//!
//! All gameplay logic lives here. This module stays free of platform code:
//! - Time arrives as `dt` plus a millisecond clock reading
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or input dependencies

pub mod collision;
pub mod entity;
pub mod laser;
pub mod mask;
pub mod meteor;
pub mod rect;
pub mod ship;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, laser_collisions, resolve, ship_collision};
pub use entity::{Entity, UpdateContext, overlaps};
pub use laser::Laser;
pub use mask::{Mask, Sprite};
pub use meteor::{Meteor, MeteorParams};
pub use rect::Rect;
pub use ship::Ship;
pub use spawn::{SpawnScheduler, spawn_position};
pub use state::{
    EndReason, GameEvent, GamePhase, GameState, SessionConfig, SessionStats, SpriteSet,
};
pub use tick::{TickInput, tick};
