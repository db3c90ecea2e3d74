//! Per-frame collision pass
//!
//! Runs once per frame after every entity has been updated and every meteor
//! shape re-derived. Two checks, both against the positions at the start of
//! the pass:
//! - ship vs each meteor: any overlap ends the session
//! - each meteor vs each laser: every entity in an overlapping pair is removed
//!
//! Meteors and lasers are scanned in ascending id order. A laser touching two
//! meteors takes both down; a meteor touching two lasers consumes both.

use super::entity::overlaps;
use super::laser::Laser;
use super::meteor::Meteor;
use super::ship::Ship;
use super::state::{EndReason, GameEvent, GameState};

/// What the pass found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// First meteor (by id) touching the ship
    pub ship_hit_by: Option<u32>,
    pub destroyed_meteors: Vec<u32>,
    pub destroyed_lasers: Vec<u32>,
}

/// First meteor overlapping the ship
pub fn ship_collision(ship: &Ship, meteors: &[Meteor], use_masks: bool) -> Option<u32> {
    meteors
        .iter()
        .filter(|m| !m.removed)
        .find(|m| overlaps(ship, *m, use_masks))
        .map(|m| m.id)
}

/// All meteor/laser pairs that overlap, as (meteor ids, laser ids) without
/// duplicates, each list in ascending id order
pub fn laser_collisions(meteors: &[Meteor], lasers: &[Laser], use_masks: bool) -> (Vec<u32>, Vec<u32>) {
    let mut hit_meteors = Vec::new();
    let mut hit_lasers = Vec::new();

    for meteor in meteors.iter().filter(|m| !m.removed) {
        for laser in lasers.iter().filter(|l| !l.removed) {
            if overlaps(meteor, laser, use_masks) {
                if hit_meteors.last() != Some(&meteor.id) {
                    hit_meteors.push(meteor.id);
                }
                if !hit_lasers.contains(&laser.id) {
                    hit_lasers.push(laser.id);
                }
            }
        }
    }
    hit_lasers.sort_unstable();
    (hit_meteors, hit_lasers)
}

/// Run the full pass on a session: end it on a ship hit, drop destroyed
/// meteors and lasers, and emit one explosion event if anything was shot down.
pub fn resolve(state: &mut GameState) -> CollisionReport {
    let use_masks = state.mask_collisions;
    let ship_hit_by = ship_collision(&state.ship, &state.meteors, use_masks);
    let (destroyed_meteors, destroyed_lasers) =
        laser_collisions(&state.meteors, &state.lasers, use_masks);

    if let Some(id) = ship_hit_by {
        log::debug!("Ship hit by meteor {}", id);
        state.end(EndReason::ShipHit);
    }

    if !destroyed_meteors.is_empty() {
        for meteor in &mut state.meteors {
            if destroyed_meteors.contains(&meteor.id) {
                meteor.removed = true;
            }
        }
        for laser in &mut state.lasers {
            if destroyed_lasers.contains(&laser.id) {
                laser.removed = true;
            }
        }
        state.meteors.retain(|m| !m.removed);
        state.lasers.retain(|l| !l.removed);

        let count = destroyed_meteors.len() as u32;
        state.stats.meteors_destroyed += count;
        state.events.push(GameEvent::Explosion { meteors: count });
        log::debug!(
            "Destroyed meteors {:?} with lasers {:?}",
            destroyed_meteors,
            destroyed_lasers
        );
    }

    CollisionReport {
        ship_hit_by,
        destroyed_meteors,
        destroyed_lasers,
    }
}
