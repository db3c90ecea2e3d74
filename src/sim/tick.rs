//! Variable-step frame simulation
//!
//! One call advances a running session by one frame, in order: commands
//! (quit, fire), spawn timer, entity updates, meteor shape derivation,
//! collisions, score. `dt` is applied as measured; there is no fixed-step
//! accumulator.

use glam::Vec2;

use super::collision;
use super::entity::{Entity, UpdateContext};
use super::state::{EndReason, GameState};

/// Commands gathered for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in screen space
    pub pointer: Vec2,
    /// Number of fire presses this frame
    pub fire_presses: u32,
    /// Window closed
    pub quit: bool,
}

/// Advance the session by one frame of `dt` seconds ending at clock reading
/// `now_ms`. Does nothing once the session has ended.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now_ms: u64) {
    if !state.is_running() {
        return;
    }

    let frame_ms = now_ms.saturating_sub(state.now_ms);
    state.now_ms = now_ms;
    state.frame += 1;

    if input.quit {
        state.end(EndReason::Quit);
        return;
    }

    for _ in 0..input.fire_presses {
        state.fire();
    }

    for _ in 0..state.spawner.advance(frame_ms) {
        state.spawn_meteor();
    }

    let ctx = UpdateContext {
        pointer: input.pointer,
        bounds: state.bounds,
    };
    state.ship.update(dt, &ctx);
    for laser in &mut state.lasers {
        laser.update(dt, &ctx);
    }
    for meteor in &mut state.meteors {
        meteor.update(dt, &ctx);
    }
    state.lasers.retain(|l| !l.is_removed());
    state.meteors.retain(|m| !m.is_removed());

    for meteor in &mut state.meteors {
        meteor.derive_shape();
    }

    collision::resolve(state);

    state.update_score();

    log::trace!(
        "Frame {}: dt {:.4}, {} lasers, {} meteors",
        state.frame,
        dt,
        state.lasers.len(),
        state.meteors.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::test_support::*;
    use crate::sim::state::GameEvent;

    const STEP_MS: u64 = 10;
    const STEP_DT: f32 = 0.01;

    /// Run frames of STEP_MS until the clock reads `until_ms`
    fn run_until(state: &mut GameState, input: &TickInput, until_ms: u64) {
        while state.now_ms < until_ms {
            let now = state.now_ms + STEP_MS;
            tick(state, input, STEP_DT, now);
        }
    }

    fn pointer_at(x: f32, y: f32) -> TickInput {
        TickInput {
            pointer: Vec2::new(x, y),
            ..Default::default()
        }
    }

    #[test]
    fn test_500ms_idle_spawns_one_meteor() {
        let mut state = state(3);
        let idle = pointer_at(640.0, 360.0);

        run_until(&mut state, &idle, 490);
        assert!(state.meteors.is_empty());

        run_until(&mut state, &idle, 500);
        assert_eq!(state.meteors.len(), 1);
        assert!(state.lasers.is_empty());
        assert!(state.is_running());
    }

    #[test]
    fn test_fire_cooldown_over_frames() {
        let mut state = state(3);
        let idle = pointer_at(640.0, 600.0);
        let fire = TickInput {
            fire_presses: 1,
            ..idle.clone()
        };

        tick(&mut state, &fire, 0.0, 0);
        assert_eq!(state.lasers.len(), 1);

        run_until(&mut state, &idle, 240);
        tick(&mut state, &fire, STEP_DT, 250);
        assert_eq!(state.lasers.len(), 1);

        run_until(&mut state, &idle, 300);
        tick(&mut state, &fire, STEP_DT, 310);
        assert_eq!(state.lasers.len(), 2);

        let presses = state
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::FirePressed { .. }))
            .count();
        assert_eq!(presses, 3);
    }

    #[test]
    fn test_ship_follows_pointer_each_frame() {
        let mut state = state(3);
        tick(&mut state, &pointer_at(10.0, 20.0), STEP_DT, 10);
        assert_eq!(state.ship.center, Vec2::new(10.0, 20.0));
        tick(&mut state, &pointer_at(900.0, 700.0), STEP_DT, 20);
        assert_eq!(state.ship.center, Vec2::new(900.0, 700.0));
    }

    #[test]
    fn test_laser_fired_at_ship_center_leaves_screen() {
        let mut state = quiet_state(3);
        let fire = TickInput {
            fire_presses: 1,
            ..pointer_at(200.0, 100.0)
        };
        tick(&mut state, &fire, 0.0, 0);
        assert_eq!(state.lasers[0].center, Vec2::new(640.0, 360.0));

        // 360px up plus half the sprite takes a bit over 1.2s at 300px/s
        run_until(&mut state, &pointer_at(200.0, 100.0), 1300);
        assert!(state.lasers.is_empty());
    }

    #[test]
    fn test_ship_hit_stops_simulation() {
        let mut state = state(3);
        let input = pointer_at(600.0, 300.0);
        tick(&mut state, &input, STEP_DT, 10);
        state.insert_meteor(Vec2::new(600.0, 270.0), still_params());

        tick(&mut state, &input, STEP_DT, 20);
        assert!(!state.is_running());
        assert_eq!(state.end_reason(), Some(EndReason::ShipHit));

        let frame = state.frame;
        let anchor = state.meteors[0].anchor;
        let moved = pointer_at(50.0, 50.0);
        run_until(&mut state, &moved, 20);
        tick(&mut state, &moved, STEP_DT, 1000);
        assert_eq!(state.frame, frame);
        assert_eq!(state.meteors[0].anchor, anchor);
        assert_eq!(state.ship.center, Vec2::new(600.0, 300.0));
    }

    #[test]
    fn test_meteor_on_laser_spawn_point_destroyed_next_pass() {
        let mut state = state(3);
        let fire = TickInput {
            fire_presses: 1,
            ..pointer_at(640.0, 600.0)
        };
        tick(&mut state, &fire, 0.0, 0);
        let spawn_point = state.lasers[0].center;

        // Ship moves away; meteor dropped right on the laser's spawn point
        let away = pointer_at(100.0, 650.0);
        let meteor = state.insert_meteor(spawn_point - Vec2::new(0.0, 25.0), still_params());
        tick(&mut state, &away, STEP_DT, 10);

        assert!(state.meteors.iter().all(|m| m.id != meteor));
        assert!(state.lasers.is_empty());
        assert!(state.is_running());
        assert_eq!(state.stats.meteors_destroyed, 1);
    }

    #[test]
    fn test_quit_ends_session() {
        let mut state = state(3);
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &quit, STEP_DT, 10);
        assert_eq!(state.end_reason(), Some(EndReason::Quit));
    }

    #[test]
    fn test_meteor_shapes_current_after_tick() {
        let mut state = state(3);
        let idle = pointer_at(640.0, 700.0);
        run_until(&mut state, &idle, 1600);
        assert!(!state.meteors.is_empty());
        for meteor in &state.meteors {
            assert!(meteor.is_shape_current());
            assert!((meteor.rect().midtop() - meteor.anchor).length() < 1e-3);
        }
    }

    #[test]
    fn test_score_tracks_elapsed_seconds() {
        let mut state = quiet_state(3);
        let idle = pointer_at(640.0, 700.0);
        run_until(&mut state, &idle, 2400);
        assert_eq!(state.score, 2);
        run_until(&mut state, &idle, 2600);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_determinism() {
        let mut a = state(99999);
        let mut b = state(99999);
        let input = pointer_at(640.0, 700.0);
        for i in 1..=200u64 {
            tick(&mut a, &input, STEP_DT, i * STEP_MS);
            tick(&mut b, &input, STEP_DT, i * STEP_MS);
        }
        assert_eq!(a.frame, b.frame);
        assert_eq!(a.meteors.len(), b.meteors.len());
        for (ma, mb) in a.meteors.iter().zip(&b.meteors) {
            assert_eq!(ma.anchor, mb.anchor);
            assert_eq!(ma.rotation, mb.rotation);
        }
    }
}
