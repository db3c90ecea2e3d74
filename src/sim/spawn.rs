//! Fixed-interval meteor spawning
//!
//! The scheduler is an elapsed-time accumulator checked once per frame. It
//! never adapts to the number of live meteors or the session length.

use glam::Vec2;
use rand::Rng;

use crate::consts::{SPAWN_MARGIN, SPAWN_PERIOD_MS, SPAWN_Y};

#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    period_ms: u64,
    elapsed_ms: u64,
}

impl Default for SpawnScheduler {
    fn default() -> Self {
        Self::new(SPAWN_PERIOD_MS)
    }
}

impl SpawnScheduler {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Add a frame's worth of time; returns how many spawns are due
    pub fn advance(&mut self, frame_ms: u64) -> u32 {
        self.elapsed_ms += frame_ms;
        let due = self.elapsed_ms / self.period_ms;
        self.elapsed_ms %= self.period_ms;
        due as u32
    }

    /// Time until the next spawn (ms)
    pub fn remaining_ms(&self) -> u64 {
        self.period_ms - self.elapsed_ms
    }
}

/// Mid-top anchor for a new meteor: an integer x in
/// `[SPAWN_MARGIN, width - SPAWN_MARGIN]`, fixed height above the screen.
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, width: u32) -> Vec2 {
    let lo = SPAWN_MARGIN;
    let hi = (width as i32 - SPAWN_MARGIN).max(lo);
    Vec2::new(rng.random_range(lo..=hi) as f32, SPAWN_Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_fires_once_per_period() {
        let mut spawner = SpawnScheduler::default();
        let fired: u32 = (0..49).map(|_| spawner.advance(10)).sum();
        assert_eq!(fired, 0);
        assert_eq!(spawner.remaining_ms(), 10);
        assert_eq!(spawner.advance(10), 1);
        assert_eq!(spawner.remaining_ms(), 500);
    }

    #[test]
    fn test_long_frame_catches_up() {
        let mut spawner = SpawnScheduler::new(500);
        assert_eq!(spawner.advance(1600), 3);
        assert_eq!(spawner.advance(400), 1);
    }

    #[test]
    fn test_narrow_screen_collapses_to_margin() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(spawn_position(&mut rng, 150), Vec2::new(100.0, SPAWN_Y));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn prop_spawn_position_in_bounds(seed in any::<u64>(), width in 200u32..4000) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let pos = spawn_position(&mut rng, width);
            prop_assert!(pos.x >= 100.0);
            prop_assert!(pos.x <= (width - 100) as f32);
            prop_assert_eq!(pos.x.fract(), 0.0);
            prop_assert_eq!(pos.y, SPAWN_Y);
        }
    }
}
