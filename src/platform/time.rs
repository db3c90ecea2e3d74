//! Frame timing

use std::thread;
use std::time::{Duration, Instant};

/// Supplies frame deltas and a monotonic clock
pub trait TimeSource {
    /// Finish the current frame: wait as needed to stay at or below
    /// `target_fps`, then return the seconds elapsed since the previous call.
    fn tick(&mut self, target_fps: u32) -> f32;

    /// Milliseconds since the clock was created
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by `Instant`; sleeps to cap the frame rate
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
    last_frame: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            last_frame: now,
        }
    }
}

impl TimeSource for SystemClock {
    fn tick(&mut self, target_fps: u32) -> f32 {
        if target_fps > 0 {
            let budget = Duration::from_secs_f64(1.0 / target_fps as f64);
            let spent = self.last_frame.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt
    }

    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock that advances a fixed step per frame and never sleeps
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: u64,
    step_ms: u64,
}

impl ManualClock {
    pub fn new(step_ms: u64) -> Self {
        Self { now_ms: 0, step_ms }
    }

    /// Clock stepping at the frame period of `fps` (rounded to whole ms)
    pub fn at_fps(fps: u32) -> Self {
        Self::new((1000 / fps.max(1)) as u64)
    }

    /// Jump forward without producing a frame (simulates a stall)
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

impl TimeSource for ManualClock {
    fn tick(&mut self, _target_fps: u32) -> f32 {
        self.now_ms += self.step_ms;
        self.step_ms as f32 / 1000.0
    }

    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}
