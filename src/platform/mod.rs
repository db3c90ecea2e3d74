//! Platform abstraction layer
//!
//! Handles the environment-facing pieces the loop consumes:
//! - Time: per-frame `dt` and a monotonic millisecond clock, with frame pacing
//! - Input: discrete events (quit, fire) plus the pointer position

pub mod input;
pub mod time;

pub use input::{AutoPilot, InputEvent, InputSource, ScriptedInput};
pub use time::{ManualClock, SystemClock, TimeSource};
