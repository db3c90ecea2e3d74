//! Input sources
//!
//! The loop drains discrete events once per frame and reads the pointer on
//! demand. Window back ends translate their own events into `InputEvent`.

use std::collections::VecDeque;

use glam::Vec2;

/// Discrete per-frame input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed / quit requested
    Quit,
    /// Fire key pressed (space)
    Fire,
}

pub trait InputSource {
    /// Events that arrived since the previous poll, in order
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Current pointer position in screen space
    fn pointer(&self) -> Vec2;
}

/// One scripted frame of input
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrame {
    pub events: Vec<InputEvent>,
    /// New pointer position; keeps the previous one when `None`
    pub pointer: Option<Vec2>,
}

/// Replays a fixed list of frames, then goes idle (or quits)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<ScriptedFrame>,
    pointer: Vec2,
    quit_when_done: bool,
}

impl ScriptedInput {
    pub fn new(pointer: Vec2) -> Self {
        Self {
            frames: VecDeque::new(),
            pointer,
            quit_when_done: false,
        }
    }

    /// Emit `Quit` once the script runs out
    pub fn quit_when_done(mut self) -> Self {
        self.quit_when_done = true;
        self
    }

    pub fn push(&mut self, frame: ScriptedFrame) -> &mut Self {
        self.frames.push_back(frame);
        self
    }

    /// Queue `count` frames with no events
    pub fn idle(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.frames.push_back(ScriptedFrame::default());
        }
        self
    }

    /// Queue one frame with a fire press
    pub fn fire(&mut self) -> &mut Self {
        self.push(ScriptedFrame {
            events: vec![InputEvent::Fire],
            pointer: None,
        })
    }

    /// Queue one frame that moves the pointer
    pub fn move_to(&mut self, pointer: Vec2) -> &mut Self {
        self.push(ScriptedFrame {
            events: Vec::new(),
            pointer: Some(pointer),
        })
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        match self.frames.pop_front() {
            Some(frame) => {
                if let Some(p) = frame.pointer {
                    self.pointer = p;
                }
                frame.events
            }
            None if self.quit_when_done => vec![InputEvent::Quit],
            None => Vec::new(),
        }
    }

    fn pointer(&self) -> Vec2 {
        self.pointer
    }
}

/// Headless demo player: sweeps the pointer along the bottom of the screen
/// and fires on a fixed frame interval. Quits after `max_frames` (0 = never).
#[derive(Debug, Clone)]
pub struct AutoPilot {
    bounds: Vec2,
    frame: u32,
    fire_every: u32,
    max_frames: u32,
}

impl AutoPilot {
    pub fn new(bounds: Vec2, fire_every: u32, max_frames: u32) -> Self {
        Self {
            bounds,
            frame: 0,
            fire_every: fire_every.max(1),
            max_frames,
        }
    }
}

impl InputSource for AutoPilot {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frame += 1;
        if self.max_frames > 0 && self.frame > self.max_frames {
            return vec![InputEvent::Quit];
        }
        if self.frame.is_multiple_of(self.fire_every) {
            vec![InputEvent::Fire]
        } else {
            Vec::new()
        }
    }

    fn pointer(&self) -> Vec2 {
        let t = self.frame as f32 / 60.0;
        let half = self.bounds.x / 2.0;
        let swing = (half - 120.0).max(0.0);
        Vec2::new(half + swing * (t * 0.8).sin(), self.bounds.y - 80.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replay() {
        let mut input = ScriptedInput::new(Vec2::new(5.0, 5.0));
        input.fire().idle(1).move_to(Vec2::new(20.0, 30.0));
        assert_eq!(input.remaining(), 3);

        assert_eq!(input.poll_events(), vec![InputEvent::Fire]);
        assert_eq!(input.pointer(), Vec2::new(5.0, 5.0));
        assert!(input.poll_events().is_empty());
        assert!(input.poll_events().is_empty());
        assert_eq!(input.pointer(), Vec2::new(20.0, 30.0));
        // Script done, stays idle
        assert!(input.poll_events().is_empty());
    }

    #[test]
    fn test_scripted_quit_when_done() {
        let mut input = ScriptedInput::new(Vec2::ZERO).quit_when_done();
        input.idle(1);
        assert!(input.poll_events().is_empty());
        assert_eq!(input.poll_events(), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_autopilot_fires_and_quits() {
        let mut pilot = AutoPilot::new(Vec2::new(1280.0, 720.0), 3, 6);
        let polls: Vec<_> = (0..7).map(|_| pilot.poll_events()).collect();
        let fires = polls
            .iter()
            .filter(|e| e.contains(&InputEvent::Fire))
            .count();
        assert_eq!(fires, 2);
        assert_eq!(polls[6], vec![InputEvent::Quit]);

        let p = pilot.pointer();
        assert!((120.0..=1160.0).contains(&p.x));
        assert_eq!(p.y, 640.0);
    }
}
