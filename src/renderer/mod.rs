//! Rendering interface
//!
//! The game hands a `Frame` to a `Renderer` once per iteration. Window back
//! ends rasterize it; the headless one just counts.

pub mod frame;

pub use frame::{Color, DrawItem, Frame, Outline, RED, Visual, WHITE};

pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);
}

/// Renderer with no output device
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last_items: usize,
    last_score: String,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw items in the latest frame (score + lasers + meteors + ship)
    pub fn last_items(&self) -> usize {
        self.last_items
    }

    pub fn last_score(&self) -> &str {
        &self.last_score
    }
}

impl Renderer for HeadlessRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        self.last_items = frame.items.len();
        if let Some((text, _)) = frame.label().filter(|(t, _)| *t != self.last_score) {
            self.last_score = text.to_string();
        }
        log::trace!(
            "Frame {}: {} sprites, {} outlines, {:?}",
            self.frames,
            frame.sprite_count(),
            frame.outlines.len(),
            self.last_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::test_support::quiet_state;
    use image::RgbaImage;

    #[test]
    fn test_headless_counts_frames() {
        let state = quiet_state(3);
        let bg = RgbaImage::new(1, 1);
        let mut renderer = HeadlessRenderer::new();
        for _ in 0..3 {
            renderer.draw(&Frame::build(&state, &bg, true));
        }
        assert_eq!(renderer.frames(), 3);
        // Score label and ship
        assert_eq!(renderer.last_items(), 2);
        assert_eq!(renderer.last_score(), "Score: 0");
    }
}
