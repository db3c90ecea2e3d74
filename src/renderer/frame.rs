//! Per-frame draw list
//!
//! Built from the session state after the simulation step. A back end draws
//! the background, then `items` in order, then `outlines` on top.

use glam::Vec2;
use image::RgbaImage;

use crate::consts::*;
use crate::sim::{Entity, GameState, Rect};

/// RGBA color
pub type Color = [u8; 4];

pub const WHITE: Color = [255, 255, 255, 255];
pub const RED: Color = [255, 0, 0, 255];

/// What to draw inside an item's rect
#[derive(Debug, Clone, PartialEq)]
pub enum Visual<'a> {
    Image(&'a RgbaImage),
    /// Text centered in the rect
    Text { text: String, size: f32, color: Color },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem<'a> {
    pub visual: Visual<'a>,
    pub rect: Rect,
}

/// Unfilled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub rect: Rect,
    pub color: Color,
    pub width: f32,
    pub corner_radius: f32,
}

#[derive(Debug, Clone)]
pub struct Frame<'a> {
    /// Visible area (width, height)
    pub size: Vec2,
    pub background: &'a RgbaImage,
    pub items: Vec<DrawItem<'a>>,
    pub outlines: Vec<Outline>,
}

impl<'a> Frame<'a> {
    /// Draw list for the current state: score, lasers, meteors, ship
    pub fn build(state: &'a GameState, background: &'a RgbaImage, debug_overlay: bool) -> Self {
        let score_text = format!("Score: {}", state.score);
        let score_rect = label_rect(
            &score_text,
            Vec2::new(state.bounds.x / 2.0, state.bounds.y - SCORE_BOTTOM_OFFSET),
        );

        let mut items = Vec::with_capacity(state.lasers.len() + state.meteors.len() + 2);
        items.push(DrawItem {
            visual: Visual::Text {
                text: score_text,
                size: SCORE_FONT_SIZE,
                color: WHITE,
            },
            rect: score_rect,
        });
        for laser in &state.lasers {
            items.push(DrawItem {
                visual: Visual::Image(&laser.sprite().image),
                rect: laser.rect(),
            });
        }
        for meteor in &state.meteors {
            items.push(DrawItem {
                visual: Visual::Image(&meteor.sprite().image),
                rect: meteor.rect(),
            });
        }
        items.push(DrawItem {
            visual: Visual::Image(&state.ship.sprite().image),
            rect: state.ship.rect(),
        });

        let mut outlines = vec![Outline {
            rect: score_rect.inflate(SCORE_BOX_PADDING, SCORE_BOX_PADDING),
            color: WHITE,
            width: OUTLINE_WIDTH,
            corner_radius: 2.0,
        }];
        if debug_overlay {
            let rects = std::iter::once(state.ship.rect())
                .chain(state.meteors.iter().map(Entity::rect))
                .chain(state.lasers.iter().map(Entity::rect));
            outlines.extend(rects.map(|rect| Outline {
                rect,
                color: RED,
                width: OUTLINE_WIDTH,
                corner_radius: 0.0,
            }));
        }

        Self {
            size: state.bounds,
            background,
            items,
            outlines,
        }
    }

    /// First text item and its rect (the score label)
    pub fn label(&self) -> Option<(&str, Rect)> {
        self.items.iter().find_map(|item| match &item.visual {
            Visual::Text { text, .. } => Some((text.as_str(), item.rect)),
            Visual::Image(_) => None,
        })
    }

    /// Items drawn from images (lasers, meteors, ship)
    pub fn sprite_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.visual, Visual::Image(_)))
            .count()
    }
}

/// Extent of a single-line label centered on `center`
fn label_rect(text: &str, center: Vec2) -> Rect {
    let glyphs = text.chars().count() as f32;
    let size = Vec2::new(glyphs * SCORE_FONT_SIZE * 0.6, SCORE_FONT_SIZE);
    Rect::from_center(center, size)
}
