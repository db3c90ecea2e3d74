//! Per-pixel collision masks and the sprite images they are built from
//!
//! A mask marks which pixels of a sprite are solid (alpha above a threshold),
//! so overlap tests ignore the transparent padding around a silhouette.
//! Sprites are immutable templates; scaling and rotation produce new sprites
//! with freshly built masks.

use glam::IVec2;
use image::{Rgba, RgbaImage, imageops};

use crate::consts::MASK_ALPHA_THRESHOLD;

/// Solid/empty bitmap matching a sprite's pixel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// Build a mask from an image: a pixel is solid when alpha > `threshold`
    pub fn from_image(image: &RgbaImage, threshold: u8) -> Self {
        let (width, height) = image.dimensions();
        let bits = image.pixels().map(|p| p.0[3] > threshold).collect();
        Self {
            width,
            height,
            bits,
        }
    }

    /// A fully solid mask (every pixel set)
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is solid; out of range is empty
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[(y as u32 * self.width + x as u32) as usize]
    }

    /// Number of solid pixels
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// First solid pixel shared with `other`, in this mask's coordinates.
    ///
    /// `offset` is the position of `other`'s top-left corner relative to
    /// this mask's top-left corner.
    pub fn overlap(&self, other: &Mask, offset: IVec2) -> Option<IVec2> {
        let x0 = offset.x.max(0);
        let y0 = offset.y.max(0);
        let x1 = (offset.x + other.width as i32).min(self.width as i32);
        let y1 = (offset.y + other.height as i32).min(self.height as i32);

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - offset.x, y - offset.y) {
                    return Some(IVec2::new(x, y));
                }
            }
        }
        None
    }
}

/// An image together with its collision mask
#[derive(Debug, Clone)]
pub struct Sprite {
    pub image: RgbaImage,
    pub mask: Mask,
}

impl Sprite {
    pub fn new(image: RgbaImage) -> Self {
        let mask = Mask::from_image(&image, MASK_ALPHA_THRESHOLD);
        Self { image, mask }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width() as f32, self.height() as f32)
    }

    /// Uniformly scaled copy (nearest neighbour, size truncated to whole pixels)
    pub fn scaled(&self, factor: f32) -> Self {
        let w = ((self.width() as f32 * factor) as u32).max(1);
        let h = ((self.height() as f32 * factor) as u32).max(1);
        Self::new(imageops::resize(&self.image, w, h, imageops::FilterType::Nearest))
    }

    /// Rotated copy, counter-clockwise as drawn on screen
    pub fn rotated(&self, degrees: f32) -> Self {
        Self::new(rotate(&self.image, degrees))
    }
}

/// Rotate an image about its center, counter-clockwise on screen.
///
/// The output grows to the bounding box of the rotated source; uncovered
/// pixels are fully transparent. Sampling is nearest neighbour so the
/// silhouette (and therefore the mask) never picks up blended edges.
pub fn rotate(image: &RgbaImage, degrees: f32) -> RgbaImage {
    let (w, h) = (image.width() as f32, image.height() as f32);
    let (sin, cos) = degrees.to_radians().sin_cos();

    let out_w = ((w * cos.abs() + h * sin.abs()) - 1e-3).ceil().max(1.0);
    let out_h = ((w * sin.abs() + h * cos.abs()) - 1e-3).ceil().max(1.0);

    RgbaImage::from_fn(out_w as u32, out_h as u32, |ox, oy| {
        let dx = ox as f32 + 0.5 - out_w / 2.0;
        let dy = oy as f32 + 0.5 - out_h / 2.0;
        let sx = dx * cos - dy * sin + w / 2.0;
        let sy = dx * sin + dy * cos + h / 2.0;
        if sx < 0.0 || sy < 0.0 || sx >= w || sy >= h {
            Rgba([0, 0, 0, 0])
        } else {
            *image.get_pixel(sx as u32, sy as u32)
        }
    })
}
