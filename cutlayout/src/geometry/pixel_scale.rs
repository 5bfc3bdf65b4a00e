use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, Rect};

/// Conversion between engineering units (cm) and the pixel space in which cuts are placed.
///
/// The base occupies `[pad, pad + width * scale] × [pad, pad + height * scale]`, leaving a
/// border of `pad` pixels around it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PixelScale {
    /// Pixels per cm
    pub scale: f64,
    /// Border between the origin of the pixel space and the base, in pixels
    pub pad: f64,
}

impl PixelScale {
    pub const DEFAULT_SCALE: f64 = 5.0;
    pub const DEFAULT_PAD: f64 = 10.0;

    pub fn to_px(&self, cm: f64) -> f64 {
        cm * self.scale
    }

    /// Top-left corner of the base in pixel space
    pub fn origin(&self) -> Point {
        Point(self.pad, self.pad)
    }

    /// Pixel-space rectangle of a `width` × `height` (cm) region with its top-left corner at `top_left`.
    /// Both dimensions are expected to be positive.
    pub fn rect_at(&self, top_left: Point, width: f64, height: f64) -> Rect {
        let Point(x, y) = top_left;
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + self.to_px(width),
            y_max: y + self.to_px(height),
        }
    }

    /// Pixel-space bounding box of a base of `width` × `height` (cm).
    pub fn base_rect(&self, width: f64, height: f64) -> Rect {
        self.rect_at(self.origin(), width, height)
    }
}

impl Default for PixelScale {
    fn default() -> Self {
        Self {
            scale: Self::DEFAULT_SCALE,
            pad: Self::DEFAULT_PAD,
        }
    }
}
