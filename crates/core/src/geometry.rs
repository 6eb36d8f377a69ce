use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open content rectangle in image pixel coordinates:
/// `left ≤ x < right`, `top ≤ y < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        BoundingBox { left, top, right, bottom }
    }

    /// The box covering an entire `width` × `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        BoundingBox { left: 0, top: 0, right: width, bottom: height }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// A degenerate box encloses no pixels and cannot be cropped.
    pub fn is_degenerate(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Whether this box lies entirely inside a `width` × `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        !self.is_degenerate() && self.right <= width && self.bottom <= height
    }

    /// Expand by `margin` pixels on every side, clamped to the image bounds.
    pub fn padded(&self, margin: u32, width: u32, height: u32) -> Self {
        BoundingBox {
            left: self.left.saturating_sub(margin),
            top: self.top.saturating_sub(margin),
            right: (self.right + margin).min(width),
            bottom: (self.bottom + margin).min(height),
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})..({}, {})", self.left, self.top, self.right, self.bottom)
    }
}
