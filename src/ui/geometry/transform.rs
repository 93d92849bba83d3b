//! Artwork-to-surface coordinate normalization
//!
//! The shield outlines are authored in a fixed coordinate space. Every
//! draw call recomputes a uniform scale and a translation that center the
//! artwork on the live surface; nothing is persisted between frames, so
//! resizes cannot accumulate error.

use iced::{Point, Rectangle, Size, Vector};

/// Fraction of the surface the artwork is scaled to occupy
const FILL_FACTOR: f32 = 0.5;

/// Scale-then-translate mapping from artwork space to surface space.
///
/// Applied inside a saved frame scope (`Frame::with_save`) so the
/// transform never leaks past a single drawing block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor
    pub ratio: f32,
    /// Translation applied in artwork space, before scaling
    pub offset: Vector,
}

impl ViewTransform {
    /// Map an artwork-space point to surface space.
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            (point.x + self.offset.x) * self.ratio,
            (point.y + self.offset.y) * self.ratio,
        )
    }
}

/// Compute the transform that centers `bounds` on a surface of `size`.
pub fn fit(size: Size, bounds: Rectangle) -> ViewTransform {
    let ratio = scale_ratio(size, bounds);
    ViewTransform {
        ratio,
        offset: offsets(size, bounds, ratio),
    }
}

/// Uniform scale: smaller surface extent over larger artwork extent.
fn scale_ratio(size: Size, bounds: Rectangle) -> f32 {
    let surface_extent = size.width.min(size.height);
    let artwork_extent = bounds.width.max(bounds.height);
    (surface_extent / artwork_extent) * FILL_FACTOR
}

/// Translation that puts the bounds center at the surface center.
fn offsets(size: Size, bounds: Rectangle, ratio: f32) -> Vector {
    Vector::new(
        size.width / (2.0 * ratio) - (bounds.width / 2.0 + bounds.x),
        size.height / (2.0 * ratio) - (bounds.height / 2.0 + bounds.y),
    )
}
