//! Axis-aligned bounding boxes and the overlap test.
use raylib::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn square(pos: Vector2, size: f32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    /// True only for a nonzero-area intersection; shared edges don't count.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}
