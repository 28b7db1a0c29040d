use serde::Serialize;

use super::vec2::Vec2;

/// Axis selector for the per-axis collision passes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Axis-aligned rectangle: top-left position plus size.
///
/// Sizes are not validated; zero or negative sizes are kept as given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.x_max() > self.x
            && other.x < self.x_max()
            && other.y_max() > self.y
            && other.y < self.y_max()
    }

    /// Minimum coordinate along `axis`
    #[inline]
    pub fn min_on(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Size along `axis`
    #[inline]
    pub fn extent_on(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Shift the rectangle along `axis`
    #[inline]
    pub fn translate(&mut self, axis: Axis, delta: f32) {
        match axis {
            Axis::X => self.x += delta,
            Axis::Y => self.y += delta,
        }
    }
}
