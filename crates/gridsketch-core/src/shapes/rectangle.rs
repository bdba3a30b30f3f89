//! Rectangle shape.

use super::{ShapeId, ShapeTrait, new_shape_id};
use crate::geometry::rect_contains;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Vec2};

/// An axis-aligned rectangle.
///
/// Width and height keep the sign of the drag that produced them;
/// [`ShapeTrait::bounds`] normalizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Anchor corner (drag start).
    pub position: Point,
    /// Signed width.
    pub width: f64,
    /// Signed height.
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle with a fresh id.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::with_id(new_shape_id(), Point::new(x, y), width, height)
    }

    pub(crate) fn with_id(id: ShapeId, position: Point, width: f64, height: f64) -> Self {
        Self {
            id,
            position,
            width,
            height,
        }
    }

    /// Normalized kurbo rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.width, self.height)).abs()
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Option<Rect> {
        Some(self.as_rect())
    }

    fn hit_test(&self, point: Point, _tolerance: f64) -> bool {
        rect_contains(self.as_rect(), point)
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
