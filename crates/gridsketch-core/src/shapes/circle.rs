//! Circle shape.

use super::{ShapeId, ShapeTrait, new_shape_id};
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape, Vec2};

/// A circle given by center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Radius (non-negative).
    pub radius: f64,
}

impl Circle {
    /// Create a new circle with a fresh id.
    pub fn new(center: Point, radius: f64) -> Self {
        Self::with_id(new_shape_id(), center, radius)
    }

    pub(crate) fn with_id(id: ShapeId, center: Point, radius: f64) -> Self {
        Self { id, center, radius }
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Option<Rect> {
        Some(Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        ))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // Inside counts as a fill hit; near the circumference as an outline hit.
        let dist = point.distance(self.center);
        dist < self.radius || (dist - self.radius).abs() <= tolerance
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}
