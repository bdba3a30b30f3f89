//! Shape definitions for the drawing surface.

mod circle;
mod line;
mod pen;
mod rectangle;

pub use circle::Circle;
pub use line::Line;
pub use pen::Pen;
pub use rectangle::Rectangle;

use kurbo::{BezPath, Point, Rect, Vec2};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Generate a fresh identifier for a committed shape.
pub(crate) fn new_shape_id() -> ShapeId {
    Uuid::new_v4()
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the normalized bounding box in world coordinates.
    fn bounds(&self) -> Option<Rect>;

    /// Check if a point (in world coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Get the path representation for rendering.
    fn to_path(&self) -> BezPath;

    /// Shift every coordinate by `delta`.
    fn translate(&mut self, delta: Vec2);
}

/// A committed (or preview) shape.
///
/// Every consumer matches exhaustively, so a new variant must be handled
/// at each site.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Pen(Pen),
    Rect(Rectangle),
    Circle(Circle),
    Line(Line),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Pen(s) => s.id(),
            Shape::Rect(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::Line(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Shape::Pen(s) => s.bounds(),
            Shape::Rect(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Shape::Pen(s) => s.hit_test(point, tolerance),
            Shape::Rect(s) => s.hit_test(point, tolerance),
            Shape::Circle(s) => s.hit_test(point, tolerance),
            Shape::Line(s) => s.hit_test(point, tolerance),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Shape::Pen(s) => s.to_path(),
            Shape::Rect(s) => s.to_path(),
            Shape::Circle(s) => s.to_path(),
            Shape::Line(s) => s.to_path(),
        }
    }

    /// Return a copy shifted by (dx, dy). The id is preserved.
    pub fn translated(&self, dx: f64, dy: f64) -> Shape {
        let mut shape = self.clone();
        let delta = Vec2::new(dx, dy);
        match &mut shape {
            Shape::Pen(s) => s.translate(delta),
            Shape::Rect(s) => s.translate(delta),
            Shape::Circle(s) => s.translate(delta),
            Shape::Line(s) => s.translate(delta),
        }
        shape
    }

    /// Short lowercase name, matching the tool that draws it.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Pen(_) => "pen",
            Shape::Rect(_) => "rect",
            Shape::Circle(_) => "circle",
            Shape::Line(_) => "line",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shapes() -> Vec<Shape> {
        vec![
            Shape::Pen(Pen::from_points(vec![
                Point::new(0.0, 0.0),
                Point::new(20.0, 40.0),
                Point::new(60.0, -20.0),
            ])),
            Shape::Rect(Rectangle::new(10.0, 20.0, -30.0, 40.0)),
            Shape::Circle(Circle::new(Point::new(5.0, 5.0), 12.5)),
            Shape::Line(Line::new(Point::new(-3.0, 4.0), Point::new(7.0, 8.0))),
        ]
    }

    #[test]
    fn test_translate_roundtrip() {
        for shape in sample_shapes() {
            let moved = shape.translated(40.0, -60.0);
            assert_ne!(moved, shape);
            assert_eq!(moved.translated(-40.0, 60.0), shape);
        }
    }

    #[test]
    fn test_translate_keeps_id() {
        for shape in sample_shapes() {
            assert_eq!(shape.translated(1.0, 2.0).id(), shape.id());
        }
    }

    #[test]
    fn test_translate_moves_bounds() {
        for shape in sample_shapes() {
            let before = shape.bounds().unwrap();
            let after = shape.translated(20.0, 40.0).bounds().unwrap();
            assert!((after.x0 - before.x0 - 20.0).abs() < 1e-10);
            assert!((after.y0 - before.y0 - 40.0).abs() < 1e-10);
            assert!((after.width() - before.width()).abs() < 1e-10);
            assert!((after.height() - before.height()).abs() < 1e-10);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let shapes = sample_shapes();
        for (i, a) in shapes.iter().enumerate() {
            for b in &shapes[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn test_kind_name() {
        let names: Vec<_> = sample_shapes().iter().map(Shape::kind_name).collect();
        assert_eq!(names, ["pen", "rect", "circle", "line"]);
    }
}
