//! Line shape.

use super::{ShapeId, ShapeTrait, new_shape_id};
use crate::geometry::point_to_segment_dist;
use kurbo::{BezPath, Line as KurboLine, Point, Rect, Vec2};

/// A single straight segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line with a fresh id.
    pub fn new(start: Point, end: Point) -> Self {
        Self::with_id(new_shape_id(), start, end)
    }

    pub(crate) fn with_id(id: ShapeId, start: Point, end: Point) -> Self {
        Self { id, start, end }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start, self.end)
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Option<Rect> {
        Some(Rect::from_points(self.start, self.end))
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_segment_dist(point, self.start, self.end) <= tolerance
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_creation() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((line.length() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_on_line() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.hit_test(Point::new(50.0, 0.0), 1.0));
        assert!(line.hit_test(Point::new(50.0, 2.0), 5.0));
        assert!(!line.hit_test(Point::new(50.0, 20.0), 5.0));
    }

    #[test]
    fn test_hit_test_beyond_endpoint() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.hit_test(Point::new(108.0, 0.0), 10.0));
        assert!(!line.hit_test(Point::new(111.0, 0.0), 10.0));
    }

    #[test]
    fn test_zero_length_line() {
        let line = Line::new(Point::new(20.0, 20.0), Point::new(20.0, 20.0));
        assert!(line.hit_test(Point::new(26.0, 28.0), 10.0));
        assert!(line.bounds().unwrap().is_zero_area());
    }

    #[test]
    fn test_bounds() {
        let line = Line::new(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        assert_eq!(line.bounds().unwrap(), Rect::new(10.0, 20.0, 50.0, 80.0));
    }
}
