//! Freehand pen path.

use super::{ShapeId, ShapeTrait, new_shape_id};
use crate::geometry::{point_to_polyline_dist, points_bounds};
use kurbo::{BezPath, Point, Rect, Vec2};

/// An open polyline drawn with the pen tool.
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub(crate) id: ShapeId,
    /// Points in drawing order.
    pub points: Vec<Point>,
}

impl Pen {
    /// Create from existing points with a fresh id.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self::with_id(new_shape_id(), points)
    }

    pub(crate) fn with_id(id: ShapeId, points: Vec<Point>) -> Self {
        Self { id, points }
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ShapeTrait for Pen {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Option<Rect> {
        points_bounds(&self.points)
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        point_to_polyline_dist(point, &self.points) <= tolerance
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            path.move_to(*first);
            for point in points {
                path.line_to(*point);
            }
        }
        path
    }

    fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pen_has_no_bounds() {
        let pen = Pen::from_points(Vec::new());
        assert!(pen.is_empty());
        assert!(pen.bounds().is_none());
        assert!(pen.to_path().elements().is_empty());
    }

    #[test]
    fn test_bounds() {
        let pen = Pen::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(50.0, 100.0),
        ]);
        assert_eq!(pen.bounds().unwrap(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_hit_test() {
        let pen = Pen::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ]);
        assert!(pen.hit_test(Point::new(50.0, 5.0), 10.0));
        assert!(pen.hit_test(Point::new(95.0, 60.0), 10.0));
        assert!(!pen.hit_test(Point::new(50.0, 50.0), 10.0));
    }

    #[test]
    fn test_single_point_never_hits() {
        let pen = Pen::from_points(vec![Point::new(10.0, 10.0)]);
        assert!(!pen.hit_test(Point::new(10.0, 10.0), 10.0));
    }

    #[test]
    fn test_translate_moves_every_point() {
        let mut pen = Pen::from_points(vec![Point::new(0.0, 0.0), Point::new(20.0, 20.0)]);
        pen.translate(Vec2::new(5.0, -5.0));
        assert_eq!(pen.points, vec![Point::new(5.0, -5.0), Point::new(25.0, 15.0)]);
    }
}
