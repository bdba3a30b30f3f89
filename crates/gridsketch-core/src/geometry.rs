//! Geometry kernel: distances, bounds and hit-testing.

use crate::shapes::Shape;
use kurbo::{Point, Rect, Vec2};

/// Hit radius in screen pixels. Divided by zoom before testing in world space.
pub const HIT_RADIUS: f64 = 10.0;

/// World-space hit tolerance for the given zoom level.
///
/// Keeps the clickable radius constant on screen regardless of zoom.
pub fn hit_tolerance(zoom: f64) -> f64 {
    HIT_RADIUS / zoom
}

/// Distance from a point to a line segment (a→b).
///
/// The projection is clamped to the segment; a degenerate segment
/// (`a == b`) falls back to the point distance.
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = a + seg * t;
    point.distance(proj)
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
///
/// Returns infinity for fewer than two points.
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Closed-interval containment (edges count as inside).
pub fn rect_contains(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Axis-aligned bounds of a point set, `None` when empty.
pub fn points_bounds(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let init = Rect::from_points(*first, *first);
    Some(points[1..].iter().fold(init, |r, p| r.union_pt(*p)))
}

/// Axis-aligned bounding box of a shape.
///
/// `None` only for an empty pen path; callers must guard.
pub fn bounds_of(shape: &Shape) -> Option<Rect> {
    shape.bounds()
}

/// Hit-test a world point against a shape at the given zoom level.
pub fn hit_test(point: Point, shape: &Shape, zoom: f64) -> bool {
    shape.hit_test(point, hit_tolerance(zoom))
}

/// Vector from a bounding box origin to a point.
pub(crate) fn offset_from_origin(point: Point, bounds: Rect) -> Vec2 {
    point - bounds.origin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Line, Pen, Rectangle};

    #[test]
    fn test_segment_distance_perpendicular() {
        let d = point_to_segment_dist(
            Point::new(50.0, 10.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!((d - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_segment_distance_clamped_to_endpoint() {
        let d = point_to_segment_dist(
            Point::new(103.0, 4.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!((d - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_segment_distance_degenerate() {
        let a = Point::new(10.0, 10.0);
        let d = point_to_segment_dist(Point::new(13.0, 14.0), a, a);
        assert!((d - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_polyline_distance_needs_two_points() {
        assert!(point_to_polyline_dist(Point::ZERO, &[Point::ZERO]).is_infinite());
    }

    #[test]
    fn test_rect_contains_is_closed() {
        let rect = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert!(rect_contains(rect, Point::new(50.0, 50.0)));
        assert!(rect_contains(rect, Point::new(0.0, 25.0)));
        assert!(!rect_contains(rect, Point::new(50.1, 25.0)));
    }

    #[test]
    fn test_points_bounds() {
        assert!(points_bounds(&[]).is_none());
        let b = points_bounds(&[Point::new(5.0, -5.0), Point::new(-5.0, 15.0)]).unwrap();
        assert_eq!(b, Rect::new(-5.0, -5.0, 5.0, 15.0));
    }

    #[test]
    fn test_bounds_of_each_kind() {
        let rect = Shape::Rect(Rectangle::new(40.0, 30.0, -20.0, -10.0));
        assert_eq!(bounds_of(&rect), Some(Rect::new(20.0, 20.0, 40.0, 30.0)));
        let circle = Shape::Circle(Circle::new(Point::new(10.0, 10.0), 5.0));
        assert_eq!(bounds_of(&circle), Some(Rect::new(5.0, 5.0, 15.0, 15.0)));
        let line = Shape::Line(Line::new(Point::new(8.0, 2.0), Point::new(1.0, 9.0)));
        assert_eq!(bounds_of(&line), Some(Rect::new(1.0, 2.0, 8.0, 9.0)));
        assert_eq!(bounds_of(&Shape::Pen(Pen::from_points(Vec::new()))), None);
    }

    #[test]
    fn test_hit_tolerance_scales_with_zoom() {
        assert!((hit_tolerance(1.0) - 10.0).abs() < f64::EPSILON);
        assert!((hit_tolerance(2.0) - 5.0).abs() < f64::EPSILON);
        assert!((hit_tolerance(0.5) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rect_hit_center_and_far_point() {
        let rect = Shape::Rect(Rectangle::new(10.0, 20.0, 30.0, 40.0));
        assert!(hit_test(Point::new(25.0, 40.0), &rect, 1.0));
        assert!(!hit_test(Point::new(25.0 + 130.0, 40.0 + 140.0), &rect, 1.0));
    }

    #[test]
    fn test_circle_outline_hit_depends_on_zoom() {
        let circle = Shape::Circle(Circle::new(Point::ZERO, 50.0));
        // 8 units outside the circumference.
        let p = Point::new(58.0, 0.0);
        assert!(hit_test(p, &circle, 1.0));
        assert!(!hit_test(p, &circle, 2.0));
    }
}
