//! Grid snapping for draw gestures.

use kurbo::Point;

/// Grid size for snapping (matches the visual dot lattice).
pub const GRID_SIZE: f64 = 20.0;

/// Round a coordinate to the nearest multiple of [`GRID_SIZE`].
pub fn snap(n: f64) -> f64 {
    (n / GRID_SIZE).round() * GRID_SIZE
}

/// Snap both coordinates of a point to the nearest grid intersection.
pub fn snap_point(point: Point) -> Point {
    Point::new(snap(point.x), snap(point.y))
}
