//! Camera module for pan/zoom transforms.

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Minimum allowed zoom level.
pub const MIN_ZOOM: f64 = 0.1;
/// Maximum allowed zoom level.
pub const MAX_ZOOM: f64 = 5.0;
/// Factor applied by explicit zoom-in / zoom-out requests.
pub const ZOOM_STEP: f64 = 1.2;
/// Factor applied per wheel tick when scrolling down (zoom out).
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
/// Factor applied per wheel tick when scrolling up (zoom in).
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Clamp to the allowed range, then round to two decimal places.
fn normalize_zoom(zoom: f64) -> f64 {
    (zoom.clamp(MIN_ZOOM, MAX_ZOOM) * 100.0).round() / 100.0
}

/// Camera manages the view transform for the canvas.
///
/// `screen = world * zoom + pan` and `world = (screen - pan) / zoom`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Current translation offset in screen pixels.
    pub pan: Vec2,
    /// Current zoom level, always within [`MIN_ZOOM`, `MAX_ZOOM`].
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// World-to-screen affine for rendering.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Convert a screen point to world coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        Point::new(
            (screen_point.x - self.pan.x) / self.zoom,
            (screen_point.y - self.pan.y) / self.zoom,
        )
    }

    /// Convert a world point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        Point::new(
            world_point.x * self.zoom + self.pan.x,
            world_point.y * self.zoom + self.pan.y,
        )
    }

    /// World-space rectangle visible in a viewport of the given size.
    pub fn visible_world_rect(&self, viewport: Size) -> Rect {
        Rect::from_points(
            self.screen_to_world(Point::ZERO),
            self.screen_to_world(Point::new(viewport.width, viewport.height)),
        )
    }

    /// Set the zoom level directly (clamped and rounded), keeping pan.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = normalize_zoom(zoom);
    }

    /// Step zoom in by [`ZOOM_STEP`]. Pan is left alone.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    /// Step zoom out by [`ZOOM_STEP`]. Pan is left alone.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Zoom the camera, keeping the given screen point fixed.
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) {
        let world_point = self.screen_to_world(screen_point);
        let new_zoom = normalize_zoom(self.zoom * factor);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        self.zoom = new_zoom;
        // Solve pan so world_point maps back to screen_point.
        self.pan = Vec2::new(
            screen_point.x - world_point.x * new_zoom,
            screen_point.y - world_point.y * new_zoom,
        );
    }

    /// Apply one wheel tick at the cursor. Positive `delta_y` zooms out,
    /// negative zooms in, zero does nothing.
    ///
    /// Returns whether the camera changed.
    pub fn wheel_zoom(&mut self, cursor: Point, delta_y: f64) -> bool {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT
        } else if delta_y < 0.0 {
            WHEEL_ZOOM_IN
        } else {
            return false;
        };
        let before = self.clone();
        self.zoom_at(cursor, factor);
        *self != before
    }

    /// Set pan so that `anchor` (captured as screen position minus pan at
    /// gesture start) follows the pointer.
    pub fn pan_to(&mut self, screen_point: Point, anchor: Vec2) {
        self.pan = screen_point.to_vec2() - anchor;
    }

    /// Reset camera to zoom 1 and zero pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera() {
        let camera = Camera::new();
        assert_eq!(camera.pan, Vec2::ZERO);
        assert!((camera.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_world_identity() {
        let camera = Camera::new();
        let screen = Point::new(100.0, 200.0);
        let world = camera.screen_to_world(screen);
        assert!((world.x - screen.x).abs() < f64::EPSILON);
        assert!((world.y - screen.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_world_with_pan_and_zoom() {
        let camera = Camera {
            pan: Vec2::new(50.0, 100.0),
            zoom: 2.0,
        };
        let world = camera.screen_to_world(Point::new(150.0, 300.0));
        assert!((world.x - 50.0).abs() < f64::EPSILON);
        assert!((world.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transform_matches_world_to_screen() {
        let camera = Camera {
            pan: Vec2::new(-35.0, 12.0),
            zoom: 1.44,
        };
        let world = Point::new(17.0, -250.0);
        let a = camera.transform() * world;
        let b = camera.world_to_screen(world);
        assert!((a.x - b.x).abs() < 1e-10);
        assert!((a.y - b.y).abs() < 1e-10);
    }

    #[test]
    fn test_roundtrip_conversion() {
        for zoom in [0.1, 0.33, 1.0, 1.44, 5.0] {
            let camera = Camera {
                pan: Vec2::new(30.0, -20.0),
                zoom,
            };
            let original = Point::new(123.0, 456.0);
            let back = camera.world_to_screen(camera.screen_to_world(original));
            assert!((back.x - original.x).abs() < 1e-9);
            assert!((back.y - original.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zoom_steps_are_rounded() {
        let mut camera = Camera::new();
        camera.zoom_in();
        assert!((camera.zoom - 1.2).abs() < 1e-12);
        camera.zoom_in();
        assert!((camera.zoom - 1.44).abs() < 1e-12);
        camera.zoom_out();
        assert!((camera.zoom - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_clamp() {
        let mut camera = Camera::new();
        for _ in 0..50 {
            camera.zoom_out();
        }
        assert!((camera.zoom - MIN_ZOOM).abs() < f64::EPSILON);

        for _ in 0..50 {
            camera.zoom_in();
        }
        assert!((camera.zoom - MAX_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wheel_zoom_keeps_anchor() {
        let mut camera = Camera {
            pan: Vec2::new(40.0, -15.0),
            zoom: 1.3,
        };
        let cursor = Point::new(321.0, 187.0);
        let world_before = camera.screen_to_world(cursor);

        assert!(camera.wheel_zoom(cursor, -1.0));
        assert!((camera.zoom - 1.43).abs() < 1e-12);
        let screen_after = camera.world_to_screen(world_before);
        assert!((screen_after.x - cursor.x).abs() < 1e-9);
        assert!((screen_after.y - cursor.y).abs() < 1e-9);

        assert!(camera.wheel_zoom(cursor, 3.0));
        let screen_after = camera.world_to_screen(world_before);
        assert!((screen_after.x - cursor.x).abs() < 1e-9);
        assert!((screen_after.y - cursor.y).abs() < 1e-9);
    }

    #[test]
    fn test_wheel_zero_delta_is_noop() {
        let mut camera = Camera::new();
        assert!(!camera.wheel_zoom(Point::new(10.0, 10.0), 0.0));
        assert_eq!(camera, Camera::new());
    }

    #[test]
    fn test_wheel_at_limit_is_noop() {
        let mut camera = Camera {
            pan: Vec2::new(5.0, 5.0),
            zoom: MAX_ZOOM,
        };
        assert!(!camera.wheel_zoom(Point::new(100.0, 100.0), -1.0));
        assert_eq!(camera.pan, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_pan_to_follows_pointer() {
        let mut camera = Camera {
            pan: Vec2::new(10.0, 20.0),
            zoom: 2.0,
        };
        let start = Point::new(100.0, 100.0);
        let anchor = start.to_vec2() - camera.pan;
        camera.pan_to(Point::new(130.0, 80.0), anchor);
        assert_eq!(camera.pan, Vec2::new(40.0, 0.0));
    }

    #[test]
    fn test_visible_world_rect() {
        let camera = Camera {
            pan: Vec2::new(100.0, 50.0),
            zoom: 2.0,
        };
        let rect = camera.visible_world_rect(Size::new(800.0, 600.0));
        assert_eq!(rect, Rect::new(-50.0, -25.0, 350.0, 275.0));
    }

    #[test]
    fn test_reset() {
        let mut camera = Camera {
            pan: Vec2::new(3.0, 4.0),
            zoom: 2.5,
        };
        camera.reset();
        assert_eq!(camera, Camera::new());
    }
}
