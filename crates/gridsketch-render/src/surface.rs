//! Raster surface abstraction.

use crate::renderer::RenderResult;
use kurbo::{Affine, BezPath, Point, Rect, Size};
use peniko::Color;

/// A 2D raster target the scene renderer draws into.
///
/// Geometry passed to the drawing calls is mapped through the current
/// transform, like a Canvas2D context.
pub trait Surface {
    /// Size in pixels.
    fn size(&self) -> Size;

    /// Change the pixel dimensions. Contents are undefined afterwards.
    fn resize(&mut self, width: u32, height: u32) -> RenderResult<()>;

    /// Erase every pixel, regardless of the current transform.
    fn clear(&mut self) -> RenderResult<()>;

    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine) -> RenderResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Stroke with a width in transformed (world) units.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);

    /// Draw a text label with its baseline starting at `position`.
    fn fill_text(&mut self, text: &str, position: Point, font_size: f64, color: Color) -> RenderResult<()>;
}
