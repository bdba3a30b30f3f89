//! Full-frame scene renderer over any [`Surface`].
//!
//! Pipeline, in order: clear, identity transform, camera transform, grid,
//! axes, shapes, preview, selection decoration. Line widths and font sizes
//! are divided by zoom so they stay constant on screen.

use crate::renderer::{RenderContext, RenderResult, Renderer};
use crate::surface::Surface;
use gridsketch_core::selection::decoration_for;
use gridsketch_core::shapes::Shape;
use gridsketch_core::snap::GRID_SIZE;
use kurbo::{Affine, BezPath, Point, Rect, Shape as _, Vec2};
use peniko::Color;

/// Distance between axis ticks and labels, in world units.
pub const TICK_SPACING: f64 = 100.0;
/// Shape stroke width in screen pixels.
const STROKE_WIDTH: f64 = 2.0;
/// Axis line width in screen pixels.
const AXIS_WIDTH: f64 = 1.0;
/// Half-length of a tick mark in screen pixels.
const TICK_HALF_LENGTH: f64 = 4.0;
/// Arrowhead length and half-width in screen pixels.
const ARROW_LENGTH: f64 = 10.0;
const ARROW_HALF_WIDTH: f64 = 5.0;
/// Label font size in screen pixels.
const LABEL_FONT_SIZE: f64 = 12.0;
/// Half-size of a grid dot in screen pixels.
const DOT_HALF_SIZE: f64 = 1.0;
/// Opacity of the fill inside a selection frame.
const SELECTION_FILL_ALPHA: f32 = 0.1;

/// Draws the canvas into an optional surface.
///
/// Without a surface every call is a no-op.
pub struct SceneRenderer<S> {
    surface: Option<S>,
}

impl<S> Default for SceneRenderer<S> {
    fn default() -> Self {
        Self { surface: None }
    }
}

impl<S: Surface> SceneRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface: Some(surface),
        }
    }

    /// Renderer with no surface attached yet.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn set_surface(&mut self, surface: S) {
        self.surface = Some(surface);
    }
}

impl<S: Surface> Renderer for SceneRenderer<S> {
    fn build_scene(&mut self, ctx: &RenderContext) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if let Err(err) = draw_frame(surface, ctx) {
            log::warn!("frame render failed: {err}");
        }
    }

    fn stroke_segment(&mut self, ctx: &RenderContext, from: Point, to: Point) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let camera = &ctx.canvas.camera;
        if let Err(err) = surface.set_transform(camera.transform()) {
            log::warn!("segment render failed: {err}");
            return;
        }
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        surface.stroke_path(&path, ctx.stroke_color, STROKE_WIDTH / camera.zoom);
    }
}

fn draw_frame<S: Surface>(surface: &mut S, ctx: &RenderContext) -> RenderResult<()> {
    let canvas = ctx.canvas;
    let viewport = ctx.viewport_size();
    let width = viewport.width.round().max(0.0) as u32;
    let height = viewport.height.round().max(0.0) as u32;
    if surface.size() != kurbo::Size::new(f64::from(width), f64::from(height)) {
        surface.resize(width, height)?;
    }

    log::trace!(
        "frame: {} shape(s), zoom {}, pan ({}, {})",
        canvas.document.len(),
        canvas.camera.zoom,
        canvas.camera.pan.x,
        canvas.camera.pan.y
    );

    surface.clear()?;
    surface.set_transform(Affine::IDENTITY)?;
    surface.set_transform(canvas.camera.transform())?;

    let zoom = canvas.camera.zoom;
    let visible = canvas.camera.visible_world_rect(viewport);

    if canvas.show_grid {
        draw_grid(surface, visible, zoom, ctx);
    }
    if canvas.show_axes {
        draw_axes(surface, visible, zoom, ctx)?;
    }

    for shape in canvas.document.shapes_ordered() {
        draw_shape(surface, shape, zoom, ctx.stroke_color);
    }
    if let Some(preview) = canvas.tool_manager.preview_shape() {
        draw_shape(surface, &preview, zoom, ctx.stroke_color);
    }

    for shape in canvas.selected_shapes() {
        draw_selection(surface, shape, zoom, ctx.selection_color);
    }
    Ok(())
}

/// Background fill plus one batched path holding every visible dot.
fn draw_grid<S: Surface>(surface: &mut S, visible: Rect, zoom: f64, ctx: &RenderContext) {
    surface.fill_rect(visible, ctx.background_color);

    let half = DOT_HALF_SIZE / zoom;
    let start_x = (visible.x0 / GRID_SIZE).floor() as i64;
    let end_x = (visible.x1 / GRID_SIZE).ceil() as i64;
    let start_y = (visible.y0 / GRID_SIZE).floor() as i64;
    let end_y = (visible.y1 / GRID_SIZE).ceil() as i64;

    let mut path = BezPath::new();
    for i in start_x..=end_x {
        for j in start_y..=end_y {
            let x = i as f64 * GRID_SIZE;
            let y = j as f64 * GRID_SIZE;
            path.move_to((x - half, y - half));
            path.line_to((x + half, y - half));
            path.line_to((x + half, y + half));
            path.line_to((x - half, y + half));
            path.close_path();
        }
    }
    surface.fill_path(&path, ctx.grid_color);
}

/// Rays along +x and +y from the origin to the edge of the view.
///
/// A ray is drawn only where it crosses the view, and only its visible
/// ticks are emitted.
fn draw_axes<S: Surface>(surface: &mut S, visible: Rect, zoom: f64, ctx: &RenderContext) -> RenderResult<()> {
    let color = ctx.axis_color;
    let width = AXIS_WIDTH / zoom;
    let tick = TICK_HALF_LENGTH / zoom;
    let font_size = LABEL_FONT_SIZE / zoom;
    let label_gap = 4.0 / zoom;

    let x_end = visible.x1;
    if x_end > 0.0 && (visible.y0..=visible.y1).contains(&0.0) {
        let x_start = visible.x0.max(0.0);
        surface.stroke_path(&segment(Point::new(x_start, 0.0), Point::new(x_end, 0.0)), color, width);
        surface.fill_path(&arrowhead(Point::new(x_end, 0.0), Vec2::new(1.0, 0.0), zoom), color);
        for x in ticks(x_start, x_end - ARROW_LENGTH / zoom) {
            surface.stroke_path(&segment(Point::new(x, -tick), Point::new(x, tick)), color, width);
            surface.fill_text(
                &label(x),
                Point::new(x + label_gap, tick + font_size),
                font_size,
                color,
            )?;
        }
    }

    let y_end = visible.y1;
    if y_end > 0.0 && (visible.x0..=visible.x1).contains(&0.0) {
        let y_start = visible.y0.max(0.0);
        surface.stroke_path(&segment(Point::new(0.0, y_start), Point::new(0.0, y_end)), color, width);
        surface.fill_path(&arrowhead(Point::new(0.0, y_end), Vec2::new(0.0, 1.0), zoom), color);
        for y in ticks(y_start, y_end - ARROW_LENGTH / zoom) {
            surface.stroke_path(&segment(Point::new(-tick, y), Point::new(tick, y)), color, width);
            surface.fill_text(
                &label(y),
                Point::new(tick + label_gap, y + font_size / 2.0),
                font_size,
                color,
            )?;
        }
    }

    surface.fill_text("0", Point::new(label_gap, font_size + label_gap), font_size, color)
}

/// Positive multiples of [`TICK_SPACING`] within `start..=end`.
fn ticks(start: f64, end: f64) -> impl Iterator<Item = f64> {
    let first = ((start / TICK_SPACING).ceil() as i64).max(1);
    let last = (end / TICK_SPACING).floor() as i64;
    (first..=last).map(|i| i as f64 * TICK_SPACING)
}

fn label(value: f64) -> String {
    format!("{}", value.round() as i64)
}

fn segment(from: Point, to: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    path
}

/// Filled triangle with its tip at `tip`, pointing along `direction` (unit).
fn arrowhead(tip: Point, direction: Vec2, zoom: f64) -> BezPath {
    let back = tip - direction * (ARROW_LENGTH / zoom);
    let side = Vec2::new(-direction.y, direction.x) * (ARROW_HALF_WIDTH / zoom);
    let mut path = BezPath::new();
    path.move_to(tip);
    path.line_to(back + side);
    path.line_to(back - side);
    path.close_path();
    path
}

fn draw_shape<S: Surface>(surface: &mut S, shape: &Shape, zoom: f64, color: Color) {
    let path = match shape {
        Shape::Pen(pen) if pen.len() < 2 => return,
        Shape::Pen(_) | Shape::Rect(_) | Shape::Circle(_) | Shape::Line(_) => shape.to_path(),
    };
    surface.stroke_path(&path, color, STROKE_WIDTH / zoom);
}

fn draw_selection<S: Surface>(surface: &mut S, shape: &Shape, zoom: f64, color: Color) {
    let Some(decoration) = decoration_for(shape) else {
        return;
    };
    surface.fill_rect(decoration.frame, color.with_alpha(SELECTION_FILL_ALPHA));
    surface.stroke_path(&decoration.frame.to_path(0.1), color, 1.0 / zoom);
    for handle in decoration.handles {
        let rect = handle.rect(zoom);
        surface.fill_rect(rect, Color::WHITE);
        surface.stroke_path(&rect.to_path(0.1), color, 1.0 / zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks() {
        let t: Vec<_> = ticks(0.0, 350.0).collect();
        assert_eq!(t, vec![100.0, 200.0, 300.0]);
        assert_eq!(ticks(0.0, 99.0).count(), 0);
        assert_eq!(ticks(0.0, -50.0).count(), 0);
    }

    #[test]
    fn test_ticks_start_inside_range() {
        let t: Vec<_> = ticks(150.0, 420.0).collect();
        assert_eq!(t, vec![200.0, 300.0, 400.0]);
        assert_eq!(ticks(100_000.0, 100_250.0).count(), 3);
    }

    #[test]
    fn test_arrowhead_points_along_axis() {
        let path = arrowhead(Point::new(100.0, 0.0), Vec2::new(1.0, 0.0), 2.0);
        let bbox = kurbo::Shape::bounding_box(&path);
        assert!((bbox.x1 - 100.0).abs() < 1e-10);
        assert!((bbox.x0 - 95.0).abs() < 1e-10);
        assert!((bbox.height() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_label_is_integral() {
        assert_eq!(label(300.0), "300");
        assert_eq!(label(1200.0000001), "1200");
    }
}
