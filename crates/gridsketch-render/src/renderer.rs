//! Renderer trait abstraction.

use gridsketch_core::canvas::Canvas;
use kurbo::{Point, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Fill behind the dot grid.
    pub background_color: Color,
    /// Grid dot color.
    pub grid_color: Color,
    /// Axis, tick and label color.
    pub axis_color: Color,
    /// Shape stroke color.
    pub stroke_color: Color,
    /// Selection highlight color.
    pub selection_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with the default palette.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            grid_color: Color::from_rgba8(160, 160, 160, 255),
            axis_color: Color::from_rgba8(80, 80, 80, 255),
            stroke_color: Color::from_rgba8(30, 30, 30, 255),
            selection_color: Color::from_rgba8(59, 130, 246, 255), // Blue
        }
    }

    /// Viewport size in screen pixels.
    pub fn viewport_size(&self) -> Size {
        self.canvas.viewport_size
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the grid dot color.
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    /// Set the axis color.
    pub fn with_axis_color(mut self, color: Color) -> Self {
        self.axis_color = color;
        self
    }

    /// Set the shape stroke color.
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the selection color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Redraw the whole frame from the canvas state.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Stroke one freshly appended pen segment over the current frame.
    fn stroke_segment(&mut self, ctx: &RenderContext, from: Point, to: Point);
}
