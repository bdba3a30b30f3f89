//! Surface that records draw calls instead of rasterizing them.

use crate::renderer::RenderResult;
use crate::surface::Surface;
use kurbo::{Affine, BezPath, Point, Rect, Size};
use peniko::Color;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    Clear,
    SetTransform(Affine),
    FillRect { rect: Rect, color: Color },
    FillPath { path: BezPath, color: Color },
    StrokePath { path: BezPath, color: Color, width: f64 },
    FillText { text: String, position: Point, font_size: f64, color: Color },
}

/// Headless [`Surface`] keeping every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(f64::from(width), f64::from(height)),
            commands: Vec::new(),
        }
    }

    /// Recorded calls, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take recorded calls, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded text labels, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.size = Size::new(f64::from(width), f64::from(height));
        self.commands.push(DrawCommand::Resize { width, height });
        Ok(())
    }

    fn clear(&mut self) -> RenderResult<()> {
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn set_transform(&mut self, transform: Affine) -> RenderResult<()> {
        self.commands.push(DrawCommand::SetTransform(transform));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            color,
            width,
        });
    }

    fn fill_text(&mut self, text: &str, position: Point, font_size: f64, color: Color) -> RenderResult<()> {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            position,
            font_size,
            color,
        });
        Ok(())
    }
}
