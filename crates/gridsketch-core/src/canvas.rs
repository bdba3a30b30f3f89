//! Canvas document and state management.

use crate::camera::Camera;
use crate::geometry::hit_tolerance;
use crate::shapes::{Shape, ShapeId};
use crate::tools::{ToolKind, ToolManager};
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Ordered shape list. Insertion order is z-order (last drawn on top).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasDocument {
    shapes: Vec<Shape>,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of the others.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Append shapes in order, after existing ones.
    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    /// Remove a shape by ID.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(index))
    }

    /// Remove every shape whose id is in `ids`. Returns how many were removed.
    pub fn remove_shapes(&mut self, ids: &[ShapeId]) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|s| !ids.contains(&s.id()));
        before - self.shapes.len()
    }

    /// Replace the shape with the same id in place, keeping its z position.
    pub fn replace_shape(&mut self, shape: Shape) -> bool {
        match self.shapes.iter_mut().find(|s| s.id() == shape.id()) {
            Some(slot) => {
                *slot = shape;
                true
            }
            None => false,
        }
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get all shapes in z-order (back to front).
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Topmost shape hit at a world point.
    pub fn shape_at_point(&self, point: Point, tolerance: f64) -> Option<&Shape> {
        self.shapes.iter().rev().find(|s| s.hit_test(point, tolerance))
    }

    /// Union of all shape bounds.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .filter_map(Shape::bounds)
            .reduce(|acc, r| acc.union(r))
    }

    /// Check if document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

/// Initial canvas settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub show_grid: bool,
    pub show_axes: bool,
    /// Tool selected at startup.
    pub tool: ToolKind,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_axes: true,
            tool: ToolKind::default(),
        }
    }
}

/// Runtime canvas state (not persisted).
#[derive(Debug, Clone)]
pub struct Canvas {
    /// The document being edited.
    pub document: CanvasDocument,
    /// Camera for view transform.
    pub camera: Camera,
    /// Tool manager.
    pub tool_manager: ToolManager,
    /// Currently selected shape IDs, in selection order.
    pub selection: Vec<ShapeId>,
    /// Whether the dot grid is drawn.
    pub show_grid: bool,
    /// Whether the axes are drawn.
    pub show_axes: bool,
    /// Viewport size in screen pixels.
    pub viewport_size: Size,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    /// Create a canvas from startup settings.
    pub fn with_config(config: CanvasConfig) -> Self {
        let mut tool_manager = ToolManager::new();
        tool_manager.set_tool(config.tool);
        Self {
            document: CanvasDocument::new(),
            camera: Camera::new(),
            tool_manager,
            selection: Vec::new(),
            show_grid: config.show_grid,
            show_axes: config.show_axes,
            viewport_size: Size::new(800.0, 600.0),
        }
    }

    /// Set the viewport size.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_size = Size::new(width, height);
    }

    /// Current tool.
    pub fn tool(&self) -> ToolKind {
        self.tool_manager.current_tool
    }

    /// Set the current tool. Leaving select mode clears the selection.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool_manager.set_tool(tool);
        if tool != ToolKind::Select {
            self.clear_selection();
        }
    }

    /// Topmost shape under a world point at the current zoom.
    pub fn hit_shape(&self, point: Point) -> Option<&Shape> {
        self.document
            .shape_at_point(point, hit_tolerance(self.camera.zoom))
    }

    /// Select a shape (clears previous selection).
    pub fn select(&mut self, id: ShapeId) {
        self.selection.clear();
        self.selection.push(id);
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle_selection(&mut self, id: ShapeId) {
        match self.selection.iter().position(|s| *s == id) {
            Some(index) => {
                self.selection.remove(index);
            }
            None => self.selection.push(id),
        }
    }

    /// Clear selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Check if a shape is selected.
    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(&id)
    }

    /// Selected shapes in z-order.
    pub fn selected_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.document
            .shapes_ordered()
            .filter(|s| self.selection.contains(&s.id()))
    }

    /// Translate every selected shape by `delta`, replacing each by id.
    pub fn translate_selected(&mut self, delta: Vec2) {
        let moved: Vec<Shape> = self
            .selected_shapes()
            .map(|s| s.translated(delta.x, delta.y))
            .collect();
        for shape in moved {
            self.document.replace_shape(shape);
        }
    }

    /// Delete selected shapes. Returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let ids = std::mem::take(&mut self.selection);
        self.document.remove_shapes(&ids)
    }
}
