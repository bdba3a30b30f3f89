//! Selection decoration geometry and drag tracking.

use crate::geometry::{bounds_of, offset_from_origin};
use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Rect, Vec2};

/// Handle size in screen pixels.
pub const HANDLE_SIZE: f64 = 8.0;

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A selection handle with its position and corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position in world coordinates.
    pub position: Point,
    pub corner: Corner,
}

impl Handle {
    /// Create a new handle.
    pub fn new(position: Point, corner: Corner) -> Self {
        Self { position, corner }
    }

    /// World-space square for this handle, [`HANDLE_SIZE`] pixels wide on screen.
    pub fn rect(&self, zoom: f64) -> Rect {
        let half = HANDLE_SIZE / zoom / 2.0;
        Rect::new(
            self.position.x - half,
            self.position.y - half,
            self.position.x + half,
            self.position.y + half,
        )
    }
}

/// Generate corner handles for a bounding rectangle.
pub fn corner_handles(bounds: Rect) -> [Handle; 4] {
    [
        Handle::new(Point::new(bounds.x0, bounds.y0), Corner::TopLeft),
        Handle::new(Point::new(bounds.x1, bounds.y0), Corner::TopRight),
        Handle::new(Point::new(bounds.x0, bounds.y1), Corner::BottomLeft),
        Handle::new(Point::new(bounds.x1, bounds.y1), Corner::BottomRight),
    ]
}

/// Frame and handles drawn around one selected shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionDecoration {
    pub frame: Rect,
    pub handles: [Handle; 4],
}

/// Decoration for a shape, `None` when it has no bounds.
pub fn decoration_for(shape: &Shape) -> Option<SelectionDecoration> {
    let frame = bounds_of(shape)?;
    Some(SelectionDecoration {
        frame,
        handles: corner_handles(frame),
    })
}

/// State of a move-drag over the selection.
///
/// The grabbed shape keeps the pointer at the same offset from its bounds
/// origin; every other selected shape moves by the same delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Shape under the pointer when the drag began.
    pub anchor_id: ShapeId,
    /// Pointer position minus anchor bounds origin, in world units.
    pub offset: Vec2,
}

impl DragState {
    /// Start a drag of `shape` grabbed at `point`.
    pub fn begin(shape: &Shape, point: Point) -> Option<Self> {
        let bounds = bounds_of(shape)?;
        Some(Self {
            anchor_id: shape.id(),
            offset: offset_from_origin(point, bounds),
        })
    }

    /// Translation that brings the anchor's bounds origin to `point - offset`.
    pub fn delta(&self, anchor_bounds: Rect, point: Point) -> Vec2 {
        (point - self.offset) - anchor_bounds.origin()
    }
}
