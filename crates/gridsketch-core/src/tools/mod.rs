//! Drawing tools and in-progress gesture state.

use crate::shapes::{Circle, Line, Pen, Rectangle, Shape, ShapeId, new_shape_id};
use crate::snap::snap_point;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Pen,
    Rect,
    Circle,
    Line,
    Select,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Pen,
        ToolKind::Rect,
        ToolKind::Circle,
        ToolKind::Line,
        ToolKind::Select,
    ];

    /// Parse a toolbar name (`pen`, `rect`, `circle`, `line`, `select`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Toolbar name.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pen => "pen",
            ToolKind::Rect => "rect",
            ToolKind::Circle => "circle",
            ToolKind::Line => "line",
            ToolKind::Select => "select",
        }
    }
}

/// State of a tool interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ToolState {
    /// Tool is idle, waiting for interaction.
    #[default]
    Idle,
    /// A draw gesture is in progress. Both points are grid-snapped.
    Active { start: Point, current: Point },
}

/// Manages the current tool and its state.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
    /// Snapped points of the pen gesture in progress.
    pen_points: Vec<Point>,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool, dropping any gesture in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
        self.cancel();
    }

    /// Begin a draw gesture at a world point. The point is snapped.
    pub fn begin(&mut self, point: Point) {
        let start = snap_point(point);
        self.pen_points.clear();
        if self.current_tool == ToolKind::Pen {
            self.pen_points.push(start);
        }
        self.state = ToolState::Active {
            start,
            current: start,
        };
    }

    /// Update the gesture with a new world point.
    ///
    /// For the pen tool, returns the new segment when a point was appended.
    /// A snapped point equal to the last buffered one is dropped.
    pub fn update(&mut self, point: Point) -> Option<(Point, Point)> {
        let ToolState::Active { current, .. } = &mut self.state else {
            return None;
        };
        let snapped = snap_point(point);
        *current = snapped;

        if self.current_tool != ToolKind::Pen {
            return None;
        }
        let last = self.pen_points.last().copied();
        if last == Some(snapped) {
            return None;
        }
        self.pen_points.push(snapped);
        last.map(|from| (from, snapped))
    }

    /// End the gesture at a world point and return the committed shape.
    ///
    /// Pen gestures need at least two points; the other tools always commit.
    pub fn end(&mut self, point: Point) -> Option<Shape> {
        let ToolState::Active { start, .. } = self.state else {
            return None;
        };
        if self.current_tool == ToolKind::Pen {
            // The release point is only a pen point if a move reached it.
            self.state = ToolState::Idle;
            let points = std::mem::take(&mut self.pen_points);
            return (points.len() >= 2).then(|| Shape::Pen(Pen::with_id(new_shape_id(), points)));
        }
        let end = snap_point(point);
        self.cancel();
        self.build_shape(new_shape_id(), start, end)
    }

    /// Cancel the current interaction.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
        self.pen_points.clear();
    }

    /// Check if a tool interaction is active.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Active { .. })
    }

    /// Buffered pen points of the current gesture.
    pub fn pen_points(&self) -> &[Point] {
        &self.pen_points
    }

    /// Shape the gesture would commit now. Carries the nil id.
    pub fn preview_shape(&self) -> Option<Shape> {
        let ToolState::Active { start, current } = self.state else {
            return None;
        };
        if self.current_tool == ToolKind::Pen {
            return (self.pen_points.len() >= 2)
                .then(|| Shape::Pen(Pen::with_id(Uuid::nil(), self.pen_points.clone())));
        }
        self.build_shape(Uuid::nil(), start, current)
    }

    fn build_shape(&self, id: ShapeId, start: Point, end: Point) -> Option<Shape> {
        match self.current_tool {
            ToolKind::Rect => {
                let size = end - start;
                Some(Shape::Rect(Rectangle::with_id(id, start, size.x, size.y)))
            }
            ToolKind::Circle => Some(Shape::Circle(Circle::with_id(id, start, start.distance(end)))),
            ToolKind::Line => Some(Shape::Line(Line::with_id(id, start, end))),
            ToolKind::Pen | ToolKind::Select => None,
        }
    }
}
