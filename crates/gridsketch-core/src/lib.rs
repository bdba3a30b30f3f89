//! GridSketch Core Library
//!
//! Platform-agnostic shape model, geometry, viewport and interaction logic
//! for the GridSketch drawing surface.

pub mod camera;
pub mod canvas;
pub mod controller;
pub mod geometry;
pub mod import;
pub mod input;
pub mod selection;
pub mod shapes;
pub mod snap;
pub mod tools;

pub use camera::Camera;
pub use canvas::{Canvas, CanvasConfig, CanvasDocument};
pub use controller::{Interaction, InteractionController, Repaint};
pub use import::{ImportError, import_svg};
pub use input::{Key, Modifiers, MouseButton};
pub use shapes::{Shape, ShapeId, ShapeTrait};
pub use snap::{GRID_SIZE, snap, snap_point};
pub use tools::ToolKind;
