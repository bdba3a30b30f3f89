//! GridSketch Render Library
//!
//! Surface abstraction and the scene renderer for GridSketch.
//! The default build includes a CPU surface backed by tiny-skia.

mod recording;
mod renderer;
mod scene;
mod surface;

#[cfg(feature = "pixmap-renderer")]
mod pixmap;

pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use scene::{SceneRenderer, TICK_SPACING};
pub use surface::Surface;

#[cfg(feature = "pixmap-renderer")]
pub use pixmap::PixmapSurface;
