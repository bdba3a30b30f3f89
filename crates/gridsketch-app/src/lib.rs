//! GridSketch Application
//!
//! Application shell: configuration, the session wiring input events to
//! redraws, and the WebAssembly entry point.

mod color;
mod config;
mod session;

pub use color::{css_color, parse_hex_color};
pub use config::{AppConfig, Theme};
pub use session::SketchSession;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{Canvas2dSurface, SketchApp};
