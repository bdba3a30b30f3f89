//! Application configuration, read from JSON by the web host.

use crate::color::parse_hex_color;
use gridsketch_core::CanvasConfig;
use gridsketch_render::RenderContext;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Theme colors as hex strings. Unparseable entries keep the renderer default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub grid: String,
    pub axis: String,
    pub stroke: String,
    pub selection: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#fafafa".to_string(),
            grid: "#a0a0a0".to_string(),
            axis: "#505050".to_string(),
            stroke: "#1e1e1e".to_string(),
            selection: "#3b82f6".to_string(),
        }
    }
}

impl Theme {
    /// Apply the theme to a render context.
    pub fn apply<'a>(&self, ctx: RenderContext<'a>) -> RenderContext<'a> {
        let background = theme_color(&self.background, ctx.background_color);
        let grid = theme_color(&self.grid, ctx.grid_color);
        let axis = theme_color(&self.axis, ctx.axis_color);
        let stroke = theme_color(&self.stroke, ctx.stroke_color);
        let selection = theme_color(&self.selection, ctx.selection_color);
        ctx.with_background(background)
            .with_grid_color(grid)
            .with_axis_color(axis)
            .with_stroke_color(stroke)
            .with_selection_color(selection)
    }
}

fn theme_color(value: &str, fallback: Color) -> Color {
    parse_hex_color(value).unwrap_or_else(|| {
        log::warn!("invalid theme color {value:?}, using default");
        fallback
    })
}

/// Top-level application config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub canvas: CanvasConfig,
    pub theme: Theme,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            theme: Theme::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Configured log level, `Info` when unrecognized.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsketch_core::{Canvas, ToolKind};

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.canvas.show_grid);
        assert!(config.canvas.show_axes);
        assert_eq!(config.canvas.tool, ToolKind::Pen);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_canvas_fields_are_flattened() {
        let config = AppConfig::from_json(
            r##"{ "show_grid": false, "tool": "select", "log_level": "debug", "theme": { "stroke": "#f00" } }"##,
        )
        .unwrap();
        assert!(!config.canvas.show_grid);
        assert!(config.canvas.show_axes);
        assert_eq!(config.canvas.tool, ToolKind::Select);
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.theme.stroke, "#f00");
        assert_eq!(config.theme.grid, Theme::default().grid);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{ show_grid: ").is_err());
        assert!(AppConfig::from_json(r#"{ "tool": "brush" }"#).is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_theme_applies_valid_colors_only() {
        let canvas = Canvas::new();
        let defaults = RenderContext::new(&canvas);
        let theme = Theme {
            stroke: "#ff0000".to_string(),
            grid: "not a color".to_string(),
            ..Theme::default()
        };
        let ctx = theme.apply(RenderContext::new(&canvas));

        let stroke = ctx.stroke_color.to_rgba8();
        assert_eq!((stroke.r, stroke.g, stroke.b, stroke.a), (255, 0, 0, 255));
        assert_eq!(ctx.grid_color, defaults.grid_color);
    }

    #[test]
    fn test_default_theme_matches_renderer_palette() {
        let canvas = Canvas::new();
        let defaults = RenderContext::new(&canvas);
        let ctx = Theme::default().apply(RenderContext::new(&canvas));
        assert_eq!(ctx.background_color, defaults.background_color);
        assert_eq!(ctx.grid_color, defaults.grid_color);
        assert_eq!(ctx.axis_color, defaults.axis_color);
        assert_eq!(ctx.stroke_color, defaults.stroke_color);
        assert_eq!(ctx.selection_color, defaults.selection_color);
    }
}
