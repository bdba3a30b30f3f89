//! WebAssembly entry point and the Canvas2D surface.

use crate::color::css_color;
use crate::config::AppConfig;
use crate::session::SketchSession;
use gridsketch_core::{Modifiers, MouseButton};
use gridsketch_render::{RenderResult, RendererError, Surface};
use kurbo::{Affine, BezPath, PathEl, Point, Rect, Size};
use peniko::Color;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

fn surface_error(err: JsValue) -> RendererError {
    RendererError::Surface(format!("{err:?}"))
}

/// [`Surface`] over a `<canvas>` 2D context.
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(canvas: HtmlCanvasElement) -> RenderResult<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(surface_error)?
            .ok_or_else(|| RendererError::InitFailed("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RendererError::InitFailed("not a 2d context".to_string()))?;
        Ok(Self { canvas, context })
    }

    fn trace(&self, path: &BezPath) {
        let ctx = &self.context;
        ctx.begin_path();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => ctx.move_to(p.x, p.y),
                PathEl::LineTo(p) => ctx.line_to(p.x, p.y),
                PathEl::QuadTo(p1, p2) => ctx.quadratic_curve_to(p1.x, p1.y, p2.x, p2.y),
                PathEl::CurveTo(p1, p2, p3) => ctx.bezier_curve_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y),
                PathEl::ClosePath => ctx.close_path(),
            }
        }
    }
}

impl Surface for Canvas2dSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok(())
    }

    fn clear(&mut self) -> RenderResult<()> {
        let size = self.size();
        self.context.save();
        self.context
            .set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
            .map_err(surface_error)?;
        self.context.clear_rect(0.0, 0.0, size.width, size.height);
        self.context.restore();
        Ok(())
    }

    fn set_transform(&mut self, transform: Affine) -> RenderResult<()> {
        let [a, b, c, d, e, f] = transform.as_coeffs();
        self.context.set_transform(a, b, c, d, e, f).map_err(surface_error)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.context.set_fill_style_str(&css_color(color));
        self.context.fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.trace(path);
        self.context.set_fill_style_str(&css_color(color));
        self.context.fill();
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        self.trace(path);
        self.context.set_stroke_style_str(&css_color(color));
        self.context.set_line_width(width);
        self.context.stroke();
    }

    fn fill_text(&mut self, text: &str, position: Point, font_size: f64, color: Color) -> RenderResult<()> {
        self.context.set_font(&format!("{font_size}px sans-serif"));
        self.context.set_fill_style_str(&css_color(color));
        self.context
            .fill_text(text, position.x, position.y)
            .map_err(surface_error)
    }
}

fn to_js_error(err: RendererError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn init_logging(level: log::Level) {
    if console_log::init_with_level(level).is_err() {
        // Already installed by an earlier instance.
        log::set_max_level(level.to_level_filter());
    }
}

/// A drawing surface bound to one `<canvas>` element.
#[wasm_bindgen]
pub struct SketchApp {
    session: SketchSession<Canvas2dSurface>,
}

#[wasm_bindgen]
impl SketchApp {
    /// Attach to `canvas`. `config` is optional JSON; malformed JSON falls back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config: Option<String>) -> Result<SketchApp, JsValue> {
        let (config, config_error) = match config.as_deref().map(AppConfig::from_json) {
            Some(Ok(config)) => (config, None),
            Some(Err(err)) => (AppConfig::default(), Some(err)),
            None => (AppConfig::default(), None),
        };
        init_logging(config.log_level());
        if let Some(err) = config_error {
            log::warn!("invalid config, using defaults: {err}");
        }

        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        let surface = Canvas2dSurface::new(canvas).map_err(to_js_error)?;
        let mut session = SketchSession::new(surface, config);
        session.resize(width, height);
        log::info!("GridSketch attached to {width}x{height} canvas");
        Ok(Self { session })
    }

    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16, shift: bool, ctrl: bool) {
        let Some(button) = MouseButton::from_dom(button) else {
            return;
        };
        let modifiers = Modifiers {
            shift,
            ctrl,
            ..Modifiers::NONE
        };
        self.session.pointer_down(Point::new(x, y), button, modifiers);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.session.pointer_move(Point::new(x, y));
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        self.session.pointer_up(Point::new(x, y));
    }

    pub fn pointer_leave(&mut self, x: f64, y: f64) {
        self.session.pointer_leave(Point::new(x, y));
    }

    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) {
        self.session.wheel(Point::new(x, y), delta_y);
    }

    pub fn key_down(&mut self, key: &str) {
        self.session.key_down(key);
    }

    pub fn set_tool(&mut self, name: &str) {
        self.session.set_tool(name);
    }

    pub fn toggle_grid(&mut self) {
        self.session.toggle_grid();
    }

    pub fn toggle_axes(&mut self) {
        self.session.toggle_axes();
    }

    pub fn zoom_in(&mut self) {
        self.session.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.session.zoom_out();
    }

    pub fn zoom_reset(&mut self) {
        self.session.zoom_reset();
    }

    pub fn delete_selected(&mut self) {
        self.session.delete_selected();
    }

    /// Import SVG text read from a file input.
    pub fn import_svg(&mut self, text: &str) {
        self.session.import_svg(text);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.session.resize(width, height);
    }

    pub fn redraw(&mut self) {
        self.session.redraw();
    }
}

/// Module start hook.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
