//! Glue between the interaction controller and the scene renderer.

use crate::config::AppConfig;
use gridsketch_core::{InteractionController, Modifiers, MouseButton, Repaint};
use gridsketch_render::{RenderContext, Renderer, SceneRenderer, Surface};
use kurbo::Point;

/// One drawing surface with its scene and input state.
pub struct SketchSession<S> {
    controller: InteractionController,
    renderer: SceneRenderer<S>,
    config: AppConfig,
}

impl<S: Surface> SketchSession<S> {
    pub fn new(surface: S, config: AppConfig) -> Self {
        Self {
            controller: InteractionController::new(config.canvas),
            renderer: SceneRenderer::new(surface),
            config,
        }
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn surface(&self) -> Option<&S> {
        self.renderer.surface()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.renderer.surface_mut()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Carry out a repaint request from the controller.
    pub fn apply(&mut self, repaint: Repaint) -> Repaint {
        let ctx = self.config.theme.apply(RenderContext::new(&self.controller.canvas));
        match repaint {
            Repaint::None => {}
            Repaint::Full => self.renderer.build_scene(&ctx),
            Repaint::PenSegment { from, to } => self.renderer.stroke_segment(&ctx, from, to),
        }
        repaint
    }

    /// Redraw everything.
    pub fn redraw(&mut self) {
        self.apply(Repaint::Full);
    }

    pub fn pointer_down(&mut self, screen: Point, button: MouseButton, modifiers: Modifiers) -> Repaint {
        let repaint = self.controller.pointer_down(screen, button, modifiers);
        self.apply(repaint)
    }

    pub fn pointer_move(&mut self, screen: Point) -> Repaint {
        let repaint = self.controller.pointer_move(screen);
        self.apply(repaint)
    }

    pub fn pointer_up(&mut self, screen: Point) -> Repaint {
        let repaint = self.controller.pointer_up(screen);
        self.apply(repaint)
    }

    pub fn pointer_leave(&mut self, screen: Point) -> Repaint {
        let repaint = self.controller.pointer_leave(screen);
        self.apply(repaint)
    }

    pub fn wheel(&mut self, screen: Point, delta_y: f64) -> Repaint {
        let repaint = self.controller.wheel(screen, delta_y);
        self.apply(repaint)
    }

    pub fn key_down(&mut self, key: &str) -> Repaint {
        let repaint = self.controller.key_down(key);
        self.apply(repaint)
    }

    pub fn set_tool(&mut self, name: &str) -> Repaint {
        let repaint = self.controller.set_tool_by_name(name);
        self.apply(repaint)
    }

    pub fn toggle_grid(&mut self) -> Repaint {
        let repaint = self.controller.toggle_grid();
        self.apply(repaint)
    }

    pub fn toggle_axes(&mut self) -> Repaint {
        let repaint = self.controller.toggle_axes();
        self.apply(repaint)
    }

    pub fn zoom_in(&mut self) -> Repaint {
        let repaint = self.controller.zoom_in();
        self.apply(repaint)
    }

    pub fn zoom_out(&mut self) -> Repaint {
        let repaint = self.controller.zoom_out();
        self.apply(repaint)
    }

    pub fn zoom_reset(&mut self) -> Repaint {
        let repaint = self.controller.zoom_reset();
        self.apply(repaint)
    }

    pub fn delete_selected(&mut self) -> Repaint {
        let repaint = self.controller.delete_selected();
        self.apply(repaint)
    }

    pub fn import_svg(&mut self, text: &str) -> Repaint {
        let repaint = self.controller.import_svg(text);
        self.apply(repaint)
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Repaint {
        let repaint = self.controller.resize(width, height);
        self.apply(repaint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsketch_core::ToolKind;
    use gridsketch_render::{DrawCommand, RecordingSurface};

    fn session(json: &str) -> SketchSession<RecordingSurface> {
        let config = AppConfig::from_json(json).unwrap();
        SketchSession::new(RecordingSurface::new(800, 600), config)
    }

    fn take(session: &mut SketchSession<RecordingSurface>) -> Vec<DrawCommand> {
        session.surface_mut().unwrap().take_commands()
    }

    #[test]
    fn test_config_reaches_canvas() {
        let session = session(r#"{ "show_axes": false, "tool": "line" }"#);
        assert!(!session.controller().canvas.show_axes);
        assert_eq!(session.controller().canvas.tool(), ToolKind::Line);
    }

    #[test]
    fn test_full_repaint_runs_pipeline() {
        let mut session = session("{}");
        assert_eq!(session.toggle_grid(), Repaint::Full);
        let commands = take(&mut session);
        assert_eq!(commands[0], DrawCommand::Clear);
    }

    #[test]
    fn test_no_repaint_draws_nothing() {
        let mut session = session("{}");
        assert_eq!(session.key_down("a"), Repaint::None);
        assert!(take(&mut session).is_empty());
    }

    #[test]
    fn test_pen_gesture_strokes_segments_then_redraws() {
        let mut session = session(r##"{ "show_grid": false, "show_axes": false, "theme": { "stroke": "#ff0000" } }"##);
        session.pointer_down(Point::new(0.0, 0.0), MouseButton::Left, Modifiers::NONE);
        assert!(take(&mut session).is_empty());

        let repaint = session.pointer_move(Point::new(40.0, 0.0));
        assert!(matches!(repaint, Repaint::PenSegment { .. }));
        let commands = take(&mut session);
        assert_eq!(commands.len(), 2);
        let DrawCommand::StrokePath { color, .. } = &commands[1] else {
            panic!("expected a pen segment");
        };
        let c = color.to_rgba8();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));

        assert_eq!(session.pointer_up(Point::new(40.0, 0.0)), Repaint::Full);
        assert_eq!(session.controller().canvas.document.len(), 1);
        let commands = take(&mut session);
        assert_eq!(commands[0], DrawCommand::Clear);
    }

    #[test]
    fn test_resize_resizes_surface() {
        let mut session = session("{}");
        session.resize(640.0, 480.0);
        let commands = take(&mut session);
        assert_eq!(commands[0], DrawCommand::Resize { width: 640, height: 480 });
        assert_eq!(session.surface().unwrap().size(), kurbo::Size::new(640.0, 480.0));
    }

    #[test]
    fn test_import_then_delete() {
        let mut session = session(r#"{ "tool": "select" }"#);
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect x="10" y="10" width="50" height="50"/></svg>"#;
        assert_eq!(session.import_svg(svg), Repaint::Full);
        assert_eq!(session.import_svg("<svg/>"), Repaint::None);

        session.pointer_down(Point::new(30.0, 30.0), MouseButton::Left, Modifiers::NONE);
        session.pointer_up(Point::new(30.0, 30.0));
        assert_eq!(session.key_down("Delete"), Repaint::Full);
        assert!(session.controller().canvas.document.is_empty());
    }
}
