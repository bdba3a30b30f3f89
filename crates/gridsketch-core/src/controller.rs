//! Interaction controller: turns pointer, wheel and key events into scene edits.
//!
//! Every entry point returns a [`Repaint`] telling the host what to redraw.

use crate::canvas::{Canvas, CanvasConfig};
use crate::geometry::bounds_of;
use crate::import::import_svg;
use crate::input::{Key, Modifiers, MouseButton};
use crate::selection::DragState;
use crate::tools::ToolKind;
use kurbo::{Point, Vec2};

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Camera follows the pointer. `anchor` is screen position minus pan at press.
    Panning { anchor: Vec2 },
    /// A drawing tool gesture; geometry lives in the tool manager.
    Drawing,
    /// Selected shapes follow the pointer.
    Dragging(DragState),
}

/// What the host must redraw after an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Repaint {
    /// Nothing changed on screen.
    None,
    /// Run the full redraw pipeline.
    Full,
    /// Stroke one new pen segment (world coordinates) over the current frame.
    PenSegment { from: Point, to: Point },
}

/// Owns the scene and drives it from input events.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    pub canvas: Canvas,
    interaction: Interaction,
}

impl InteractionController {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            canvas: Canvas::with_config(config),
            interaction: Interaction::Idle,
        }
    }

    /// Current gesture state.
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    fn transition(&mut self, next: Interaction) {
        if std::mem::discriminant(&self.interaction) != std::mem::discriminant(&next) {
            log::debug!("interaction {:?} -> {:?}", self.interaction, next);
        }
        self.interaction = next;
    }

    /// Pointer pressed at a screen position.
    pub fn pointer_down(&mut self, screen: Point, button: MouseButton, modifiers: Modifiers) -> Repaint {
        if self.interaction != Interaction::Idle {
            return Repaint::None;
        }

        let pan_gesture = button == MouseButton::Middle || (button == MouseButton::Left && modifiers.ctrl);
        if pan_gesture {
            let anchor = screen.to_vec2() - self.canvas.camera.pan;
            self.transition(Interaction::Panning { anchor });
            return Repaint::None;
        }
        if button != MouseButton::Left {
            return Repaint::None;
        }

        let world = self.canvas.camera.screen_to_world(screen);
        if self.canvas.tool() == ToolKind::Select {
            return self.select_at(world, modifiers);
        }

        self.canvas.tool_manager.begin(world);
        self.transition(Interaction::Drawing);
        Repaint::None
    }

    fn select_at(&mut self, world: Point, modifiers: Modifiers) -> Repaint {
        let Some(hit) = self.canvas.hit_shape(world) else {
            if self.canvas.selection.is_empty() {
                return Repaint::None;
            }
            self.canvas.clear_selection();
            return Repaint::Full;
        };
        let id = hit.id();

        if modifiers.shift {
            self.canvas.toggle_selection(id);
            return Repaint::Full;
        }

        let drag = DragState::begin(hit, world);
        self.canvas.select(id);
        if let Some(drag) = drag {
            self.transition(Interaction::Dragging(drag));
        }
        Repaint::Full
    }

    /// Pointer moved to a screen position.
    pub fn pointer_move(&mut self, screen: Point) -> Repaint {
        match self.interaction {
            Interaction::Idle => Repaint::None,
            Interaction::Panning { anchor } => {
                self.canvas.camera.pan_to(screen, anchor);
                Repaint::Full
            }
            Interaction::Dragging(drag) => {
                let world = self.canvas.camera.screen_to_world(screen);
                let Some(bounds) = self
                    .canvas
                    .document
                    .get_shape(drag.anchor_id)
                    .and_then(bounds_of)
                else {
                    return Repaint::None;
                };
                let delta = drag.delta(bounds, world);
                if delta == Vec2::ZERO {
                    return Repaint::None;
                }
                self.canvas.translate_selected(delta);
                Repaint::Full
            }
            Interaction::Drawing => {
                let world = self.canvas.camera.screen_to_world(screen);
                let segment = self.canvas.tool_manager.update(world);
                if self.canvas.tool() != ToolKind::Pen {
                    return Repaint::Full;
                }
                match segment {
                    Some((from, to)) => Repaint::PenSegment { from, to },
                    None => Repaint::None,
                }
            }
        }
    }

    /// Pointer released at a screen position.
    pub fn pointer_up(&mut self, screen: Point) -> Repaint {
        match self.interaction {
            Interaction::Idle => Repaint::None,
            Interaction::Panning { .. } | Interaction::Dragging(_) => {
                self.transition(Interaction::Idle);
                Repaint::None
            }
            Interaction::Drawing => {
                let world = self.canvas.camera.screen_to_world(screen);
                let committed = self.canvas.tool_manager.end(world);
                self.transition(Interaction::Idle);
                match committed {
                    Some(shape) => {
                        log::debug!("committed {} shape {}", shape.kind_name(), shape.id());
                        self.canvas.document.add_shape(shape);
                        Repaint::Full
                    }
                    None => {
                        log::debug!("discarded {} gesture", self.canvas.tool().name());
                        // The pen may have stroked segments incrementally.
                        Repaint::Full
                    }
                }
            }
        }
    }

    /// Pointer left the canvas. Ends any gesture as a release would.
    pub fn pointer_leave(&mut self, screen: Point) -> Repaint {
        self.pointer_up(screen)
    }

    /// Wheel scrolled at a screen position.
    pub fn wheel(&mut self, screen: Point, delta_y: f64) -> Repaint {
        if self.canvas.camera.wheel_zoom(screen, delta_y) {
            Repaint::Full
        } else {
            Repaint::None
        }
    }

    /// Key pressed, by DOM key name.
    pub fn key_down(&mut self, key: &str) -> Repaint {
        match Key::from_name(key) {
            Key::Delete if self.interaction == Interaction::Idle => self.delete_selected(),
            Key::Escape => self.cancel(),
            Key::Delete | Key::Other => Repaint::None,
        }
    }

    /// Abort the current gesture without committing anything.
    pub fn cancel(&mut self) -> Repaint {
        match self.interaction {
            Interaction::Idle => Repaint::None,
            Interaction::Drawing => {
                self.canvas.tool_manager.cancel();
                self.transition(Interaction::Idle);
                Repaint::Full
            }
            Interaction::Panning { .. } | Interaction::Dragging(_) => {
                self.transition(Interaction::Idle);
                Repaint::None
            }
        }
    }

    /// Select a tool by toolbar name. Unknown names are ignored.
    pub fn set_tool_by_name(&mut self, name: &str) -> Repaint {
        match ToolKind::from_name(name) {
            Some(tool) => self.set_tool(tool),
            None => {
                log::warn!("unknown tool {name:?}");
                Repaint::None
            }
        }
    }

    /// Select a tool. Any gesture in progress is dropped.
    pub fn set_tool(&mut self, tool: ToolKind) -> Repaint {
        self.canvas.set_tool(tool);
        self.transition(Interaction::Idle);
        Repaint::Full
    }

    pub fn toggle_grid(&mut self) -> Repaint {
        self.canvas.show_grid = !self.canvas.show_grid;
        Repaint::Full
    }

    pub fn toggle_axes(&mut self) -> Repaint {
        self.canvas.show_axes = !self.canvas.show_axes;
        Repaint::Full
    }

    pub fn zoom_in(&mut self) -> Repaint {
        self.canvas.camera.zoom_in();
        Repaint::Full
    }

    pub fn zoom_out(&mut self) -> Repaint {
        self.canvas.camera.zoom_out();
        Repaint::Full
    }

    pub fn zoom_reset(&mut self) -> Repaint {
        self.canvas.camera.reset();
        Repaint::Full
    }

    /// Remove all selected shapes. No effect with an empty selection.
    pub fn delete_selected(&mut self) -> Repaint {
        if self.canvas.selection.is_empty() {
            return Repaint::None;
        }
        let removed = self.canvas.delete_selected();
        log::info!("deleted {removed} shape(s)");
        Repaint::Full
    }

    /// Parse SVG text and append the shapes it yields.
    pub fn import_svg(&mut self, text: &str) -> Repaint {
        let shapes = import_svg(text);
        if shapes.is_empty() {
            return Repaint::None;
        }
        log::info!("imported {} shape(s) from SVG", shapes.len());
        self.canvas.document.extend(shapes);
        Repaint::Full
    }

    /// Viewport resized.
    pub fn resize(&mut self, width: f64, height: f64) -> Repaint {
        self.canvas.set_viewport_size(width, height);
        Repaint::Full
    }
}
