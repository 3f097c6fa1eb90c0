//! Input dispatch against the scene and viewport.
//!
//! Every pointer position arrives in screen pixels and is converted to
//! document coordinates through the viewport at dispatch time, never
//! cached, so the conversion is always the exact inverse of the current
//! rendering transform.

use tracing::debug;

use crate::constants::{BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
use crate::element::{Element, FixtureTemplate};
use crate::error::EditorResult;
use crate::events::EventBus;
use crate::geometry::Point;
use crate::input::tool::{Gesture, ToolMode};
use crate::scene::Scene;
use crate::viewport::Viewport;

/// Keyboard input the controller understands. Everything else belongs to
/// the presentation layer's shortcut table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    /// `repeat` distinguishes held-key auto-repeat from the initial press.
    SpaceDown { repeat: bool },
    SpaceUp,
}

/// Where a zoom request came from; wheel ticks and toolbar buttons use
/// different per-tick factors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomTrigger {
    Wheel,
    Button,
}

/// Translates pointer/keyboard input into actions on the scene and
/// viewport according to the current tool mode.
#[derive(Debug, Default)]
pub struct InputController {
    mode: ToolMode,
    /// Mode stashed by a space-press, restored on release. Single level;
    /// nested space presses are ignored.
    stashed_mode: Option<ToolMode>,
    gesture: Gesture,
    /// The library template the stamp tool places. `None` means placement
    /// clicks are no-ops.
    pending_fixture: Option<FixtureTemplate>,
    /// Document-space preview position while in add-fixture mode.
    placement_preview: Option<Point>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn placement_preview(&self) -> Option<Point> {
        self.placement_preview
    }

    /// External tool-selection command; always legal.
    pub fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
        self.stashed_mode = None;
        self.gesture.reset();
        if mode != ToolMode::AddFixture {
            self.placement_preview = None;
        }
    }

    /// Arm the stamp tool with a fixture template and enter add-fixture
    /// mode.
    pub fn arm_fixture(&mut self, template: FixtureTemplate) {
        self.pending_fixture = Some(template);
        self.set_mode(ToolMode::AddFixture);
    }

    pub fn key_input(&mut self, key: KeyInput) {
        match key {
            KeyInput::Escape => self.set_mode(ToolMode::Select),
            KeyInput::SpaceDown { repeat } => {
                if !repeat && self.mode != ToolMode::Pan {
                    self.stashed_mode = Some(self.mode);
                    self.mode = ToolMode::Pan;
                }
            }
            KeyInput::SpaceUp => {
                if let Some(mode) = self.stashed_mode.take() {
                    self.mode = mode;
                    self.gesture.reset();
                }
            }
        }
    }

    /// Wheel or button zoom; active in every mode, not gated by tool.
    pub fn zoom(&self, viewport: &mut Viewport, zoom_in: bool, trigger: ZoomTrigger) {
        let factor = match (trigger, zoom_in) {
            (ZoomTrigger::Wheel, true) => WHEEL_ZOOM_IN,
            (ZoomTrigger::Wheel, false) => WHEEL_ZOOM_OUT,
            (ZoomTrigger::Button, true) => BUTTON_ZOOM_IN,
            (ZoomTrigger::Button, false) => BUTTON_ZOOM_OUT,
        };
        viewport.set_zoom(factor);
    }

    pub fn pointer_down(
        &mut self,
        screen: Point,
        scene: &mut Scene,
        viewport: &Viewport,
        events: &EventBus,
    ) -> EditorResult<()> {
        match self.mode {
            ToolMode::Pan => {
                self.gesture.start_panning(screen);
            }
            ToolMode::AddFixture => {
                let document = viewport.screen_to_document(screen);
                let Some(template) = self.pending_fixture.clone() else {
                    // No fixture picked from the library yet; not an error
                    return Ok(());
                };
                let element = Element::fixture(&template, document);
                let id = element.id().clone();
                scene.add(element)?;
                debug!(%id, x = document.x, y = document.y, "placed fixture");
                // Stamp tool: one placement per activation
                self.mode = ToolMode::Select;
                self.placement_preview = None;
            }
            ToolMode::Select => {
                let document = viewport.screen_to_document(screen);
                match scene.hit_test(document).cloned() {
                    Some(id) => {
                        scene.primary_click(&id, events);
                        if let Some(element) = scene.find_by_id_mut(&id) {
                            element.pointer_down(document, events);
                        }
                        self.gesture.start_dragging(id);
                    }
                    None => {
                        scene.deselect_all(events);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn pointer_move(
        &mut self,
        screen: Point,
        scene: &mut Scene,
        viewport: &mut Viewport,
        events: &EventBus,
    ) {
        if let Some((dx, dy)) = self.gesture.pan_delta(screen) {
            viewport.pan(dx, dy);
            return;
        }
        if let Some(id) = self.gesture.dragged_element().cloned() {
            let document = viewport.screen_to_document(screen);
            if let Some(element) = scene.find_by_id_mut(&id) {
                element.pointer_move(document, events);
            }
            return;
        }
        if self.mode == ToolMode::AddFixture {
            self.placement_preview = Some(viewport.screen_to_document(screen));
        }
    }

    pub fn pointer_up(&mut self, screen: Point, scene: &mut Scene, viewport: &Viewport, events: &EventBus) {
        if let Some(id) = self.gesture.dragged_element().cloned() {
            let document = viewport.screen_to_document(screen);
            if let Some(element) = scene.find_by_id_mut(&id) {
                element.pointer_up(document, events);
            }
        }
        self.gesture.reset();
    }

    /// Pointer left the surface; ends any pan/drag tracking like a release.
    pub fn pointer_leave(&mut self, scene: &mut Scene, events: &EventBus) {
        if let Some(id) = self.gesture.dragged_element().cloned() {
            if let Some(element) = scene.find_by_id_mut(&id) {
                let position = element.position();
                element.pointer_up(position, events);
            }
        }
        self.gesture.reset();
    }

    pub fn double_click(
        &mut self,
        screen: Point,
        scene: &mut Scene,
        viewport: &Viewport,
        events: &EventBus,
    ) {
        if self.mode != ToolMode::Select {
            return;
        }
        let document = viewport.screen_to_document(screen);
        if let Some(id) = scene.hit_test(document).cloned() {
            if let Some(element) = scene.find_by_id_mut(&id) {
                element.double_click(events);
            }
        }
    }
}
