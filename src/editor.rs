//! The editor session: one context object per open editor.
//!
//! Scene, viewport and event bus are owned here and handed to the parts
//! that need them, so multiple independent editors (or tests) can coexist
//! in one process — there are no process-wide singletons. All mutation
//! happens synchronously inside input handlers or save/load calls on the
//! single UI thread.

use tracing::{error, info, warn};

use crate::element::{Element, FixtureTemplate};
use crate::error::{EditorError, EditorResult};
use crate::events::EventBus;
use crate::geometry::Point;
use crate::input::{InputController, KeyInput, ZoomTrigger};
use crate::persist::{self, PlotMeta, PlotStore, SavePayload};
use crate::scene::Scene;
use crate::stage::StageConfig;
use crate::viewport::Viewport;

/// One open editor: the live scene, viewport, event channels, input
/// controller and plot metadata.
pub struct EditorSession {
    pub scene: Scene,
    pub viewport: Viewport,
    pub events: EventBus,
    pub controller: InputController,
    /// `None` until the user picks a stage; saving requires one.
    pub stage: Option<StageConfig>,
    pub meta: PlotMeta,
    surface: (f32, f32),
}

impl EditorSession {
    /// Open an editor on a drawing surface of `surface` screen pixels.
    ///
    /// A missing or degenerate surface is fatal: the editor does not
    /// proceed without somewhere to draw.
    pub fn new(surface: (f32, f32)) -> EditorResult<Self> {
        if !(surface.0 > 0.0 && surface.1 > 0.0) {
            error!(width = surface.0, height = surface.1, "no usable drawing surface");
            return Err(EditorError::RenderTarget(format!(
                "surface {}x{}",
                surface.0, surface.1
            )));
        }
        Ok(Self {
            scene: Scene::new(),
            viewport: Viewport::new(surface, surface),
            events: EventBus::new(),
            controller: InputController::new(),
            stage: None,
            meta: PlotMeta::default(),
            surface,
        })
    }

    /// Open an editor with a stage already selected; the viewport centers
    /// the stage's paper.
    pub fn with_stage(surface: (f32, f32), stage: StageConfig) -> EditorResult<Self> {
        let mut session = Self::new(surface)?;
        session.viewport = Viewport::new(
            surface,
            (stage.paper_size.width, stage.paper_size.height),
        );
        session.stage = Some(stage);
        Ok(session)
    }

    // ------------------------------------------------------------------
    // Input plumbing
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, screen: Point) -> EditorResult<()> {
        self.controller
            .pointer_down(screen, &mut self.scene, &self.viewport, &self.events)
    }

    pub fn pointer_move(&mut self, screen: Point) {
        self.controller
            .pointer_move(screen, &mut self.scene, &mut self.viewport, &self.events);
    }

    pub fn pointer_up(&mut self, screen: Point) {
        self.controller
            .pointer_up(screen, &mut self.scene, &self.viewport, &self.events);
    }

    pub fn pointer_leave(&mut self) {
        self.controller.pointer_leave(&mut self.scene, &self.events);
    }

    pub fn double_click(&mut self, screen: Point) {
        self.controller
            .double_click(screen, &mut self.scene, &self.viewport, &self.events);
    }

    pub fn key_input(&mut self, key: KeyInput) {
        self.controller.key_input(key);
    }

    /// Wheel zoom; active in every tool mode.
    pub fn wheel_zoom(&mut self, zoom_in: bool) {
        self.controller
            .zoom(&mut self.viewport, zoom_in, ZoomTrigger::Wheel);
    }

    /// Toolbar button zoom (coarser per-tick factor than the wheel).
    pub fn button_zoom(&mut self, zoom_in: bool) {
        self.controller
            .zoom(&mut self.viewport, zoom_in, ZoomTrigger::Button);
    }

    /// Pick a fixture from the library, arming the stamp tool.
    pub fn pick_fixture(&mut self, template: FixtureTemplate) {
        self.controller.arm_fixture(template);
    }

    /// Add a pipe directly (the pipe palette is a one-shot add, not a
    /// stamp tool).
    pub fn add_pipe(&mut self, element: Element) -> EditorResult<()> {
        self.scene.add(element)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize the current state. Fails validation when no stage is
    /// selected; nothing changes in that case.
    pub fn save_payload(&self) -> EditorResult<SavePayload> {
        let Some(stage) = &self.stage else {
            return Err(EditorError::Validation(
                "select a stage before saving".to_string(),
            ));
        };
        Ok(persist::serialize(
            &self.scene,
            &self.viewport,
            stage,
            &self.meta,
        ))
    }

    /// Save through the store. On success the server-assigned plot id is
    /// adopted (last response wins when saves overlap); on any failure the
    /// session is left exactly as it was.
    pub fn save_to(&mut self, store: &mut dyn PlotStore) -> EditorResult<String> {
        let payload = self.save_payload()?;
        let response = store.save_plot(&payload).map_err(|e| {
            warn!(error = %e, "save failed");
            e
        })?;
        if !response.success {
            let message = response
                .message
                .unwrap_or_else(|| "save rejected".to_string());
            warn!(%message, "save rejected by server");
            return Err(EditorError::Validation(message));
        }
        let plot_id = response
            .plot_id
            .or_else(|| self.meta.plot_id.clone())
            .ok_or_else(|| EditorError::Validation("server returned no plot id".to_string()))?;
        let first_save = self.meta.plot_id.is_none();
        self.meta.plot_id = Some(plot_id.clone());
        info!(%plot_id, first_save, "plot saved");
        Ok(plot_id)
    }

    /// Load a plot, replacing the scene, viewport and stage wholesale.
    ///
    /// The response is fully rebuilt before anything is installed, so a
    /// failed load leaves the session at its prior state; the old scene is
    /// then cleared element by element (publishing removals) before the
    /// loaded elements go in.
    pub fn load_from(&mut self, store: &mut dyn PlotStore, plot_id: &str) -> EditorResult<()> {
        let response = store.load_plot(plot_id).map_err(|e| {
            warn!(%plot_id, error = %e, "load failed");
            e
        })?;
        let plot = persist::deserialize(&response, self.surface)?;

        self.scene.clear(&self.events);
        for element in plot.elements {
            // Ids were checked for uniqueness during deserialization
            self.scene.add(element)?;
        }
        self.viewport = plot.viewport;
        self.stage = Some(plot.stage);
        self.meta.plot_id = Some(plot_id.to_string());
        if let Some(title) = &response.plot.title {
            self.meta.title = title.clone();
        }
        info!(%plot_id, elements = self.scene.len(), "plot loaded");
        Ok(())
    }
}
