//! Test helpers: session builders and persistence test doubles.

use stageplot::editor::EditorSession;
use stageplot::element::{Element, FixtureTemplate, PipeKind};
use stageplot::geometry::Point;
use stageplot::persist::{
    LoadFixtureRecord, LoadResponse, LoadedPlot, PlotStore, SavePayload, SaveResponse, StoreError,
    StoreResult,
};
use stageplot::stage::StageConfig;

pub const SURFACE: (f32, f32) = (800.0, 600.0);

/// A session with a stage already picked, ready to place and save.
pub fn session_with_stage() -> EditorSession {
    EditorSession::with_stage(SURFACE, StageConfig::new("3", 12.0, 10.0, 3.0))
        .expect("surface is valid")
}

/// Builder for sessions pre-populated with elements.
///
/// # Example
/// ```ignore
/// let session = TestSessionBuilder::new()
///     .with_fixture((100.0, 100.0))
///     .with_pipe("Electric 1", 10.0, (200.0, 50.0))
///     .build();
/// ```
pub struct TestSessionBuilder {
    elements: Vec<Element>,
}

impl Default for TestSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSessionBuilder {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn with_fixture(mut self, pos: (f32, f32)) -> Self {
        self.elements.push(Element::fixture(
            &FixtureTemplate::default(),
            Point::new(pos.0, pos.1),
        ));
        self
    }

    pub fn with_pipe(mut self, name: &str, length: f32, pos: (f32, f32)) -> Self {
        self.elements.push(Element::pipe(
            name,
            length,
            PipeKind::Pipe,
            Point::new(pos.0, pos.1),
        ));
        self
    }

    pub fn build(self) -> EditorSession {
        let mut session = session_with_stage();
        for element in self.elements {
            session.scene.add(element).expect("builder ids are fresh");
        }
        session
    }
}

/// In-memory store: remembers the last saved payload and serves it back.
#[derive(Default)]
pub struct MemoryStore {
    pub saved: Option<SavePayload>,
    pub save_count: usize,
}

impl PlotStore for MemoryStore {
    fn save_plot(&mut self, payload: &SavePayload) -> StoreResult<SaveResponse> {
        self.save_count += 1;
        let plot_id = payload
            .plot_id
            .clone()
            .unwrap_or_else(|| "101".to_string());
        let mut stored = payload.clone();
        stored.plot_id = Some(plot_id.clone());
        self.saved = Some(stored);
        Ok(SaveResponse {
            success: true,
            plot_id: Some(plot_id),
            message: Some("Plot saved successfully".to_string()),
        })
    }

    fn load_plot(&mut self, plot_id: &str) -> StoreResult<LoadResponse> {
        let Some(payload) = &self.saved else {
            return Err(StoreError::NotFound(plot_id.to_string()));
        };
        if payload.plot_id.as_deref() != Some(plot_id) {
            return Err(StoreError::NotFound(plot_id.to_string()));
        }
        Ok(LoadResponse {
            plot: LoadedPlot {
                stage_id: payload.stage_id.clone(),
                plot_data: payload.plot_data.clone(),
                title: Some(payload.title.clone()),
            },
            fixtures: payload
                .fixtures
                .iter()
                .enumerate()
                .map(|(i, record)| LoadFixtureRecord {
                    id: Some(format!("f{}", i + 1)),
                    record: record.clone(),
                })
                .collect(),
            pipes: payload.pipes.clone(),
        })
    }
}

/// Store that fails every request at the transport level.
pub struct FailingStore;

impl PlotStore for FailingStore {
    fn save_plot(&mut self, _payload: &SavePayload) -> StoreResult<SaveResponse> {
        Err(StoreError::Transport(anyhow::anyhow!("connection refused")))
    }

    fn load_plot(&mut self, plot_id: &str) -> StoreResult<LoadResponse> {
        let _ = plot_id;
        Err(StoreError::Transport(anyhow::anyhow!("connection refused")))
    }
}
