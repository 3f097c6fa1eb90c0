//! The persistence seam and its failure modes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::payload::{LoadFixtureRecord, PipeRecord, PlotData, SavePayload};

/// Errors crossing the persistence boundary. Always caught at that
/// boundary and surfaced to the user; never retried automatically.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never completed (network, timeout, transport).
    #[error("transport failure: {0}")]
    Transport(anyhow::Error),

    /// The backend has no plot under the requested id.
    #[error("plot not found: {0}")]
    NotFound(String),

    /// The backend refused the request (validation on its side).
    #[error("rejected by server: {0}")]
    Rejected(String),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Response to a save request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default)]
    pub plot_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The `plot` block of a load response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoadedPlot {
    pub stage_id: String,
    pub plot_data: PlotData,
    #[serde(default)]
    pub title: Option<String>,
}

/// Response to a load request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoadResponse {
    pub plot: LoadedPlot,
    #[serde(default)]
    pub fixtures: Vec<LoadFixtureRecord>,
    #[serde(default)]
    pub pipes: Vec<PipeRecord>,
}

/// What the core needs from the persistence backend. The embedder owns the
/// transport (and the async boundary); implementations here are
/// synchronous.
pub trait PlotStore {
    fn save_plot(&mut self, payload: &SavePayload) -> StoreResult<SaveResponse>;

    fn load_plot(&mut self, plot_id: &str) -> StoreResult<LoadResponse>;
}
