//! Save/load payloads and the persistence seam.
//!
//! The backend is an external collaborator reached over HTTP by the
//! embedder; the core only defines the wire shapes and the [`PlotStore`]
//! trait it talks through.
//!
//! ## Modules
//!
//! - `payload` - serde payload types + scene/viewport (de)serialization
//! - `store` - the `PlotStore` trait, responses, and `StoreError`

pub mod payload;
pub mod store;

pub use payload::{
    deserialize, serialize, DeserializedPlot, FixtureRecord, LoadFixtureRecord, PipeRecord,
    PlotData, PlotMeta, SavePayload, StageDimensions, ViewportInfo,
};
pub use store::{LoadResponse, LoadedPlot, PlotStore, SaveResponse, StoreError, StoreResult};
