//! Core model for an interactive stage-lighting plot editor.
//!
//! This crate owns the parts of the editor with real invariants: element
//! identity and composable interactive behaviors, the screen/document
//! coordinate transform under pan and zoom, the tool-mode input state
//! machine, and the save/load payload. Rendering, form widgets, toasts and
//! the HTTP transport live outside and talk to this core through events and
//! the [`persist::PlotStore`] trait.

pub mod behavior;
pub mod constants;
pub mod editor;
pub mod element;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod persist;
pub mod scene;
pub mod spatial;
pub mod stage;
pub mod viewport;

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber, honoring `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops. Embedders that
/// install their own subscriber can simply skip this.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    });
}
