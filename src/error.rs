//! Error taxonomy for editor operations.
//!
//! Every failure is terminal for that operation: no automatic retries, and
//! no partial state changes — callers either see the operation complete or
//! see their prior state intact.

use thiserror::Error;

use crate::persist::StoreError;
use crate::scene::DuplicateIdError;

/// Errors surfaced by editor-level operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Precondition failure reported to the user before anything changes
    /// (e.g. saving with no stage selected).
    #[error("validation: {0}")]
    Validation(String),

    /// Identity collision in the scene. Programmer error.
    #[error(transparent)]
    DuplicateId(#[from] DuplicateIdError),

    /// Save/load failure at the persistence boundary. Local state is left
    /// as it was.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The rendering surface is absent or degenerate. Fatal at
    /// initialization; the editor does not proceed.
    #[error("render target unavailable: {0}")]
    RenderTarget(String),
}

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
