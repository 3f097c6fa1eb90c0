//! Application-wide constants.
//!
//! Centralizes magic numbers so the transform, placement and serializer
//! code stay self-documenting.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level (hard clamp, not a soft warning)
pub const MIN_ZOOM: f32 = 0.2;

/// Maximum zoom level (hard clamp)
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Per-tick zoom-in factor for the scroll wheel
pub const WHEEL_ZOOM_IN: f32 = 1.1;

/// Per-tick zoom-out factor for the scroll wheel
pub const WHEEL_ZOOM_OUT: f32 = 0.9;

/// Zoom-in factor for the toolbar buttons
pub const BUTTON_ZOOM_IN: f32 = 1.2;

/// Zoom-out factor for the toolbar buttons
pub const BUTTON_ZOOM_OUT: f32 = 0.8;

// ============================================================================
// Stage Scale
// ============================================================================

/// Document pixels per stage unit (meter or foot) at zoom 1.0.
///
/// Collapses the drawing's unit scale (1) and the 10 px-per-scaled-unit
/// factor into one number; a configurable stage scale would replace this
/// constant rather than multiply onto it.
pub const STAGE_SCALE: f32 = 10.0;

// ============================================================================
// Element Visual Defaults
// ============================================================================

/// Outer radius of the fixture symbol in document pixels
pub const FIXTURE_RADIUS: f32 = 15.0;

/// Pipe/truss rectangle height in document pixels
pub const PIPE_HEIGHT: f32 = 12.0;

/// Default pipe length in stage units
pub const DEFAULT_PIPE_LENGTH: f32 = 10.0;

// ============================================================================
// Library Template Defaults
// ============================================================================

/// Default fixture channel stamped at placement
pub const DEFAULT_CHANNEL: &str = "1";

/// Default fixture symbol color
pub const DEFAULT_FIXTURE_COLOR: &str = "#0066cc";

/// Default pipe fill color
pub const DEFAULT_PIPE_COLOR: &str = "#666666";
