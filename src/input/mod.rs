//! Pointer and keyboard input handling.
//!
//! A single-threaded controller translates raw input into mode-dependent
//! actions against the scene and viewport. An explicit state machine
//! replaces scattered boolean flags so impossible states are
//! unrepresentable.
//!
//! ## Modules
//!
//! - `tool` - tool modes and the in-flight gesture state machine
//! - `controller` - event dispatch: hit testing, placement, pan, zoom

pub mod controller;
pub mod tool;

pub use controller::{InputController, KeyInput, ZoomTrigger};
pub use tool::{Gesture, ToolMode};
