//! Tool modes and gesture state.
//!
//! ## Mode transitions
//!
//! ```text
//! *                -> requested tool   (external tool-selection command)
//! *                -> Select           (Escape)
//! not Pan          -> Pan              (Space down, non-repeat; previous mode stashed)
//! Pan (via Space)  -> stashed mode     (Space up)
//! AddFixture       -> Select           (placement committed — stamp tool)
//! ```

use crate::element::ElementId;
use crate::geometry::Point;

/// The current interpretation applied to pointer input. Initial mode is
/// `Select`; the editor loop has no terminal mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolMode {
    #[default]
    Select,
    AddFixture,
    Pan,
}

/// The pointer gesture currently in flight, if any.
#[derive(Clone, Debug, Default)]
pub enum Gesture {
    /// No active pointer operation.
    #[default]
    Idle,

    /// View panning: pointer held down in pan mode.
    PanningView {
        /// Last pointer position in screen pixels, for delta calculation.
        last_pos: Point,
    },

    /// A press landed on an element; moves are routed to its behaviors.
    DraggingElement { id: ElementId },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Gesture::PanningView { .. })
    }

    pub fn dragged_element(&self) -> Option<&ElementId> {
        match self {
            Gesture::DraggingElement { id } => Some(id),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Gesture::Idle;
    }

    pub fn start_panning(&mut self, pos: Point) {
        *self = Gesture::PanningView { last_pos: pos };
    }

    pub fn start_dragging(&mut self, id: ElementId) {
        *self = Gesture::DraggingElement { id };
    }

    /// Update the pan anchor, returning the screen-pixel delta since the
    /// previous position. `None` when not panning.
    pub fn pan_delta(&mut self, pos: Point) -> Option<(f32, f32)> {
        match self {
            Gesture::PanningView { last_pos } => {
                let delta = (pos.x - last_pos.x, pos.y - last_pos.y);
                *last_pos = pos;
                Some(delta)
            }
            _ => None,
        }
    }
}
