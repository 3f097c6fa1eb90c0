//! Press-move-release dragging.

use super::{Behavior, BehaviorTag};
use crate::element::ElementState;
use crate::events::EventBus;
use crate::geometry::Point;

/// Moves the element with the pointer between pointer-down and pointer-up.
///
/// The position updates continuously during the move and the final position
/// is simply whatever the last move left behind; there is no separate
/// commit step. The lock flag is re-checked on every move, so a lock
/// toggled mid-gesture stops further movement without cancelling the
/// gesture — when the element is locked the behavior is suspended, not
/// removed, and unlocking resumes dragging without reattachment.
#[derive(Debug, Default)]
pub struct Draggable {
    /// Offset from the element center to the grab point, present while a
    /// drag is in progress.
    grab_offset: Option<Point>,
}

impl Draggable {
    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }
}

impl Behavior for Draggable {
    fn tag(&self) -> BehaviorTag {
        BehaviorTag::Draggable
    }

    fn on_pointer_down(&mut self, state: &mut ElementState, point: Point, _events: &EventBus) {
        if state.locked {
            return;
        }
        self.grab_offset = Some(point - state.position);
    }

    fn on_pointer_move(&mut self, state: &mut ElementState, point: Point, _events: &EventBus) {
        let Some(offset) = self.grab_offset else {
            return;
        };
        // Lock can flip mid-gesture; movement stops but the gesture stays
        if state.locked {
            return;
        }
        state.position = point - offset;
    }

    fn on_pointer_up(&mut self, _state: &mut ElementState, _point: Point, _events: &EventBus) {
        self.grab_offset = None;
    }

    fn on_detach(&mut self, _state: &mut ElementState) {
        self.grab_offset = None;
    }
}
