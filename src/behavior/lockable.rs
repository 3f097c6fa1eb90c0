//! Double-click lock toggle.

use super::{Behavior, BehaviorTag};
use crate::element::ElementState;
use crate::events::{EventBus, LockEvent};

/// Toggles the element's `locked` flag on double-click and publishes a
/// lock-change event. While locked, position and rotation are immutable:
/// Draggable and Rotatable check the flag themselves, so locking suspends
/// them in place rather than detaching anything.
#[derive(Debug, Default)]
pub struct Lockable;

impl Behavior for Lockable {
    fn tag(&self) -> BehaviorTag {
        BehaviorTag::Lockable
    }

    fn on_double_click(&mut self, state: &mut ElementState, events: &EventBus) {
        state.locked = !state.locked;
        events.lock_changed.publish(&LockEvent {
            id: state.id.clone(),
            locked: state.locked,
        });
    }
}
