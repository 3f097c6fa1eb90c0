//! Explicit rotation.

use super::{Behavior, BehaviorTag};
use crate::element::ElementState;
use crate::geometry::normalize_degrees;

/// Applies rotation deltas to the element, normalizing the result to
/// `[0, 360)`. Refused while the element is locked.
#[derive(Debug, Default)]
pub struct Rotatable;

impl Behavior for Rotatable {
    fn tag(&self) -> BehaviorTag {
        BehaviorTag::Rotatable
    }

    fn on_rotate(&mut self, state: &mut ElementState, angle_delta: f32) {
        if state.locked {
            return;
        }
        state.rotation = normalize_degrees(state.rotation + angle_delta);
    }
}
