//! Primary-click selection toggle.

use super::{Behavior, BehaviorTag};
use crate::element::ElementState;
use crate::events::{EventBus, SelectionEvent};

/// Toggles the element's `selected` flag on primary click and publishes
/// `selected` / `deselected` events.
///
/// Selection and lock are independent axes: a locked element can still be
/// selected. Single-selection semantics (selecting one element deselects
/// the others) are enforced one level up, in
/// [`crate::scene::Scene::primary_click`], because no behavior can see its
/// sibling elements.
#[derive(Debug, Default)]
pub struct Selectable;

impl Behavior for Selectable {
    fn tag(&self) -> BehaviorTag {
        BehaviorTag::Selectable
    }

    fn on_primary_click(&mut self, state: &mut ElementState, events: &EventBus) {
        let want = !state.selected;
        self.on_set_selected(state, want, events);
    }

    fn on_set_selected(&mut self, state: &mut ElementState, selected: bool, events: &EventBus) {
        if state.selected == selected {
            return;
        }
        state.selected = selected;
        let event = SelectionEvent {
            id: state.id.clone(),
        };
        if selected {
            events.selected.publish(&event);
        } else {
            events.deselected.publish(&event);
        }
    }

    fn on_detach(&mut self, state: &mut ElementState) {
        state.selected = false;
    }
}
