//! Composable interactive behaviors.
//!
//! A behavior is a named unit of interactive logic attached to an element:
//! selection, dragging, lock toggling, rotation. Behaviors are keyed by
//! [`BehaviorTag`] and created through [`instantiate`], so attachment is a
//! typed registry lookup instead of string dispatch. Each instance holds
//! only its own gesture state; element state is passed in at dispatch time,
//! which keeps the back-reference non-owning by construction.
//!
//! ## Modules
//!
//! - `selectable` - primary-click selection toggle + selection events
//! - `draggable` - press-move-release position updates, lock-aware
//! - `lockable` - double-click lock toggle + lock-change events
//! - `rotatable` - explicit rotation with `[0, 360)` normalization

mod draggable;
mod lockable;
mod rotatable;
mod selectable;

pub use draggable::Draggable;
pub use lockable::Lockable;
pub use rotatable::Rotatable;
pub use selectable::Selectable;

use crate::element::ElementState;
use crate::events::EventBus;
use crate::geometry::Point;

/// The set of behaviors an element can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BehaviorTag {
    Selectable,
    Draggable,
    Lockable,
    Rotatable,
}

impl BehaviorTag {
    pub fn label(&self) -> &'static str {
        match self {
            BehaviorTag::Selectable => "selectable",
            BehaviorTag::Draggable => "draggable",
            BehaviorTag::Lockable => "lockable",
            BehaviorTag::Rotatable => "rotatable",
        }
    }
}

/// Create a fresh instance of the behavior named by `tag`.
pub fn instantiate(tag: BehaviorTag) -> Box<dyn Behavior> {
    match tag {
        BehaviorTag::Selectable => Box::new(Selectable::default()),
        BehaviorTag::Draggable => Box::new(Draggable::default()),
        BehaviorTag::Lockable => Box::new(Lockable::default()),
        BehaviorTag::Rotatable => Box::new(Rotatable::default()),
    }
}

/// An attachable unit of interactive logic.
///
/// All handlers default to no-ops; each behavior overrides the ones it
/// cares about. Points are in document space.
pub trait Behavior {
    fn tag(&self) -> BehaviorTag;

    fn on_attach(&mut self, _state: &mut ElementState) {}

    fn on_detach(&mut self, _state: &mut ElementState) {}

    fn on_pointer_down(&mut self, _state: &mut ElementState, _point: Point, _events: &EventBus) {}

    fn on_pointer_move(&mut self, _state: &mut ElementState, _point: Point, _events: &EventBus) {}

    fn on_pointer_up(&mut self, _state: &mut ElementState, _point: Point, _events: &EventBus) {}

    fn on_primary_click(&mut self, _state: &mut ElementState, _events: &EventBus) {}

    fn on_double_click(&mut self, _state: &mut ElementState, _events: &EventBus) {}

    /// Selection driven from outside (single-selection enforcement).
    fn on_set_selected(&mut self, _state: &mut ElementState, _selected: bool, _events: &EventBus) {}

    /// Explicit rotation request in degrees.
    fn on_rotate(&mut self, _state: &mut ElementState, _angle_delta: f32) {}
}

impl std::fmt::Debug for dyn Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Behavior({})", self.tag().label())
    }
}
