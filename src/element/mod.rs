//! The element model: placed, interactive objects on the plot.
//!
//! An [`Element`] is one placed object — a lighting fixture or a pipe/truss
//! — owning its document-space position, rotation, selection and lock
//! flags, a string-keyed property bag, a symbolic visual, and the set of
//! behaviors currently attached to it. Behaviors are dispatched by taking
//! the instance out of the element's map for the duration of the handler,
//! so handlers mutate [`ElementState`] directly without aliasing.
//!
//! ## Modules
//!
//! - `fixture` - fixture construction + the library template it stamps from
//! - `pipe` - pipe/truss construction and derived-dimension setters

mod fixture;
mod pipe;

pub use fixture::FixtureTemplate;
pub use pipe::PipeKind;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::behavior::{instantiate, Behavior, BehaviorTag};
use crate::events::{EventBus, PropertyEvent};
use crate::geometry::{Point, Rect};

/// Unique element identity within a scene. Client placements get a fresh
/// UUID; loaded elements keep the server-assigned id verbatim.
pub type ElementId = String;

/// The two element variants. Immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Fixture,
    Pipe,
}

/// A property-bag value: plain text or a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Text(String),
    Number(f64),
}

impl PropValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            PropValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            PropValue::Text(_) => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

/// Which symbol the element draws as. Rendering itself happens outside the
/// core; this is the full description it needs.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Two concentric circles with a channel label.
    FixtureSymbol,
    /// A rectangle with a name label; trusses get a hatched fill.
    PipeRect { trussed: bool },
}

/// The element's owned visual representation, in document pixels at zoom
/// 1.0. Destroyed with the element.
#[derive(Clone, Debug, PartialEq)]
pub struct Visual {
    pub shape: Shape,
    pub width_px: f32,
    pub height_px: f32,
    pub label: String,
}

/// Everything about an element except its behavior instances. Handlers
/// receive `&mut ElementState` at dispatch time.
#[derive(Debug)]
pub struct ElementState {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Center-anchored document-space position.
    pub position: Point,
    /// Degrees, normalized to `[0, 360)`.
    pub rotation: f32,
    pub selected: bool,
    pub locked: bool,
    pub properties: BTreeMap<String, PropValue>,
    pub visual: Visual,
}

impl ElementState {
    /// Set a property, publishing a change event only when the value
    /// actually differs. Returns whether anything changed.
    pub fn set_prop(
        &mut self,
        key: &str,
        value: impl Into<PropValue>,
        events: &EventBus,
    ) -> bool {
        let new = value.into();
        let old = self.properties.get(key);
        if old == Some(&new) {
            return false;
        }
        let old = self.properties.insert(key.to_string(), new.clone());
        events.property_changed.publish(&PropertyEvent {
            id: self.id.clone(),
            key: key.to_string(),
            old,
            new,
        });
        true
    }

    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.properties.get(key)
    }

    pub fn prop_text(&self, key: &str) -> &str {
        self.properties
            .get(key)
            .and_then(PropValue::as_text)
            .unwrap_or("")
    }

    pub fn prop_number(&self, key: &str) -> f64 {
        self.properties
            .get(key)
            .and_then(PropValue::as_number)
            .unwrap_or(0.0)
    }

    /// Axis-aligned bounds of the visual around the center position.
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position, self.visual.width_px, self.visual.height_px)
    }
}

/// A placed, interactive object: state plus attached behaviors.
#[derive(Debug)]
pub struct Element {
    state: ElementState,
    behaviors: BTreeMap<BehaviorTag, Box<dyn Behavior>>,
}

impl Element {
    pub(crate) fn from_state(state: ElementState, tags: &[BehaviorTag]) -> Self {
        let mut element = Self {
            state,
            behaviors: BTreeMap::new(),
        };
        for &tag in tags {
            element.attach(tag);
        }
        element
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn id(&self) -> &ElementId {
        &self.state.id
    }

    pub fn kind(&self) -> ElementKind {
        self.state.kind
    }

    pub fn position(&self) -> Point {
        self.state.position
    }

    pub fn rotation(&self) -> f32 {
        self.state.rotation
    }

    pub fn is_selected(&self) -> bool {
        self.state.selected
    }

    pub fn is_locked(&self) -> bool {
        self.state.locked
    }

    pub fn visual(&self) -> &Visual {
        &self.state.visual
    }

    pub fn bounds(&self) -> Rect {
        self.state.bounds()
    }

    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.state.prop(key)
    }

    pub fn prop_text(&self, key: &str) -> &str {
        self.state.prop_text(key)
    }

    pub fn prop_number(&self, key: &str) -> f64 {
        self.state.prop_number(key)
    }

    /// Property-panel edit path; silent when the value is unchanged.
    pub fn set_prop(&mut self, key: &str, value: impl Into<PropValue>, events: &EventBus) -> bool {
        self.state.set_prop(key, value, events)
    }

    pub(crate) fn state_mut(&mut self) -> &mut ElementState {
        &mut self.state
    }

    /// Load path: apply a persisted rotation directly, bypassing Rotatable
    /// (fixtures store rotation too, even though they cannot be rotated
    /// interactively).
    pub(crate) fn restore_rotation(&mut self, degrees: f32) {
        self.state.rotation = crate::geometry::normalize_degrees(degrees);
    }

    /// Load path: apply a persisted lock state. Callers apply this after
    /// position and rotation so the lock cannot be bypassed.
    pub(crate) fn restore_locked(&mut self, locked: bool) {
        self.state.locked = locked;
    }

    // ------------------------------------------------------------------
    // Behavior management
    // ------------------------------------------------------------------

    /// Attach the behavior named by `tag`. Attaching a tag that is already
    /// present replaces it (detach-then-attach), so attachment is
    /// idempotent.
    pub fn attach(&mut self, tag: BehaviorTag) {
        self.detach(tag);
        let mut behavior = instantiate(tag);
        behavior.on_attach(&mut self.state);
        self.behaviors.insert(tag, behavior);
    }

    /// Detach the behavior named by `tag`; a no-op when it is not attached.
    pub fn detach(&mut self, tag: BehaviorTag) {
        if let Some(mut behavior) = self.behaviors.remove(&tag) {
            behavior.on_detach(&mut self.state);
        }
    }

    /// Detach every behavior. Called before the element is destroyed so no
    /// behavior state outlives it.
    pub fn detach_all(&mut self) {
        let tags: Vec<BehaviorTag> = self.behaviors.keys().copied().collect();
        for tag in tags {
            self.detach(tag);
        }
    }

    pub fn has_behavior(&self, tag: BehaviorTag) -> bool {
        self.behaviors.contains_key(&tag)
    }

    pub fn behavior_tags(&self) -> Vec<BehaviorTag> {
        self.behaviors.keys().copied().collect()
    }

    /// Run `f` for each attached behavior. The instance is taken out of the
    /// map while its handler runs so the handler can borrow the element
    /// state mutably.
    fn dispatch(&mut self, mut f: impl FnMut(&mut Box<dyn Behavior>, &mut ElementState)) {
        let tags: Vec<BehaviorTag> = self.behaviors.keys().copied().collect();
        for tag in tags {
            if let Some(mut behavior) = self.behaviors.remove(&tag) {
                f(&mut behavior, &mut self.state);
                self.behaviors.insert(tag, behavior);
            }
        }
    }

    // ------------------------------------------------------------------
    // Input dispatch (document-space points)
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, point: Point, events: &EventBus) {
        self.dispatch(|b, s| b.on_pointer_down(s, point, events));
    }

    pub fn pointer_move(&mut self, point: Point, events: &EventBus) {
        self.dispatch(|b, s| b.on_pointer_move(s, point, events));
    }

    pub fn pointer_up(&mut self, point: Point, events: &EventBus) {
        self.dispatch(|b, s| b.on_pointer_up(s, point, events));
    }

    pub fn primary_click(&mut self, events: &EventBus) {
        self.dispatch(|b, s| b.on_primary_click(s, events));
    }

    pub fn double_click(&mut self, events: &EventBus) {
        self.dispatch(|b, s| b.on_double_click(s, events));
    }

    /// Drive selection from outside (single-selection enforcement). Does
    /// nothing when no Selectable is attached.
    pub fn set_selected(&mut self, selected: bool, events: &EventBus) {
        self.dispatch(|b, s| b.on_set_selected(s, selected, events));
    }

    /// Rotate by `angle_delta` degrees. Routed through Rotatable: elements
    /// without it (fixtures by default) ignore the request, as do locked
    /// elements.
    pub fn rotate(&mut self, angle_delta: f32) {
        self.dispatch(|b, s| b.on_rotate(s, angle_delta));
    }
}
