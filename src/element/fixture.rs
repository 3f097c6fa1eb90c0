//! Fixture construction.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::behavior::BehaviorTag;
use crate::constants::{DEFAULT_CHANNEL, DEFAULT_FIXTURE_COLOR, FIXTURE_RADIUS};
use crate::element::{Element, ElementId, ElementKind, ElementState, Shape, Visual};
use crate::events::EventBus;
use crate::geometry::Point;

/// A fixture-library entry: what the stamp tool places. Mirrors the
/// editable defaults the library stores per fixture type.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureTemplate {
    /// Library fixture-type id, kept on the element for serialization.
    pub fixture_id: String,
    pub name: String,
    pub channel: String,
    pub dimmer: String,
    pub color: String,
    pub purpose: String,
    pub notes: String,
}

impl Default for FixtureTemplate {
    fn default() -> Self {
        Self {
            fixture_id: "1".to_string(),
            name: "Fixture".to_string(),
            channel: DEFAULT_CHANNEL.to_string(),
            dimmer: String::new(),
            color: DEFAULT_FIXTURE_COLOR.to_string(),
            purpose: String::new(),
            notes: String::new(),
        }
    }
}

impl Element {
    /// Place a new fixture from a library template with a fresh client id.
    pub fn fixture(template: &FixtureTemplate, position: Point) -> Element {
        Self::fixture_with_id(Uuid::new_v4().to_string(), template, position)
    }

    /// Build a fixture with a known id (the load path, where the server
    /// assigned one).
    pub fn fixture_with_id(id: ElementId, template: &FixtureTemplate, position: Point) -> Element {
        let mut properties = BTreeMap::new();
        properties.insert("fixture_id".to_string(), template.fixture_id.as_str().into());
        properties.insert("channel".to_string(), template.channel.as_str().into());
        properties.insert("dimmer".to_string(), template.dimmer.as_str().into());
        properties.insert("color".to_string(), template.color.as_str().into());
        properties.insert("purpose".to_string(), template.purpose.as_str().into());
        properties.insert("notes".to_string(), template.notes.as_str().into());

        let state = ElementState {
            id,
            kind: ElementKind::Fixture,
            position,
            rotation: 0.0,
            selected: false,
            locked: false,
            visual: Visual {
                shape: Shape::FixtureSymbol,
                width_px: FIXTURE_RADIUS * 2.0,
                height_px: FIXTURE_RADIUS * 2.0,
                label: template.channel.clone(),
            },
            properties,
        };

        Element::from_state(
            state,
            &[
                BehaviorTag::Selectable,
                BehaviorTag::Draggable,
                BehaviorTag::Lockable,
            ],
        )
    }

    /// Change the fixture channel, keeping the symbol label in sync.
    pub fn set_channel(&mut self, channel: &str, events: &EventBus) {
        if self.kind() != ElementKind::Fixture {
            return;
        }
        let state = self.state_mut();
        state.visual.label = channel.to_string();
        state.set_prop("channel", channel, events);
    }
}
