//! Pipe/truss construction and derived-dimension setters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::behavior::BehaviorTag;
use crate::constants::{DEFAULT_PIPE_COLOR, PIPE_HEIGHT, STAGE_SCALE};
use crate::element::{Element, ElementId, ElementKind, ElementState, Shape, Visual};
use crate::events::EventBus;
use crate::geometry::Point;

/// Plain pipe or truss. Trusses render with a hatched fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipeKind {
    #[default]
    Pipe,
    Truss,
}

/// Derived visual width for a pipe of `length` stage units.
#[inline]
pub(crate) fn pipe_width_px(length: f32) -> f32 {
    length * STAGE_SCALE
}

impl Element {
    /// Place a new pipe with a fresh client id.
    pub fn pipe(name: &str, length: f32, kind: PipeKind, position: Point) -> Element {
        Self::pipe_with_id(Uuid::new_v4().to_string(), name, length, kind, position)
    }

    /// Build a pipe with a known id (the load path).
    pub fn pipe_with_id(
        id: ElementId,
        name: &str,
        length: f32,
        kind: PipeKind,
        position: Point,
    ) -> Element {
        let mut properties = BTreeMap::new();
        properties.insert("name".to_string(), name.into());
        properties.insert("length".to_string(), (length as f64).into());
        properties.insert("originalLength".to_string(), (length as f64).into());
        properties.insert("color".to_string(), DEFAULT_PIPE_COLOR.into());

        let state = ElementState {
            id,
            kind: ElementKind::Pipe,
            position,
            rotation: 0.0,
            selected: false,
            locked: false,
            visual: Visual {
                shape: Shape::PipeRect {
                    trussed: kind == PipeKind::Truss,
                },
                width_px: pipe_width_px(length),
                height_px: PIPE_HEIGHT,
                label: name.to_string(),
            },
            properties,
        };

        Element::from_state(
            state,
            &[
                BehaviorTag::Selectable,
                BehaviorTag::Draggable,
                BehaviorTag::Lockable,
                BehaviorTag::Rotatable,
            ],
        )
    }

    pub fn pipe_kind(&self) -> Option<PipeKind> {
        match self.visual().shape {
            Shape::PipeRect { trussed: true } => Some(PipeKind::Truss),
            Shape::PipeRect { trussed: false } => Some(PipeKind::Pipe),
            Shape::FixtureSymbol => None,
        }
    }

    /// Change the pipe length, recomputing the visual width. Position and
    /// rotation are untouched; `originalLength` keeps the as-placed value.
    pub fn set_length(&mut self, length: f32, events: &EventBus) {
        if self.kind() != ElementKind::Pipe {
            return;
        }
        let state = self.state_mut();
        state.visual.width_px = pipe_width_px(length);
        state.set_prop("length", length as f64, events);
    }

    /// Change the pipe fill color.
    pub fn set_color(&mut self, color: &str, events: &EventBus) {
        if self.kind() != ElementKind::Pipe {
            return;
        }
        self.state_mut().set_prop("color", color, events);
    }

    /// Rename the pipe, updating the visual label.
    pub fn set_name(&mut self, name: &str, events: &EventBus) {
        if self.kind() != ElementKind::Pipe {
            return;
        }
        let state = self.state_mut();
        state.visual.label = name.to_string();
        state.set_prop("name", name, events);
    }
}
