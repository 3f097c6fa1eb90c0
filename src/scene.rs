//! The live set of elements on the plot.
//!
//! Insertion order is z-order for rendering, so storage is a plain vector
//! with linear id lookup (plots are tens of elements, not thousands; the
//! R-tree in [`crate::spatial`] covers the pointer-hit hot path). All
//! scene-wide mutation copies the id order first so a handler that removes
//! or adds elements mid-iteration cannot skip or duplicate visits.

use thiserror::Error;

use crate::element::{Element, ElementId};
use crate::events::{EventBus, RemovalEvent};
use crate::geometry::Point;
use crate::spatial::SpatialIndex;

/// `Scene::add` with an id that is already present. Programmer error;
/// surfaced immediately, never retried.
#[derive(Debug, Error)]
#[error("duplicate element id: {id}")]
pub struct DuplicateIdError {
    pub id: ElementId,
}

/// Ordered element registry. Owns every element; identity is unique across
/// the scene at all times.
#[derive(Debug, Default)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add an element at the top of the z-order.
    pub fn add(&mut self, element: Element) -> Result<(), DuplicateIdError> {
        if self.find_by_id(element.id()).is_some() {
            return Err(DuplicateIdError {
                id: element.id().clone(),
            });
        }
        self.elements.push(element);
        Ok(())
    }

    /// Remove an element: behaviors are detached before destruction and a
    /// removal event is published. Idempotent — an absent id is a silent
    /// no-op.
    pub fn remove(&mut self, id: &str, events: &EventBus) -> bool {
        let Some(pos) = self.elements.iter().position(|e| e.id() == id) else {
            return false;
        };
        let mut element = self.elements.remove(pos);
        element.detach_all();
        events.removed.publish(&RemovalEvent {
            id: element.id().clone(),
        });
        true
    }

    /// Remove every element in insertion order, each one exactly as
    /// [`Scene::remove`] would.
    pub fn clear(&mut self, events: &EventBus) {
        for id in self.ids() {
            self.remove(&id, events);
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Elements in z-order, back to front.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Defensive copy of the id order; safe to iterate while mutating.
    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id().clone()).collect()
    }

    pub fn selected_id(&self) -> Option<&ElementId> {
        self.elements.iter().find(|e| e.is_selected()).map(|e| e.id())
    }

    // ------------------------------------------------------------------
    // Selection (single-active semantics)
    // ------------------------------------------------------------------

    /// Deselect every selected element, publishing one deselect each.
    pub fn deselect_all(&mut self, events: &EventBus) {
        for id in self.ids() {
            if let Some(element) = self.find_by_id_mut(&id) {
                if element.is_selected() {
                    element.set_selected(false, events);
                }
            }
        }
    }

    /// Primary click on `id`: deselect the others, then let the target's
    /// Selectable toggle. Moving the selection from A to B therefore emits
    /// exactly one deselect and one select.
    pub fn primary_click(&mut self, id: &str, events: &EventBus) {
        for other in self.ids() {
            if other != id {
                if let Some(element) = self.find_by_id_mut(&other) {
                    if element.is_selected() {
                        element.set_selected(false, events);
                    }
                }
            }
        }
        if let Some(element) = self.find_by_id_mut(id) {
            element.primary_click(events);
        }
    }

    // ------------------------------------------------------------------
    // Hit testing
    // ------------------------------------------------------------------

    /// Topmost element whose visual bounds contain the document point.
    ///
    /// Candidates come from an R-tree built over current bounds; ties are
    /// broken front-to-back by z-order.
    pub fn hit_test(&self, point: Point) -> Option<&ElementId> {
        let index = SpatialIndex::from_elements(self.elements.iter().map(|e| (e.id(), e.bounds())));
        let candidates = index.query_point(point);
        self.elements
            .iter()
            .rev()
            .find(|e| candidates.iter().any(|id| id == e.id()))
            .map(|e| e.id())
    }
}
