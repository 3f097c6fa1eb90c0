//! R-tree spatial index for pointer hit testing.
//!
//! Point queries against element bounds are the hot path of every pointer
//! press in select mode. The index is bulk-loaded from current bounds at
//! query time (element positions change continuously during drags, so a
//! persistent index would be stale by the next press anyway).

use rstar::{RTree, RTreeObject, AABB};

use crate::element::ElementId;
use crate::geometry::{Point, Rect};

/// One element's bounding box in the tree.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub id: ElementId,
    pub bounds: Rect,
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.min.x, self.bounds.min.y],
            [self.bounds.max.x, self.bounds.max.y],
        )
    }
}

/// Spatial index over element bounds. O(log n) point queries.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    len: usize,
}

impl SpatialIndex {
    /// Bulk-load an index from `(id, bounds)` pairs.
    pub fn from_elements<'a, I>(elements: I) -> Self
    where
        I: Iterator<Item = (&'a ElementId, Rect)>,
    {
        let entries: Vec<SpatialEntry> = elements
            .map(|(id, bounds)| SpatialEntry {
                id: id.clone(),
                bounds,
            })
            .collect();
        let len = entries.len();
        Self {
            tree: RTree::bulk_load(entries),
            len,
        }
    }

    /// Ids of all elements whose bounds contain the point.
    pub fn query_point(&self, point: Point) -> Vec<ElementId> {
        let envelope = AABB::from_point([point.x, point.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.bounds.contains(point))
            .map(|entry| entry.id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
