//! Nearest-junction lookup.
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `JunctionId`.
//! The index is a snapshot: rebuild it whenever the graph is replaced.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use tl_core::{GeoPoint, JunctionId};

use crate::Graph;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct JunctionEntry {
    point: [f64; 2], // [lat, lon]
    id:    JunctionId,
}

impl RTreeObject for JunctionEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for JunctionEntry {
    /// Squared Euclidean distance in lat/lon space.  Good enough to rank
    /// junctions within one city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── JunctionLocator ───────────────────────────────────────────────────────────

/// Spatial index over the junction coordinates of one graph.
pub struct JunctionLocator {
    tree: RTree<JunctionEntry>,
}

impl JunctionLocator {
    /// Bulk-load the junctions of `graph`.
    pub fn build(graph: &Graph) -> Self {
        let entries: Vec<JunctionEntry> = graph
            .iter()
            .map(|(id, j)| JunctionEntry { point: [j.pos.lat, j.pos.lon], id })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// The junction closest to `pos`, or `None` for an empty graph.
    pub fn nearest(&self, pos: GeoPoint) -> Option<JunctionId> {
        self.tree.nearest_neighbor(&[pos.lat, pos.lon]).map(|e| e.id)
    }

    /// Up to `k` junctions sorted by ascending distance from `pos`.
    pub fn k_nearest(&self, pos: GeoPoint, k: usize) -> Vec<JunctionId> {
        self.tree
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| e.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
