//! Time-dependent relaxation engine.
//!
//! # Edge cost
//!
//! Relaxing road `u → v` with base weight `w` costs
//!
//! ```text
//! arrival   = dist[u] + w
//! candidate = arrival + waiting_time(phase[v], arrival)
//! ```
//!
//! The wait depends on *when* the traveler reaches `v`, so it is computed at
//! relaxation time from the already-settled `dist[u]` and never revisited.
//! Waiting never makes a later arrival leave earlier, and both terms are
//! non-negative, so settling junctions in non-decreasing distance order is
//! still exact.

use log::{debug, trace};

use tl_core::{Cost, JunctionId, INFINITE_COST};
use tl_network::Graph;

use crate::heap::{HeapEntry, IndexedMinHeap};
use crate::router::{Leg, Route};
use crate::{RoutingError, RoutingResult};

/// How a settled junction was reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParentLink {
    pub via:    JunctionId,
    /// Base weight of the road taken from `via`.
    pub weight: u32,
}

/// Distances and parent links left behind by one [`search`].
///
/// With a destination, only junctions settled before the search stopped
/// carry final values; the destination always does.  Without one, every
/// reachable junction is final.
#[derive(Clone, Debug)]
pub struct SearchState {
    source:  JunctionId,
    dist:    Vec<Cost>,
    parent:  Vec<Option<ParentLink>>,
    settled: usize,
}

impl SearchState {
    pub fn source(&self) -> JunctionId {
        self.source
    }

    /// Number of junctions taken off the heap with a finite distance.
    pub fn settled(&self) -> usize {
        self.settled
    }

    /// Best known arrival time at `v`, `None` while it is unreached.
    pub fn distance(&self, v: JunctionId) -> Option<Cost> {
        self.dist
            .get(v.index())
            .copied()
            .filter(|&d| d != INFINITE_COST)
    }

    pub fn parent(&self, v: JunctionId) -> Option<ParentLink> {
        self.parent.get(v.index()).copied().flatten()
    }

    /// Junctions from the source to `target`, inclusive.
    pub fn path_to(&self, target: JunctionId) -> Option<Vec<JunctionId>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut cur = target;
        while let Some(link) = self.parent[cur.index()] {
            cur = link.via;
            path.push(cur);
        }
        path.reverse();
        debug_assert_eq!(path.first(), Some(&self.source));
        Some(path)
    }

    /// Rebuild the full [`Route`] to `target`, one [`Leg`] per road.
    pub fn route_to(&self, graph: &Graph, target: JunctionId) -> Option<Route> {
        let path = self.path_to(target)?;
        let legs = path
            .windows(2)
            .map(|pair| {
                let (from, to) = (pair[0], pair[1]);
                let weight = self.parent[to.index()].map_or(0, |link| link.weight);
                let arrival = self.dist[from.index()].saturating_add(Cost::from(weight));
                let wait = graph.junctions()[to.index()].phase.waiting_time(arrival);
                debug_assert_eq!(arrival.saturating_add(wait), self.dist[to.index()]);
                Leg { from, to, weight, arrival, wait, depart: arrival.saturating_add(wait) }
            })
            .collect();
        Some(Route { total: self.dist[target.index()], path, legs })
    }
}

/// Run the signal-aware Dijkstra from `source`.
///
/// Stops as soon as `destination` is settled, when only unreachable
/// junctions remain, or when the heap is empty.  Pass `None` to settle every
/// reachable junction.
pub fn search(
    graph: &Graph,
    source: JunctionId,
    destination: Option<JunctionId>,
) -> RoutingResult<SearchState> {
    for id in std::iter::once(source).chain(destination) {
        if !graph.contains(id) {
            return Err(RoutingError::JunctionNotFound(id));
        }
    }

    let n = graph.junction_count();
    // dist[v] = best known arrival time at v, waits included.
    let mut dist = vec![INFINITE_COST; n];
    let mut parent: Vec<Option<ParentLink>> = vec![None; n];
    let mut heap = IndexedMinHeap::build(n);
    let mut settled = 0;

    dist[source.index()] = 0;
    heap.decrease_key(source, 0);

    while let Some(HeapEntry { junction: u, dist: du }) = heap.extract_min() {
        if du == INFINITE_COST {
            // Everything left is unreachable.
            break;
        }
        settled += 1;
        if Some(u) == destination {
            break;
        }

        for road in graph.neighbors(u) {
            let v = road.to;
            if !heap.contains(v) {
                continue;
            }
            let arrival = du.saturating_add(Cost::from(road.weight));
            let wait = graph.junctions()[v.index()].phase.waiting_time(arrival);
            let candidate = arrival.saturating_add(wait);

            if candidate < dist[v.index()] {
                trace!("relax {u} -> {v}: arrive {arrival}, wait {wait}");
                dist[v.index()] = candidate;
                parent[v.index()] = Some(ParentLink { via: u, weight: road.weight });
                heap.decrease_key(v, candidate);
            }
        }
    }

    debug!("search from {source}: settled {settled} of {n} junctions");
    Ok(SearchState { source, dist, parent, settled })
}
