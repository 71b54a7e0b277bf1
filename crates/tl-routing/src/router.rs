//! Routing trait and the default signal-aware Dijkstra.
//!
//! # Cost units
//!
//! Road weights, signal durations and route totals all share one abstract
//! time unit (`tl_core::Cost`).  A route's `total` is the arrival time at the
//! destination when leaving the source at time 0, including every wait at a
//! red or yellow light along the way (the destination's own light included).

use log::debug;

use tl_core::{Cost, JunctionId};
use tl_network::Graph;

use crate::engine::search;
use crate::RoutingResult;

// ── Route ─────────────────────────────────────────────────────────────────────

/// One road of a route with its timing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub from:    JunctionId,
    pub to:      JunctionId,
    /// Base weight of the road.
    pub weight:  u32,
    /// Time the traveler reaches `to`.
    pub arrival: Cost,
    /// Time spent at `to` waiting for green.
    pub wait:    Cost,
    /// `arrival + wait`: time the traveler can leave `to`.
    pub depart:  Cost,
}

/// A least-time route.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Junctions to visit in order, from source to destination.
    pub path:  Vec<JunctionId>,
    /// Arrival time at the destination, waits included.
    pub total: Cost,
    /// One entry per consecutive pair in `path`.
    pub legs:  Vec<Leg>,
}

impl Route {
    /// First junction of the path; `None` only for a hand-built empty route.
    pub fn source(&self) -> Option<JunctionId> {
        self.path.first().copied()
    }

    pub fn destination(&self) -> Option<JunctionId> {
        self.path.last().copied()
    }

    /// Time spent waiting at signals along the route.
    pub fn total_wait(&self) -> Cost {
        self.legs.iter().map(|leg| leg.wait).sum()
    }

    /// `true` if the source and destination are the same junction.
    pub fn is_trivial(&self) -> bool {
        self.legs.is_empty()
    }
}

/// Result of a routing query.  An unreachable destination is a normal
/// answer, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteOutcome {
    Found(Route),
    Unreachable,
}

impl RouteOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::Unreachable => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    /// The junction sequence, empty when unreachable.
    pub fn path(&self) -> &[JunctionId] {
        match self {
            RouteOutcome::Found(route) => &route.path,
            RouteOutcome::Unreachable => &[],
        }
    }

    pub fn total(&self) -> Option<Cost> {
        self.route().map(|route| route.total)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Every call borrows the graph immutably, so a graph cannot change while a
/// query is in flight.  Implementations must be `Send + Sync` so one router
/// can serve parallel table queries.
pub trait Router: Send + Sync {
    /// Compute the least-time route from `from` to `to`.
    ///
    /// Fails only when `from` or `to` is not a junction of `graph`.
    /// `from == to` is a trivial route with total 0.
    fn route(&self, graph: &Graph, from: JunctionId, to: JunctionId) -> RoutingResult<RouteOutcome>;
}

// ── SignalAwareDijkstra ───────────────────────────────────────────────────────

/// Dijkstra over the junction graph where each road costs its base weight
/// plus the wait at the downstream signal.  See [`crate::engine`].
pub struct SignalAwareDijkstra;

impl Router for SignalAwareDijkstra {
    fn route(&self, graph: &Graph, from: JunctionId, to: JunctionId) -> RoutingResult<RouteOutcome> {
        let state = search(graph, from, Some(to))?;
        let outcome = match state.route_to(graph, to) {
            Some(route) => {
                debug!(
                    "route {from} -> {to}: total {} over {} roads ({} waiting)",
                    route.total,
                    route.legs.len(),
                    route.total_wait()
                );
                RouteOutcome::Found(route)
            }
            None => {
                debug!("route {from} -> {to}: unreachable");
                RouteOutcome::Unreachable
            }
        };
        Ok(outcome)
    }
}
