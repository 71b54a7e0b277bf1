//! Junction/road graph store.
//!
//! # Data layout
//!
//! Junctions live in a `Vec` indexed by `JunctionId`.  Adjacency is a
//! parallel `Vec<Vec<Road>>`: every undirected road `{u, v, w}` is stored as
//! two directed entries, `u → v` in `adjacency[u]` and `v → u` in
//! `adjacency[v]`, both carrying `w`.
//!
//! [`Graph::neighbors`] walks an adjacency row back to front, so the most
//! recently added road comes first.  That order only decides which of several
//! equal-cost routes the engine reports.
//!
//! # Capacity
//!
//! A graph accepts at most `capacity` junctions.  The bound is chosen at
//! construction and enforced by [`Graph::add_junction`], which returns
//! [`NetworkError::CapacityExceeded`] instead of growing.

use std::fmt;

use tl_core::config::DEFAULT_CAPACITY;
use tl_core::{GeoPoint, JunctionId, SignalPhase};

use crate::{NetworkError, NetworkResult};

/// Longest junction name the snapshot format can carry.
pub const MAX_NAME_LEN: usize = 19;

// ── Junction / Road ───────────────────────────────────────────────────────────

/// An intersection: display name, signal timing, and position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Junction {
    pub name:  String,
    pub phase: SignalPhase,
    /// Only read by exporters and the locator; routing ignores it.
    pub pos:   GeoPoint,
}

/// One directed adjacency entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub to:     JunctionId,
    pub weight: u32,
}

/// An undirected road reported once, with `a < b`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UndirectedRoad {
    pub a:      JunctionId,
    pub b:      JunctionId,
    pub weight: u32,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Capacity-bounded, undirected, weighted junction graph.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    capacity:   usize,
    junctions:  Vec<Junction>,
    adjacency:  Vec<Vec<Road>>,
    road_count: usize,
}

impl Graph {
    /// Empty graph holding up to [`DEFAULT_CAPACITY`] junctions.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty graph holding up to `capacity` junctions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            junctions:  Vec::new(),
            adjacency:  Vec::new(),
            road_count: 0,
        }
    }

    /// Drop every junction and road, keeping the capacity.
    pub fn clear(&mut self) {
        self.junctions.clear();
        self.adjacency.clear();
        self.road_count = 0;
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add a junction and return its `JunctionId` (sequential from 0).
    pub fn add_junction(
        &mut self,
        name: &str,
        phase: SignalPhase,
        pos: GeoPoint,
    ) -> NetworkResult<JunctionId> {
        if self.junctions.len() >= self.capacity {
            return Err(NetworkError::CapacityExceeded { capacity: self.capacity });
        }
        validate_name(name)?;
        if !pos.is_finite() {
            return Err(NetworkError::InvalidPosition { lat: pos.lat, lon: pos.lon });
        }

        let id = JunctionId(self.junctions.len() as u32);
        self.junctions.push(Junction { name: name.to_owned(), phase, pos });
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Add an undirected road between `u` and `v` with base travel weight `w`.
    ///
    /// `w` is taken signed so that user or file input can be rejected here
    /// rather than wrapped.
    pub fn add_road(&mut self, u: JunctionId, v: JunctionId, weight: i64) -> NetworkResult<()> {
        for id in [u, v] {
            if !self.contains(id) {
                return Err(NetworkError::JunctionNotFound(id));
            }
        }
        if u == v {
            return Err(NetworkError::SelfLoop(u));
        }
        let weight = u32::try_from(weight).map_err(|_| NetworkError::InvalidWeight(weight))?;

        self.adjacency[u.index()].push(Road { to: v, weight });
        self.adjacency[v.index()].push(Road { to: u, weight });
        self.road_count += 1;
        Ok(())
    }

    /// Turn a raw (user- or file-supplied) index into a `JunctionId` of this graph.
    pub fn resolve(&self, raw: i64) -> NetworkResult<JunctionId> {
        usize::try_from(raw)
            .ok()
            .filter(|&i| i < self.junctions.len())
            .map(|i| JunctionId(i as u32))
            .ok_or(NetworkError::InvalidIndex(raw))
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn junction_count(&self) -> usize {
        self.junctions.len()
    }

    /// Number of undirected roads.
    pub fn road_count(&self) -> usize {
        self.road_count
    }

    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    pub fn contains(&self, id: JunctionId) -> bool {
        id.index() < self.junctions.len()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn junction(&self, id: JunctionId) -> Option<&Junction> {
        self.junctions.get(id.index())
    }

    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    /// Iterator over `(id, junction)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (JunctionId, &Junction)> + '_ {
        self.junctions
            .iter()
            .enumerate()
            .map(|(i, j)| (JunctionId(i as u32), j))
    }

    /// First junction named `name`, if any.
    pub fn find_by_name(&self, name: &str) -> Option<JunctionId> {
        self.junctions
            .iter()
            .position(|j| j.name == name)
            .map(|i| JunctionId(i as u32))
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Roads leaving `u`, most recently added first.
    ///
    /// # Panics
    /// Panics if `u` is not a junction of this graph.
    #[inline]
    pub fn neighbors(&self, u: JunctionId) -> impl Iterator<Item = Road> + '_ {
        self.adjacency[u.index()].iter().rev().copied()
    }

    /// Every undirected road exactly once, as `a < b`, grouped by `a`.
    pub fn roads(&self) -> impl Iterator<Item = UndirectedRoad> + '_ {
        self.iter().flat_map(move |(a, _)| {
            self.neighbors(a)
                .filter(move |road| a < road.to)
                .map(move |road| UndirectedRoad { a, b: road.to, weight: road.weight })
        })
    }

    /// Weight of the cheapest road between `u` and `v`, if they are adjacent.
    pub fn road_weight(&self, u: JunctionId, v: JunctionId) -> Option<u32> {
        if !self.contains(u) {
            return None;
        }
        self.neighbors(u)
            .filter(|road| road.to == v)
            .map(|road| road.weight)
            .min()
    }

    /// `Display` adapter printing one `i (name) -> [to,w] …` line per junction.
    pub fn adjacency_listing(&self) -> AdjacencyListing<'_> {
        AdjacencyListing { graph: self }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str) -> NetworkResult<()> {
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LEN || name.chars().any(char::is_whitespace) {
        return Err(NetworkError::InvalidName(name.to_owned()));
    }
    Ok(())
}

// ── AdjacencyListing ──────────────────────────────────────────────────────────

/// Human-readable adjacency dump returned by [`Graph::adjacency_listing`].
pub struct AdjacencyListing<'a> {
    graph: &'a Graph,
}

impl fmt::Display for AdjacencyListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, junction) in self.graph.iter() {
            write!(f, "{} ({}) ->", id, junction.name)?;
            for road in self.graph.neighbors(id) {
                write!(f, " [{},{}]", road.to, road.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
