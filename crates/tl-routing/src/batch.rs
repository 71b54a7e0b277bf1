//! Travel-time tables.
//!
//! One exhaustive [`search`] per source junction fills a whole row, so a
//! table costs `sources.len()` searches regardless of how many destinations
//! it has.  Every search borrows the same `&Graph`; with the `parallel`
//! feature the rows run as Rayon tasks.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use tl_core::{Cost, JunctionId};
use tl_network::Graph;

use crate::engine::search;
use crate::{RoutingError, RoutingResult};

/// Least travel times from each source to each destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TravelTimeTable {
    pub sources:      Vec<JunctionId>,
    pub destinations: Vec<JunctionId>,
    /// `rows[i][j]` is the time from `sources[i]` to `destinations[j]`,
    /// `None` when unreachable.
    pub rows:         Vec<Vec<Option<Cost>>>,
}

impl TravelTimeTable {
    pub fn get(&self, source: usize, destination: usize) -> Option<Cost> {
        self.rows.get(source)?.get(destination).copied().flatten()
    }
}

/// Compute the table for every `(source, destination)` pair.
pub fn travel_time_table(
    graph: &Graph,
    sources: &[JunctionId],
    destinations: &[JunctionId],
) -> RoutingResult<TravelTimeTable> {
    if let Some(&bad) = destinations.iter().find(|&&d| !graph.contains(d)) {
        return Err(RoutingError::JunctionNotFound(bad));
    }

    let row = |&source: &JunctionId| -> RoutingResult<Vec<Option<Cost>>> {
        let state = search(graph, source, None)?;
        Ok(destinations.iter().map(|&d| state.distance(d)).collect())
    };

    #[cfg(feature = "parallel")]
    let rows = sources.par_iter().map(row).collect::<RoutingResult<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let rows = sources.iter().map(row).collect::<RoutingResult<Vec<_>>>()?;

    Ok(TravelTimeTable {
        sources:      sources.to_vec(),
        destinations: destinations.to_vec(),
        rows,
    })
}

/// Travel times from `source` to every junction, indexed by `JunctionId`.
pub fn travel_times_from(graph: &Graph, source: JunctionId) -> RoutingResult<Vec<Option<Cost>>> {
    let all: Vec<JunctionId> = graph.iter().map(|(id, _)| id).collect();
    let mut table = travel_time_table(graph, &[source], &all)?;
    Ok(table.rows.pop().unwrap_or_default())
}
