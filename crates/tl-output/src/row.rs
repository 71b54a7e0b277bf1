//! Plain data rows written by the itinerary exporter.

use tl_core::{Cost, JunctionId};
use tl_network::Graph;
use tl_routing::Route;

/// One road of a route, with junction names resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryRow {
    /// 1-based position of the road in the route.
    pub step:    usize,
    pub from:    String,
    pub to:      String,
    pub weight:  u32,
    pub arrival: Cost,
    pub wait:    Cost,
    pub depart:  Cost,
}

impl ItineraryRow {
    pub const HEADER: [&'static str; 7] =
        ["step", "from", "to", "weight", "arrival", "wait", "depart"];

    /// One row per leg of `route`.  A trivial route has no rows.
    pub fn from_route(graph: &Graph, route: &Route) -> Vec<ItineraryRow> {
        let name = |id: JunctionId| graph.junction(id).map_or_else(|| id.to_string(), |j| j.name.clone());
        route
            .legs
            .iter()
            .enumerate()
            .map(|(i, leg)| ItineraryRow {
                step:    i + 1,
                from:    name(leg.from),
                to:      name(leg.to),
                weight:  leg.weight,
                arrival: leg.arrival,
                wait:    leg.wait,
                depart:  leg.depart,
            })
            .collect()
    }

    pub(crate) fn record(&self) -> [String; 7] {
        [
            self.step.to_string(),
            self.from.clone(),
            self.to.clone(),
            self.weight.to_string(),
            self.arrival.to_string(),
            self.wait.to_string(),
            self.depart.to_string(),
        ]
    }
}
