//! Unit tests for tl-routing.
//!
//! All tests use hand-crafted or seeded-random cities so they run without
//! any snapshot file.

#[cfg(test)]
mod helpers {
    use tl_core::{waiting_time, Cost, GeoPoint, JunctionId, SignalPhase};
    use tl_network::Graph;

    pub const GREEN: SignalPhase = SignalPhase::always_green(100);

    /// Add junctions named `J0..` with the given phases.
    pub fn city(phases: &[SignalPhase]) -> (Graph, Vec<JunctionId>) {
        let mut g = Graph::with_capacity(phases.len().max(1));
        let ids = phases
            .iter()
            .enumerate()
            .map(|(i, &p)| g.add_junction(&format!("J{i}"), p, GeoPoint::ORIGIN).unwrap())
            .collect();
        (g, ids)
    }

    /// Arrival time at the end of `path` when every road is taken with the
    /// given weights, waiting at each junction entered.
    pub fn path_cost(graph: &Graph, path: &[JunctionId], weights: &[u32]) -> Cost {
        let mut t: Cost = 0;
        for (pair, &w) in path.windows(2).zip(weights) {
            let arrival = t + Cost::from(w);
            t = arrival + waiting_time(graph.junction(pair[1]).unwrap().phase, arrival);
        }
        t
    }

    /// Exhaustive minimum over all simple paths from `from` to `to`.
    pub fn brute_force(graph: &Graph, from: JunctionId, to: JunctionId) -> Option<Cost> {
        fn dfs(
            graph: &Graph,
            at: JunctionId,
            to: JunctionId,
            t: Cost,
            visited: &mut Vec<bool>,
            best: &mut Option<Cost>,
        ) {
            if at == to {
                *best = Some(best.map_or(t, |b| b.min(t)));
                return;
            }
            for road in graph.neighbors(at) {
                if visited[road.to.index()] {
                    continue;
                }
                let arrival = t + Cost::from(road.weight);
                let next = arrival + waiting_time(graph.junction(road.to).unwrap().phase, arrival);
                visited[road.to.index()] = true;
                dfs(graph, road.to, to, next, visited, best);
                visited[road.to.index()] = false;
            }
        }

        let mut visited = vec![false; graph.junction_count()];
        visited[from.index()] = true;
        let mut best = None;
        dfs(graph, from, to, 0, &mut visited, &mut best);
        best
    }
}

// ── Indexed min-heap ──────────────────────────────────────────────────────────

#[cfg(test)]
mod heap {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use tl_core::{JunctionId, INFINITE_COST};
    use crate::{HeapEntry, IndexedMinHeap};

    #[test]
    fn build_holds_every_junction_at_infinity() {
        let heap = IndexedMinHeap::build(5);
        assert_eq!(heap.len(), 5);
        assert!(heap.is_consistent());
        for i in 0..5 {
            assert!(heap.contains(JunctionId(i)));
            assert_eq!(heap.distance(JunctionId(i)), Some(INFINITE_COST));
        }
    }

    #[test]
    fn empty_heap() {
        let mut heap = IndexedMinHeap::build(0);
        assert!(heap.is_empty());
        assert!(heap.peek().is_none());
        assert!(heap.extract_min().is_none());
        assert!(heap.is_consistent());
    }

    #[test]
    fn decrease_key_moves_to_root() {
        let mut heap = IndexedMinHeap::build(6);
        heap.decrease_key(JunctionId(5), 3);
        assert!(heap.is_consistent());
        assert_eq!(heap.peek(), Some(HeapEntry { junction: JunctionId(5), dist: 3 }));

        heap.decrease_key(JunctionId(2), 1);
        assert!(heap.is_consistent());
        assert_eq!(heap.peek().unwrap().junction, JunctionId(2));
    }

    #[test]
    fn extract_marks_absent() {
        let mut heap = IndexedMinHeap::build(3);
        heap.decrease_key(JunctionId(1), 0);
        let top = heap.extract_min().unwrap();
        assert_eq!(top, HeapEntry { junction: JunctionId(1), dist: 0 });
        assert!(!heap.contains(JunctionId(1)));
        assert_eq!(heap.distance(JunctionId(1)), None);
        assert_eq!(heap.len(), 2);
        assert!(heap.is_consistent());
    }

    #[test]
    fn decrease_key_after_extract_is_noop() {
        let mut heap = IndexedMinHeap::build(3);
        heap.decrease_key(JunctionId(0), 5);
        heap.extract_min();
        heap.decrease_key(JunctionId(0), 1);
        assert!(!heap.contains(JunctionId(0)));
        assert_eq!(heap.len(), 2);
        assert!(heap.is_consistent());
    }

    #[test]
    fn equal_key_decrease_is_allowed() {
        let mut heap = IndexedMinHeap::build(2);
        heap.decrease_key(JunctionId(1), 4);
        heap.decrease_key(JunctionId(1), 4);
        assert_eq!(heap.distance(JunctionId(1)), Some(4));
        assert!(heap.is_consistent());
    }

    #[test]
    fn ties_are_deterministic() {
        let order = |heap: &mut IndexedMinHeap| {
            std::iter::from_fn(|| heap.extract_min().map(|e| e.junction.0)).collect::<Vec<_>>()
        };
        let mut a = IndexedMinHeap::build(4);
        let mut b = IndexedMinHeap::build(4);
        let first = order(&mut a);
        assert_eq!(first, order(&mut b));
        // Last slot moves to the root and stays there on ties.
        assert_eq!(first, [0, 3, 2, 1]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_is_contract_violation() {
        let heap = IndexedMinHeap::build(2);
        heap.contains(JunctionId(2));
    }

    #[test]
    fn random_operations_keep_invariants() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.gen_range(1..40);
            let mut heap = IndexedMinHeap::build(n);
            let mut last_extracted = 0;

            while !heap.is_empty() {
                // A few decreases on still-open junctions, never below what
                // was already extracted (as Dijkstra guarantees).
                for _ in 0..rng.gen_range(0..4) {
                    let v = JunctionId(rng.gen_range(0..n as u32));
                    if let Some(current) = heap.distance(v) {
                        let new = rng.gen_range(last_extracted..=current.min(last_extracted + 50));
                        heap.decrease_key(v, new);
                        assert!(heap.is_consistent());
                    }
                }

                let expected_min = (0..n as u32)
                    .filter_map(|i| heap.distance(JunctionId(i)))
                    .min()
                    .unwrap();
                let top = heap.extract_min().unwrap();
                assert_eq!(top.dist, expected_min);
                assert!(!heap.contains(top.junction));
                assert!(heap.is_consistent());
                if top.dist != INFINITE_COST {
                    assert!(top.dist >= last_extracted);
                    last_extracted = top.dist;
                }
            }
        }
    }
}

// ── Signal-aware Dijkstra ─────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use tl_core::{GeoPoint, JunctionId, SignalPhase};
    use tl_network::Graph;

    use super::helpers::{city, path_cost, GREEN};
    use crate::{search, RouteOutcome, Router, RoutingError, SignalAwareDijkstra};

    #[test]
    fn two_hops_beat_direct_road() {
        let source_phase = SignalPhase { red: 10, green: 5, yellow: 2 };
        let (mut g, ids) = city(&[source_phase, GREEN, GREEN]);
        let [a, b, c] = [ids[0], ids[1], ids[2]];
        g.add_road(a, b, 4).unwrap();
        g.add_road(b, c, 4).unwrap();
        g.add_road(a, c, 10).unwrap();

        let outcome = SignalAwareDijkstra.route(&g, a, c).unwrap();
        let route = outcome.route().unwrap();
        assert_eq!(route.path, [a, b, c]);
        assert_eq!(route.total, 8);
        assert_eq!(route.total_wait(), 0);
    }

    #[test]
    fn red_light_wait_is_added() {
        let (mut g, ids) = city(&[GREEN, SignalPhase { red: 10, green: 5, yellow: 0 }]);
        g.add_road(ids[0], ids[1], 12).unwrap();

        let route = SignalAwareDijkstra.route(&g, ids[0], ids[1]).unwrap();
        let route = route.route().unwrap();
        assert_eq!(route.total, 15);
        assert_eq!(route.legs.len(), 1);
        assert_eq!(route.legs[0].arrival, 12);
        assert_eq!(route.legs[0].wait, 3);
        assert_eq!(route.legs[0].depart, 15);
    }

    #[test]
    fn signal_can_make_longer_road_faster() {
        // Via A the base cost is 2, but A's green window is [0, 1) so the
        // traveler arriving at 1 waits 20.  Via B costs 10 with no waiting.
        let short_green = SignalPhase { red: 20, green: 1, yellow: 0 };
        let (mut g, ids) = city(&[GREEN, short_green, GREEN, GREEN]);
        let [s, a, b, d] = [ids[0], ids[1], ids[2], ids[3]];
        g.add_road(s, a, 1).unwrap();
        g.add_road(a, d, 1).unwrap();
        g.add_road(s, b, 5).unwrap();
        g.add_road(b, d, 5).unwrap();

        let outcome = SignalAwareDijkstra.route(&g, s, d).unwrap();
        assert_eq!(outcome.path(), [s, b, d]);
        assert_eq!(outcome.total(), Some(10));
    }

    #[test]
    fn destination_light_counts() {
        let (mut g, ids) = city(&[GREEN, SignalPhase { red: 5, green: 0, yellow: 0 }]);
        g.add_road(ids[0], ids[1], 2).unwrap();
        let outcome = SignalAwareDijkstra.route(&g, ids[0], ids[1]).unwrap();
        assert_eq!(outcome.total(), Some(5));
    }

    #[test]
    fn same_source_and_destination() {
        let (mut g, ids) = city(&[GREEN, GREEN]);
        g.add_road(ids[0], ids[1], 3).unwrap();
        let outcome = SignalAwareDijkstra.route(&g, ids[1], ids[1]).unwrap();
        let route = outcome.route().unwrap();
        assert_eq!(route.path, [ids[1]]);
        assert_eq!(route.total, 0);
        assert!(route.is_trivial());
        assert_eq!(route.source(), Some(ids[1]));
        assert_eq!(route.destination(), Some(ids[1]));
    }

    #[test]
    fn empty_route_has_no_endpoints() {
        let route = crate::Route { path: Vec::new(), total: 0, legs: Vec::new() };
        assert_eq!(route.source(), None);
        assert_eq!(route.destination(), None);
        assert_eq!(route.total_wait(), 0);
    }

    #[test]
    fn disconnected_is_unreachable() {
        let (mut g, ids) = city(&[GREEN, GREEN, GREEN]);
        g.add_road(ids[0], ids[1], 3).unwrap();
        let outcome = SignalAwareDijkstra.route(&g, ids[0], ids[2]).unwrap();
        assert_eq!(outcome, RouteOutcome::Unreachable);
        assert!(outcome.path().is_empty());
        assert_eq!(outcome.total(), None);
    }

    #[test]
    fn unknown_junction_rejected() {
        let (g, ids) = city(&[GREEN]);
        let err = SignalAwareDijkstra.route(&g, ids[0], JunctionId(3)).unwrap_err();
        assert!(matches!(err, RoutingError::JunctionNotFound(JunctionId(3))));
        assert!(search(&g, JunctionId(9), None).is_err());
    }

    #[test]
    fn empty_graph_rejects_every_query() {
        let g = Graph::new();
        assert!(SignalAwareDijkstra.route(&g, JunctionId(0), JunctionId(0)).is_err());
    }

    #[test]
    fn zero_weights_and_zero_cycles() {
        let none = SignalPhase { red: 0, green: 0, yellow: 0 };
        let (mut g, ids) = city(&[none, none, none]);
        g.add_road(ids[0], ids[1], 0).unwrap();
        g.add_road(ids[1], ids[2], 0).unwrap();
        let outcome = SignalAwareDijkstra.route(&g, ids[0], ids[2]).unwrap();
        assert_eq!(outcome.total(), Some(0));
        assert_eq!(outcome.path().len(), 3);
    }

    #[test]
    fn parallel_roads_use_cheapest() {
        let (mut g, ids) = city(&[GREEN, GREEN]);
        g.add_road(ids[0], ids[1], 9).unwrap();
        g.add_road(ids[0], ids[1], 4).unwrap();
        g.add_road(ids[0], ids[1], 6).unwrap();
        let outcome = SignalAwareDijkstra.route(&g, ids[0], ids[1]).unwrap();
        let route = outcome.route().unwrap();
        assert_eq!(route.total, 4);
        assert_eq!(route.legs[0].weight, 4);
    }

    #[test]
    fn legs_chain_and_sum_to_total() {
        let phases = [
            GREEN,
            SignalPhase { red: 6, green: 3, yellow: 1 },
            SignalPhase { red: 4, green: 4, yellow: 0 },
            SignalPhase { red: 9, green: 2, yellow: 2 },
        ];
        let (mut g, ids) = city(&phases);
        g.add_road(ids[0], ids[1], 5).unwrap();
        g.add_road(ids[1], ids[2], 7).unwrap();
        g.add_road(ids[2], ids[3], 2).unwrap();

        let outcome = SignalAwareDijkstra.route(&g, ids[0], ids[3]).unwrap();
        let route = outcome.route().unwrap();
        assert_eq!(route.legs.len(), 3);
        for pair in route.legs.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
            assert!(pair[1].arrival >= pair[0].depart);
        }
        assert_eq!(route.legs.last().unwrap().depart, route.total);

        let weights: Vec<u32> = route.legs.iter().map(|l| l.weight).collect();
        assert_eq!(path_cost(&g, &route.path, &weights), route.total);
    }

    #[test]
    fn stops_once_destination_settled() {
        // A long chain; the destination is the source's direct neighbour.
        let (mut g, ids) = city(&[GREEN; 10]);
        for pair in ids.windows(2) {
            g.add_road(pair[0], pair[1], 1).unwrap();
        }
        let near = search(&g, ids[0], Some(ids[1])).unwrap();
        let full = search(&g, ids[0], None).unwrap();
        assert!(near.settled() < full.settled());
        assert_eq!(full.settled(), 10);
        assert_eq!(near.distance(ids[1]), Some(1));
        assert_eq!(full.distance(ids[9]), Some(9));
    }

    #[test]
    fn search_state_tracks_parents() {
        let (mut g, ids) = city(&[GREEN, GREEN, GREEN]);
        g.add_road(ids[0], ids[1], 2).unwrap();
        g.add_road(ids[1], ids[2], 3).unwrap();
        let state = search(&g, ids[0], None).unwrap();
        assert_eq!(state.source(), ids[0]);
        assert!(state.parent(ids[0]).is_none());
        let link = state.parent(ids[2]).unwrap();
        assert_eq!(link.via, ids[1]);
        assert_eq!(link.weight, 3);
        assert_eq!(state.path_to(ids[2]).unwrap(), ids);
    }

    #[test]
    fn coordinates_do_not_affect_routing() {
        let mut g = Graph::with_capacity(2);
        let a = g.add_junction("A", GREEN, GeoPoint::new(10.0, 10.0)).unwrap();
        let b = g.add_junction("B", GREEN, GeoPoint::new(-80.0, 170.0)).unwrap();
        g.add_road(a, b, 1).unwrap();
        assert_eq!(SignalAwareDijkstra.route(&g, a, b).unwrap().total(), Some(1));
    }
}

// ── Randomised comparison against exhaustive search ───────────────────────────

#[cfg(test)]
mod exhaustive {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use tl_core::SignalPhase;
    use tl_network::Graph;

    use super::helpers::{brute_force, city, path_cost};
    use crate::{RouteOutcome, Router, SignalAwareDijkstra};

    fn random_city(rng: &mut SmallRng) -> Graph {
        let n = rng.gen_range(2..=7);
        let phases: Vec<SignalPhase> = (0..n)
            .map(|_| SignalPhase {
                red:    rng.gen_range(0..12),
                green:  rng.gen_range(0..8),
                yellow: rng.gen_range(0..3),
            })
            .collect();
        let (mut g, ids) = city(&phases);
        let roads = rng.gen_range(0..=n * 2);
        for _ in 0..roads {
            let u = ids[rng.gen_range(0..n)];
            let v = ids[rng.gen_range(0..n)];
            if u != v {
                g.add_road(u, v, rng.gen_range(0..15)).unwrap();
            }
        }
        g
    }

    #[test]
    fn matches_brute_force_on_random_cities() {
        let mut rng = SmallRng::seed_from_u64(0x5157_4e41_4c53);
        for _ in 0..300 {
            let g = random_city(&mut rng);
            for (from, _) in g.iter() {
                for (to, _) in g.iter() {
                    let expected = brute_force(&g, from, to);
                    let outcome = SignalAwareDijkstra.route(&g, from, to).unwrap();

                    match (&outcome, expected) {
                        (RouteOutcome::Found(route), Some(best)) => {
                            assert_eq!(route.total, best, "{from} -> {to}\n{}", g.adjacency_listing());
                            assert_eq!(route.source(), Some(from));
                            assert_eq!(route.destination(), Some(to));
                            for leg in &route.legs {
                                assert!(
                                    g.neighbors(leg.from).any(|r| r.to == leg.to && r.weight == leg.weight),
                                    "leg {leg:?} is not a road"
                                );
                            }
                            let weights: Vec<u32> = route.legs.iter().map(|l| l.weight).collect();
                            assert_eq!(path_cost(&g, &route.path, &weights), route.total);
                        }
                        (RouteOutcome::Unreachable, None) => {}
                        (got, want) => panic!("{from} -> {to}: got {got:?}, brute force {want:?}"),
                    }
                }
            }
        }
    }
}

// ── Travel-time tables ────────────────────────────────────────────────────────

#[cfg(test)]
mod batch {
    use tl_core::{JunctionId, SignalPhase};

    use super::helpers::{city, GREEN};
    use crate::{travel_time_table, travel_times_from, Router, RoutingError, SignalAwareDijkstra};

    fn sample() -> (tl_network::Graph, Vec<JunctionId>) {
        let red_heavy = SignalPhase { red: 8, green: 2, yellow: 1 };
        let (mut g, ids) = city(&[GREEN, red_heavy, GREEN, red_heavy, GREEN]);
        g.add_road(ids[0], ids[1], 3).unwrap();
        g.add_road(ids[1], ids[2], 4).unwrap();
        g.add_road(ids[0], ids[2], 9).unwrap();
        g.add_road(ids[2], ids[3], 1).unwrap();
        // ids[4] is isolated.
        (g, ids)
    }

    #[test]
    fn table_matches_point_queries() {
        let (g, ids) = sample();
        let table = travel_time_table(&g, &ids, &ids).unwrap();
        assert_eq!(table.rows.len(), ids.len());
        for (i, &from) in ids.iter().enumerate() {
            for (j, &to) in ids.iter().enumerate() {
                let expected = SignalAwareDijkstra.route(&g, from, to).unwrap().total();
                assert_eq!(table.get(i, j), expected, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn times_from_one_source() {
        let (g, ids) = sample();
        let times = travel_times_from(&g, ids[0]).unwrap();
        assert_eq!(times.len(), 5);
        assert_eq!(times[0], Some(0));
        assert_eq!(times[4], None);
    }

    #[test]
    fn unknown_junctions_rejected() {
        let (g, ids) = sample();
        let err = travel_time_table(&g, &ids, &[JunctionId(42)]).unwrap_err();
        assert!(matches!(err, RoutingError::JunctionNotFound(JunctionId(42))));
        assert!(travel_time_table(&g, &[JunctionId(42)], &ids).is_err());
    }

    #[test]
    fn empty_table() {
        let (g, _) = sample();
        let table = travel_time_table(&g, &[], &[]).unwrap();
        assert!(table.rows.is_empty());
        assert_eq!(table.get(0, 0), None);
    }
}
