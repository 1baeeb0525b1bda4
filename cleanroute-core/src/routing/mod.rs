//! Exposure-aware shortest-path routing

mod cost;
mod dijkstra;
mod route;
mod to_geojson;

pub use cost::edge_cost;
pub use route::{EdgeTotals, ExposureRoute};
pub use to_geojson::{route_to_feature, route_to_geojson_string};

use crate::model::{ExposureGraph, ScoringPolicy};

/// Node selection strategy of the path search.
///
/// Both strategies finalise nodes in the same order and return identical
/// routes; they differ only in running time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Binary heap, `O((V + E) log V)`
    #[default]
    BinaryHeap,
    /// Full scan of open nodes per step, `O(V^2)`
    LinearScan,
}

/// Cheapest route from `start` to `end` under `policy`.
///
/// Returns an empty route when either node is not in the graph or `end`
/// cannot be reached.
pub fn find_route(
    graph: &ExposureGraph,
    policy: &ScoringPolicy,
    start: &str,
    end: &str,
) -> ExposureRoute {
    find_route_with(graph, policy, start, end, SearchStrategy::default())
}

pub fn find_route_with(
    graph: &ExposureGraph,
    policy: &ScoringPolicy,
    start: &str,
    end: &str,
    strategy: SearchStrategy,
) -> ExposureRoute {
    let (Some(start_node), Some(end_node)) = (graph.node_index(start), graph.node_index(end))
    else {
        log::debug!("Route {start} -> {end} requested for a node outside the graph");
        return ExposureRoute::unreachable();
    };

    let state = match strategy {
        SearchStrategy::BinaryHeap => dijkstra::heap_search(graph, policy, start_node, end_node),
        SearchStrategy::LinearScan => {
            dijkstra::linear_search(graph, policy, start_node, end_node)
        }
    };

    ExposureRoute::from_search(graph, policy, &state, start_node, end_node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EdgeAttributes;

    const STRATEGIES: [SearchStrategy; 2] = [SearchStrategy::BinaryHeap, SearchStrategy::LinearScan];

    fn demo_graph() -> ExposureGraph {
        ExposureGraph::from_adjacency([
            (
                "A",
                vec![
                    ("B", EdgeAttributes::new(2.0, 120.0, 5.0)),
                    ("C", EdgeAttributes::new(3.0, 200.0, 0.0)),
                ],
            ),
            (
                "B",
                vec![
                    ("C", EdgeAttributes::new(2.0, 100.0, 10.0)),
                    ("D", EdgeAttributes::new(4.0, 150.0, 2.0)),
                ],
            ),
            ("C", vec![("D", EdgeAttributes::new(2.0, 80.0, 7.0))]),
            ("D", vec![]),
        ])
        .unwrap()
    }

    fn assert_valid_path(graph: &ExposureGraph, route: &ExposureRoute, start: &str, end: &str) {
        assert_eq!(route.nodes.first().map(String::as_str), Some(start));
        assert_eq!(route.nodes.last().map(String::as_str), Some(end));
        for pair in route.nodes.windows(2) {
            assert!(graph.has_edge(&pair[0], &pair[1]), "no edge {} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_pollution_dominated_route() {
        let graph = demo_graph();
        for strategy in STRATEGIES {
            let route = find_route_with(&graph, &ScoringPolicy::default(), "A", "D", strategy);
            assert_eq!(route.nodes, vec!["A", "B", "D"]);
            assert_eq!(route.cost, 276.0);
            assert_eq!(route.totals.distance, 6.0);
            assert_eq!(route.totals.pollution_index, 270.0);
            assert_eq!(route.totals.scenic_score, 7.0);
            assert_valid_path(&graph, &route, "A", "D");
        }
    }

    #[test]
    fn test_scenic_bonus_with_unit_gamma() {
        // A-B-D 269, A-C-D 278, A-B-C-D 284
        let graph = demo_graph();
        let policy = ScoringPolicy::default().with_scenic(true);
        for strategy in STRATEGIES {
            let route = find_route_with(&graph, &policy, "A", "D", strategy);
            assert_eq!(route.nodes, vec!["A", "B", "D"]);
            assert_eq!(route.cost, 269.0);
        }
    }

    #[test]
    fn test_strong_scenic_preference_changes_route() {
        let graph = demo_graph();
        let plain = ScoringPolicy::new(1.0, 1.0, 10.0, false);
        let scenic = plain.with_scenic(true);

        assert_eq!(find_route(&graph, &plain, "A", "D").nodes, vec!["A", "B", "D"]);

        let route = find_route(&graph, &scenic, "A", "D");
        assert_eq!(route.nodes, vec!["A", "B", "C", "D"]);
        assert_eq!(route.cost, 72.0 + 2.0 + 12.0);
    }

    #[test]
    fn test_start_equals_end() {
        let graph = demo_graph();
        let route = find_route(&graph, &ScoringPolicy::default(), "C", "C");
        assert_eq!(route.nodes, vec!["C"]);
        assert_eq!(route.cost, 0.0);
        assert_eq!(route.hops(), 0);
    }

    #[test]
    fn test_unreachable_and_unknown_nodes() {
        let graph = demo_graph();
        let policy = ScoringPolicy::default();
        for strategy in STRATEGIES {
            assert!(find_route_with(&graph, &policy, "D", "A", strategy).is_empty());
            assert!(find_route_with(&graph, &policy, "A", "Z", strategy).is_empty());
            assert!(find_route_with(&graph, &policy, "Z", "A", strategy).is_empty());
            assert!(find_route_with(&graph, &policy, "Z", "Z", strategy).is_empty());
        }
    }

    #[test]
    fn test_dangling_target_is_unreachable() {
        let graph = ExposureGraph::from_adjacency([
            ("A", vec![("Z", EdgeAttributes::new(1.0, 1.0, 0.0))]),
            ("B", vec![]),
        ])
        .unwrap();
        assert!(find_route(&graph, &ScoringPolicy::default(), "A", "Z").is_empty());
    }

    #[test]
    fn test_ties_follow_declaration_order() {
        // Two equal-cost routes to D, through B or C
        let edge = EdgeAttributes::new(1.0, 0.0, 0.0);
        let via_b_first = ExposureGraph::from_adjacency([
            ("A", vec![("C", edge), ("B", edge)]),
            ("B", vec![("D", edge)]),
            ("C", vec![("D", edge)]),
            ("D", vec![]),
        ])
        .unwrap();
        let via_c_first = ExposureGraph::from_adjacency([
            ("A", vec![("B", edge), ("C", edge)]),
            ("C", vec![("D", edge)]),
            ("B", vec![("D", edge)]),
            ("D", vec![]),
        ])
        .unwrap();

        for strategy in STRATEGIES {
            let policy = ScoringPolicy::default();
            assert_eq!(
                find_route_with(&via_b_first, &policy, "A", "D", strategy).nodes,
                vec!["A", "B", "D"]
            );
            assert_eq!(
                find_route_with(&via_c_first, &policy, "A", "D", strategy).nodes,
                vec!["A", "C", "D"]
            );
        }
    }

    #[test]
    fn test_greedy_finalisation_is_kept_with_negative_costs() {
        // A-B-C-D costs 5 - 10 + 1 = -4, but C and D are finalised through
        // the direct A-C edge before B is expanded.
        let policy = ScoringPolicy::new(0.0, 1.0, 1.0, true);
        let graph = ExposureGraph::from_adjacency([
            (
                "A",
                vec![
                    ("B", EdgeAttributes::new(5.0, 0.0, 0.0)),
                    ("C", EdgeAttributes::new(1.0, 0.0, 0.0)),
                ],
            ),
            ("B", vec![("C", EdgeAttributes::new(1.0, 0.0, 11.0))]),
            ("C", vec![("D", EdgeAttributes::new(1.0, 0.0, 0.0))]),
            ("D", vec![]),
        ])
        .unwrap();

        for strategy in STRATEGIES {
            let route = find_route_with(&graph, &policy, "A", "D", strategy);
            assert_eq!(route.nodes, vec!["A", "C", "D"]);
            assert_eq!(route.cost, 2.0);
        }
    }

    #[test]
    fn test_predecessor_loop_yields_empty_route() {
        // C -> B is negative enough to rewrite the predecessor of the
        // already finalised B, leaving B and C pointing at each other.
        let policy = ScoringPolicy::new(0.0, 1.0, 1.0, true);
        let graph = ExposureGraph::from_adjacency([
            ("S", vec![("B", EdgeAttributes::new(1.0, 0.0, 0.0))]),
            ("B", vec![("C", EdgeAttributes::new(1.0, 0.0, 0.0))]),
            (
                "C",
                vec![
                    ("B", EdgeAttributes::new(1.0, 0.0, 100.0)),
                    ("D", EdgeAttributes::new(1.0, 0.0, 0.0)),
                ],
            ),
            ("D", vec![]),
        ])
        .unwrap();

        for strategy in STRATEGIES {
            assert!(find_route_with(&graph, &policy, "S", "D", strategy).is_empty());
            // Stopping at B finalises it before the rewrite happens
            assert_eq!(
                find_route_with(&graph, &policy, "S", "B", strategy).nodes,
                vec!["S", "B"]
            );
        }
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let graph = demo_graph();
        let policy = ScoringPolicy::new(1.0, 10.0, 1.0, false);
        let first = find_route(&graph, &policy, "A", "D");
        for _ in 0..10 {
            assert_eq!(find_route(&graph, &policy, "A", "D"), first);
        }
    }
}
