use log::warn;
use petgraph::graph::{EdgeIndex, NodeIndex};
use serde::Serialize;

use super::{dijkstra::SearchState, edge_cost};
use crate::{Cost, NodeLabel, model::ExposureGraph, model::ScoringPolicy};

/// Raw attribute sums over the edges of a route
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeTotals {
    pub distance: f64,
    pub pollution_index: f64,
    pub scenic_score: f64,
}

/// Result of a path search.
///
/// `nodes` runs from start to end inclusive and is empty when no route
/// exists. `cost` is the policy cost summed over the traversed edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureRoute {
    pub nodes: Vec<NodeLabel>,
    pub cost: Cost,
    pub totals: EdgeTotals,
}

impl ExposureRoute {
    pub fn unreachable() -> Self {
        Self {
            nodes: Vec::new(),
            cost: Cost::INFINITY,
            totals: EdgeTotals::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of traversed edges
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Walks predecessor edges back from `end` to `start`.
    pub(crate) fn from_search(
        graph: &ExposureGraph,
        policy: &ScoringPolicy,
        state: &SearchState,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Self {
        let Some(edges) = predecessor_chain(graph, state, start, end) else {
            return Self::unreachable();
        };

        let mut nodes = Vec::with_capacity(edges.len() + 1);
        nodes.push(graph.label(start).to_string());

        let mut cost = 0.0;
        let mut totals = EdgeTotals::default();
        for edge in edges {
            let Some((_, target)) = graph.graph.edge_endpoints(edge) else {
                return Self::unreachable();
            };
            let weight = &graph.graph[edge];

            cost += edge_cost(&weight.attributes, policy);
            totals.distance += weight.distance();
            totals.pollution_index += weight.pollution_index();
            totals.scenic_score += weight.scenic_score();
            nodes.push(graph.label(target).to_string());
        }

        Self {
            nodes,
            cost,
            totals,
        }
    }
}

/// Predecessor edges from `start` to `end` in travel order.
///
/// `None` if `end` was never reached, or if the chain loops without reaching
/// `start`, which negative costs can cause by rewriting the predecessor of an
/// already finalised node.
fn predecessor_chain(
    graph: &ExposureGraph,
    state: &SearchState,
    start: NodeIndex,
    end: NodeIndex,
) -> Option<Vec<EdgeIndex>> {
    let mut edges = Vec::new();
    let mut current = end;

    while current != start {
        let edge = state.predecessors[current.index()]?;
        edges.push(edge);
        if edges.len() >= graph.node_count() {
            warn!(
                "Predecessor chain from {} loops without reaching {}, reporting no route",
                graph.label(end),
                graph.label(start)
            );
            return None;
        }
        current = graph.edge_source(edge)?;
    }

    edges.reverse();
    Some(edges)
}
