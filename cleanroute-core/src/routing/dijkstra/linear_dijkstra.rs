use petgraph::graph::NodeIndex;

use super::state::SearchState;
use crate::model::{ExposureGraph, ScoringPolicy};

/// Quadratic reference search: every step scans all open nodes for the
/// cheapest one, keeping the earliest declared on ties.
pub(crate) fn linear_search(
    graph: &ExposureGraph,
    policy: &ScoringPolicy,
    start: NodeIndex,
    end: NodeIndex,
) -> SearchState {
    let mut state = SearchState::new(graph.node_count(), start);

    while let Some(node) = cheapest_open_node(&state) {
        state.settle(node);
        if node == end {
            break;
        }
        state.relax(graph, node, policy, |_, _| {});
    }

    log::trace!(
        "Linear search from {} settled {} of {} nodes",
        graph.label(start),
        state.settled.count_ones(..),
        graph.node_count()
    );

    state
}

/// `None` once every open node is unreachable
fn cheapest_open_node(state: &SearchState) -> Option<NodeIndex> {
    let mut best: Option<usize> = None;
    for idx in state.settled.zeroes() {
        match best {
            Some(current) if state.costs[idx] < state.costs[current] => best = Some(idx),
            None => best = Some(idx),
            _ => {}
        }
    }
    best.filter(|&idx| state.costs[idx].is_finite())
        .map(NodeIndex::new)
}
