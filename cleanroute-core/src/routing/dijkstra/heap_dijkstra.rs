use std::collections::BinaryHeap;

use petgraph::graph::NodeIndex;

use super::state::{SearchState, State};
use crate::model::{ExposureGraph, ScoringPolicy};

/// Binary-heap search.
///
/// Stale heap entries are skipped on pop. Pops follow the same
/// (cost, declaration order) sequence as the linear scan.
pub(crate) fn heap_search(
    graph: &ExposureGraph,
    policy: &ScoringPolicy,
    start: NodeIndex,
    end: NodeIndex,
) -> SearchState {
    let mut state = SearchState::new(graph.node_count(), start);
    let mut heap = BinaryHeap::with_capacity(graph.node_count());

    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Skip if already finalised or a cheaper entry was pushed later
        if state.is_settled(node) || cost > state.costs[node.index()] {
            continue;
        }

        state.settle(node);
        if node == end {
            break;
        }

        state.relax(graph, node, policy, |cost, next| {
            heap.push(State { cost, node: next });
        });
    }

    log::trace!(
        "Heap search from {} settled {} of {} nodes",
        graph.label(start),
        state.settled.count_ones(..),
        graph.node_count()
    );

    state
}
