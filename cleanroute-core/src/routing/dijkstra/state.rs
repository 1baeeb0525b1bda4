use std::cmp::Ordering;

use fixedbitset::FixedBitSet;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use crate::{Cost, model::ExposureGraph, model::ScoringPolicy, routing::edge_cost};

/// Heap entry: tentative cost of a node when it was pushed
#[derive(Copy, Clone, Debug)]
pub(super) struct State {
    pub(super) cost: Cost,
    pub(super) node: NodeIndex,
}

// Min-heap by cost, then by declaration order (reversed from standard Rust BinaryHeap)
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Tentative costs, predecessor edges and finalised nodes of one search
#[derive(Debug)]
pub(crate) struct SearchState {
    pub(crate) costs: Vec<Cost>,
    pub(crate) predecessors: Vec<Option<EdgeIndex>>,
    pub(crate) settled: FixedBitSet,
}

impl SearchState {
    pub(crate) fn new(node_count: usize, start: NodeIndex) -> Self {
        let mut costs = vec![Cost::INFINITY; node_count];
        costs[start.index()] = 0.0;
        Self {
            costs,
            predecessors: vec![None; node_count],
            settled: FixedBitSet::with_capacity(node_count),
        }
    }

    pub(crate) fn is_settled(&self, node: NodeIndex) -> bool {
        self.settled.contains(node.index())
    }

    pub(crate) fn settle(&mut self, node: NodeIndex) {
        self.settled.insert(node.index());
    }

    /// Relaxes every outgoing edge of `node` in declaration order.
    ///
    /// Targets are updated on a strict improvement even when already settled;
    /// `on_improved` is only called for targets that are still open.
    pub(crate) fn relax<F>(
        &mut self,
        graph: &ExposureGraph,
        node: NodeIndex,
        policy: &ScoringPolicy,
        mut on_improved: F,
    ) where
        F: FnMut(Cost, NodeIndex),
    {
        let base = self.costs[node.index()];

        // petgraph yields outgoing edges newest first
        let mut outgoing: Vec<_> = graph.graph.edges(node).collect();
        outgoing.reverse();

        for edge in outgoing {
            let next = edge.target();
            let candidate = base + edge_cost(&edge.weight().attributes, policy);

            if candidate < self.costs[next.index()] {
                self.costs[next.index()] = candidate;
                self.predecessors[next.index()] = Some(edge.id());
                if !self.is_settled(next) {
                    on_improved(candidate, next);
                }
            }
        }
    }
}
