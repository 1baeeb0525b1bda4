use hashbrown::HashMap;
use log::warn;
use petgraph::{
    graph::{DiGraph, EdgeIndex, NodeIndex},
    visit::EdgeRef,
};

use super::components::{EdgeAttributes, ExposureEdge, ExposureNode};
use crate::{Error, NodeLabel};

/// Edge whose target was never declared as a node.
///
/// Such edges are kept out of the routable graph, which makes their target
/// unreachable through them, and are reported by the validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingEdge {
    pub from: NodeLabel,
    pub to: NodeLabel,
    pub attributes: EdgeAttributes,
}

/// Directed exposure graph.
///
/// Node indices follow declaration order, which is the tie-break order used
/// by the path search when several nodes share the minimum tentative cost.
#[derive(Debug, Clone)]
pub struct ExposureGraph {
    pub(crate) graph: DiGraph<ExposureNode, ExposureEdge>,
    index: HashMap<NodeLabel, NodeIndex>,
    dangling: Vec<DanglingEdge>,
}

impl ExposureGraph {
    /// Builds a graph from an ordered adjacency list: each node label with
    /// its outgoing `(target, attributes)` edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if a label is declared twice.
    pub fn from_adjacency<'a, I, E>(adjacency: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (&'a str, E)>,
        E: IntoIterator<Item = (&'a str, EdgeAttributes)>,
    {
        let adjacency: Vec<(&str, Vec<(&str, EdgeAttributes)>)> = adjacency
            .into_iter()
            .map(|(label, edges)| (label, edges.into_iter().collect()))
            .collect();

        let mut graph = DiGraph::with_capacity(adjacency.len(), adjacency.len() * 2);
        let mut index = HashMap::with_capacity(adjacency.len());

        for (label, _) in &adjacency {
            if index.contains_key(*label) {
                return Err(Error::DuplicateNode((*label).to_string()));
            }
            let node = graph.add_node(ExposureNode {
                label: (*label).to_string(),
            });
            index.insert((*label).to_string(), node);
        }

        let mut dangling = Vec::new();
        for (label, edges) in adjacency {
            let source = index[label];
            for (target, attributes) in edges {
                if let Some(&target_node) = index.get(target) {
                    graph.add_edge(source, target_node, ExposureEdge { attributes });
                } else {
                    warn!("Edge {label} -> {target} targets an undeclared node, treating it as unreachable");
                    dangling.push(DanglingEdge {
                        from: label.to_string(),
                        to: target.to_string(),
                        attributes,
                    });
                }
            }
        }

        Ok(Self {
            graph,
            index,
            dangling,
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    pub(crate) fn label(&self, node: NodeIndex) -> &str {
        &self.graph[node].label
    }

    pub(crate) fn edge_source(&self, edge: EdgeIndex) -> Option<NodeIndex> {
        self.graph.edge_endpoints(edge).map(|(source, _)| source)
    }

    /// Node labels in declaration order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(|node| node.label.as_str())
    }

    /// Routable edges as `(source, target, attributes)`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &EdgeAttributes)> {
        self.graph.edge_references().map(|edge| {
            (
                self.label(edge.source()),
                self.label(edge.target()),
                &edge.weight().attributes,
            )
        })
    }

    /// Whether a routable edge runs from `from` to `to`
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_index(from), self.node_index(to)) {
            (Some(source), Some(target)) => self.graph.contains_edge(source, target),
            _ => false,
        }
    }

    /// Edges that were declared with an undeclared target
    pub fn dangling_edges(&self) -> &[DanglingEdge] {
        &self.dangling
    }
}
