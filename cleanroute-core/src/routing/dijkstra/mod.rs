//! Greedy label-setting searches over the exposure graph.
//!
//! Both searches finalise nodes in ascending tentative cost, breaking ties by
//! declaration order, and stop once the destination is finalised. Negative
//! edge costs are tolerated without repair: a finalised node can still have
//! its cost and predecessor lowered by a later relaxation, but it is never
//! expanded again.

mod heap_dijkstra;
mod linear_dijkstra;
mod state;

pub(crate) use heap_dijkstra::heap_search;
pub(crate) use linear_dijkstra::linear_search;
pub(crate) use state::SearchState;
