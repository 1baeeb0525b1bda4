//! Exposure-aware routing over small city graphs.
//!
//! Edges carry distance, pollution and scenic attributes; a [`ScoringPolicy`]
//! folds them into a single traversal cost and the path finder returns the
//! cheapest route between two named nodes. The advisory module turns a single
//! pollution reading into health recommendations for the rider.

pub mod advisory;
pub mod algo;
mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

pub use advisory::{Advisory, AdvisoryReading, ExperienceTier, health_advisories};
pub use loading::{NetworkConfig, create_city_network};
pub use model::{CityNetwork, CoordinateTable, ExposureGraph, ScoringPolicy};
pub use routing::{ExposureRoute, find_route};

/// Public label of a graph node
pub type NodeLabel = String;
/// Scalar traversal cost produced by a [`ScoringPolicy`]
pub type Cost = f64;
