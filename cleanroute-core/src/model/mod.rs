//! Data model for exposure-aware routing
//!
//! Contains the directed exposure graph, the coordinate table used to draw
//! routes and the scoring policy that converts edge attributes into costs.

pub mod city;
pub mod coordinates;
pub mod exposure;
pub mod policy;

pub use city::CityNetwork;
pub use coordinates::CoordinateTable;
pub use exposure::{DanglingEdge, EdgeAttributes, ExposureEdge, ExposureGraph, ExposureNode};
pub use policy::ScoringPolicy;
