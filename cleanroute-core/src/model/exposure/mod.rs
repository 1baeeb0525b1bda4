//! Directed graph of city nodes and exposure-weighted edges

pub mod components;
pub mod network;

pub use components::{EdgeAttributes, ExposureEdge, ExposureNode};
pub use network::{DanglingEdge, ExposureGraph};
