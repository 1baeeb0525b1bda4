//! This module is responsible for reading network descriptions from
//! configuration files and building a validated city network.

mod builder;
mod config;
mod validation;

pub use builder::create_city_network;
pub use config::{EdgeConfig, NetworkConfig, NodeConfig};
pub use validation::{ValidationMode, validate_network};
