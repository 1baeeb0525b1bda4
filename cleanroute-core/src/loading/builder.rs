use log::info;

use super::config::NetworkConfig;
use super::validation::{ValidationMode, validate_network};
use crate::{CityNetwork, CoordinateTable, Error, ExposureGraph};

/// Creates a validated city network from its configuration
///
/// # Errors
///
/// Returns an error if a node is declared twice or the network fails
/// validation (see [`validate_network`]).
pub fn create_city_network(config: &NetworkConfig) -> Result<CityNetwork, Error> {
    let mode = ValidationMode::from(config.strict);

    let graph = ExposureGraph::from_adjacency(config.nodes.iter().map(|node| {
        (
            node.id.as_str(),
            node.edges
                .iter()
                .map(|edge| (edge.to.as_str(), edge.attributes())),
        )
    }))?;

    let coordinates: CoordinateTable = config
        .nodes
        .iter()
        .filter_map(|node| node.position.map(|position| (node.id.as_str(), position)))
        .collect();

    validate_network(&graph, &coordinates, &config.policy, mode)?;

    info!(
        "City network created: {} nodes, {} edges ({mode:?} validation)",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(CityNetwork {
        graph,
        coordinates,
        policy: config.policy,
        mode,
    })
}
