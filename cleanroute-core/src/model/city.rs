use geo::LineString;

use super::{CoordinateTable, ExposureGraph, ScoringPolicy};
use crate::{
    Error,
    algo::haversine::polyline_length_km,
    loading::ValidationMode,
    routing::{ExposureRoute, SearchStrategy, find_route_with},
};

/// Validated city network: the exposure graph, node positions and the
/// default scoring policy.
///
/// Immutable once created, so one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct CityNetwork {
    pub graph: ExposureGraph,
    pub coordinates: CoordinateTable,
    pub policy: ScoringPolicy,
    pub(crate) mode: ValidationMode,
}

impl CityNetwork {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    /// Cheapest route under the network's default policy
    pub fn route(&self, start: &str, end: &str) -> ExposureRoute {
        self.route_with_policy(start, end, &self.policy)
    }

    pub fn route_with_policy(
        &self,
        start: &str,
        end: &str,
        policy: &ScoringPolicy,
    ) -> ExposureRoute {
        find_route_with(&self.graph, policy, start, end, SearchStrategy::default())
    }

    /// `[lat, lon]` polyline of a route
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCoordinate`] if a route node has no position,
    /// which cannot happen for networks built by `create_city_network`.
    pub fn lat_lng_path(&self, route: &ExposureRoute) -> Result<Vec<[f64; 2]>, Error> {
        self.coordinates.lat_lng_path(&route.nodes)
    }

    /// Drawable line of a route
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCoordinate`] if a route node has no position.
    pub fn line_string(&self, route: &ExposureRoute) -> Result<LineString<f64>, Error> {
        self.coordinates.line_string(&route.nodes)
    }

    /// Great-circle length of a route in kilometers
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCoordinate`] if a route node has no position.
    pub fn route_length_km(&self, route: &ExposureRoute) -> Result<f64, Error> {
        Ok(polyline_length_km(&self.line_string(route)?))
    }
}
