use std::{path::Path, sync::Arc};

use cleanroute_core::prelude::*;
use log::debug;
use rayon::prelude::*;

use crate::request::{RoutePlan, RouteRequest};

/// Plans rider routes over a shared, read-only city network.
///
/// Cloning is cheap; clones share the same network.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    network: Arc<CityNetwork>,
    ambient_index: f64,
}

impl RoutePlanner {
    /// Reading used for advisories when a request carries none
    pub const DEFAULT_AMBIENT_INDEX: f64 = 180.0;

    pub fn new(network: impl Into<Arc<CityNetwork>>) -> Self {
        Self {
            network: network.into(),
            ambient_index: Self::DEFAULT_AMBIENT_INDEX,
        }
    }

    /// Loads and validates a network configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_config_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let config = NetworkConfig::from_path(path)?;
        Ok(Self::new(create_city_network(&config)?))
    }

    #[must_use]
    pub fn with_ambient_index(mut self, ambient_index: f64) -> Self {
        self.ambient_index = ambient_index;
        self
    }

    pub fn ambient_index(&self) -> f64 {
        self.ambient_index
    }

    pub fn network(&self) -> &CityNetwork {
        &self.network
    }

    /// Route, polyline and advisories for one request.
    ///
    /// The network's policy is used with the request's scenic preference.
    ///
    /// # Errors
    ///
    /// Returns an error if a route node has no coordinates, which a network
    /// built by `create_city_network` rules out.
    pub fn plan(&self, request: &RouteRequest) -> Result<RoutePlan, Error> {
        let policy = self.network.policy.with_scenic(request.prefer_scenic);
        let route = self
            .network
            .route_with_policy(&request.source, &request.destination, &policy);

        let path_lat_lng = self.network.lat_lng_path(&route)?;
        let length_km = self.network.route_length_km(&route)?;

        let reading = request.advisory_reading(self.ambient_index);
        let advisories = health_advisories(&reading);
        let personal_notes = reading.personal_notes();

        debug!(
            "Planned {} -> {}: {} hops, {} advisories",
            request.source,
            request.destination,
            route.hops(),
            advisories.len()
        );

        Ok(RoutePlan {
            cost: (!route.is_empty()).then_some(route.cost),
            totals: route.totals,
            route: route.nodes,
            path_lat_lng,
            alerts: advisories.iter().map(ToString::to_string).collect(),
            advisories,
            notes: personal_notes.iter().map(ToString::to_string).collect(),
            personal_notes,
            category: reading.category(),
            risk_group: reading.risk_group(),
            length_km,
        })
    }

    /// Plans independent requests in parallel, preserving request order
    pub fn plan_many(&self, requests: &[RouteRequest]) -> Vec<Result<RoutePlan, Error>> {
        requests
            .par_iter()
            .map(|request| self.plan(request))
            .collect()
    }
}
