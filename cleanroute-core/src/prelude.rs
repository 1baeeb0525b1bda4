pub use crate::Error;

// Model and loading
pub use crate::loading::{NetworkConfig, ValidationMode, create_city_network, validate_network};
pub use crate::model::{CityNetwork, CoordinateTable, EdgeAttributes, ExposureGraph, ScoringPolicy};

// Routing
pub use crate::routing::{
    EdgeTotals, ExposureRoute, SearchStrategy, edge_cost, find_route, find_route_with,
    route_to_feature, route_to_geojson_string,
};

// Advisory
pub use crate::advisory::{
    Advisory, AdvisoryReading, AqiCategory, ExperienceTier, PersonalNote, RiskGroup,
    health_advisories, personal_notes,
};

// Geodesy
pub use crate::algo::haversine::{haversine_km, polyline_length_km};

pub use crate::Cost;
pub use crate::NodeLabel;
