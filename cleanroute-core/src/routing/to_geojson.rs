use geojson::{Feature, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::ExposureRoute;
use crate::{Error, algo::haversine::polyline_length_km, model::CoordinateTable};

/// Converts a route to a `GeoJSON` feature.
///
/// Multi-node routes become a `LineString`, a single-node route a `Point`
/// and an empty route a feature with null geometry.
///
/// # Errors
///
/// Returns an error if a route node has no coordinates or the feature
/// cannot be assembled.
pub fn route_to_feature(
    route: &ExposureRoute,
    coordinates: &CoordinateTable,
) -> Result<Feature, Error> {
    let line = coordinates.line_string(&route.nodes)?;

    let geometry = match route.nodes.len() {
        0 => None,
        1 => {
            let point = line.points().next().ok_or_else(|| {
                Error::GeoJsonError("single-node route without a point".to_string())
            })?;
            Some(Geometry::new(GeoJsonValue::from(&point)))
        }
        _ => Some(Geometry::new(GeoJsonValue::from(&line))),
    };

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "nodes": route.nodes,
            "reachable": !route.is_empty(),
            "cost": (!route.is_empty()).then_some(route.cost),
            "distance": route.totals.distance,
            "pollution_index": route.totals.pollution_index,
            "scenic_score": route.totals.scenic_score,
            "length_km": polyline_length_km(&line),
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

pub fn route_to_geojson_string(
    route: &ExposureRoute,
    coordinates: &CoordinateTable,
) -> Result<String, Error> {
    serde_json::to_string(&route_to_feature(route, coordinates)?)
        .map_err(|e| Error::GeoJsonError(e.to_string()))
}
