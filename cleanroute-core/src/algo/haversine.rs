//! Great-circle distances between WGS84 points.
//!
//! Points follow the `geo` convention: `x` is longitude and `y` is latitude.

use geo::{Distance, Haversine, LineString, Point};
use itertools::Itertools;

const METERS_IN_KM: f64 = 1000.0;

/// Great-circle distance between two points in kilometers
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b) / METERS_IN_KM
}

/// Total great-circle length of a polyline in kilometers.
/// Empty and single-point lines have zero length.
pub fn polyline_length_km(line: &LineString<f64>) -> f64 {
    line.points()
        .tuple_windows()
        .map(|(a, b)| haversine_km(a, b))
        .sum()
}
