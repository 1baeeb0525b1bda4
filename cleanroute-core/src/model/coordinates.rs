//! Node positions used only to draw computed routes

use geo::{Coord, LineString, Point};
use hashbrown::HashMap;

use crate::{Error, NodeLabel};

/// Mapping from node label to a WGS84 position.
///
/// Positions are stored as `geo` points (`x` = longitude, `y` = latitude);
/// the `lat_lng` accessors flip them back for display.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    points: HashMap<NodeLabel, Point<f64>>,
}

impl CoordinateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<NodeLabel>, lat: f64, lon: f64) {
        self.points.insert(label.into(), Point::new(lon, lat));
    }

    pub fn contains(&self, label: &str) -> bool {
        self.points.contains_key(label)
    }

    pub fn point(&self, label: &str) -> Option<Point<f64>> {
        self.points.get(label).copied()
    }

    /// `[lat, lon]` of a node
    pub fn lat_lng(&self, label: &str) -> Option<[f64; 2]> {
        self.point(label).map(|point| [point.y(), point.x()])
    }

    /// Maps an ordered node sequence to `[lat, lon]` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCoordinate`] for the first node without a position.
    pub fn lat_lng_path<S: AsRef<str>>(&self, nodes: &[S]) -> Result<Vec<[f64; 2]>, Error> {
        nodes
            .iter()
            .map(|node| {
                self.lat_lng(node.as_ref())
                    .ok_or_else(|| Error::MissingCoordinate(node.as_ref().to_string()))
            })
            .collect()
    }

    /// Maps an ordered node sequence to a drawable line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCoordinate`] for the first node without a position.
    pub fn line_string<S: AsRef<str>>(&self, nodes: &[S]) -> Result<LineString<f64>, Error> {
        let coords = nodes
            .iter()
            .map(|node| {
                self.point(node.as_ref())
                    .map(Coord::from)
                    .ok_or_else(|| Error::MissingCoordinate(node.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LineString::new(coords))
    }
}

impl<S: Into<NodeLabel>> FromIterator<(S, [f64; 2])> for CoordinateTable {
    fn from_iter<T: IntoIterator<Item = (S, [f64; 2])>>(iter: T) -> Self {
        let mut table = Self::new();
        for (label, [lat, lon]) in iter {
            table.insert(label, lat, lon);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_order_is_preserved() {
        let table: CoordinateTable = [("A", [28.6139, 77.2090]), ("B", [28.62, 77.21])]
            .into_iter()
            .collect();

        let path = table.lat_lng_path(&["B", "A"]).unwrap();
        assert_eq!(path, vec![[28.62, 77.21], [28.6139, 77.2090]]);

        let line = table.line_string(&["A", "B"]).unwrap();
        assert_eq!(line.0[0], Coord { x: 77.2090, y: 28.6139 });
    }

    #[test]
    fn test_missing_coordinate_is_reported() {
        let table: CoordinateTable = [("A", [28.6139, 77.2090])].into_iter().collect();
        let err = table.lat_lng_path(&["A", "Q"]).unwrap_err();
        assert!(matches!(err, Error::MissingCoordinate(label) if label == "Q"));
    }

    #[test]
    fn test_empty_path_maps_to_empty_polyline() {
        let table = CoordinateTable::new();
        let nodes: [&str; 0] = [];
        assert!(table.lat_lng_path(&nodes).unwrap().is_empty());
        assert!(table.line_string(&nodes).unwrap().0.is_empty());
    }
}
