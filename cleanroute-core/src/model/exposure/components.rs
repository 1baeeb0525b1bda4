//! Exposure graph components - nodes and edges

use serde::{Deserialize, Serialize};

use crate::NodeLabel;

/// Exposure graph node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposureNode {
    /// Label the node was declared with
    pub label: NodeLabel,
}

/// Raw attributes of a directed street segment
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeAttributes {
    /// Physical length
    pub distance: f64,
    /// Pollution load attributed to traversing the segment
    pub pollution_index: f64,
    /// Desirability bonus
    pub scenic_score: f64,
}

impl EdgeAttributes {
    pub fn new(distance: f64, pollution_index: f64, scenic_score: f64) -> Self {
        Self {
            distance,
            pollution_index,
            scenic_score,
        }
    }

    /// All three attributes are finite and non-negative
    pub fn is_well_formed(&self) -> bool {
        [self.distance, self.pollution_index, self.scenic_score]
            .iter()
            .all(|value| value.is_finite() && *value >= 0.0)
    }
}

/// Exposure graph edge
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureEdge {
    pub attributes: EdgeAttributes,
}

impl ExposureEdge {
    pub fn distance(&self) -> f64 {
        self.attributes.distance
    }

    pub fn pollution_index(&self) -> f64 {
        self.attributes.pollution_index
    }

    pub fn scenic_score(&self) -> f64 {
        self.attributes.scenic_score
    }
}
