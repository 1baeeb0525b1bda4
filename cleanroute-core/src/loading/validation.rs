use serde::{Deserialize, Serialize};

use crate::{
    Error,
    model::{CoordinateTable, ExposureGraph, ScoringPolicy},
};

/// How much of the numeric input is checked at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Structure only; weights are used at face value
    #[default]
    Permissive,
    /// Structure plus finite, non-negative weights and coefficients
    Strict,
}

impl From<bool> for ValidationMode {
    fn from(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Permissive }
    }
}

/// One-off validation of a freshly loaded network.
///
/// Path searches assume a network that passed this check and never repeat it.
///
/// # Errors
///
/// - [`Error::DanglingEdge`] for an edge whose target was never declared
/// - [`Error::MissingCoordinate`] for a node without a position
/// - [`Error::InvalidData`] in strict mode for a negative or non-finite weight
pub fn validate_network(
    graph: &ExposureGraph,
    coordinates: &CoordinateTable,
    policy: &ScoringPolicy,
    mode: ValidationMode,
) -> Result<(), Error> {
    if let Some(edge) = graph.dangling_edges().first() {
        return Err(Error::DanglingEdge {
            from: edge.from.clone(),
            to: edge.to.clone(),
        });
    }

    if let Some(label) = graph.labels().find(|label| !coordinates.contains(label)) {
        return Err(Error::MissingCoordinate(label.to_string()));
    }

    if mode == ValidationMode::Strict {
        if !policy.is_well_formed() {
            return Err(Error::InvalidData(format!(
                "scoring policy coefficients must be finite and non-negative: {policy:?}"
            )));
        }

        if let Some((from, to, attributes)) = graph
            .edges()
            .find(|(_, _, attributes)| !attributes.is_well_formed())
        {
            return Err(Error::InvalidData(format!(
                "edge {from} -> {to} has a negative or non-finite attribute: {attributes:?}"
            )));
        }
    }

    Ok(())
}
