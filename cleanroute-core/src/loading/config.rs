use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, model::EdgeAttributes, model::ScoringPolicy};

/// Description of a city network as stored in TOML or JSON.
///
/// ```toml
/// strict = false
///
/// [policy]
/// alpha = 1.0
/// beta = 1.0
/// gamma = 1.0
/// preferScenic = false
///
/// [[nodes]]
/// id = "A"
/// position = [28.6139, 77.2090]
/// edges = [{ to = "B", distance = 2.0, pollution = 120.0, scenic = 5.0 }]
/// ```
///
/// Node order is significant: it decides which node is finalised first when
/// several share the same tentative cost.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Reject negative or non-finite weights during validation
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub policy: ScoringPolicy,
    #[serde(default)]
    pub nodes: Vec<NodeConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub id: String,
    /// `[lat, lon]`
    #[serde(default)]
    pub position: Option<[f64; 2]>,
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub to: String,
    pub distance: f64,
    #[serde(alias = "aqi")]
    pub pollution: f64,
    #[serde(default, alias = "tourist")]
    pub scenic: f64,
}

impl EdgeConfig {
    pub fn attributes(&self) -> EdgeAttributes {
        EdgeAttributes::new(self.distance, self.pollution, self.scenic)
    }
}

impl NetworkConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, Error> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(input)?)
    }

    /// Reads a configuration file; `.json` files are parsed as JSON and
    /// everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }
}
