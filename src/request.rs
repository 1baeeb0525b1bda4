use std::collections::BTreeSet;

use cleanroute_core::prelude::*;
use serde::{Deserialize, Serialize};

/// Rider request for a route between two nodes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteRequest {
    pub source: String,
    pub destination: String,
    pub prefer_scenic: bool,
    /// Reading to advise on; the planner's ambient reading when absent
    pub pollution_index: Option<f64>,
    pub age: i32,
    pub symptoms: BTreeSet<String>,
    pub experience: ExperienceTier,
}

impl RouteRequest {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn scenic(mut self, prefer_scenic: bool) -> Self {
        self.prefer_scenic = prefer_scenic;
        self
    }

    #[must_use]
    pub fn rider<I, S>(mut self, age: i32, symptoms: I, experience: impl Into<ExperienceTier>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.age = age;
        self.symptoms = symptoms.into_iter().map(Into::into).collect();
        self.experience = experience.into();
        self
    }

    #[must_use]
    pub fn reading(mut self, pollution_index: f64) -> Self {
        self.pollution_index = Some(pollution_index);
        self
    }

    pub(crate) fn advisory_reading(&self, ambient_index: f64) -> AdvisoryReading {
        AdvisoryReading {
            pollution_index: self.pollution_index.unwrap_or(ambient_index),
            age: self.age,
            symptoms: self.symptoms.clone(),
            experience: self.experience.clone(),
        }
    }
}

/// Planned route with its polyline and advisories.
///
/// `route` and `path_lat_lng` are empty when the destination is unreachable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub route: Vec<NodeLabel>,
    pub path_lat_lng: Vec<[f64; 2]>,
    pub alerts: Vec<String>,
    pub advisories: Vec<Advisory>,
    /// Condition-specific guidance, rendered like `alerts`
    pub notes: Vec<String>,
    pub personal_notes: Vec<PersonalNote>,
    pub category: AqiCategory,
    pub risk_group: RiskGroup,
    pub cost: Option<Cost>,
    pub totals: EdgeTotals,
    pub length_km: f64,
}
