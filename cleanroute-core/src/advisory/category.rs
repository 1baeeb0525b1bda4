use std::collections::BTreeSet;

use serde::Serialize;

use super::personal::declared_conditions;

/// Standard AQI band of a pollution index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Band containing `index`; upper bounds are inclusive
    pub fn from_index(index: f64) -> Self {
        match index {
            i if i <= 50.0 => Self::Good,
            i if i <= 100.0 => Self::Moderate,
            i if i <= 150.0 => Self::UnhealthyForSensitiveGroups,
            i if i <= 200.0 => Self::Unhealthy,
            i if i <= 300.0 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Self::Good => "Air quality is satisfactory.",
            Self::Moderate => "Acceptable; sensitive people should limit exertion.",
            Self::UnhealthyForSensitiveGroups => "Sensitive groups should reduce outdoor activity.",
            Self::Unhealthy => "Everyone may feel health effects.",
            Self::VeryUnhealthy => "Health alert: serious effects for everyone.",
            Self::Hazardous => "Emergency conditions. Avoid all outdoor exertion.",
        }
    }
}

/// Whether a rider is more sensitive to pollution than average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskGroup {
    Typical,
    HigherRisk,
}

impl RiskGroup {
    const CHILD_MAX_AGE: i32 = 12;
    const SENIOR_MIN_AGE: i32 = 65;

    /// Children, seniors and anyone declaring a condition are higher-risk.
    /// A `none` tag means no conditions were declared.
    pub fn assess(age: i32, symptoms: &BTreeSet<String>) -> Self {
        let has_conditions = declared_conditions(symptoms).next().is_some();
        if age <= Self::CHILD_MAX_AGE || age >= Self::SENIOR_MIN_AGE || has_conditions {
            Self::HigherRisk
        } else {
            Self::Typical
        }
    }
}
