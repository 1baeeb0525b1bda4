//! Health advisories for a rider exposed to a single pollution reading.
//!
//! Every rule is evaluated on its own and all matching advisories are
//! returned in rule order. Inputs are taken at face value: negative indices
//! or unknown experience tiers are not rejected.

mod category;
mod personal;

pub use category::{AqiCategory, RiskGroup};
pub use personal::{PersonalNote, personal_notes};

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

const MASK_THRESHOLD: f64 = 100.0;
const INDOORS_THRESHOLD: f64 = 150.0;
const PURIFIER_THRESHOLD: f64 = 200.0;

/// Symptoms that call for avoiding physical exertion
const EXERTION_SYMPTOMS: [&str; 2] = ["asthma", "heart"];

/// Self-declared rider experience with polluted air.
///
/// Only `high` changes the outcome; any other tier is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceTier {
    #[default]
    Low,
    High,
    Other(String),
}

impl From<&str> for ExperienceTier {
    fn from(value: &str) -> Self {
        match value {
            "low" => Self::Low,
            "high" => Self::High,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ExperienceTier {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ExperienceTier> for String {
    fn from(value: ExperienceTier) -> Self {
        match value {
            ExperienceTier::Low => "low".to_string(),
            ExperienceTier::High => "high".to_string(),
            ExperienceTier::Other(other) => other,
        }
    }
}

/// Pollution reading and rider attributes for one request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvisoryReading {
    pub pollution_index: f64,
    pub age: i32,
    pub symptoms: BTreeSet<String>,
    pub experience: ExperienceTier,
}

impl AdvisoryReading {
    pub fn new(pollution_index: f64, age: i32) -> Self {
        Self {
            pollution_index,
            age,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_experience(mut self, experience: impl Into<ExperienceTier>) -> Self {
        self.experience = experience.into();
        self
    }

    pub fn category(&self) -> AqiCategory {
        AqiCategory::from_index(self.pollution_index)
    }

    pub fn risk_group(&self) -> RiskGroup {
        RiskGroup::assess(self.age, &self.symptoms)
    }

    pub fn personal_notes(&self) -> Vec<PersonalNote> {
        personal_notes(&self.symptoms)
    }
}

/// Single health recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    WearMask,
    StayIndoors,
    AvoidExertion,
    UseAirPurifier,
    AirQualityGood,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Self::WearMask => "Wear an N95 mask outdoors",
            Self::StayIndoors => "Limit outdoor activity, stay indoors",
            Self::AvoidExertion => "Avoid strenuous outdoor activity",
            Self::UseAirPurifier => "Use indoor air purifier if available",
            Self::AirQualityGood => "Air quality is good",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Advisories for a reading, in rule order. Never empty.
pub fn health_advisories(reading: &AdvisoryReading) -> Vec<Advisory> {
    let index = reading.pollution_index;
    let mut advisories = Vec::with_capacity(4);

    if index > MASK_THRESHOLD || reading.experience == ExperienceTier::High {
        advisories.push(Advisory::WearMask);
    }
    if index > INDOORS_THRESHOLD {
        advisories.push(Advisory::StayIndoors);
    }
    if EXERTION_SYMPTOMS
        .iter()
        .any(|symptom| reading.symptoms.contains(*symptom))
    {
        advisories.push(Advisory::AvoidExertion);
    }
    if index > PURIFIER_THRESHOLD {
        advisories.push(Advisory::UseAirPurifier);
    }

    if advisories.is_empty() {
        advisories.push(Advisory::AirQualityGood);
    }
    advisories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severe_reading_fires_every_rule_in_order() {
        let reading = AdvisoryReading::new(220.0, 70)
            .with_symptoms(["asthma"])
            .with_experience("low");
        assert_eq!(
            health_advisories(&reading),
            vec![
                Advisory::WearMask,
                Advisory::StayIndoors,
                Advisory::AvoidExertion,
                Advisory::UseAirPurifier,
            ]
        );
    }

    #[test]
    fn test_clean_air_reports_good() {
        let reading = AdvisoryReading::new(30.0, 25).with_experience("low");
        let advisories = health_advisories(&reading);
        assert_eq!(advisories, vec![Advisory::AirQualityGood]);
        assert_eq!(advisories[0].to_string(), "Air quality is good");
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(
            health_advisories(&AdvisoryReading::new(100.0, 30)),
            vec![Advisory::AirQualityGood]
        );
        assert_eq!(
            health_advisories(&AdvisoryReading::new(150.0, 30)),
            vec![Advisory::WearMask]
        );
        assert_eq!(
            health_advisories(&AdvisoryReading::new(200.0, 30)),
            vec![Advisory::WearMask, Advisory::StayIndoors]
        );
    }

    #[test]
    fn test_high_experience_alone_triggers_mask() {
        let reading = AdvisoryReading::new(10.0, 30).with_experience("high");
        assert_eq!(health_advisories(&reading), vec![Advisory::WearMask]);
    }

    #[test]
    fn test_symptom_matching_is_exact() {
        let heart = AdvisoryReading::new(10.0, 30).with_symptoms(["heart"]);
        assert_eq!(health_advisories(&heart), vec![Advisory::AvoidExertion]);

        let other = AdvisoryReading::new(10.0, 30).with_symptoms(["diabetes", "Asthma"]);
        assert_eq!(health_advisories(&other), vec![Advisory::AirQualityGood]);
    }

    #[test]
    fn test_unusual_input_is_accepted() {
        let reading = AdvisoryReading::new(-40.0, 0).with_experience("veteran");
        assert_eq!(reading.experience, ExperienceTier::Other("veteran".to_string()));
        assert_eq!(health_advisories(&reading), vec![Advisory::AirQualityGood]);
    }

    #[test]
    fn test_never_empty() {
        let tiers = ["low", "high", "unknown"];
        let symptom_sets: [&[&str]; 3] = [&[], &["asthma"], &["cough", "heart"]];
        for index in (0..=400).step_by(10) {
            for age in [0, 12, 40, 90] {
                for tier in tiers {
                    for symptoms in symptom_sets {
                        let reading = AdvisoryReading::new(f64::from(index), age)
                            .with_symptoms(symptoms.iter().copied())
                            .with_experience(tier);
                        assert!(!health_advisories(&reading).is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_negative_age_is_accepted() {
        let reading: AdvisoryReading =
            serde_json::from_str(r#"{"pollutionIndex": 30, "age": -1, "symptoms": ["none"]}"#)
                .unwrap();
        assert_eq!(reading.age, -1);
        assert_eq!(reading.risk_group(), RiskGroup::HigherRisk);
        assert!(reading.personal_notes().is_empty());
        assert_eq!(health_advisories(&reading), vec![Advisory::AirQualityGood]);
    }

    #[test]
    fn test_reading_deserializes_from_request_shape() {
        let reading: AdvisoryReading = serde_json::from_str(
            r#"{"pollutionIndex": 180, "age": 64, "symptoms": ["heart"], "experience": "high"}"#,
        )
        .unwrap();
        assert_eq!(reading.experience, ExperienceTier::High);
        assert!(reading.symptoms.contains("heart"));
        assert_eq!(
            health_advisories(&reading),
            vec![Advisory::WearMask, Advisory::StayIndoors, Advisory::AvoidExertion]
        );
    }
}
