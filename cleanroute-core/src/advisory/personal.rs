use std::{collections::BTreeSet, fmt};

use serde::Serialize;

/// Symptom tag a rider selects to declare no conditions at all
const NO_CONDITIONS: &str = "none";

/// Declared conditions, or nothing when the `none` tag is present
pub(crate) fn declared_conditions(symptoms: &BTreeSet<String>) -> impl Iterator<Item = &str> {
    let declared = !symptoms.contains(NO_CONDITIONS);
    symptoms
        .iter()
        .map(String::as_str)
        .filter(move |_| declared)
}

/// Condition-specific guidance for a rider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalNote {
    Asthma,
    Heart,
    Diabetes,
}

impl PersonalNote {
    const ALL: [Self; 3] = [Self::Asthma, Self::Heart, Self::Diabetes];

    pub fn condition(self) -> &'static str {
        match self {
            Self::Asthma => "asthma",
            Self::Heart => "heart",
            Self::Diabetes => "diabetes",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Asthma => "Asthma detected: avoid strenuous activity outdoors.",
            Self::Heart => "Heart condition: avoid exertion outdoors.",
            Self::Diabetes => "Diabetes: extra care during high pollution.",
        }
    }
}

impl fmt::Display for PersonalNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Notes for every recognised declared condition, asthma first
pub fn personal_notes(symptoms: &BTreeSet<String>) -> Vec<PersonalNote> {
    let declared: BTreeSet<&str> = declared_conditions(symptoms).collect();
    PersonalNote::ALL
        .into_iter()
        .filter(|note| declared.contains(note.condition()))
        .collect()
}
