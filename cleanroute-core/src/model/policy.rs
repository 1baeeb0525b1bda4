use serde::{Deserialize, Serialize};

/// Weights that fold edge attributes into a single traversal cost.
///
/// `alpha` scales pollution, `beta` scales distance and `gamma` scales the
/// scenic bonus, which is only subtracted when `prefer_scenic` is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringPolicy {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub prefer_scenic: bool,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            gamma: 1.0,
            prefer_scenic: false,
        }
    }
}

impl ScoringPolicy {
    pub fn new(alpha: f64, beta: f64, gamma: f64, prefer_scenic: bool) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            prefer_scenic,
        }
    }

    /// Same coefficients with the scenic preference replaced
    #[must_use]
    pub fn with_scenic(self, prefer_scenic: bool) -> Self {
        Self {
            prefer_scenic,
            ..self
        }
    }

    /// All coefficients are finite and non-negative
    pub fn is_well_formed(&self) -> bool {
        [self.alpha, self.beta, self.gamma]
            .iter()
            .all(|value| value.is_finite() && *value >= 0.0)
    }
}
