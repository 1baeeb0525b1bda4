use crate::{Cost, model::{EdgeAttributes, ScoringPolicy}};

/// Traversal cost of a single edge under `policy`.
///
/// The scenic bonus is subtracted only when the policy prefers scenic routes,
/// so the result can be negative for highly scenic, clean and short edges.
#[inline]
pub fn edge_cost(attributes: &EdgeAttributes, policy: &ScoringPolicy) -> Cost {
    let scenic_bonus = if policy.prefer_scenic {
        policy.gamma * attributes.scenic_score
    } else {
        0.0
    };
    policy.alpha * attributes.pollution_index + policy.beta * attributes.distance - scenic_bonus
}
