//! Score composition — the fixed weighted combination of the four
//! sub-scores and the result value objects returned to callers.

use serde::{Deserialize, Serialize};

/// Fixed factor weights. They sum to 1.0, so with every sub-score in
/// [0, 100] the overall score is guaranteed to stay in [0, 100].
const DESCRIPTION_WEIGHT: f64 = 0.5;
const SKILLS_WEIGHT: f64 = 0.2;
const PRIORITY_SKILLS_WEIGHT: f64 = 0.2;
const EXPERIENCE_WEIGHT: f64 = 0.1;

/// Per-factor breakdown. Each field is independently computed and in
/// [0, 100]; an absent requirement (empty keyword set) yields 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub description_score: f64,
    pub skills_score: f64,
    pub priority_skills_score: f64,
    pub experience_score: f64,
}

/// Final scoring result — constructed once, serialized, discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Combines the four sub-scores into the final result.
///
/// The overall score is computed from the unrounded inputs; every reported
/// value is then rounded to 2 decimal places.
pub fn compose(
    description_score: f64,
    skills_score: f64,
    priority_skills_score: f64,
    experience_score: f64,
) -> ScoreResult {
    let overall = description_score * DESCRIPTION_WEIGHT
        + skills_score * SKILLS_WEIGHT
        + priority_skills_score * PRIORITY_SKILLS_WEIGHT
        + experience_score * EXPERIENCE_WEIGHT;

    ScoreResult {
        overall_score: round2(overall),
        breakdown: ScoreBreakdown {
            description_score: round2(description_score),
            skills_score: round2(skills_score),
            priority_skills_score: round2(priority_skills_score),
            experience_score: round2(experience_score),
        },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
