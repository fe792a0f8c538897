use serde::{Deserialize, Serialize};

use super::super::domain::Assessment;
use super::super::skills::SkillSet;

/// Per-dimension scores on the shared 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
}

/// Partition of the job's required skills against one candidate.
pub(crate) struct SkillComparison {
    pub(crate) matching: SkillSet,
    pub(crate) missing: SkillSet,
}

pub(crate) fn score_dimensions(
    assessment: &Assessment,
    candidate_skills: &SkillSet,
    required_skills: &SkillSet,
) -> (DimensionScores, SkillComparison) {
    let comparison = compare_skills(candidate_skills, required_skills);
    let scores = DimensionScores {
        skills: skill_score(comparison.matching.len(), required_skills.len()),
        experience: clamp_score(assessment.experience_match),
        education: clamp_score(assessment.education),
    };

    (scores, comparison)
}

fn compare_skills(candidate: &SkillSet, required: &SkillSet) -> SkillComparison {
    SkillComparison {
        matching: required.intersection(candidate).cloned().collect(),
        missing: required.difference(candidate).cloned().collect(),
    }
}

/// Coverage of the required set, truncated to whole points. A job that lists
/// no skills cannot penalize anyone, so coverage is full by definition.
fn skill_score(matched: usize, required: usize) -> u8 {
    if required == 0 {
        return 100;
    }

    (100 * matched / required) as u8
}

/// Provider passthrough scores arrive out of range often enough that the
/// engine pins them to the scale instead of rejecting the assessment.
fn clamp_score(value: i16) -> u8 {
    value.clamp(0, 100) as u8
}
