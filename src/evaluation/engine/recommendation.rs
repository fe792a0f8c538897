use super::super::domain::RecommendationTier;
use super::super::skills::{SkillSet, SkillToken};

/// Recommendations name at most this many gaps; past that the text stops
/// being something a recruiter will read.
const GAP_MENTION_LIMIT: usize = 3;

pub(crate) fn tier_for(fit_score: u8) -> RecommendationTier {
    match fit_score {
        90..=100 => RecommendationTier::StrongMatch,
        70..=89 => RecommendationTier::Good,
        50..=69 => RecommendationTier::Fair,
        _ => RecommendationTier::Weak,
    }
}

/// Deterministic template naming the tier and the leading skill gaps. The
/// provider's free-form insight rides alongside on the evaluation and never
/// replaces this text.
pub(crate) fn recommendation_text(tier: RecommendationTier, missing: &SkillSet) -> String {
    let opening = match tier {
        RecommendationTier::StrongMatch => "Strong match for the role",
        RecommendationTier::Good => "Good match for the role",
        RecommendationTier::Fair => "Fair match for the role",
        RecommendationTier::Weak => "Weak match for the role",
    };

    if missing.is_empty() {
        return format!("{opening}; covers every required skill.");
    }

    let gaps = missing
        .iter()
        .take(GAP_MENTION_LIMIT)
        .map(SkillToken::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{opening}; missing skills to probe: {gaps}.")
}
