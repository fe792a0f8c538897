//! Fit scoring engine: dimension scores, weighted aggregation, and the
//! recommendation tier for a single candidate against one job description.

mod config;
mod recommendation;
mod rules;

pub use config::{FitWeights, WeightsError};
pub use rules::DimensionScores;

use serde::{Deserialize, Serialize};

use super::domain::{Assessment, JobDescription, RecommendationTier};
use super::skills::{normalize_skills, SkillSet, SynonymTable};

/// The normalized skill requirements of one job description, computed once
/// per batch and shared across every candidate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSkillProfile {
    pub required: SkillSet,
}

/// Everything the engine derives for one candidate: per-dimension scores,
/// the weighted fit score, the skill overlap, and the recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitBreakdown {
    pub dimensions: DimensionScores,
    pub fit_score: u8,
    pub matching_skills: SkillSet,
    pub missing_skills: SkillSet,
    pub tier: RecommendationTier,
    pub recommendation: String,
}

/// Stateless scorer wrapping validated weights and the synonym table. One
/// instance serves a whole batch; evaluations never observe each other.
#[derive(Debug, Clone)]
pub struct FitEngine {
    weights: FitWeights,
    synonyms: SynonymTable,
}

impl FitEngine {
    pub fn new(weights: FitWeights) -> Self {
        Self::with_synonyms(weights, SynonymTable::default())
    }

    pub fn with_synonyms(weights: FitWeights, synonyms: SynonymTable) -> Self {
        Self { weights, synonyms }
    }

    /// Normalizes the job's skill listing once so a batch does not repeat
    /// the work per candidate.
    pub fn job_profile(&self, job: &JobDescription) -> JobSkillProfile {
        JobSkillProfile {
            required: normalize_skills(&job.skills_text, &self.synonyms),
        }
    }

    /// Scores one assessment against a job profile. Pure with respect to its
    /// inputs: the same assessment and profile always yield the same
    /// breakdown.
    pub fn evaluate(&self, assessment: &Assessment, profile: &JobSkillProfile) -> FitBreakdown {
        let candidate_skills = normalize_skills(&assessment.skills_text, &self.synonyms);
        let (dimensions, comparison) =
            rules::score_dimensions(assessment, &candidate_skills, &profile.required);
        let fit_score = self.weighted_total(&dimensions);
        let tier = recommendation::tier_for(fit_score);
        let recommendation = recommendation::recommendation_text(tier, &comparison.missing);

        FitBreakdown {
            dimensions,
            fit_score,
            matching_skills: comparison.matching,
            missing_skills: comparison.missing,
            tier,
            recommendation,
        }
    }

    fn weighted_total(&self, dimensions: &DimensionScores) -> u8 {
        let total = self.weights.skills * f64::from(dimensions.skills)
            + self.weights.experience * f64::from(dimensions.experience)
            + self.weights.education * f64::from(dimensions.education);
        total.round().clamp(0.0, 100.0) as u8
    }
}
