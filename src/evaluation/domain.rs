use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::skills::SkillSet;

/// Identifier wrapper for candidates supplied by the assessment provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for job descriptions being hired against.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobDescriptionId(pub String);

impl fmt::Display for JobDescriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only roster entry owned by the candidate directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub full_name: String,
    pub position: String,
}

/// Provider-issued assessment for one candidate.
///
/// Scores are nominally 0-100 but exports contain out-of-range values, so the
/// fields stay wide here and are clamped at scoring time. `skills_text` is the
/// raw free-text listing; `insights_text` is an optional narrative carried
/// onto the evaluation verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub candidate_id: CandidateId,
    pub technical_skills: i16,
    pub experience_match: i16,
    pub education: i16,
    pub skills_text: String,
    pub insights_text: Option<String>,
}

/// Role being hired for; only active descriptions are evaluable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    pub id: JobDescriptionId,
    pub position: String,
    pub skills_text: String,
    pub required_experience_text: String,
    pub is_active: bool,
}

/// Categorical hiring signal derived from the composite fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    StrongMatch,
    Good,
    Fair,
    Weak,
}

impl RecommendationTier {
    pub const fn label(self) -> &'static str {
        match self {
            RecommendationTier::StrongMatch => "strong match",
            RecommendationTier::Good => "good match",
            RecommendationTier::Fair => "fair match",
            RecommendationTier::Weak => "weak match",
        }
    }
}

/// Persisted outcome of scoring one candidate against one job.
///
/// Identity is the (candidate, job) pair; a batch run replaces the whole
/// record on upsert. `matching_skills` and `missing_skills` partition the
/// job's normalized skill set, and `ranking` is the 1-based position within
/// the batch that produced the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub candidate_id: CandidateId,
    pub job_description_id: JobDescriptionId,
    pub fit_score: u8,
    pub experience_match: u8,
    pub education_match: u8,
    pub matching_skills: SkillSet,
    pub missing_skills: SkillSet,
    pub tier: RecommendationTier,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
    pub ranking: u32,
    pub evaluated_at: DateTime<Utc>,
}
