//! Candidate-to-job fit scoring, recommendation, and cohort ranking.
//!
//! The engine scores one candidate against one job from provider assessment
//! data and normalized skill sets; the ranker fans a cohort out across tasks
//! and assigns contiguous rankings; the service orchestrates both against the
//! repository seams and persists the resulting evaluations.

pub mod domain;
mod engine;
pub mod ranker;
pub mod repository;
pub mod router;
pub mod service;
pub mod skills;

#[cfg(test)]
mod tests;

pub use domain::{
    Assessment, Candidate, CandidateId, Evaluation, JobDescription, JobDescriptionId,
    RecommendationTier,
};
pub use engine::{
    DimensionScores, FitBreakdown, FitEngine, FitWeights, JobSkillProfile, WeightsError,
};
pub use ranker::{CandidateScope, CohortMember, RankedCohort, SkipReason, SkippedCandidate};
pub use repository::{
    CandidateDirectory, EvaluationRepository, JobDescriptionStore, RepositoryError,
};
pub use router::evaluation_router;
pub use service::{
    ConfigurationError, EvaluationBatchResult, EvaluationFilter, EvaluationService,
    EvaluationServiceError,
};
pub use skills::{normalize_skills, render_skill_list, SkillSet, SkillToken, SynonymTable};
