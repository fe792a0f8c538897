use super::domain::{
    Assessment, Candidate, CandidateId, Evaluation, JobDescription, JobDescriptionId,
};

/// Read-side abstraction over the candidate roster and provider assessments,
/// kept separate from evaluation storage so the service can be exercised in
/// isolation.
pub trait CandidateDirectory: Send + Sync {
    fn candidates(&self) -> Result<Vec<Candidate>, RepositoryError>;
    fn assessment(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Option<Assessment>, RepositoryError>;
}

/// Lookup for job descriptions by id.
pub trait JobDescriptionStore: Send + Sync {
    fn fetch(&self, id: &JobDescriptionId) -> Result<Option<JobDescription>, RepositoryError>;
}

/// Storage for evaluation results, keyed on the (candidate, job) pair.
pub trait EvaluationRepository: Send + Sync {
    /// Inserts the evaluation, replacing any record with the same
    /// (candidate, job) identity.
    fn upsert(&self, evaluation: Evaluation) -> Result<(), RepositoryError>;
    fn for_job(
        &self,
        job_description_id: &JobDescriptionId,
    ) -> Result<Vec<Evaluation>, RepositoryError>;
    fn for_candidate(&self, candidate_id: &CandidateId)
        -> Result<Vec<Evaluation>, RepositoryError>;
    /// Administrative delete, independent of batch runs.
    fn remove(
        &self,
        candidate_id: &CandidateId,
        job_description_id: &JobDescriptionId,
    ) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
