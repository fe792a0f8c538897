use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{CandidateId, Evaluation, JobDescriptionId};
use super::engine::{FitEngine, FitWeights};
use super::ranker::{self, CandidateScope, CohortMember, SkippedCandidate};
use super::repository::{
    CandidateDirectory, EvaluationRepository, JobDescriptionStore, RepositoryError,
};

/// Service composing the candidate directory, job store, evaluation storage,
/// and the fit engine.
pub struct EvaluationService<D, J, E> {
    directory: Arc<D>,
    jobs: Arc<J>,
    evaluations: Arc<E>,
    engine: Arc<FitEngine>,
}

impl<D, J, E> EvaluationService<D, J, E>
where
    D: CandidateDirectory + 'static,
    J: JobDescriptionStore + 'static,
    E: EvaluationRepository + 'static,
{
    pub fn new(directory: Arc<D>, jobs: Arc<J>, evaluations: Arc<E>, weights: FitWeights) -> Self {
        Self::with_engine(directory, jobs, evaluations, FitEngine::new(weights))
    }

    pub fn with_engine(
        directory: Arc<D>,
        jobs: Arc<J>,
        evaluations: Arc<E>,
        engine: FitEngine,
    ) -> Self {
        Self {
            directory,
            jobs,
            evaluations,
            engine: Arc::new(engine),
        }
    }

    /// Score and rank every eligible candidate against a job description,
    /// persisting each evaluation.
    ///
    /// Validation failures (unknown or inactive job) abort before any
    /// scoring starts, so a refused run never leaves partial results behind.
    pub async fn run_evaluation(
        &self,
        job_description_id: &JobDescriptionId,
        scope: CandidateScope,
    ) -> Result<EvaluationBatchResult, EvaluationServiceError> {
        let job = self.jobs.fetch(job_description_id)?.ok_or_else(|| {
            ConfigurationError::JobDescriptionNotFound(job_description_id.clone())
        })?;
        if !job.is_active {
            return Err(ConfigurationError::JobDescriptionInactive(job.id).into());
        }

        let roster = self.load_roster()?;
        let evaluated_at = Utc::now();
        let cohort =
            ranker::run_batch(Arc::clone(&self.engine), &job, roster, scope, evaluated_at).await;

        for evaluation in &cohort.evaluations {
            self.evaluations.upsert(evaluation.clone())?;
        }

        info!(
            job_description_id = %job.id,
            evaluated = cohort.evaluations.len(),
            skipped = cohort.skipped.len(),
            "evaluation batch complete"
        );

        Ok(EvaluationBatchResult {
            job_description_id: job.id,
            evaluations: cohort.evaluations,
            skipped: cohort.skipped,
        })
    }

    /// Read stored evaluations without triggering any scoring.
    pub fn get_evaluations(
        &self,
        filter: EvaluationFilter,
    ) -> Result<Vec<Evaluation>, EvaluationServiceError> {
        let evaluations = match filter {
            EvaluationFilter::ForJob(job_description_id) => {
                self.evaluations.for_job(&job_description_id)?
            }
            EvaluationFilter::ForCandidate(candidate_id) => {
                self.evaluations.for_candidate(&candidate_id)?
            }
        };
        Ok(evaluations)
    }

    fn load_roster(&self) -> Result<Vec<CohortMember>, RepositoryError> {
        let mut roster = Vec::new();
        for candidate in self.directory.candidates()? {
            let assessment = self.directory.assessment(&candidate.id)?;
            roster.push(CohortMember {
                candidate,
                assessment,
            });
        }
        Ok(roster)
    }
}

/// Outcome of one batch run; evaluations arrive in rank order.
#[derive(Debug, Clone)]
pub struct EvaluationBatchResult {
    pub job_description_id: JobDescriptionId,
    pub evaluations: Vec<Evaluation>,
    pub skipped: Vec<SkippedCandidate>,
}

impl EvaluationBatchResult {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Which stored evaluations a read should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationFilter {
    ForJob(JobDescriptionId),
    ForCandidate(CandidateId),
}

/// A batch request that cannot run at all: the job description is missing or
/// closed. Nothing is scored or persisted when this is raised.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("job description '{0}' not found")]
    JobDescriptionNotFound(JobDescriptionId),
    #[error("job description '{0}' is not active")]
    JobDescriptionInactive(JobDescriptionId),
}

/// Error raised by the evaluation service.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationServiceError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
