use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::evaluation::domain::{
    Assessment, Candidate, CandidateId, Evaluation, JobDescription, JobDescriptionId,
};
use crate::evaluation::repository::{
    CandidateDirectory, EvaluationRepository, JobDescriptionStore, RepositoryError,
};
use crate::evaluation::{evaluation_router, EvaluationService, FitWeights};

pub(super) fn sample_job() -> JobDescription {
    JobDescription {
        id: JobDescriptionId("jd-data-eng".to_string()),
        position: "Data Engineer".to_string(),
        skills_text: "Python, SQL, Docker".to_string(),
        required_experience_text: "3+ years building data pipelines".to_string(),
        is_active: true,
    }
}

pub(super) fn inactive_job() -> JobDescription {
    JobDescription {
        id: JobDescriptionId("jd-frontend-archived".to_string()),
        position: "Frontend Engineer".to_string(),
        skills_text: "JavaScript, React, CSS".to_string(),
        required_experience_text: "2+ years of component work".to_string(),
        is_active: false,
    }
}

pub(super) fn candidate(id: &str, full_name: &str, position: &str) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        full_name: full_name.to_string(),
        position: position.to_string(),
    }
}

pub(super) fn assessment(id: &str, experience: i16, education: i16, skills: &str) -> Assessment {
    Assessment {
        candidate_id: CandidateId(id.to_string()),
        technical_skills: 75,
        experience_match: experience,
        education,
        skills_text: skills.to_string(),
        insights_text: None,
    }
}

pub(super) fn build_service() -> (
    EvaluationService<MemoryDirectory, MemoryJobStore, MemoryEvaluationRepository>,
    Arc<MemoryDirectory>,
    Arc<MemoryJobStore>,
    Arc<MemoryEvaluationRepository>,
) {
    let directory = Arc::new(MemoryDirectory::default());
    let jobs = Arc::new(MemoryJobStore::default());
    let evaluations = Arc::new(MemoryEvaluationRepository::default());
    let service = EvaluationService::new(
        directory.clone(),
        jobs.clone(),
        evaluations.clone(),
        FitWeights::default(),
    );
    (service, directory, jobs, evaluations)
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    candidates: Arc<Mutex<Vec<Candidate>>>,
    assessments: Arc<Mutex<HashMap<CandidateId, Assessment>>>,
}

impl MemoryDirectory {
    pub(super) fn register(&self, candidate: Candidate, assessment: Option<Assessment>) {
        if let Some(assessment) = assessment {
            self.assessments
                .lock()
                .expect("directory mutex poisoned")
                .insert(candidate.id.clone(), assessment);
        }
        self.candidates
            .lock()
            .expect("directory mutex poisoned")
            .push(candidate);
    }
}

impl CandidateDirectory for MemoryDirectory {
    fn candidates(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(self
            .candidates
            .lock()
            .expect("directory mutex poisoned")
            .clone())
    }

    fn assessment(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Option<Assessment>, RepositoryError> {
        Ok(self
            .assessments
            .lock()
            .expect("directory mutex poisoned")
            .get(candidate_id)
            .cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryJobStore {
    jobs: Arc<Mutex<HashMap<JobDescriptionId, JobDescription>>>,
}

impl MemoryJobStore {
    pub(super) fn insert(&self, job: JobDescription) {
        self.jobs
            .lock()
            .expect("job mutex poisoned")
            .insert(job.id.clone(), job);
    }
}

impl JobDescriptionStore for MemoryJobStore {
    fn fetch(&self, id: &JobDescriptionId) -> Result<Option<JobDescription>, RepositoryError> {
        Ok(self.jobs.lock().expect("job mutex poisoned").get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryEvaluationRepository {
    records: Arc<Mutex<HashMap<(CandidateId, JobDescriptionId), Evaluation>>>,
}

impl MemoryEvaluationRepository {
    pub(super) fn stored_count(&self) -> usize {
        self.records.lock().expect("evaluation mutex poisoned").len()
    }
}

impl EvaluationRepository for MemoryEvaluationRepository {
    fn upsert(&self, evaluation: Evaluation) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("evaluation mutex poisoned");
        guard.insert(
            (
                evaluation.candidate_id.clone(),
                evaluation.job_description_id.clone(),
            ),
            evaluation,
        );
        Ok(())
    }

    fn for_job(
        &self,
        job_description_id: &JobDescriptionId,
    ) -> Result<Vec<Evaluation>, RepositoryError> {
        let guard = self.records.lock().expect("evaluation mutex poisoned");
        let mut evaluations: Vec<Evaluation> = guard
            .values()
            .filter(|evaluation| &evaluation.job_description_id == job_description_id)
            .cloned()
            .collect();
        evaluations.sort_by_key(|evaluation| evaluation.ranking);
        Ok(evaluations)
    }

    fn for_candidate(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<Evaluation>, RepositoryError> {
        let guard = self.records.lock().expect("evaluation mutex poisoned");
        let mut evaluations: Vec<Evaluation> = guard
            .values()
            .filter(|evaluation| &evaluation.candidate_id == candidate_id)
            .cloned()
            .collect();
        evaluations.sort_by(|a, b| a.job_description_id.cmp(&b.job_description_id));
        Ok(evaluations)
    }

    fn remove(
        &self,
        candidate_id: &CandidateId,
        job_description_id: &JobDescriptionId,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("evaluation mutex poisoned");
        guard
            .remove(&(candidate_id.clone(), job_description_id.clone()))
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableEvaluationRepository;

impl EvaluationRepository for UnavailableEvaluationRepository {
    fn upsert(&self, _evaluation: Evaluation) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_job(
        &self,
        _job_description_id: &JobDescriptionId,
    ) -> Result<Vec<Evaluation>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_candidate(
        &self,
        _candidate_id: &CandidateId,
    ) -> Result<Vec<Evaluation>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn remove(
        &self,
        _candidate_id: &CandidateId,
        _job_description_id: &JobDescriptionId,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn evaluation_router_with_service(
    service: EvaluationService<MemoryDirectory, MemoryJobStore, MemoryEvaluationRepository>,
) -> axum::Router {
    evaluation_router(Arc::new(service))
}
