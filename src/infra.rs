use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::evaluation::{
    Assessment, Candidate, CandidateDirectory, CandidateId, Evaluation, EvaluationRepository,
    JobDescription, JobDescriptionId, JobDescriptionStore, RepositoryError,
};
use crate::intake::AssessmentImporter;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCandidateDirectory {
    candidates: Arc<Mutex<Vec<Candidate>>>,
    assessments: Arc<Mutex<HashMap<CandidateId, Assessment>>>,
}

impl InMemoryCandidateDirectory {
    pub(crate) fn register(&self, candidate: Candidate, assessment: Option<Assessment>) {
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

impl CandidateDirectory for InMemoryCandidateDirectory {
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
pub(crate) struct InMemoryJobDescriptionStore {
    jobs: Arc<Mutex<HashMap<JobDescriptionId, JobDescription>>>,
}

impl InMemoryJobDescriptionStore {
    pub(crate) fn insert(&self, job: JobDescription) {
        self.jobs
            .lock()
            .expect("job mutex poisoned")
            .insert(job.id.clone(), job);
    }
}

impl JobDescriptionStore for InMemoryJobDescriptionStore {
    fn fetch(&self, id: &JobDescriptionId) -> Result<Option<JobDescription>, RepositoryError> {
        Ok(self.jobs.lock().expect("job mutex poisoned").get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryEvaluationRepository {
    records: Arc<Mutex<HashMap<(CandidateId, JobDescriptionId), Evaluation>>>,
}

impl EvaluationRepository for InMemoryEvaluationRepository {
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

/// Builds the candidate directory from a provider CSV export when one is
/// given, otherwise from the built-in sample roster.
pub(crate) fn load_directory(
    assessments_csv: Option<PathBuf>,
) -> Result<InMemoryCandidateDirectory, AppError> {
    let directory = InMemoryCandidateDirectory::default();
    match assessments_csv {
        Some(path) => {
            for entry in AssessmentImporter::from_path(path)? {
                directory.register(entry.candidate, Some(entry.assessment));
            }
        }
        None => {
            for (candidate, assessment) in sample_roster() {
                directory.register(candidate, assessment);
            }
        }
    }
    Ok(directory)
}

pub(crate) fn sample_jobs() -> Vec<JobDescription> {
    vec![
        JobDescription {
            id: JobDescriptionId("jd-backend".to_string()),
            position: "Backend Engineer".to_string(),
            skills_text: "Rust, PostgreSQL, Docker, Kubernetes".to_string(),
            required_experience_text: "4+ years building production services".to_string(),
            is_active: true,
        },
        JobDescription {
            id: JobDescriptionId("jd-data".to_string()),
            position: "Data Engineer".to_string(),
            skills_text: "Python, SQL, Airflow, Spark".to_string(),
            required_experience_text: "3+ years of pipeline and warehouse work".to_string(),
            is_active: true,
        },
        JobDescription {
            id: JobDescriptionId("jd-mobile-archived".to_string()),
            position: "Mobile Engineer".to_string(),
            skills_text: "Swift, Kotlin".to_string(),
            required_experience_text: "Filled last quarter".to_string(),
            is_active: false,
        },
    ]
}

pub(crate) fn sample_roster() -> Vec<(Candidate, Option<Assessment>)> {
    let scored = |id: &str,
                  name: &str,
                  position: &str,
                  technical: i16,
                  experience: i16,
                  education: i16,
                  skills: &str,
                  insight: &str| {
        (
            Candidate {
                id: CandidateId(id.to_string()),
                full_name: name.to_string(),
                position: position.to_string(),
            },
            Some(Assessment {
                candidate_id: CandidateId(id.to_string()),
                technical_skills: technical,
                experience_match: experience,
                education,
                skills_text: skills.to_string(),
                insights_text: Some(insight.to_string()),
            }),
        )
    };

    let mut roster = vec![
        scored(
            "cand-ada",
            "Ada Alvarez",
            "Backend Engineer",
            88,
            85,
            72,
            "Rust, Postgres, Docker, k8s, CI/CD",
            "Led a service decomposition across two teams.",
        ),
        scored(
            "cand-bo",
            "Bo Lindgren",
            "Backend Engineer",
            74,
            62,
            80,
            "golang, Docker, MySQL",
            "Solid fundamentals; most experience on internal tools.",
        ),
        scored(
            "cand-caz",
            "Caz Okafor",
            "Data Engineer",
            81,
            78,
            64,
            "Python, SQL, Spark; Airflow",
            "Ran the nightly warehouse loads solo for a year.",
        ),
        scored(
            "cand-dee",
            "Dee Haruki",
            "Data Engineer",
            59,
            55,
            91,
            "python, pandas",
            "Recent graduate with strong coursework.",
        ),
    ];

    // Registered before the provider scored them; batches skip this entry.
    roster.push((
        Candidate {
            id: CandidateId("cand-eli".to_string()),
            full_name: "Eli Svensson".to_string(),
            position: "Backend Engineer".to_string(),
        },
        None,
    ));

    roster
}
