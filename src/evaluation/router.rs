use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CandidateId, JobDescriptionId};
use super::ranker::CandidateScope;
use super::repository::{CandidateDirectory, EvaluationRepository, JobDescriptionStore};
use super::service::{
    ConfigurationError, EvaluationFilter, EvaluationService, EvaluationServiceError,
};

/// Router builder exposing HTTP endpoints for batch runs and result reads.
pub fn evaluation_router<D, J, E>(service: Arc<EvaluationService<D, J, E>>) -> Router
where
    D: CandidateDirectory + 'static,
    J: JobDescriptionStore + 'static,
    E: EvaluationRepository + 'static,
{
    Router::new()
        .route("/api/v1/evaluations/run", post(run_handler::<D, J, E>))
        .route("/api/v1/evaluations", get(list_handler::<D, J, E>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RunRequest {
    pub(crate) job_description_id: String,
    #[serde(default)]
    pub(crate) cross_position: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListParams {
    pub(crate) job_description_id: Option<String>,
    pub(crate) candidate_id: Option<String>,
}

pub(crate) async fn run_handler<D, J, E>(
    State(service): State<Arc<EvaluationService<D, J, E>>>,
    axum::Json(request): axum::Json<RunRequest>,
) -> Response
where
    D: CandidateDirectory + 'static,
    J: JobDescriptionStore + 'static,
    E: EvaluationRepository + 'static,
{
    let job_description_id = JobDescriptionId(request.job_description_id);
    let scope = if request.cross_position {
        CandidateScope::AllPositions
    } else {
        CandidateScope::JobPosition
    };

    match service.run_evaluation(&job_description_id, scope).await {
        Ok(batch) => {
            let payload = json!({
                "job_description_id": batch.job_description_id,
                "evaluations": batch.evaluations,
                "skipped_count": batch.skipped_count(),
                "skipped": batch.skipped,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(EvaluationServiceError::Configuration(
            error @ ConfigurationError::JobDescriptionNotFound(_),
        )) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(EvaluationServiceError::Configuration(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<D, J, E>(
    State(service): State<Arc<EvaluationService<D, J, E>>>,
    Query(params): Query<ListParams>,
) -> Response
where
    D: CandidateDirectory + 'static,
    J: JobDescriptionStore + 'static,
    E: EvaluationRepository + 'static,
{
    let filter = match (params.job_description_id, params.candidate_id) {
        (Some(job_description_id), None) => {
            EvaluationFilter::ForJob(JobDescriptionId(job_description_id))
        }
        (None, Some(candidate_id)) => EvaluationFilter::ForCandidate(CandidateId(candidate_id)),
        _ => {
            let payload = json!({
                "error": "provide exactly one of job_description_id or candidate_id",
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.get_evaluations(filter) {
        Ok(evaluations) => (StatusCode::OK, axum::Json(evaluations)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
