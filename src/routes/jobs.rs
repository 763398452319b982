use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        job_dto::{AssignCandidatePayload, JobPayload, StagePayload},
        MessageResponse,
    },
    error::{Error, Result},
    models::{
        candidate::{JobAssignment, PipelineCandidate},
        job::Job,
    },
    AppState,
};

#[utoipa::path(
    post,
    path = "/add-job",
    request_body = JobPayload,
    responses(
        (status = 200, description = "Job created", body = Job),
        (status = 400, description = "Invalid payload or unknown company")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(mut payload): Json<JobPayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    payload.validate()?;
    let job = state.job_service.create(payload).await?;
    Ok(Json(job))
}

#[utoipa::path(
    get,
    path = "/jobs",
    responses(
        (status = 200, description = "All jobs", body = [Job])
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list().await?;
    Ok(Json(jobs))
}

#[utoipa::path(
    put,
    path = "/edit-job/{id}",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    request_body = JobPayload,
    responses(
        (status = 200, description = "Job updated", body = Job),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut payload): Json<JobPayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    payload.validate()?;
    let job = state.job_service.update(id, payload).await?;
    Ok(Json(job))
}

#[utoipa::path(
    delete,
    path = "/delete-job/{id}",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job deleted", body = MessageResponse),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.job_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Job deleted")))
}

#[utoipa::path(
    get,
    path = "/jobs/{id}/candidates",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Candidates in the job pipeline", body = [PipelineCandidate]),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn job_pipeline(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let rows = state.job_service.pipeline(id).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/jobs/{id}/candidates",
    params(
        ("id" = i64, Path, description = "Job ID")
    ),
    request_body = AssignCandidatePayload,
    responses(
        (status = 200, description = "Candidate assigned (or already assigned)", body = JobAssignment),
        (status = 400, description = "Missing candidate id or unknown stage"),
        (status = 404, description = "Job or candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn assign_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AssignCandidatePayload>,
) -> Result<impl IntoResponse> {
    let candidate_id = payload
        .candidate_id
        .ok_or_else(|| Error::BadRequest("candidateId is required".into()))?;
    let assignment = state
        .job_service
        .assign_candidate(id, candidate_id, payload.stage)
        .await?;
    Ok(Json(assignment))
}

#[utoipa::path(
    put,
    path = "/jobs/{id}/candidates/{candidate_id}",
    params(
        ("id" = i64, Path, description = "Job ID"),
        ("candidate_id" = i64, Path, description = "Candidate ID")
    ),
    request_body = StagePayload,
    responses(
        (status = 200, description = "Stage updated", body = JobAssignment),
        (status = 400, description = "Unknown stage"),
        (status = 404, description = "Candidate is not assigned to this job")
    )
)]
#[axum::debug_handler]
pub async fn update_stage(
    State(state): State<AppState>,
    Path((id, candidate_id)): Path<(i64, i64)>,
    Json(payload): Json<StagePayload>,
) -> Result<impl IntoResponse> {
    let assignment = state
        .job_service
        .update_stage(id, candidate_id, payload.stage.trim())
        .await?;
    Ok(Json(assignment))
}
