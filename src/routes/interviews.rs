use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::{interview_dto::CreateInterviewPayload, MessageResponse},
    error::Result,
    models::interview::{Interview, InterviewDetail},
    AppState,
};

/// Books the interview, moves the candidate to "Interview Scheduled" and
/// records a reminder for the day before.
#[utoipa::path(
    post,
    path = "/add-interview",
    request_body = CreateInterviewPayload,
    responses(
        (status = 200, description = "Interview scheduled", body = Interview),
        (status = 400, description = "Missing candidate or date"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn create_interview(
    State(state): State<AppState>,
    Json(mut payload): Json<CreateInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    let interview = state.interview_service.schedule(payload).await?;
    Ok(Json(interview))
}

#[utoipa::path(
    get,
    path = "/interviews",
    responses(
        (status = 200, description = "Interviews with candidate name and job title", body = [InterviewDetail])
    )
)]
#[axum::debug_handler]
pub async fn list_interviews(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let interviews = state.interview_service.list().await?;
    Ok(Json(interviews))
}

#[utoipa::path(
    delete,
    path = "/delete-interview/{id}",
    params(
        ("id" = i64, Path, description = "Interview ID")
    ),
    responses(
        (status = 200, description = "Interview deleted", body = MessageResponse),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_interview(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.interview_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Interview deleted")))
}
