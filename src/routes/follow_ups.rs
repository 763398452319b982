use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{follow_up_dto::FollowUpPayload, MessageResponse},
    error::{Error, Result},
    models::follow_up::{FollowUp, OverdueFollowUp},
    utils::time::today,
    AppState,
};

#[utoipa::path(
    post,
    path = "/add-followup",
    request_body = FollowUpPayload,
    responses(
        (status = 200, description = "Follow-up stored (updated when id is present)", body = FollowUp),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Lead or follow-up not found")
    )
)]
#[axum::debug_handler]
pub async fn save_follow_up(
    State(state): State<AppState>,
    Json(mut payload): Json<FollowUpPayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    if payload.id.is_none() && payload.lead_id.is_none() {
        return Err(Error::BadRequest("lead_id is required".into()));
    }
    payload.validate()?;
    let follow_up = state.follow_up_service.save(payload).await?;
    Ok(Json(follow_up))
}

#[utoipa::path(
    put,
    path = "/update-followup/{id}",
    params(
        ("id" = i64, Path, description = "Follow-up ID")
    ),
    request_body = FollowUpPayload,
    responses(
        (status = 200, description = "Follow-up updated", body = FollowUp),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Follow-up not found")
    )
)]
#[axum::debug_handler]
pub async fn update_follow_up(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut payload): Json<FollowUpPayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    payload.validate()?;
    let follow_up = state.follow_up_service.update(id, payload).await?;
    Ok(Json(follow_up))
}

#[utoipa::path(
    get,
    path = "/followups/{lead_id}",
    params(
        ("lead_id" = i64, Path, description = "Lead ID")
    ),
    responses(
        (status = 200, description = "Follow-ups of the lead, latest due date first", body = [FollowUp])
    )
)]
#[axum::debug_handler]
pub async fn list_lead_follow_ups(
    State(state): State<AppState>,
    Path(lead_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let rows = state.follow_up_service.list_for_lead(lead_id).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    delete,
    path = "/delete-followup/{id}",
    params(
        ("id" = i64, Path, description = "Follow-up ID")
    ),
    responses(
        (status = 200, description = "Follow-up deleted", body = MessageResponse),
        (status = 404, description = "Follow-up not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_follow_up(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.follow_up_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Follow-up deleted")))
}

#[utoipa::path(
    get,
    path = "/followups-overdue",
    responses(
        (status = 200, description = "Pending follow-ups past their due date", body = [OverdueFollowUp])
    )
)]
#[axum::debug_handler]
pub async fn list_overdue(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = state.follow_up_service.overdue(today()).await?;
    Ok(Json(rows))
}
