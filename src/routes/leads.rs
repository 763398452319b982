use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        lead_dto::{ConvertLeadResponse, LeadPayload},
        MessageResponse,
    },
    error::Result,
    models::lead::Lead,
    AppState,
};

#[utoipa::path(
    post,
    path = "/add-lead",
    request_body = LeadPayload,
    responses(
        (status = 200, description = "Lead created", body = Lead),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_lead(
    State(state): State<AppState>,
    Json(mut payload): Json<LeadPayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    payload.validate()?;
    let lead = state.lead_service.create(payload).await?;
    Ok(Json(lead))
}

#[utoipa::path(
    get,
    path = "/leads",
    responses(
        (status = 200, description = "All leads, newest first", body = [Lead])
    )
)]
#[axum::debug_handler]
pub async fn list_leads(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let leads = state.lead_service.list().await?;
    Ok(Json(leads))
}

#[utoipa::path(
    get,
    path = "/leads/{id}",
    params(
        ("id" = i64, Path, description = "Lead ID")
    ),
    responses(
        (status = 200, description = "Lead found", body = Lead),
        (status = 404, description = "Lead not found")
    )
)]
#[axum::debug_handler]
pub async fn get_lead(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let lead = state.lead_service.get_by_id(id).await?;
    Ok(Json(lead))
}

#[utoipa::path(
    put,
    path = "/edit-lead/{id}",
    params(
        ("id" = i64, Path, description = "Lead ID")
    ),
    request_body = LeadPayload,
    responses(
        (status = 200, description = "Lead updated", body = Lead),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Lead not found")
    )
)]
#[axum::debug_handler]
pub async fn update_lead(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut payload): Json<LeadPayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    payload.validate()?;
    let lead = state.lead_service.update(id, payload).await?;
    Ok(Json(lead))
}

#[utoipa::path(
    delete,
    path = "/delete-lead/{id}",
    params(
        ("id" = i64, Path, description = "Lead ID")
    ),
    responses(
        (status = 200, description = "Lead deleted", body = MessageResponse),
        (status = 404, description = "Lead not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_lead(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.lead_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Lead deleted")))
}

#[utoipa::path(
    post,
    path = "/leads/{id}/convert",
    params(
        ("id" = i64, Path, description = "Lead ID")
    ),
    responses(
        (status = 200, description = "Company created from lead", body = ConvertLeadResponse),
        (status = 404, description = "Lead not found"),
        (status = 409, description = "Lead already converted")
    )
)]
#[axum::debug_handler]
pub async fn convert_lead(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let converted = state.lead_service.convert_to_company(id).await?;
    Ok(Json(converted))
}
