use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{company_dto::CompanyPayload, MessageResponse},
    error::Result,
    models::{company::Company, job::Job},
    AppState,
};

#[utoipa::path(
    post,
    path = "/add-company",
    request_body = CompanyPayload,
    responses(
        (status = 200, description = "Company created", body = Company),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_company(
    State(state): State<AppState>,
    Json(mut payload): Json<CompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    payload.validate()?;
    let company = state.company_service.create(payload).await?;
    Ok(Json(company))
}

#[utoipa::path(
    get,
    path = "/companies",
    responses(
        (status = 200, description = "All companies", body = [Company])
    )
)]
#[axum::debug_handler]
pub async fn list_companies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let companies = state.company_service.list().await?;
    Ok(Json(companies))
}

#[utoipa::path(
    get,
    path = "/companies/{id}",
    params(
        ("id" = i64, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company found", body = Company),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let company = state.company_service.get_by_id(id).await?;
    Ok(Json(company))
}

#[utoipa::path(
    put,
    path = "/edit-company/{id}",
    params(
        ("id" = i64, Path, description = "Company ID")
    ),
    request_body = CompanyPayload,
    responses(
        (status = 200, description = "Company updated", body = Company),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut payload): Json<CompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    payload.validate()?;
    let company = state.company_service.update(id, payload).await?;
    Ok(Json(company))
}

/// Removes the company together with its jobs.
#[utoipa::path(
    delete,
    path = "/delete-company/{id}",
    params(
        ("id" = i64, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company deleted", body = MessageResponse),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.company_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Company deleted")))
}

#[utoipa::path(
    get,
    path = "/companies/{id}/jobs",
    params(
        ("id" = i64, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Jobs of the company", body = [Job]),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn list_company_jobs(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let jobs = state.company_service.list_jobs(id).await?;
    Ok(Json(jobs))
}
