use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use bytes::Bytes;

use crate::{
    dto::{
        candidate_dto::{CandidateListQuery, CandidateStatusPayload, NewCandidate},
        MessageResponse,
    },
    error::Result,
    models::candidate::Candidate,
    services::{
        candidate_service::CandidateService, export_service::ExportService,
        upload_service::UploadKind,
    },
    AppState,
};

use super::{optional_text, parse_form_id};

/// Multipart form: text fields of the candidate plus an optional `cv` file.
#[utoipa::path(
    post,
    path = "/add-candidate",
    request_body(content = NewCandidate, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Candidate created", body = Candidate),
        (status = 400, description = "Missing name, bad status or rejected file")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut new = NewCandidate::default();
    let mut cv_file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => new.name = field.text().await?.trim().to_string(),
            "email" => new.email = optional_text(field.text().await?),
            "phone" => new.phone = optional_text(field.text().await?),
            "position" => new.position = optional_text(field.text().await?),
            "status" => new.status = optional_text(field.text().await?),
            "company_id" => new.company_id = parse_form_id("company_id", &field.text().await?)?,
            "job_id" => new.job_id = parse_form_id("job_id", &field.text().await?)?,
            "cv" => {
                let filename = field.file_name().unwrap_or("cv.bin").to_string();
                let data = field.bytes().await?;
                if !data.is_empty() {
                    cv_file = Some((filename, data));
                }
            }
            other => tracing::debug!("Ignoring unknown candidate form field '{}'", other),
        }
    }

    CandidateService::check_new(&new)?;

    if let Some((filename, data)) = cv_file {
        let path = state
            .upload_service
            .save(UploadKind::Cv, &filename, &data)
            .await?;
        new.cv = Some(path);
    }

    let stored_cv = new.cv.clone();
    let candidate = match state.candidate_service.create(new).await {
        Ok(candidate) => candidate,
        Err(e) => {
            if let Some(path) = stored_cv {
                state.upload_service.discard(&path).await;
            }
            return Err(e);
        }
    };
    tracing::info!(candidate_id = candidate.id, "Candidate created");
    Ok(Json(candidate))
}

#[utoipa::path(
    get,
    path = "/candidates",
    params(CandidateListQuery),
    responses(
        (status = 200, description = "Candidates, optionally filtered by status", body = [Candidate])
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<impl IntoResponse> {
    let status = query.status.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let candidates = state.candidate_service.list(status).await?;
    Ok(Json(candidates))
}

#[utoipa::path(
    put,
    path = "/update-candidate-status/{id}",
    params(
        ("id" = i64, Path, description = "Candidate ID")
    ),
    request_body = CandidateStatusPayload,
    responses(
        (status = 200, description = "Status updated", body = Candidate),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CandidateStatusPayload>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .update_status(id, payload.status.trim())
        .await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    delete,
    path = "/delete-candidate/{id}",
    params(
        ("id" = i64, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate deleted", body = MessageResponse),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.candidate_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Candidate deleted")))
}

#[utoipa::path(
    get,
    path = "/candidates/export",
    responses(
        (status = 200, description = "XLSX workbook with every candidate")
    )
)]
#[axum::debug_handler]
pub async fn export_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let candidates = state.candidate_service.list(None).await?;
    let job_titles = state.candidate_service.job_titles().await?;
    let buffer = ExportService::generate_candidates_xlsx(&candidates, &job_titles)?;

    let disposition = format!(
        "attachment; filename=\"candidates_{}.xlsx\"",
        chrono::Utc::now().format("%Y%m%d")
    );
    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    ))
}
