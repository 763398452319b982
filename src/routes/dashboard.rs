use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{error::Result, AppState};

/// `{"total": n, "Applied": a, ...}` with every known status present.
#[utoipa::path(
    get,
    path = "/dashboard/counts",
    responses(
        (status = 200, description = "Candidate counts per status plus total")
    )
)]
#[axum::debug_handler]
pub async fn counts(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let counts = state.candidate_service.status_counts().await?;
    Ok(Json(counts))
}
