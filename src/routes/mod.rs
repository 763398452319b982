pub mod auth;
pub mod candidates;
pub mod companies;
pub mod dashboard;
pub mod docs;
pub mod follow_ups;
pub mod health;
pub mod interviews;
pub mod jobs;
pub mod leads;
pub mod notifications;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::error::{Error, Result};
use crate::middleware::{
    cors::cors_layer,
    rate_limit::{new_rps_state, rps_middleware},
};
use crate::AppState;

/// Full HTTP surface with shared middleware applied.
pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let api = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/update-profile", put(auth::update_profile))
        .route("/upload-avatar", post(auth::upload_avatar))
        .route("/add-lead", post(leads::create_lead))
        .route("/leads", get(leads::list_leads))
        .route("/leads/:id", get(leads::get_lead))
        .route("/leads/:id/convert", post(leads::convert_lead))
        .route("/edit-lead/:id", put(leads::update_lead))
        .route("/delete-lead/:id", delete(leads::delete_lead))
        .route("/add-company", post(companies::create_company))
        .route("/companies", get(companies::list_companies))
        .route("/companies/:id", get(companies::get_company))
        .route("/companies/:id/jobs", get(companies::list_company_jobs))
        .route("/edit-company/:id", put(companies::update_company))
        .route("/delete-company/:id", delete(companies::delete_company))
        .route("/add-job", post(jobs::create_job))
        .route("/jobs", get(jobs::list_jobs))
        .route("/edit-job/:id", put(jobs::update_job))
        .route("/delete-job/:id", delete(jobs::delete_job))
        .route(
            "/jobs/:id/candidates",
            get(jobs::job_pipeline).post(jobs::assign_candidate),
        )
        .route(
            "/jobs/:id/candidates/:candidate_id",
            put(jobs::update_stage),
        )
        .route("/add-candidate", post(candidates::create_candidate))
        .route("/candidates", get(candidates::list_candidates))
        .route("/candidates/export", get(candidates::export_candidates))
        .route(
            "/update-candidate-status/:id",
            put(candidates::update_candidate_status),
        )
        .route("/delete-candidate/:id", delete(candidates::delete_candidate))
        .route("/add-interview", post(interviews::create_interview))
        .route("/interviews", get(interviews::list_interviews))
        .route("/delete-interview/:id", delete(interviews::delete_interview))
        .route("/add-followup", post(follow_ups::save_follow_up))
        .route("/update-followup/:id", put(follow_ups::update_follow_up))
        .route("/followups/:lead_id", get(follow_ups::list_lead_follow_ups))
        .route("/delete-followup/:id", delete(follow_ups::delete_follow_up))
        .route("/followups-overdue", get(follow_ups::list_overdue))
        .route("/dashboard/counts", get(dashboard::counts))
        .route("/notifications/all", get(notifications::feed))
        .route("/notifications", get(notifications::list_unread))
        .route("/notifications/read/:id", put(notifications::mark_read))
        .layer(axum::middleware::from_fn_with_state(
            new_rps_state(config.api_rps),
            rps_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(api)
        .nest_service("/uploads", ServeDir::new(&config.uploads_dir))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config.cors_origin.as_deref())),
        )
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
}

/// Multipart select boxes send ids as text; blank means "not set".
pub(crate) fn parse_form_id(field: &str, raw: &str) -> Result<Option<i64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| Error::BadRequest(format!("{} must be a number", field)))
}

pub(crate) fn optional_text(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
