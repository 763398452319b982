mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

use common::{multipart_body, offline_app, offline_config, send, send_multipart, unique};

#[tokio::test]
async fn health_answers_without_database() {
    let app = offline_app(offline_config());
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_crm_paths() {
    let app = offline_app(offline_config());
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().expect("paths object");
    for path in [
        "/add-lead",
        "/leads/{id}/convert",
        "/add-followup",
        "/followups-overdue",
        "/notifications/all",
        "/dashboard/counts",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}

#[tokio::test]
async fn blank_company_name_is_rejected_before_storage() {
    let app = offline_app(offline_config());
    let (status, body) = send(
        &app,
        Method::POST,
        "/add-lead",
        Some(json!({ "company_name": "   ", "hr_person": "Ravi" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn follow_up_without_lead_is_rejected() {
    let app = offline_app(offline_config());
    let (status, body) = send(
        &app,
        Method::POST,
        "/add-followup",
        Some(json!({ "notes": "call back", "follow_up_date": "2026-01-05" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "lead_id is required");
}

#[tokio::test]
async fn login_requires_both_fields() {
    let app = offline_app(offline_config());
    let (status, _) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({ "username": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn requests_over_the_limit_get_429() {
    let mut config = offline_config();
    config.api_rps = 1;
    let app = offline_app(config);

    let payload = json!({ "company_name": "" });
    let (first, _) = send(&app, Method::POST, "/add-lead", Some(payload.clone())).await;
    let (second, body) = send(&app, Method::POST, "/add-lead", Some(payload)).await;
    assert_eq!(first, StatusCode::BAD_REQUEST);
    assert_eq!(second, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["message"], "rate_limit_exceeded");

    let (health, _) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(health, StatusCode::OK);

    let limited = app
        .oneshot(
            Request::builder()
                .uri("/leads")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(limited.headers()[header::RETRY_AFTER], "1");
}

#[tokio::test]
async fn follow_up_edit_must_name_its_status() {
    let app = offline_app(offline_config());
    let (status, body) = send(
        &app,
        Method::PUT,
        "/update-followup/1",
        Some(json!({ "notes": "moved to next week", "next_follow_up_date": "2026-02-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "status is required");
}

#[tokio::test]
async fn rejected_candidate_leaves_no_file_behind() {
    let mut config = offline_config();
    let uploads = std::env::temp_dir().join(unique("crm-uploads"));
    config.uploads_dir = uploads.clone();
    let app = offline_app(config);

    let cv = Some(("cv", "resume.txt", b"ten years of rust".as_slice()));
    let (status, _) = send_multipart(
        &app,
        "/add-candidate",
        multipart_body(&[("name", "  "), ("email", "a@example.com")], cv),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_multipart(
        &app,
        "/add-candidate",
        multipart_body(&[("name", "Asha"), ("status", "Sleeping")], cv),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let leftovers = std::fs::read_dir(&uploads)
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(leftovers, 0);
}

#[tokio::test]
async fn feed_degrades_to_empty_list_when_database_is_down() {
    let app = offline_app(offline_config());
    let (status, body) = send(&app, Method::GET, "/notifications/all", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!([]));
}
