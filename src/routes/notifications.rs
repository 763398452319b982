use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::{
    error::Result,
    models::notification::{Notification, NotificationItem},
    utils::time::today,
    AppState,
};

/// Attention feed for the header bell. Failures answer 500 with an empty list
/// so the client can keep rendering.
#[utoipa::path(
    get,
    path = "/notifications/all",
    responses(
        (status = 200, description = "Interviews tomorrow, follow-ups due today and overdue", body = [NotificationItem]),
        (status = 500, description = "Feed unavailable; body is an empty array")
    )
)]
#[axum::debug_handler]
pub async fn feed(State(state): State<AppState>) -> Response {
    match state.notification_service.feed(today()).await {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            tracing::error!("Failed to build notification feed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Vec::<NotificationItem>::new()),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/notifications",
    responses(
        (status = 200, description = "Unread reminders that are due", body = [Notification])
    )
)]
#[axum::debug_handler]
pub async fn list_unread(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = state.notification_service.list_unread(today()).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    put,
    path = "/notifications/read/{id}",
    params(
        ("id" = i64, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Reminder marked as read", body = Notification),
        (status = 404, description = "Notification not found")
    )
)]
#[axum::debug_handler]
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let notification = state.notification_service.mark_read(id).await?;
    Ok(Json(notification))
}
