use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Json},
};
use bytes::Bytes;
use validator::Validate;

use crate::{
    dto::auth_dto::{AvatarResponse, CredentialsPayload, LoginResponse, UpdateProfilePayload},
    error::{Error, Result},
    models::hr_user::SessionUser,
    services::upload_service::UploadKind,
    AppState,
};

use super::parse_form_id;

#[utoipa::path(
    post,
    path = "/register",
    request_body = CredentialsPayload,
    responses(
        (status = 200, description = "HR user created", body = SessionUser),
        (status = 400, description = "Missing username or password"),
        (status = 409, description = "Username already taken")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<CredentialsPayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    payload.validate()?;
    let user = state.auth_service.register(payload).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = CredentialsPayload,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Invalid login")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<CredentialsPayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    payload.validate()?;
    let user = state.auth_service.login(payload).await?;
    Ok(Json(LoginResponse {
        success: true,
        user,
    }))
}

#[utoipa::path(
    put,
    path = "/update-profile",
    request_body = UpdateProfilePayload,
    responses(
        (status = 200, description = "Profile updated", body = SessionUser),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username already taken")
    )
)]
#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(mut payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.normalize();
    payload.validate()?;
    let user = state.auth_service.update_profile(payload).await?;
    Ok(Json(user))
}

/// Multipart form with the user `id` and an `avatar` image.
#[utoipa::path(
    post,
    path = "/upload-avatar",
    responses(
        (status = 200, description = "Avatar stored", body = AvatarResponse),
        (status = 400, description = "Missing id or file"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn upload_avatar(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut user_id: Option<i64> = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "id" => user_id = parse_form_id("id", &field.text().await?)?,
            "avatar" => {
                let filename = field.file_name().unwrap_or("avatar.bin").to_string();
                let data = field.bytes().await?;
                file = Some((filename, data));
            }
            _ => {}
        }
    }

    let user_id = user_id.ok_or_else(|| Error::BadRequest("id is required".into()))?;
    let (filename, data) = file.ok_or_else(|| Error::BadRequest("No file uploaded".into()))?;

    let avatar = state
        .upload_service
        .save(UploadKind::Avatar, &filename, &data)
        .await?;
    if let Err(e) = state.auth_service.set_avatar(user_id, &avatar).await {
        state.upload_service.discard(&avatar).await;
        return Err(e);
    }
    Ok(Json(AvatarResponse { avatar }))
}
