use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HrUser {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub avatar: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// The user object handed to the browser after login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub avatar: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<HrUser> for SessionUser {
    fn from(value: HrUser) -> Self {
        Self {
            id: value.id,
            username: value.username,
            avatar: value.avatar,
            last_login: value.last_login,
        }
    }
}
