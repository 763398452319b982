use sqlx::PgPool;

use crate::dto::auth_dto::{CredentialsPayload, UpdateProfilePayload};
use crate::error::{Error, Result};
use crate::models::hr_user::{HrUser, SessionUser};
use crate::utils::crypto::{hash_password, verify_password};

const USER_COLUMNS: &str = "id, username, password_hash, avatar, last_login, created_at";

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, credentials: CredentialsPayload) -> Result<SessionUser> {
        let hash = hash_password(&credentials.password)?;
        let sql = format!(
            "INSERT INTO hr_users (username, password_hash) VALUES ($1, $2) RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, HrUser>(&sql)
            .bind(&credentials.username)
            .bind(hash)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::from)
            .map_err(|e| {
                if e.is_unique_violation() {
                    Error::Conflict("User already exists".into())
                } else {
                    e
                }
            })?;
        tracing::info!(user_id = user.id, username = %user.username, "HR user registered");
        Ok(user.into())
    }

    /// Checks the password and stamps `last_login`.
    pub async fn login(&self, credentials: CredentialsPayload) -> Result<SessionUser> {
        let sql = format!("SELECT {} FROM hr_users WHERE username = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, HrUser>(&sql)
            .bind(&credentials.username)
            .fetch_optional(&self.pool)
            .await?;

        let Some(user) = user else {
            return Err(Error::Unauthorized("Invalid login".into()));
        };
        if !verify_password(&credentials.password, &user.password_hash) {
            tracing::warn!(username = %credentials.username, "Failed login attempt");
            return Err(Error::Unauthorized("Invalid login".into()));
        }

        let sql = format!(
            "UPDATE hr_users SET last_login = NOW() WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, HrUser>(&sql)
            .bind(user.id)
            .fetch_one(&self.pool)
            .await?;
        Ok(user.into())
    }

    pub async fn update_profile(&self, payload: UpdateProfilePayload) -> Result<SessionUser> {
        let id = payload
            .id
            .ok_or_else(|| Error::BadRequest("Missing fields".into()))?;

        let result = match payload.password.as_deref() {
            Some(password) => {
                let hash = hash_password(password)?;
                let sql = format!(
                    "UPDATE hr_users SET username = $1, password_hash = $2 WHERE id = $3 RETURNING {}",
                    USER_COLUMNS
                );
                sqlx::query_as::<_, HrUser>(&sql)
                    .bind(&payload.username)
                    .bind(hash)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await
            }
            None => {
                let sql = format!(
                    "UPDATE hr_users SET username = $1 WHERE id = $2 RETURNING {}",
                    USER_COLUMNS
                );
                sqlx::query_as::<_, HrUser>(&sql)
                    .bind(&payload.username)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await
            }
        };

        let user = result
            .map_err(Error::from)
            .map_err(|e| {
                if e.is_unique_violation() {
                    Error::Conflict("Username already exists".into())
                } else {
                    e
                }
            })?
            .ok_or_else(|| Error::NotFound("User not found".into()))?;
        Ok(user.into())
    }

    pub async fn set_avatar(&self, id: i64, avatar_path: &str) -> Result<()> {
        let res = sqlx::query("UPDATE hr_users SET avatar = $1 WHERE id = $2")
            .bind(avatar_path)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("User not found".into()));
        }
        Ok(())
    }
}
