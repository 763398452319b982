use crate::error::Result;
use crate::utils::crypto::hash_password;
use sqlx::PgPool;
use tracing::{info, warn};

const DEFAULT_USERS: [(&str, &str); 2] = [("admin", "admin123"), ("hr_manager", "hr123")];

/// Creates the stock HR accounts when the user table is empty.
/// Returns the number of accounts inserted.
pub async fn seed_default_users(pool: &PgPool) -> Result<usize> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hr_users")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(0);
    }

    warn!("No HR users found, creating default accounts");
    let mut inserted = 0;
    for (username, password) in DEFAULT_USERS {
        let hash = hash_password(password)?;
        let res = sqlx::query(
            "INSERT INTO hr_users (username, password_hash) VALUES ($1, $2) ON CONFLICT (username) DO NOTHING",
        )
        .bind(username)
        .bind(hash)
        .execute(pool)
        .await?;
        inserted += res.rows_affected() as usize;
    }
    info!(inserted, "Default HR accounts created");
    Ok(inserted)
}
