use crate::dto::candidate_dto::NewCandidate;
use crate::dto::dashboard_dto::DashboardCounts;
use crate::error::{Error, Result};
use crate::models::candidate::{
    Candidate, CANDIDATE_COLUMNS, CANDIDATE_STATUSES, DEFAULT_CANDIDATE_STATUS,
};
use crate::utils::validation::{ensure_one_of, ensure_optional_one_of};
use sqlx::PgPool;

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Field checks that need no database; run before any file is stored.
    pub fn check_new(new: &NewCandidate) -> Result<()> {
        if new.name.trim().is_empty() {
            return Err(Error::BadRequest("name is required".into()));
        }
        ensure_optional_one_of("status", new.status.as_deref(), CANDIDATE_STATUSES)
    }

    pub async fn create(&self, new: NewCandidate) -> Result<Candidate> {
        Self::check_new(&new)?;

        let sql = format!(
            r#"
            INSERT INTO candidates (name, email, phone, position, status, company_id, job_id, cv)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            CANDIDATE_COLUMNS
        );
        let candidate = sqlx::query_as::<_, Candidate>(&sql)
            .bind(new.name.trim())
            .bind(new.email)
            .bind(new.phone)
            .bind(new.position)
            .bind(new.status.unwrap_or_else(|| DEFAULT_CANDIDATE_STATUS.to_string()))
            .bind(new.company_id)
            .bind(new.job_id)
            .bind(new.cv)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => Error::BadRequest(
                    "company_id or job_id does not reference an existing record".into(),
                ),
                other => other.into(),
            })?;
        Ok(candidate)
    }

    pub async fn list(&self, status: Option<&str>) -> Result<Vec<Candidate>> {
        let candidates = match status {
            Some(status) => {
                let sql = format!(
                    "SELECT {} FROM candidates WHERE status = $1 ORDER BY id",
                    CANDIDATE_COLUMNS
                );
                sqlx::query_as::<_, Candidate>(&sql)
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!("SELECT {} FROM candidates ORDER BY id", CANDIDATE_COLUMNS);
                sqlx::query_as::<_, Candidate>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(candidates)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Candidate> {
        let sql = format!("SELECT {} FROM candidates WHERE id = $1", CANDIDATE_COLUMNS);
        sqlx::query_as::<_, Candidate>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Candidate not found".into()))
    }

    pub async fn update_status(&self, id: i64, status: &str) -> Result<Candidate> {
        ensure_one_of("status", status, CANDIDATE_STATUSES)?;
        let sql = format!(
            "UPDATE candidates SET status = $1 WHERE id = $2 RETURNING {}",
            CANDIDATE_COLUMNS
        );
        sqlx::query_as::<_, Candidate>(&sql)
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Candidate not found".into()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Candidate not found".into()));
        }
        Ok(())
    }

    /// Per-status counts from a single grouped read.
    pub async fn status_counts(&self) -> Result<DashboardCounts> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM candidates GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(DashboardCounts::from_grouped(rows))
    }

    /// Job titles keyed by job id, for the spreadsheet export.
    pub async fn job_titles(&self) -> Result<std::collections::HashMap<i64, String>> {
        let rows = sqlx::query_as::<_, (i64, String)>("SELECT id, title FROM jobs")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().collect())
    }
}
