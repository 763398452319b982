use crate::dto::interview_dto::CreateInterviewPayload;
use crate::error::{Error, Result};
use crate::models::candidate::INTERVIEW_SCHEDULED;
use crate::models::interview::{
    Interview, InterviewDetail, DEFAULT_INTERVIEW_MODE, DEFAULT_INTERVIEW_STATUS, INTERVIEW_MODES,
    INTERVIEW_STATUSES,
};
use crate::models::notification::INTERVIEW_REMINDER;
use crate::utils::time::previous_day;
use crate::utils::validation::ensure_optional_one_of;
use sqlx::PgPool;

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Schedules an interview. In one transaction the candidate's status is
    /// overwritten with "Interview Scheduled" whatever it was before, the
    /// interview row is stored and a reminder for the day before is recorded.
    pub async fn schedule(&self, payload: CreateInterviewPayload) -> Result<Interview> {
        let candidate_id = payload
            .candidate_id
            .ok_or_else(|| Error::BadRequest("candidate_id is required".into()))?;
        let interview_date = payload
            .interview_date
            .ok_or_else(|| Error::BadRequest("interview_date is required".into()))?;
        ensure_optional_one_of("mode", payload.mode.as_deref(), INTERVIEW_MODES)?;
        ensure_optional_one_of("status", payload.status.as_deref(), INTERVIEW_STATUSES)?;

        let mut tx = self.pool.begin().await?;

        let previous: Option<String> =
            sqlx::query_scalar("SELECT status FROM candidates WHERE id = $1 FOR UPDATE")
                .bind(candidate_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(previous) = previous else {
            return Err(Error::NotFound("Candidate not found".into()));
        };

        sqlx::query("UPDATE candidates SET status = $1 WHERE id = $2")
            .bind(INTERVIEW_SCHEDULED)
            .bind(candidate_id)
            .execute(&mut *tx)
            .await?;

        let interview = sqlx::query_as::<_, Interview>(
            r#"
            INSERT INTO interviews (candidate_id, interview_date, interview_time, recruiter_name, mode, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, candidate_id, interview_date, interview_time, recruiter_name, mode, status, created_at
            "#,
        )
        .bind(candidate_id)
        .bind(interview_date)
        .bind(payload.interview_time)
        .bind(payload.recruiter_name)
        .bind(payload.mode.unwrap_or_else(|| DEFAULT_INTERVIEW_MODE.to_string()))
        .bind(payload.status.unwrap_or_else(|| DEFAULT_INTERVIEW_STATUS.to_string()))
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO notifications (kind, message, related_id, notify_date)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(INTERVIEW_REMINDER)
        .bind("Interview scheduled for tomorrow")
        .bind(candidate_id)
        .bind(previous_day(interview_date))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(
            interview_id = interview.id,
            candidate_id,
            previous_status = %previous,
            "Interview scheduled, candidate status overwritten"
        );

        Ok(interview)
    }

    pub async fn list(&self) -> Result<Vec<InterviewDetail>> {
        let rows = sqlx::query_as::<_, InterviewDetail>(
            r#"
            SELECT i.id, i.candidate_id, i.interview_date, i.interview_time, i.recruiter_name,
                   i.mode, i.status, i.created_at,
                   c.name AS candidate, j.title AS job_title
            FROM interviews i
            LEFT JOIN candidates c ON i.candidate_id = c.id
            LEFT JOIN jobs j ON c.job_id = j.id
            ORDER BY i.interview_date, i.interview_time NULLS LAST, i.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Interview not found".into()));
        }
        Ok(())
    }
}
