use crate::dto::job_dto::JobPayload;
use crate::error::{Error, Result};
use crate::models::candidate::{JobAssignment, PipelineCandidate, DEFAULT_STAGE, PIPELINE_STAGES};
use crate::models::job::{Job, DEFAULT_JOB_STATUS, JOB_COLUMNS, JOB_STATUSES};
use crate::utils::validation::{ensure_one_of, ensure_optional_one_of};
use sqlx::PgPool;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: JobPayload) -> Result<Job> {
        ensure_optional_one_of("status", payload.status.as_deref(), JOB_STATUSES)?;
        let sql = format!(
            r#"
            INSERT INTO jobs (company_id, title, experience, salary, location, status, recruiter_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            JOB_COLUMNS
        );
        let job = sqlx::query_as::<_, Job>(&sql)
            .bind(payload.company_id)
            .bind(payload.title)
            .bind(payload.experience)
            .bind(payload.salary)
            .bind(payload.location)
            .bind(payload.status.unwrap_or_else(|| DEFAULT_JOB_STATUS.to_string()))
            .bind(payload.recruiter_name)
            .fetch_one(&self.pool)
            .await
            .map_err(foreign_key_to_bad_request)?;
        Ok(job)
    }

    pub async fn list(&self) -> Result<Vec<Job>> {
        let sql = format!("SELECT {} FROM jobs ORDER BY id", JOB_COLUMNS);
        let jobs = sqlx::query_as::<_, Job>(&sql).fetch_all(&self.pool).await?;
        Ok(jobs)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Job> {
        let sql = format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS);
        sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".into()))
    }

    pub async fn update(&self, id: i64, payload: JobPayload) -> Result<Job> {
        ensure_optional_one_of("status", payload.status.as_deref(), JOB_STATUSES)?;
        let sql = format!(
            r#"
            UPDATE jobs
            SET title = $1, company_id = $2, experience = $3, salary = $4, location = $5,
                status = COALESCE($6, status), recruiter_name = $7
            WHERE id = $8
            RETURNING {}
            "#,
            JOB_COLUMNS
        );
        sqlx::query_as::<_, Job>(&sql)
            .bind(payload.title)
            .bind(payload.company_id)
            .bind(payload.experience)
            .bind(payload.salary)
            .bind(payload.location)
            .bind(payload.status)
            .bind(payload.recruiter_name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(foreign_key_to_bad_request)?
            .ok_or_else(|| Error::NotFound("Job not found".into()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Job not found".into()));
        }
        Ok(())
    }

    pub async fn pipeline(&self, job_id: i64) -> Result<Vec<PipelineCandidate>> {
        self.get_by_id(job_id).await?;
        let rows = sqlx::query_as::<_, PipelineCandidate>(
            r#"
            SELECT c.id, c.name, c.email, c.phone, c.position, c.status, c.cv,
                   jc.stage, jc.assigned_at
            FROM job_candidates jc
            JOIN candidates c ON c.id = jc.candidate_id
            WHERE jc.job_id = $1
            ORDER BY jc.assigned_at DESC, c.id DESC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Assigning twice keeps the first assignment.
    pub async fn assign_candidate(
        &self,
        job_id: i64,
        candidate_id: i64,
        stage: Option<String>,
    ) -> Result<JobAssignment> {
        let stage = stage.unwrap_or_else(|| DEFAULT_STAGE.to_string());
        ensure_one_of("stage", &stage, PIPELINE_STAGES)?;
        self.get_by_id(job_id).await?;

        let inserted = sqlx::query_as::<_, JobAssignment>(
            r#"
            INSERT INTO job_candidates (job_id, candidate_id, stage)
            VALUES ($1, $2, $3)
            ON CONFLICT (job_id, candidate_id) DO NOTHING
            RETURNING job_id, candidate_id, stage, assigned_at
            "#,
        )
        .bind(job_id)
        .bind(candidate_id)
        .bind(&stage)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Error::NotFound("Candidate not found".into())
            }
            other => other.into(),
        })?;

        match inserted {
            Some(row) => Ok(row),
            None => self.assignment(job_id, candidate_id).await,
        }
    }

    pub async fn update_stage(&self, job_id: i64, candidate_id: i64, stage: &str) -> Result<JobAssignment> {
        ensure_one_of("stage", stage, PIPELINE_STAGES)?;
        sqlx::query_as::<_, JobAssignment>(
            r#"
            UPDATE job_candidates SET stage = $1
            WHERE job_id = $2 AND candidate_id = $3
            RETURNING job_id, candidate_id, stage, assigned_at
            "#,
        )
        .bind(stage)
        .bind(job_id)
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate is not assigned to this job".into()))
    }

    async fn assignment(&self, job_id: i64, candidate_id: i64) -> Result<JobAssignment> {
        let row = sqlx::query_as::<_, JobAssignment>(
            "SELECT job_id, candidate_id, stage, assigned_at FROM job_candidates WHERE job_id = $1 AND candidate_id = $2",
        )
        .bind(job_id)
        .bind(candidate_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

fn foreign_key_to_bad_request(err: sqlx::Error) -> Error {
    match err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            Error::BadRequest("company_id does not reference an existing company".into())
        }
        other => other.into(),
    }
}
