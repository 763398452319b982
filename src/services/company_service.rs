use crate::dto::company_dto::CompanyPayload;
use crate::error::{Error, Result};
use crate::models::company::{Company, COMPANY_COLUMNS, COMPANY_STATUSES, DEFAULT_COMPANY_STATUS};
use crate::models::job::{Job, JOB_COLUMNS};
use crate::utils::validation::ensure_optional_one_of;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CompanyPayload) -> Result<Company> {
        ensure_optional_one_of("status", payload.status.as_deref(), COMPANY_STATUSES)?;
        let sql = format!(
            r#"
            INSERT INTO companies (name, hr_name, phone, email, industry, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            COMPANY_COLUMNS
        );
        let company = sqlx::query_as::<_, Company>(&sql)
            .bind(payload.name)
            .bind(payload.hr_name)
            .bind(payload.phone)
            .bind(payload.email)
            .bind(payload.industry)
            .bind(
                payload
                    .status
                    .unwrap_or_else(|| DEFAULT_COMPANY_STATUS.to_string()),
            )
            .fetch_one(&self.pool)
            .await?;
        Ok(company)
    }

    pub async fn list(&self) -> Result<Vec<Company>> {
        let sql = format!("SELECT {} FROM companies ORDER BY id", COMPANY_COLUMNS);
        let items = sqlx::query_as::<_, Company>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Company> {
        let sql = format!("SELECT {} FROM companies WHERE id = $1", COMPANY_COLUMNS);
        sqlx::query_as::<_, Company>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Company not found".into()))
    }

    pub async fn update(&self, id: i64, payload: CompanyPayload) -> Result<Company> {
        ensure_optional_one_of("status", payload.status.as_deref(), COMPANY_STATUSES)?;
        let sql = format!(
            r#"
            UPDATE companies
            SET name = $1, hr_name = $2, phone = $3, email = $4, industry = $5,
                status = COALESCE($6, status)
            WHERE id = $7
            RETURNING {}
            "#,
            COMPANY_COLUMNS
        );
        sqlx::query_as::<_, Company>(&sql)
            .bind(payload.name)
            .bind(payload.hr_name)
            .bind(payload.phone)
            .bind(payload.email)
            .bind(payload.industry)
            .bind(payload.status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Company not found".into()))
    }

    /// Jobs of the company go with it (ON DELETE CASCADE).
    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Company not found".into()));
        }
        Ok(())
    }

    pub async fn list_jobs(&self, company_id: i64) -> Result<Vec<Job>> {
        self.get_by_id(company_id).await?;
        let sql = format!(
            "SELECT {} FROM jobs WHERE company_id = $1 ORDER BY id",
            JOB_COLUMNS
        );
        let jobs = sqlx::query_as::<_, Job>(&sql)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }
}
