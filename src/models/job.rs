use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const JOB_STATUSES: &[&str] = &["Open", "Closed", "On Hold"];
pub const DEFAULT_JOB_STATUS: &str = "Open";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Job {
    pub id: i64,
    pub company_id: Option<i64>,
    pub title: String,
    pub experience: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub recruiter_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub(crate) const JOB_COLUMNS: &str =
    "id, company_id, title, experience, salary, location, status, recruiter_name, created_at";
