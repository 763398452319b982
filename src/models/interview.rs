use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const INTERVIEW_MODES: &[&str] = &["Online", "Offline"];
pub const INTERVIEW_STATUSES: &[&str] = &["Scheduled", "Completed", "Cancelled"];
pub const DEFAULT_INTERVIEW_MODE: &str = "Online";
pub const DEFAULT_INTERVIEW_STATUS: &str = "Scheduled";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Interview {
    pub id: i64,
    pub candidate_id: i64,
    pub interview_date: NaiveDate,
    pub interview_time: Option<String>,
    pub recruiter_name: Option<String>,
    pub mode: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Interview row joined with the candidate's name and job title.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InterviewDetail {
    pub id: i64,
    pub candidate_id: i64,
    pub interview_date: NaiveDate,
    pub interview_time: Option<String>,
    pub recruiter_name: Option<String>,
    pub mode: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub candidate: Option<String>,
    pub job_title: Option<String>,
}
