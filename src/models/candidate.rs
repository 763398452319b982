use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const CANDIDATE_STATUSES: &[&str] = &[
    "Applied",
    "Shortlisted",
    "Interview Scheduled",
    "Shared",
    "Hired",
    "Rejected",
];
pub const DEFAULT_CANDIDATE_STATUS: &str = "Applied";
pub const INTERVIEW_SCHEDULED: &str = "Interview Scheduled";

/// Pipeline stage of a candidate within one job.
pub const PIPELINE_STAGES: &[&str] = &["shared", "interviewed", "hired", "rejected"];
pub const DEFAULT_STAGE: &str = "shared";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub status: String,
    pub company_id: Option<i64>,
    pub job_id: Option<i64>,
    pub cv: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub(crate) const CANDIDATE_COLUMNS: &str =
    "id, name, email, phone, position, status, company_id, job_id, cv, created_at";

/// A candidate as seen from a job's pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PipelineCandidate {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub status: String,
    pub cv: Option<String>,
    pub stage: String,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JobAssignment {
    pub job_id: i64,
    pub candidate_id: i64,
    pub stage: String,
    pub assigned_at: DateTime<Utc>,
}
