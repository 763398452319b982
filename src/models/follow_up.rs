use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const FOLLOW_UP_STATUSES: &[&str] = &["Pending", "Done", "Missed"];
pub const PENDING: &str = "Pending";
pub const PRIORITIES: &[&str] = &["Low", "Medium", "High"];
pub const DEFAULT_PRIORITY: &str = "Medium";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FollowUp {
    pub id: i64,
    pub lead_id: i64,
    pub status: String,
    pub last_follow_up_date: Option<NaiveDate>,
    /// Due date of the next contact.
    pub next_follow_up_date: Option<NaiveDate>,
    pub notes: String,
    pub mode: Option<String>,
    pub priority: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub(crate) const FOLLOW_UP_COLUMNS: &str = "id, lead_id, status, last_follow_up_date, next_follow_up_date, notes, mode, priority, created_by, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OverdueFollowUp {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub follow_up: FollowUp,
    pub company_name: String,
}
