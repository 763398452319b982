use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Interview,
    Followup,
    FollowupOverdue,
}

impl NotificationKind {
    pub fn status_label(self) -> &'static str {
        match self {
            NotificationKind::Interview => "Interview Tomorrow",
            NotificationKind::Followup => "Due Today",
            NotificationKind::FollowupOverdue => "Overdue",
        }
    }
}

/// One entry of the combined attention feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub status: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub redirect_id: i64,
}

/// Interview joined with the candidate for the feed.
#[derive(Debug, Clone, FromRow)]
pub struct UpcomingInterview {
    pub id: i64,
    pub interview_date: NaiveDate,
    pub interview_time: Option<String>,
    pub candidate_id: i64,
    pub candidate_name: String,
    pub job_title: Option<String>,
}

/// Pending follow-up joined with its lead for the feed.
#[derive(Debug, Clone, FromRow)]
pub struct DueFollowUp {
    pub id: i64,
    pub lead_id: i64,
    pub status: String,
    pub next_follow_up_date: Option<NaiveDate>,
    pub notes: String,
    pub company_name: String,
}

pub const INTERVIEW_REMINDER: &str = "interview";

/// Stored reminder row with read state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notification {
    pub id: i64,
    pub kind: String,
    pub message: String,
    pub related_id: Option<i64>,
    pub notify_date: NaiveDate,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
