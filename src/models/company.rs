use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const COMPANY_STATUSES: &[&str] = &["Active", "Inactive"];
pub const DEFAULT_COMPANY_STATUS: &str = "Active";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub hr_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub(crate) const COMPANY_COLUMNS: &str =
    "id, name, hr_name, phone, email, industry, status, created_at";
