use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const LEAD_STATUSES: &[&str] = &["New", "Old", "Converted", "Lost"];
pub const DEFAULT_LEAD_STATUS: &str = "New";
pub const CONVERTED: &str = "Converted";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lead {
    pub id: i64,
    pub company_name: String,
    pub hr_person: Option<String>,
    pub designation: Option<String>,
    pub contact_no: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub source: Option<String>,
    pub reference: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub city: Option<String>,
    pub lead_owner: Option<String>,
    pub lead_status: String,
    pub created_date: DateTime<Utc>,
}

pub(crate) const LEAD_COLUMNS: &str = "id, company_name, hr_person, designation, contact_no, email, address, source, reference, industry, company_size, city, lead_owner, lead_status, created_date";
