use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::validation::{trim_in_place, trim_optional};

use super::{deserialize_optional_date, deserialize_optional_id};

/// Body of `add-followup` (insert, or update when `id` is set) and `update-followup`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct FollowUpPayload {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub lead_id: Option<i64>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub last_follow_up_date: Option<NaiveDate>,
    #[serde(
        default,
        alias = "follow_up_date",
        deserialize_with = "deserialize_optional_date"
    )]
    pub next_follow_up_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(min = 1, message = "notes are required"))]
    pub notes: String,
    pub mode: Option<String>,
    pub priority: Option<String>,
    pub created_by: Option<String>,
}

impl FollowUpPayload {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.notes);
        for field in [
            &mut self.status,
            &mut self.mode,
            &mut self.priority,
            &mut self.created_by,
        ] {
            trim_optional(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_single_date_maps_to_next_date() {
        let p: FollowUpPayload = serde_json::from_str(
            r#"{"lead_id":"3","status":"Pending","follow_up_date":"2026-05-01","notes":"call"}"#,
        )
        .unwrap();
        assert_eq!(p.lead_id, Some(3));
        assert_eq!(p.next_follow_up_date, NaiveDate::from_ymd_opt(2026, 5, 1));
        assert!(p.last_follow_up_date.is_none());
    }

    #[test]
    fn echoed_rows_with_extra_fields_are_accepted() {
        let p: FollowUpPayload = serde_json::from_str(
            r#"{"id":9,"lead_id":3,"status":"Done","next_follow_up_date":"2026-05-01",
                "last_follow_up_date":"","notes":"x","created_at":"2026-04-01T10:00:00Z",
                "company_name":"Acme"}"#,
        )
        .unwrap();
        assert_eq!(p.id, Some(9));
        assert!(p.last_follow_up_date.is_none());
    }
}
