pub mod auth_dto;
pub mod candidate_dto;
pub mod company_dto;
pub mod dashboard_dto;
pub mod follow_up_dto;
pub mod interview_dto;
pub mod job_dto;
pub mod lead_dto;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Browser forms post select values as strings; ids accept `5` or `"5"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(i64),
    Text(String),
}

pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IdRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdRepr::Int(v)) => Ok(Some(v)),
        Some(IdRepr::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(IdRepr::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid id '{}'", s))),
    }
}

/// Empty date inputs arrive as `""`; treat them as absent.
pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => {
            let raw = s.trim();
            // ISO timestamps from date pickers: keep the part before `T`.
            let date_part = raw.split_once('T').map_or(raw, |(date, _)| date);
            NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid date '{}'", s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct FormFields {
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        id: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn ids_accept_numbers_and_strings() {
        let p: FormFields = serde_json::from_value(json!({"id": "42"})).unwrap();
        assert_eq!(p.id, Some(42));
        let p: FormFields = serde_json::from_value(json!({"id": 7})).unwrap();
        assert_eq!(p.id, Some(7));
        let p: FormFields = serde_json::from_value(json!({"id": ""})).unwrap();
        assert_eq!(p.id, None);
        assert!(serde_json::from_value::<FormFields>(json!({"id": "abc"})).is_err());
    }

    #[test]
    fn dates_tolerate_blank_and_timestamps() {
        let p: FormFields = serde_json::from_value(json!({"date": ""})).unwrap();
        assert_eq!(p.date, None);
        let p: FormFields = serde_json::from_value(json!({"date": "2026-03-04T00:00:00.000Z"})).unwrap();
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2026, 3, 4));
        let p: FormFields = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p.date, None);
    }

    #[test]
    fn dates_with_trailing_junk_are_rejected() {
        assert!(serde_json::from_value::<FormFields>(json!({"date": "2026-01-05garbage"})).is_err());
        assert!(serde_json::from_value::<FormFields>(json!({"date": "2026-01-05 10:00"})).is_err());
    }
}
