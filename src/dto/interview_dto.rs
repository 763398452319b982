use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::validation::trim_optional;

use super::{deserialize_optional_date, deserialize_optional_id};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateInterviewPayload {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub candidate_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub interview_date: Option<NaiveDate>,
    pub interview_time: Option<String>,
    pub recruiter_name: Option<String>,
    pub mode: Option<String>,
    pub status: Option<String>,
}

impl CreateInterviewPayload {
    pub fn normalize(&mut self) {
        for field in [
            &mut self.interview_time,
            &mut self.recruiter_name,
            &mut self.mode,
            &mut self.status,
        ] {
            trim_optional(field);
        }
    }
}
