use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::validation::{trim_in_place, trim_optional};

use super::deserialize_optional_id;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct JobPayload {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub company_id: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub experience: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub recruiter_name: Option<String>,
}

impl JobPayload {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.title);
        for field in [
            &mut self.experience,
            &mut self.salary,
            &mut self.location,
            &mut self.status,
            &mut self.recruiter_name,
        ] {
            trim_optional(field);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignCandidatePayload {
    #[serde(
        default,
        alias = "candidateId",
        deserialize_with = "deserialize_optional_id"
    )]
    pub candidate_id: Option<i64>,
    pub stage: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StagePayload {
    pub stage: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_accepts_camel_case_string_id() {
        let p: AssignCandidatePayload = serde_json::from_str(r#"{"candidateId":"12"}"#).unwrap();
        assert_eq!(p.candidate_id, Some(12));
        assert!(p.stage.is_none());
    }
}
