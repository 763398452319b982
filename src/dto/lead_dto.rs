use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{company::Company, lead::Lead};
use crate::utils::validation::{trim_in_place, trim_optional};

/// Body of both `add-lead` and `edit-lead`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct LeadPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "company_name is required"))]
    pub company_name: String,
    pub hr_person: Option<String>,
    pub designation: Option<String>,
    pub contact_no: Option<String>,
    #[validate(email(message = "email is not valid"))]
    pub email: Option<String>,
    pub address: Option<String>,
    pub source: Option<String>,
    pub reference: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub city: Option<String>,
    pub lead_owner: Option<String>,
    pub lead_status: Option<String>,
}

impl LeadPayload {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.company_name);
        for field in [
            &mut self.hr_person,
            &mut self.designation,
            &mut self.contact_no,
            &mut self.email,
            &mut self.address,
            &mut self.source,
            &mut self.reference,
            &mut self.industry,
            &mut self.company_size,
            &mut self.city,
            &mut self.lead_owner,
            &mut self.lead_status,
        ] {
            trim_optional(field);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertLeadResponse {
    pub lead: Lead,
    pub company: Company,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_company_name_is_rejected() {
        let mut p = LeadPayload {
            company_name: "   ".into(),
            ..Default::default()
        };
        p.normalize();
        assert!(p.validate().is_err());
    }

    #[test]
    fn missing_company_name_deserializes_then_fails() {
        let mut p: LeadPayload = serde_json::from_str(r#"{"city":"Pune"}"#).unwrap();
        p.normalize();
        let err = p.validate().unwrap_err();
        assert!(err.field_errors().contains_key("company_name"));
    }

    #[test]
    fn blank_email_is_not_validated() {
        let mut p: LeadPayload =
            serde_json::from_str(r#"{"company_name":"Acme","email":" "}"#).unwrap();
        p.normalize();
        assert!(p.email.is_none());
        assert!(p.validate().is_ok());
    }
}
