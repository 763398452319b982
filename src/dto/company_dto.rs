use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::validation::{trim_in_place, trim_optional};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompanyPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub hr_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub status: Option<String>,
}

impl CompanyPayload {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.name);
        for field in [
            &mut self.hr_name,
            &mut self.phone,
            &mut self.email,
            &mut self.industry,
            &mut self.status,
        ] {
            trim_optional(field);
        }
    }
}
