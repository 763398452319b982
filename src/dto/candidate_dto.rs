use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Fields of the multipart `add-candidate` form, minus the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NewCandidate {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub company_id: Option<i64>,
    pub job_id: Option<i64>,
    pub cv: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct CandidateListQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandidateStatusPayload {
    #[serde(default)]
    pub status: String,
}
