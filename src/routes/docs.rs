use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::{
    auth_dto::{AvatarResponse, CredentialsPayload, LoginResponse, UpdateProfilePayload},
    candidate_dto::{CandidateStatusPayload, NewCandidate},
    company_dto::CompanyPayload,
    follow_up_dto::FollowUpPayload,
    interview_dto::CreateInterviewPayload,
    job_dto::{AssignCandidatePayload, JobPayload, StagePayload},
    lead_dto::{ConvertLeadResponse, LeadPayload},
    MessageResponse,
};
use crate::models::{
    candidate::{Candidate, JobAssignment, PipelineCandidate},
    company::Company,
    follow_up::{FollowUp, OverdueFollowUp},
    hr_user::SessionUser,
    interview::{Interview, InterviewDetail},
    job::Job,
    lead::Lead,
    notification::{Notification, NotificationItem, NotificationKind},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "HR CRM API", description = "Leads, companies, jobs, candidates, interviews and follow-ups"),
    paths(
        super::health::health,
        super::auth::register,
        super::auth::login,
        super::auth::update_profile,
        super::auth::upload_avatar,
        super::leads::create_lead,
        super::leads::list_leads,
        super::leads::get_lead,
        super::leads::update_lead,
        super::leads::delete_lead,
        super::leads::convert_lead,
        super::companies::create_company,
        super::companies::list_companies,
        super::companies::get_company,
        super::companies::update_company,
        super::companies::delete_company,
        super::companies::list_company_jobs,
        super::jobs::create_job,
        super::jobs::list_jobs,
        super::jobs::update_job,
        super::jobs::delete_job,
        super::jobs::job_pipeline,
        super::jobs::assign_candidate,
        super::jobs::update_stage,
        super::candidates::create_candidate,
        super::candidates::list_candidates,
        super::candidates::update_candidate_status,
        super::candidates::delete_candidate,
        super::candidates::export_candidates,
        super::interviews::create_interview,
        super::interviews::list_interviews,
        super::interviews::delete_interview,
        super::follow_ups::save_follow_up,
        super::follow_ups::update_follow_up,
        super::follow_ups::list_lead_follow_ups,
        super::follow_ups::delete_follow_up,
        super::follow_ups::list_overdue,
        super::dashboard::counts,
        super::notifications::feed,
        super::notifications::list_unread,
        super::notifications::mark_read,
    ),
    components(schemas(
        MessageResponse,
        CredentialsPayload,
        LoginResponse,
        UpdateProfilePayload,
        AvatarResponse,
        SessionUser,
        LeadPayload,
        ConvertLeadResponse,
        Lead,
        CompanyPayload,
        Company,
        JobPayload,
        AssignCandidatePayload,
        StagePayload,
        Job,
        NewCandidate,
        CandidateStatusPayload,
        Candidate,
        PipelineCandidate,
        JobAssignment,
        CreateInterviewPayload,
        Interview,
        InterviewDetail,
        FollowUpPayload,
        FollowUp,
        OverdueFollowUp,
        NotificationKind,
        NotificationItem,
        Notification,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
