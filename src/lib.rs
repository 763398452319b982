pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::services::{
    auth_service::AuthService, candidate_service::CandidateService,
    company_service::CompanyService, follow_up_service::FollowUpService,
    interview_service::InterviewService, job_service::JobService, lead_service::LeadService,
    notification_service::NotificationService, upload_service::UploadService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub auth_service: AuthService,
    pub lead_service: LeadService,
    pub company_service: CompanyService,
    pub job_service: JobService,
    pub candidate_service: CandidateService,
    pub interview_service: InterviewService,
    pub follow_up_service: FollowUpService,
    pub notification_service: NotificationService,
    pub upload_service: UploadService,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        let upload_service = UploadService::new(config.uploads_dir.clone());

        Self {
            auth_service: AuthService::new(pool.clone()),
            lead_service: LeadService::new(pool.clone()),
            company_service: CompanyService::new(pool.clone()),
            job_service: JobService::new(pool.clone()),
            candidate_service: CandidateService::new(pool.clone()),
            interview_service: InterviewService::new(pool.clone()),
            follow_up_service: FollowUpService::new(pool.clone()),
            notification_service: NotificationService::new(pool.clone()),
            upload_service,
            pool,
            config,
        }
    }
}
