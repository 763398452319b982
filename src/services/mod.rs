pub mod auth_service;
pub mod candidate_service;
pub mod company_service;
pub mod export_service;
pub mod follow_up_service;
pub mod interview_service;
pub mod job_service;
pub mod lead_service;
pub mod notification_service;
pub mod upload_service;
