pub mod candidate;
pub mod company;
pub mod follow_up;
pub mod hr_user;
pub mod interview;
pub mod job;
pub mod lead;
pub mod notification;
