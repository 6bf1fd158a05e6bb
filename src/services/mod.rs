// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services validate input, call repositories, log outcomes and emit
// events. Which repository strategy they talk to is decided elsewhere.

pub mod applications_service;
pub mod auth_service;
pub mod submission_service;

#[cfg(test)]
mod applications_service_tests;

pub use applications_service::ApplicationsService;
pub use auth_service::{AuthGuard, AuthService};
pub use submission_service::SubmissionService;
