// src/repositories/http/mod.rs
//
// REST strategy: every call goes to the configured API.

pub mod http_application_repository;
pub mod http_auth_gateway;

pub use http_application_repository::HttpApplicationRepository;
pub use http_auth_gateway::HttpAuthGateway;

use crate::error::{AppError, AppResult};

/// 404 becomes `None`; every other failure passes through.
pub(crate) fn found<T>(result: AppResult<T>) -> AppResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(AppError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
