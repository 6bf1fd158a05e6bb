// src/repositories/auth_gateway.rs
//
// Credential check against whichever identity backend is configured.

use async_trait::async_trait;

use crate::domain::{AuthResponse, LoginCredentials};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `AppError::InvalidCredentials` when the backend rejects the pair.
    async fn login(&self, credentials: &LoginCredentials) -> AppResult<AuthResponse>;

    async fn logout(&self, refresh_token: &str) -> AppResult<()>;
}
