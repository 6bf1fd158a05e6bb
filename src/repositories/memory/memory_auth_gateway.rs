// src/repositories/memory/memory_auth_gateway.rs
//
// Demo identity backend for local-data mode.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use log::debug;
use uuid::Uuid;

use crate::domain::{AuthResponse, AuthTokens, LoginCredentials, Role, TokenGrant, User};
use crate::error::{AppError, AppResult};
use crate::repositories::AuthGateway;

/// Shared by both demo accounts
pub const DEMO_PASSWORD: &str = "password123";

const ACCESS_TOKEN_TTL_MINUTES: i64 = 15;
const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

pub struct MemoryAuthGateway {
    accounts: Vec<User>,
}

impl MemoryAuthGateway {
    pub fn new() -> Self {
        Self {
            accounts: vec![
                User {
                    id: 1,
                    email: "user@example.com".to_string(),
                    name: Some("John Doe".to_string()),
                    role: Role::User,
                    is_email_verified: true,
                },
                User {
                    id: 2,
                    email: "admin@example.com".to_string(),
                    name: Some("Jane Smith".to_string()),
                    role: Role::Admin,
                    is_email_verified: true,
                },
            ],
        }
    }

    fn issue_tokens() -> AuthTokens {
        let now = Utc::now();
        AuthTokens {
            access: TokenGrant {
                token: format!("mock-access-{}", Uuid::new_v4()),
                expires: now + Duration::minutes(ACCESS_TOKEN_TTL_MINUTES),
            },
            refresh: TokenGrant {
                token: format!("mock-refresh-{}", Uuid::new_v4()),
                expires: now + Duration::days(REFRESH_TOKEN_TTL_DAYS),
            },
        }
    }
}

impl Default for MemoryAuthGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGateway for MemoryAuthGateway {
    async fn login(&self, credentials: &LoginCredentials) -> AppResult<AuthResponse> {
        let user = self
            .accounts
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(credentials.email.trim()))
            .filter(|_| credentials.password == DEMO_PASSWORD)
            .ok_or(AppError::InvalidCredentials)?;

        debug!("mock login for {}", user.email);
        Ok(AuthResponse {
            user: user.clone(),
            tokens: Self::issue_tokens(),
        })
    }

    async fn logout(&self, _refresh_token: &str) -> AppResult<()> {
        Ok(())
    }
}
