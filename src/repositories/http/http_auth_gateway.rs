// src/repositories/http/http_auth_gateway.rs

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{AuthResponse, LoginCredentials};
use crate::error::{AppError, AppResult};
use crate::integrations::ApiClient;
use crate::repositories::AuthGateway;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoutRequest<'a> {
    refresh_token: &'a str,
}

pub struct HttpAuthGateway {
    client: Arc<ApiClient>,
}

impl HttpAuthGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &LoginCredentials) -> AppResult<AuthResponse> {
        match self
            .client
            .post_json(&["auth", "login"], credentials, "Login endpoint")
            .await
        {
            Err(AppError::Api { status: 401, .. }) => Err(AppError::InvalidCredentials),
            other => other,
        }
    }

    async fn logout(&self, refresh_token: &str) -> AppResult<()> {
        self.client
            .post_empty(
                &["auth", "logout"],
                &LogoutRequest { refresh_token },
                "Logout endpoint",
            )
            .await
    }
}
