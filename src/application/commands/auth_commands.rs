// src/application/commands/auth_commands.rs
//
// Admin login page

use crate::application::{dto::*, state::AppState};
use crate::domain::LoginCredentials;
use crate::error::{AppError, AppResult};

/// Where a fresh login lands when no location was requested
pub const DEFAULT_ADMIN_LOCATION: &str = "/admin/dashboard";

/// Sign in as administrator and report where to go next.
pub async fn admin_login(state: &AppState, dto: LoginDto) -> AppResult<LoginView> {
    let credentials = LoginCredentials {
        email: dto.email,
        password: dto.password,
    };

    let session = state.auth.login(&credentials, true).await?;
    let user = session
        .user
        .ok_or_else(|| AppError::Other("login returned no user".to_string()))?;
    let display_name = user.display_name().to_string();

    Ok(LoginView {
        redirect_to: dto
            .from
            .filter(|from| !from.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_LOCATION.to_string()),
        message: format!("Welcome back, {}!", display_name),
        display_name,
    })
}

pub async fn admin_logout(state: &AppState) -> AppResult<()> {
    state.auth.logout().await
}
