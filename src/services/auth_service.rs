// src/services/auth_service.rs
//
// Sign-in, sign-out, and the route guard built on the stored session.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::domain::{
    evaluate_access, validate_login_credentials, AccessDecision, LoginCredentials, Role, Session,
};
use crate::error::{AppError, AppResult};
use crate::events::{AdminSignedIn, AdminSignedOut, EventBus};
use crate::repositories::{AuthGateway, SessionStore};

pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    sessions: Arc<dyn SessionStore>,
    event_bus: Arc<EventBus>,
}

impl AuthService {
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        sessions: Arc<dyn SessionStore>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            gateway,
            sessions,
            event_bus,
        }
    }

    /// Validate, authenticate, and persist the session.
    ///
    /// With `require_admin`, a non-admin account fails with
    /// `AppError::AccessDenied` and nothing is stored.
    pub async fn login(
        &self,
        credentials: &LoginCredentials,
        require_admin: bool,
    ) -> AppResult<Session> {
        validate_login_credentials(credentials)?;

        let response = self
            .gateway
            .login(credentials)
            .await
            .inspect_err(|e| warn!("login for {} failed: {}", credentials.email, e))?;

        if require_admin && response.user.role != Role::Admin {
            warn!("{} is not an administrator", response.user.email);
            return Err(AppError::AccessDenied);
        }

        let session = Session::from_response(response);
        self.sessions.save(&session)?;

        if let Some(user) = &session.user {
            info!("{} signed in", user.email);
            if user.role == Role::Admin {
                self.event_bus.emit(AdminSignedIn::new(user.email.clone()));
            }
        }

        Ok(session)
    }

    /// Tell the backend, then forget the session locally. A backend
    /// failure is logged; the local session is cleared regardless.
    pub async fn logout(&self) -> AppResult<()> {
        let session = self.sessions.load()?;

        if let Some(tokens) = &session.tokens {
            if let Err(e) = self.gateway.logout(&tokens.refresh.token).await {
                warn!("logout request failed, clearing session anyway: {}", e);
            }
        }

        self.sessions.clear()?;

        let email = session.user.map(|u| u.email);
        info!("signed out {}", email.as_deref().unwrap_or("(no session)"));
        self.event_bus.emit(AdminSignedOut::new(email));
        Ok(())
    }

    pub fn current_session(&self) -> AppResult<Session> {
        self.sessions.load()
    }

    pub fn guard(&self, require_admin: bool) -> AuthGuard {
        AuthGuard::new(Arc::clone(&self.sessions), require_admin)
    }
}

/// Protects a location. The session is read fresh on every check.
#[derive(Clone)]
pub struct AuthGuard {
    sessions: Arc<dyn SessionStore>,
    require_admin: bool,
}

impl AuthGuard {
    pub fn new(sessions: Arc<dyn SessionStore>, require_admin: bool) -> Self {
        Self {
            sessions,
            require_admin,
        }
    }

    pub fn check(&self, location: &str) -> AppResult<AccessDecision> {
        let session = self.sessions.load()?;
        let decision = evaluate_access(
            session.is_authenticated(),
            session.is_admin(),
            self.require_admin,
            location,
        );
        debug!("guard {} -> {:?}", location, decision);
        Ok(decision)
    }

    /// The session when access is granted, otherwise the matching error.
    pub fn authorize(&self, location: &str) -> AppResult<Session> {
        let session = self.sessions.load()?;
        match evaluate_access(
            session.is_authenticated(),
            session.is_admin(),
            self.require_admin,
            location,
        ) {
            AccessDecision::Granted => Ok(session),
            AccessDecision::AccessDenied => Err(AppError::AccessDenied),
            AccessDecision::RedirectToLogin { to, from } => Err(AppError::Unauthenticated {
                redirect_to: to,
                from,
            }),
        }
    }
}
