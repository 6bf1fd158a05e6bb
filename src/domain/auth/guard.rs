use serde::{Deserialize, Serialize};

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// Outcome of checking a protected location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessDecision {
    /// Render the protected content
    Granted,

    /// Signed in, but without the admin role the location needs
    AccessDenied,

    /// Not signed in; `from` is where to return after login
    RedirectToLogin { to: String, from: String },
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }
}

/// Decide access from the two session flags. Pure; callers read the flags
/// fresh for every evaluation.
pub fn evaluate_access(
    is_authenticated: bool,
    is_admin: bool,
    require_admin: bool,
    requested_location: &str,
) -> AccessDecision {
    if !is_authenticated {
        return AccessDecision::RedirectToLogin {
            to: LOGIN_PATH.to_string(),
            from: requested_location.to_string(),
        };
    }

    if require_admin && !is_admin {
        return AccessDecision::AccessDenied;
    }

    AccessDecision::Granted
}
