use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub is_email_verified: bool,
}

impl User {
    /// Name if known, otherwise the email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub token: String,
    pub expires: DateTime<Utc>,
}

impl TokenGrant {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: TokenGrant,
    pub refresh: TokenGrant,
}

/// Body of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub tokens: AuthTokens,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// The signed-in state kept between requests.
/// An empty session is signed out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub tokens: Option<AuthTokens>,
}

impl Session {
    pub fn from_response(response: AuthResponse) -> Self {
        Self {
            user: Some(response.user),
            tokens: Some(response.tokens),
        }
    }

    /// Signed in with an access token that has not expired.
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now())
    }

    pub fn is_authenticated_at(&self, now: DateTime<Utc>) -> bool {
        match (&self.user, &self.tokens) {
            (Some(_), Some(tokens)) => !tokens.access.is_expired_at(now),
            _ => false,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(&self.user, Some(user) if user.role == Role::Admin)
    }

    /// Bearer token for API calls, if the session still holds a valid one.
    pub fn access_token(&self) -> Option<&str> {
        if !self.is_authenticated() {
            return None;
        }
        self.tokens.as_ref().map(|t| t.access.token.as_str())
    }
}
