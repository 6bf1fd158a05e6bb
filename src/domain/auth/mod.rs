pub mod entity;
pub mod guard;
pub mod invariants;

pub use entity::{AuthResponse, AuthTokens, LoginCredentials, Role, Session, TokenGrant, User};
pub use guard::{evaluate_access, AccessDecision, LOGIN_PATH};
pub use invariants::validate_login_credentials;
