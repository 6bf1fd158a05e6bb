use super::entity::LoginCredentials;
use crate::domain::validation::{is_valid_email, ValidationErrors};

const MIN_PASSWORD_LENGTH: usize = 6;

pub fn validate_login_credentials(credentials: &LoginCredentials) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !is_valid_email(&credentials.email) {
        errors.push("email", "Please enter a valid email address");
    }

    if credentials.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push("password", "Password must be at least 6 characters");
    }

    errors.into_result()
}
