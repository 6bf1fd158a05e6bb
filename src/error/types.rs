// src/error/types.rs
use crate::domain::{DomainError, FileValidationError, UploadedResume, ValidationErrors};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    FileValidation(#[from] FileValidationError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication required, sign in at {redirect_to}")]
    Unauthenticated { redirect_to: String, from: String },

    #[error("Access denied. Administrator privileges required.")]
    AccessDenied,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request cancelled")]
    Cancelled,

    #[error("Resume {file} was uploaded but the application was not submitted: {source}", file = .resume.file_name)]
    PartialSubmission {
        resume: UploadedResume,
        #[source]
        source: Box<AppError>,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors caused by the network or the remote API rather than by input.
    pub fn is_transport(&self) -> bool {
        match self {
            AppError::Transport(_) | AppError::Api { .. } => true,
            AppError::PartialSubmission { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_submission_is_transport_when_source_is() {
        let err = AppError::PartialSubmission {
            resume: UploadedResume {
                url: "/files/cv.pdf".to_string(),
                file_name: "cv.pdf".to_string(),
            },
            source: Box::new(AppError::Api {
                status: 502,
                message: "Bad Gateway".to_string(),
            }),
        };
        assert!(err.is_transport());
        assert!(err.to_string().contains("cv.pdf"));
    }

    #[test]
    fn test_serializes_as_display_string() {
        let json = serde_json::to_string(&AppError::NotFound("Application".to_string())).unwrap();
        assert_eq!(json, "\"Application not found\"");
    }
}
