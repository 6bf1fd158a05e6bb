// src/application/error_handling.rs
//
// Error handling for commands
//
// - Maps internal errors to responses a page can show
// - Network failures become the operation's notification text
// - Logs what the user does not see

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{FieldError, UploadedResume};
use crate::error::AppError;

/// Standard error response for the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    /// Resume the backend already holds; send it back to finish the submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_resume: Option<UploadedResume>,
}

/// Error categories for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Bad input, reported per field (400)
    Validation,

    /// Resume rejected before upload (400)
    FileValidation,

    /// Resource not found (404)
    NotFound,

    /// Not signed in (401)
    Unauthenticated,

    /// Signed in without the needed role (403)
    AccessDenied,

    /// Network failure or non-success API status (502)
    Network,

    /// Resume stored, application not created
    PartialSubmission,

    Cancelled,

    /// Domain invariant violation (422)
    DomainError,

    Configuration,

    /// Local file system error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

/// What the user was doing, for the notification text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SubmitApplication,
    Login,
    Logout,
    LoadApplications,
    LoadApplication,
    UpdateStatus,
    DeleteApplication,
    DownloadResume,
    ExportApplications,
}

impl Operation {
    pub fn failure_notice(&self) -> &'static str {
        match self {
            Operation::SubmitApplication => "Failed to submit application. Please try again.",
            Operation::Login => "Invalid email or password",
            Operation::Logout => "Failed to log out. Please try again.",
            Operation::LoadApplications => "Failed to load applications. Please try again.",
            Operation::LoadApplication => "Failed to load application. Please try again.",
            Operation::UpdateStatus => "Failed to update application status. Please try again.",
            Operation::DeleteApplication => "Failed to delete application. Please try again.",
            Operation::DownloadResume => "Failed to download resume. Please try again.",
            Operation::ExportApplications => "Failed to export applications. Please try again.",
        }
    }
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details: None,
            field_errors: Vec::new(),
            redirect_to: None,
            stored_resume: None,
        }
    }

    fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Map an `AppError` raised while performing `operation`.
    pub fn from_app_error(error: AppError, operation: Operation) -> Self {
        match error {
            AppError::Validation(errors) => {
                let mut response =
                    Self::new(ErrorType::Validation, "Please correct the highlighted fields");
                response.field_errors = errors.errors;
                response
            }

            AppError::FileValidation(e) => {
                let mut response = Self::new(ErrorType::FileValidation, e.message.clone());
                response.field_errors = vec![FieldError::new("resume", e.message)];
                response
            }

            AppError::NotFound(resource) => {
                Self::new(ErrorType::NotFound, format!("{} not found", resource))
            }

            AppError::InvalidCredentials => {
                Self::new(ErrorType::Unauthenticated, "Invalid email or password")
            }

            AppError::Unauthenticated { redirect_to, from } => {
                let mut response = Self::new(ErrorType::Unauthenticated, "Please sign in to continue")
                    .with_details(format!("requested {}", from));
                response.redirect_to = Some(redirect_to);
                response
            }

            AppError::AccessDenied => Self::new(
                ErrorType::AccessDenied,
                "Access denied. Administrator privileges required.",
            ),

            // The login page shows the server's own message when it sent one.
            AppError::Api { status, message } if operation == Operation::Login => {
                warn!("login rejected with status {}: {}", status, message);
                Self::new(ErrorType::Network, message)
            }

            AppError::Api { status, message } => {
                warn!("API error {} during {:?}: {}", status, operation, message);
                Self::new(ErrorType::Network, operation.failure_notice())
                    .with_details(format!("{} ({})", message, status))
            }

            AppError::Transport(e) => {
                warn!("request failed during {:?}: {}", operation, e);
                Self::new(ErrorType::Network, operation.failure_notice())
                    .with_details(e.to_string())
            }

            AppError::PartialSubmission { resume, source } => {
                warn!("partial submission, resume stored at {}: {}", resume.url, source);
                let mut response =
                    Self::new(ErrorType::PartialSubmission, operation.failure_notice()).with_details(
                        format!(
                            "Your resume {} was uploaded; only the application needs to be sent again.",
                            resume.file_name
                        ),
                    );
                response.stored_resume = Some(resume);
                response
            }

            AppError::Cancelled => Self::new(ErrorType::Cancelled, "Request cancelled"),

            AppError::Domain(e) => {
                Self::new(ErrorType::DomainError, "Domain validation failed").with_details(e.to_string())
            }

            AppError::Config(e) => {
                error!("configuration error: {}", e);
                Self::new(ErrorType::Configuration, "Invalid configuration").with_details(e.to_string())
            }

            AppError::Io(e) => {
                error!("IO error: {:?}", e);
                Self::new(ErrorType::FileSystem, "File system operation failed")
                    .with_details(e.to_string())
            }

            AppError::Serialization(e) => {
                error!("serialization error: {:?}", e);
                Self::new(ErrorType::Internal, "Data serialization failed")
            }

            AppError::Other(message) => {
                error!("unexpected error: {}", message);
                Self::new(ErrorType::Internal, message)
            }
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorType::Validation, message)
    }
}

/// Helper trait to convert command results for the UI
pub trait ToErrorResponse<T> {
    fn to_error_response(self, operation: Operation) -> Result<T, ErrorResponse>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self, operation: Operation) -> Result<T, ErrorResponse> {
        self.map_err(|e| ErrorResponse::from_app_error(e, operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileValidationError, UploadedResume, ValidationErrors};

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(
            AppError::NotFound("Application".to_string()),
            Operation::LoadApplication,
        );
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Application not found");
    }

    #[test]
    fn test_validation_error_keeps_fields() {
        let mut errors = ValidationErrors::new();
        errors.push("email", "Please enter a valid email address");
        errors.push("jobPosition", "Please select a job position");

        let error = ErrorResponse::from_app_error(errors.into(), Operation::SubmitApplication);
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.field_errors.len(), 2);
        assert_eq!(error.field_errors[1].field, "jobPosition");
    }

    #[test]
    fn test_file_error_is_attached_to_resume_field() {
        let error = ErrorResponse::from_app_error(
            FileValidationError::size().into(),
            Operation::SubmitApplication,
        );
        assert_eq!(error.message, "File size must be less than 10MB");
        assert_eq!(error.field_errors[0].field, "resume");
    }

    #[test]
    fn test_transport_failure_uses_operation_notice() {
        let error = ErrorResponse::from_app_error(
            AppError::Api {
                status: 500,
                message: "Internal Server Error".to_string(),
            },
            Operation::SubmitApplication,
        );
        assert_eq!(error.error_type, ErrorType::Network);
        assert_eq!(error.message, "Failed to submit application. Please try again.");
    }

    #[test]
    fn test_login_shows_server_message() {
        let error = ErrorResponse::from_app_error(
            AppError::Api {
                status: 429,
                message: "Too many login attempts".to_string(),
            },
            Operation::Login,
        );
        assert_eq!(error.message, "Too many login attempts");
    }

    #[test]
    fn test_partial_submission_mentions_stored_resume() {
        let error = ErrorResponse::from_app_error(
            AppError::PartialSubmission {
                resume: UploadedResume {
                    url: "/files/cv.pdf".to_string(),
                    file_name: "cv.pdf".to_string(),
                },
                source: Box::new(AppError::Cancelled),
            },
            Operation::SubmitApplication,
        );
        assert_eq!(error.error_type, ErrorType::PartialSubmission);
        assert!(error.details.as_deref().unwrap().contains("cv.pdf"));

        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json["storedResume"],
            serde_json::json!({"url": "/files/cv.pdf", "fileName": "cv.pdf"})
        );
    }

    #[test]
    fn test_redirect_is_serialized() {
        let error = ErrorResponse::from_app_error(
            AppError::Unauthenticated {
                redirect_to: "/admin/login".to_string(),
                from: "/admin/dashboard".to_string(),
            },
            Operation::LoadApplications,
        );
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"redirectTo\":\"/admin/login\""));
        assert!(json.contains("\"errorType\":\"unauthenticated\""));
    }
}
