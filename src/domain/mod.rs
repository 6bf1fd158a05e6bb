// src/domain/mod.rs
//
// Domain Root - the single source of truth for the domain API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod application;
pub mod auth;
pub mod positions;
pub mod query;
pub mod resume;
pub mod validation;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Application Domain
pub use application::{
    validate_application, validate_application_form, Application, ApplicationForm,
    ApplicationStatus, CreateApplicationRequest, SubmissionReceipt,
    UpdateApplicationStatusRequest,
};

// Resume Domain
pub use resume::{
    validate_resume_file, FileValidationError, FileValidationErrorKind, ResumeFile,
    UploadedResume, ALLOWED_RESUME_TYPES, MAX_RESUME_SIZE,
};

// Auth Domain
pub use auth::{
    evaluate_access, validate_login_credentials, AccessDecision, AuthResponse, AuthTokens,
    LoginCredentials, Role, Session, TokenGrant, User, LOGIN_PATH,
};

// Queries & payloads
pub use query::{
    ApplicationPage, ApplicationQuery, BinaryPayload, ExportQuery, SortKey, SortOrder,
};

pub use positions::{is_listed_position, JOB_POSITIONS};
pub use validation::{FieldError, ValidationErrors};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid application status: {0}")]
    InvalidStatus(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
