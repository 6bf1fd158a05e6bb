// src/lib.rs
// Resume Intake - job application intake and admin review
//
// Architecture:
// - Domain-centric: validation rules and record shapes live in `domain`
// - Strategy at the edge: in-memory or HTTP repositories, picked once
// - Event-driven: services publish facts on the event bus
// - Application layer: pages as commands, DTOs in and views out

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

// Applications
pub use domain::{
    validate_application_form, Application, ApplicationForm, ApplicationPage, ApplicationQuery,
    ApplicationStatus, CreateApplicationRequest, ExportQuery, SubmissionReceipt,
    UpdateApplicationStatusRequest, ValidationErrors,
};

// Resumes
pub use domain::{
    validate_resume_file, FileValidationError, FileValidationErrorKind, ResumeFile, UploadedResume,
};

// Auth
pub use domain::{
    evaluate_access, validate_login_credentials, AccessDecision, LoginCredentials, Session,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::{AppConfig, DataMode};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{DomainEvent, EventBus, EventLogEntry, Notification, Notifications};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    ApplicationRepository,
    AuthGateway,
    FileSessionStore,
    HttpApplicationRepository,
    HttpAuthGateway,
    MemoryApplicationRepository,
    MemoryAuthGateway,
    MemorySessionStore,
    SessionStore,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{ApplicationsService, AuthGuard, AuthService, SubmissionService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;

pub use infrastructure::format_file_size;
pub use integrations::ApiClient;
