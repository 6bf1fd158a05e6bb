// tests/mock_mode_flow.rs
//
// Applicant submits, admin signs in and works through the dashboard,
// all against the in-memory strategy.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use resume_intake::application::{
    commands, ApplicationFormDto, ErrorType, LoginDto, Operation, StatusUpdateDto,
    ToErrorResponse,
};
use resume_intake::domain::{
    Application, ApplicationPage, ApplicationQuery, ApplicationStatus, BinaryPayload,
    CreateApplicationRequest, ExportQuery, ResumeFile, SubmissionReceipt,
    UpdateApplicationStatusRequest, UploadedResume,
};
use resume_intake::events::NotificationLevel;
use resume_intake::{
    AppConfig, AppError, AppResult, AppState, ApplicationRepository, DataMode,
    MemoryApplicationRepository, MemoryAuthGateway, MemorySessionStore,
};

struct Harness {
    state: AppState,
    dir: tempfile::TempDir,
}

fn harness() -> Harness {
    harness_with(Arc::new(MemoryApplicationRepository::new(Duration::ZERO)))
}

fn harness_with(repository: Arc<dyn ApplicationRepository>) -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        use_mock_data: true,
        mock_latency_ms: 0,
        download_dir: Some(dir.path().join("downloads")),
        ..AppConfig::default()
    };
    assert_eq!(config.data_mode(), DataMode::Mock);

    let state = AppState::new(
        config,
        repository,
        Arc::new(MemoryAuthGateway::new()),
        Arc::new(MemorySessionStore::new()),
    );
    Harness { state, dir }
}

/// In-memory store whose first `create` answers like a failing backend.
struct CreateFailsOnce {
    inner: MemoryApplicationRepository,
    failed: AtomicBool,
}

impl CreateFailsOnce {
    fn new() -> Self {
        Self {
            inner: MemoryApplicationRepository::new(Duration::ZERO),
            failed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl ApplicationRepository for CreateFailsOnce {
    fn mode(&self) -> DataMode {
        self.inner.mode()
    }

    async fn upload_resume(&self, file: &ResumeFile) -> AppResult<UploadedResume> {
        self.inner.upload_resume(file).await
    }

    async fn create(&self, request: &CreateApplicationRequest) -> AppResult<SubmissionReceipt> {
        if !self.failed.swap(true, Ordering::SeqCst) {
            return Err(AppError::Api {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        self.inner.create(request).await
    }

    async fn list(&self, query: &ApplicationQuery) -> AppResult<ApplicationPage> {
        self.inner.list(query).await
    }

    async fn get(&self, id: &str) -> AppResult<Option<Application>> {
        self.inner.get(id).await
    }

    async fn update_status(
        &self,
        id: &str,
        update: &UpdateApplicationStatusRequest,
    ) -> AppResult<Option<Application>> {
        self.inner.update_status(id, update).await
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        self.inner.delete(id).await
    }

    async fn download_resume(&self, id: &str) -> AppResult<Option<BinaryPayload>> {
        self.inner.download_resume(id).await
    }

    async fn export(&self, query: &ExportQuery) -> AppResult<BinaryPayload> {
        self.inner.export(query).await
    }
}

fn login(email: &str) -> LoginDto {
    LoginDto {
        email: email.to_string(),
        password: "password123".to_string(),
        from: None,
    }
}

fn form(resume_path: Option<std::path::PathBuf>) -> ApplicationFormDto {
    ApplicationFormDto {
        full_name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        linkedin_profile: Some(String::new()),
        job_position: "Backend Developer".to_string(),
        resume_path,
        ..ApplicationFormDto::default()
    }
}

#[tokio::test]
async fn test_applicant_submits_and_admin_reviews() {
    let Harness { state, dir } = harness();

    // Applicant side
    assert_eq!(commands::job_positions().len(), 12);

    let resume = dir.path().join("grace_hopper.pdf");
    std::fs::write(&resume, b"%PDF-1.7 resume").unwrap();

    let success = commands::submit_application_form(&state, form(Some(resume)), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(success.applicant_name, "Grace Hopper");
    assert_eq!(success.message, "Application submitted successfully!");
    assert!(success.reference_number.unwrap().starts_with("REF-"));

    // Dashboard is closed until an admin signs in
    let err = commands::list_applications(&state, ApplicationQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthenticated { .. }));

    let err = commands::admin_login(&state, login("user@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AccessDenied));

    let view = commands::admin_login(&state, login("admin@example.com"))
        .await
        .unwrap();
    assert_eq!(view.redirect_to, "/admin/dashboard");
    assert_eq!(view.display_name, "Jane Smith");

    // Dashboard
    let dashboard = commands::list_applications(&state, ApplicationQuery::default())
        .await
        .unwrap();
    assert_eq!(dashboard.page.total, 6);
    assert!(dashboard
        .page
        .applications
        .iter()
        .any(|a| a.full_name == "Grace Hopper" && a.resume_file_name == "grace_hopper.pdf"));

    let reviewed = commands::list_applications(
        &state,
        ApplicationQuery::with_status(ApplicationStatus::Reviewed),
    )
    .await
    .unwrap();
    let ids: Vec<&str> = reviewed.page.applications.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);

    // Detail page
    let before = commands::get_applicant_detail(&state, "2").await.unwrap();
    let updated = commands::update_application_status(
        &state,
        "2",
        StatusUpdateDto {
            status: "shortlisted".to_string(),
            admin_notes: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.status, ApplicationStatus::Shortlisted);
    assert_eq!(updated.admin_notes, before.application.admin_notes);
    assert!(updated.updated_at > before.application.updated_at);

    let err = commands::update_application_status(
        &state,
        "2",
        StatusUpdateDto {
            status: "hired".to_string(),
            admin_notes: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Domain(_)));

    let err = commands::get_applicant_detail(&state, "999").await.unwrap_err();
    assert!(err.is_not_found());

    // Files
    let saved = commands::download_resume(&state, "1").await.unwrap();
    assert_eq!(saved.file_name, "alice_johnson_resume.pdf");
    assert_eq!(
        std::fs::read(&saved.path).unwrap(),
        b"Mock PDF content for resume"
    );

    let export = commands::export_applications(
        &state,
        ExportQuery {
            status: Some(ApplicationStatus::New),
            ..ExportQuery::default()
        },
    )
    .await
    .unwrap();
    let csv = std::fs::read_to_string(&export.path).unwrap();
    assert!(csv.starts_with("Full Name,Email,Job Position,Status,Submitted At"));
    assert!(csv.contains("Grace Hopper,grace@example.com,Backend Developer,new,"));

    // Delete
    commands::delete_application(&state, "3").await.unwrap();
    assert!(commands::get_applicant_detail(&state, "3")
        .await
        .unwrap_err()
        .is_not_found());

    // Sign out closes the dashboard again
    commands::admin_logout(&state).await.unwrap();
    let err = commands::list_applications(&state, ApplicationQuery::default())
        .await
        .unwrap_err();
    match err {
        AppError::Unauthenticated { redirect_to, from } => {
            assert_eq!(redirect_to, "/admin/login");
            assert_eq!(from, "/admin/dashboard");
        }
        other => panic!("expected redirect, got {:?}", other),
    }

    assert!(state
        .event_bus
        .emitted_types()
        .contains(&"ApplicationStatusUpdated".to_string()));
}

#[tokio::test]
async fn test_invalid_submission_reports_every_field() {
    let Harness { state, dir } = harness();

    let resume = dir.path().join("photo.png");
    std::fs::write(&resume, b"\x89PNG").unwrap();

    let mut dto = form(Some(resume));
    dto.full_name = "G".to_string();
    dto.email = "grace@".to_string();
    dto.portfolio_website = Some("not a url".to_string());
    dto.job_position = String::new();

    let response = commands::submit_application_form(&state, dto, &CancellationToken::new())
        .await
        .to_error_response(Operation::SubmitApplication)
        .unwrap_err();

    assert_eq!(response.error_type, ErrorType::Validation);
    let fields: Vec<&str> = response.field_errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["fullName", "email", "portfolioWebsite", "jobPosition", "resume"]
    );
    let resume_error = response
        .field_errors
        .iter()
        .find(|e| e.field == "resume")
        .unwrap();
    assert_eq!(
        resume_error.message,
        "Please upload a PDF or Word document (.pdf, .doc, .docx)"
    );

    // Nothing was stored and nothing was uploaded
    assert!(state.event_bus.get_event_log().is_empty());
}

#[tokio::test]
async fn test_missing_resume_file_is_reported() {
    let Harness { state, dir } = harness();

    let err = commands::submit_application_form(
        &state,
        form(Some(dir.path().join("nowhere.pdf"))),
        &CancellationToken::new(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::FileValidation(_)));
}

#[tokio::test]
async fn test_cancelled_submission_does_not_upload() {
    let Harness { state, dir } = harness();

    let resume = dir.path().join("cv.pdf");
    std::fs::write(&resume, b"%PDF").unwrap();

    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = commands::submit_application_form(&state, form(Some(resume)), &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Cancelled));
    assert!(state.event_bus.get_event_log().is_empty());
}

#[tokio::test]
async fn test_partial_submission_is_finished_with_the_stored_resume() {
    let Harness { state, dir } = harness_with(Arc::new(CreateFailsOnce::new()));

    let resume = dir.path().join("ada_lovelace.pdf");
    std::fs::write(&resume, b"%PDF-1.7 resume").unwrap();

    let response = commands::submit_application_form(&state, form(Some(resume)), &CancellationToken::new())
        .await
        .to_error_response(Operation::SubmitApplication)
        .unwrap_err();

    assert_eq!(response.error_type, ErrorType::PartialSubmission);
    let stored = response.stored_resume.clone().unwrap();
    assert_eq!(stored.url, "/files/ada_lovelace.pdf");
    assert_eq!(stored.file_name, "ada_lovelace.pdf");

    let notices = state.notifications.drain();
    assert!(notices
        .iter()
        .any(|n| n.level == NotificationLevel::Warning && n.message.contains("/files/ada_lovelace.pdf")));

    // The resume path is gone; only what the error response carried is sent.
    let success = commands::resubmit_application_form(
        &state,
        form(None),
        stored,
        &CancellationToken::new(),
    )
    .await
    .unwrap();
    assert_eq!(success.applicant_name, "Grace Hopper");
    assert!(success.reference_number.unwrap().starts_with("REF-"));

    assert_eq!(
        state.event_bus.emitted_types(),
        vec![
            "ResumeUploaded".to_string(),
            "SubmissionAbandoned".to_string(),
            "ApplicationSubmitted".to_string(),
        ]
    );

    commands::admin_login(&state, login("admin@example.com"))
        .await
        .unwrap();
    let dashboard = commands::list_applications(&state, ApplicationQuery::with_search("grace"))
        .await
        .unwrap();
    assert_eq!(dashboard.page.total, 1);
    assert_eq!(
        dashboard.page.applications[0].resume_file_name,
        "ada_lovelace.pdf"
    );
}

#[tokio::test]
async fn test_successful_actions_leave_notices() {
    let Harness { state, .. } = harness();

    commands::admin_login(&state, login("admin@example.com"))
        .await
        .unwrap();
    commands::delete_application(&state, "4").await.unwrap();

    let messages: Vec<String> = state
        .notifications
        .drain()
        .into_iter()
        .map(|n| n.message)
        .collect();
    assert_eq!(
        messages,
        vec![
            "Welcome back, admin@example.com!".to_string(),
            "Application 4 deleted".to_string(),
        ]
    );
}
