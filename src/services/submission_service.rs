// src/services/submission_service.rs
//
// The public form's two-step submission: store the resume, then create
// the application that references it.
//
// If the second step fails after the first succeeded, the caller gets
// `AppError::PartialSubmission` with the stored resume and can finish
// with `resubmit` without uploading again.

use std::future::Future;
use std::sync::Arc;

use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use crate::domain::{
    validate_application_form, ApplicationForm, SubmissionReceipt, UploadedResume,
    ValidationErrors,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, SubmissionAbandoned};
use crate::services::ApplicationsService;

pub struct SubmissionService {
    applications: Arc<ApplicationsService>,
    event_bus: Arc<EventBus>,
}

impl SubmissionService {
    pub fn new(applications: Arc<ApplicationsService>, event_bus: Arc<EventBus>) -> Self {
        Self {
            applications,
            event_bus,
        }
    }

    /// Validate, upload the resume, then create the application.
    pub async fn submit(
        &self,
        form: &ApplicationForm,
        cancel: &CancellationToken,
    ) -> AppResult<SubmissionReceipt> {
        validate_application_form(form)?;

        let resume = form.resume.as_ref().ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.push("resume", "Please upload your resume");
            AppError::Validation(errors)
        })?;

        let uploaded = until_cancelled(cancel, self.applications.upload_resume(resume)).await?;
        debug!("resume stored at {}", uploaded.url);

        self.create(form, uploaded, cancel).await
    }

    /// Finish a submission whose resume is already stored. The form's
    /// resume field is not required.
    pub async fn resubmit(
        &self,
        form: &ApplicationForm,
        uploaded: UploadedResume,
        cancel: &CancellationToken,
    ) -> AppResult<SubmissionReceipt> {
        if let Err(mut errors) = validate_application_form(form) {
            errors.errors.retain(|e| e.field != "resume");
            errors.into_result()?;
        }

        self.create(form, uploaded, cancel).await
    }

    async fn create(
        &self,
        form: &ApplicationForm,
        uploaded: UploadedResume,
        cancel: &CancellationToken,
    ) -> AppResult<SubmissionReceipt> {
        let request = form.to_request(&uploaded);

        match until_cancelled(cancel, self.applications.submit_application(&request)).await {
            Ok(receipt) => Ok(receipt),
            Err(source) => Err(self.abandon(uploaded, source)),
        }
    }

    fn abandon(&self, resume: UploadedResume, source: AppError) -> AppError {
        warn!(
            "resume {} stored but application not created: {}",
            resume.url, source
        );
        self.event_bus
            .emit(SubmissionAbandoned::new(resume.url.clone(), source.to_string()));

        AppError::PartialSubmission {
            resume,
            source: Box::new(source),
        }
    }
}

/// Run `step` unless the token fires first.
async fn until_cancelled<T, F>(cancel: &CancellationToken, step: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    if cancel.is_cancelled() {
        return Err(AppError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(AppError::Cancelled),
        result = step => result,
    }
}
