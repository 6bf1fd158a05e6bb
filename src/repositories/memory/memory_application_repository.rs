// src/repositories/memory/memory_application_repository.rs
//
// Applications held in a process-local list, seeded from fixtures.
// Mutations persist for the lifetime of the repository.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use log::debug;
use tokio::sync::RwLock;

use super::fixtures::fixture_applications;
use crate::config::DataMode;
use crate::domain::{
    validate_application, Application, ApplicationPage, ApplicationQuery, BinaryPayload,
    CreateApplicationRequest, ExportQuery, ResumeFile, SubmissionReceipt,
    UpdateApplicationStatusRequest, UploadedResume,
};
use crate::error::AppResult;
use crate::infrastructure::{
    export_file_name, mime_type_for_file_name, render_applications_csv, CSV_CONTENT_TYPE,
};
use crate::repositories::ApplicationRepository;

pub const SUBMISSION_MESSAGE: &str = "Application submitted successfully!";

/// Body served for every resume download in local-data mode
pub const MOCK_RESUME_CONTENT: &str = "Mock PDF content for resume";

pub struct MemoryApplicationRepository {
    applications: RwLock<Vec<Application>>,
    submissions: AtomicU32,
    latency: Duration,
}

impl MemoryApplicationRepository {
    /// Seeded with the fixture records
    pub fn new(latency: Duration) -> Self {
        Self::with_applications(fixture_applications(), latency)
    }

    pub fn with_applications(applications: Vec<Application>, latency: Duration) -> Self {
        Self {
            applications: RwLock::new(applications),
            submissions: AtomicU32::new(0),
            latency,
        }
    }

    /// Current contents, in store order
    pub async fn snapshot(&self) -> Vec<Application> {
        self.applications.read().await.clone()
    }

    // Sleeps before any lock is taken.
    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// One past the largest numeric id in the store.
    fn next_id(applications: &[Application]) -> String {
        let max = applications
            .iter()
            .filter_map(|a| a.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    fn next_reference_number(&self) -> String {
        let sequence = self.submissions.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        format!("REF-{}-{:03}", Utc::now().year(), sequence)
    }
}

#[async_trait]
impl ApplicationRepository for MemoryApplicationRepository {
    fn mode(&self) -> DataMode {
        DataMode::Mock
    }

    async fn upload_resume(&self, file: &ResumeFile) -> AppResult<UploadedResume> {
        debug!("mock upload of {} ({} bytes)", file.file_name, file.size());
        self.simulate_latency().await;

        Ok(UploadedResume {
            url: format!("/files/{}", file.file_name),
            file_name: file.file_name.clone(),
        })
    }

    async fn create(&self, request: &CreateApplicationRequest) -> AppResult<SubmissionReceipt> {
        self.simulate_latency().await;

        let resume = request.resume().unwrap_or(UploadedResume {
            url: String::new(),
            file_name: String::new(),
        });

        let mut applications = self.applications.write().await;
        let application = Application::from_request(Self::next_id(&applications), request, resume);
        validate_application(&application)?;

        // Drawn under the write lock so sequence order follows id order.
        let reference_number = self.next_reference_number();
        let id = application.id.clone();
        applications.push(application);
        drop(applications);

        Ok(SubmissionReceipt {
            id,
            message: SUBMISSION_MESSAGE.to_string(),
            reference_number: Some(reference_number),
        })
    }

    async fn list(&self, query: &ApplicationQuery) -> AppResult<ApplicationPage> {
        self.simulate_latency().await;

        let mut matching: Vec<Application> = self
            .applications
            .read()
            .await
            .iter()
            .filter(|a| query.matches(a))
            .cloned()
            .collect();

        if query.sort_by.is_some() {
            matching.sort_by(|a, b| query.compare(a, b).unwrap_or(Ordering::Equal));
        }

        Ok(ApplicationPage::paginate(matching, query.page(), query.limit()))
    }

    async fn get(&self, id: &str) -> AppResult<Option<Application>> {
        self.simulate_latency().await;

        let applications = self.applications.read().await;
        Ok(applications.iter().find(|a| a.id == id).cloned())
    }

    async fn update_status(
        &self,
        id: &str,
        update: &UpdateApplicationStatusRequest,
    ) -> AppResult<Option<Application>> {
        self.simulate_latency().await;

        let mut applications = self.applications.write().await;
        Ok(applications.iter_mut().find(|a| a.id == id).map(|application| {
            application.apply_status_update(update);
            application.clone()
        }))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        self.simulate_latency().await;

        let mut applications = self.applications.write().await;
        let before = applications.len();
        applications.retain(|a| a.id != id);
        Ok(applications.len() < before)
    }

    async fn download_resume(&self, id: &str) -> AppResult<Option<BinaryPayload>> {
        self.simulate_latency().await;

        let applications = self.applications.read().await;
        Ok(applications.iter().find(|a| a.id == id).map(|application| BinaryPayload {
            file_name: application.resume_file_name.clone(),
            content_type: mime_type_for_file_name(&application.resume_file_name).to_string(),
            data: MOCK_RESUME_CONTENT.as_bytes().to_vec(),
        }))
    }

    async fn export(&self, query: &ExportQuery) -> AppResult<BinaryPayload> {
        self.simulate_latency().await;

        let applications = self.applications.read().await;
        let selected: Vec<Application> = applications
            .iter()
            .filter(|a| query.matches(a))
            .cloned()
            .collect();
        drop(applications);

        Ok(BinaryPayload {
            file_name: export_file_name(Utc::now().date_naive()),
            content_type: CSV_CONTENT_TYPE.to_string(),
            data: render_applications_csv(&selected).into_bytes(),
        })
    }
}
