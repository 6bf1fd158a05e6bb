// src/repositories/application_repository.rs
//
// Storage contract for applications and resumes.

use async_trait::async_trait;

use crate::config::DataMode;
use crate::domain::{
    Application, ApplicationPage, ApplicationQuery, BinaryPayload, CreateApplicationRequest,
    ExportQuery, ResumeFile, SubmissionReceipt, UpdateApplicationStatusRequest, UploadedResume,
};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Which strategy this is, for logging
    fn mode(&self) -> DataMode;

    async fn upload_resume(&self, file: &ResumeFile) -> AppResult<UploadedResume>;

    async fn create(&self, request: &CreateApplicationRequest) -> AppResult<SubmissionReceipt>;

    /// Filtered, sorted, paginated listing
    async fn list(&self, query: &ApplicationQuery) -> AppResult<ApplicationPage>;

    async fn get(&self, id: &str) -> AppResult<Option<Application>>;

    /// Returns the record after the update, `None` if the id is unknown.
    async fn update_status(
        &self,
        id: &str,
        update: &UpdateApplicationStatusRequest,
    ) -> AppResult<Option<Application>>;

    /// `false` when nothing was removed
    async fn delete(&self, id: &str) -> AppResult<bool>;

    async fn download_resume(&self, id: &str) -> AppResult<Option<BinaryPayload>>;

    async fn export(&self, query: &ExportQuery) -> AppResult<BinaryPayload>;
}
