// src/services/applications_service.rs
//
// One entry point per applications use case, whichever repository
// strategy is behind it.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::DataMode;
use crate::domain::{
    Application, ApplicationPage, ApplicationQuery, BinaryPayload, CreateApplicationRequest,
    ExportQuery, ResumeFile, SubmissionReceipt, UpdateApplicationStatusRequest, UploadedResume,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    ApplicationDeleted, ApplicationStatusUpdated, ApplicationSubmitted, ApplicationsExported,
    EventBus, ResumeUploaded,
};
use crate::repositories::ApplicationRepository;

const APPLICATION: &str = "Application";

pub struct ApplicationsService {
    repo: Arc<dyn ApplicationRepository>,
    event_bus: Arc<EventBus>,
}

impl ApplicationsService {
    pub fn new(repo: Arc<dyn ApplicationRepository>, event_bus: Arc<EventBus>) -> Self {
        Self { repo, event_bus }
    }

    pub fn mode(&self) -> DataMode {
        self.repo.mode()
    }

    pub async fn submit_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> AppResult<SubmissionReceipt> {
        debug!("submit_application ({:?}) for {}", self.mode(), request.email);

        let receipt = self
            .repo
            .create(request)
            .await
            .inspect_err(|e| warn!("submit_application failed: {}", e))?;

        info!(
            "application {} submitted (reference {})",
            receipt.id,
            receipt.reference_number.as_deref().unwrap_or("-")
        );
        self.event_bus.emit(ApplicationSubmitted::new(
            receipt.id.clone(),
            receipt.reference_number.clone(),
        ));

        Ok(receipt)
    }

    /// Invalid files are rejected here and never reach the repository.
    pub async fn upload_resume(&self, file: &ResumeFile) -> AppResult<UploadedResume> {
        debug!("upload_resume ({:?}) {:?}", self.mode(), file);
        file.validate()?;

        let uploaded = self
            .repo
            .upload_resume(file)
            .await
            .inspect_err(|e| warn!("upload_resume failed: {}", e))?;

        self.event_bus.emit(ResumeUploaded::new(
            uploaded.file_name.clone(),
            uploaded.url.clone(),
        ));
        Ok(uploaded)
    }

    pub async fn get_applications(&self, query: &ApplicationQuery) -> AppResult<ApplicationPage> {
        debug!("get_applications ({:?}) {:?}", self.mode(), query);
        self.repo
            .list(query)
            .await
            .inspect_err(|e| warn!("get_applications failed: {}", e))
    }

    pub async fn get_application(&self, id: &str) -> AppResult<Application> {
        debug!("get_application ({:?}) {}", self.mode(), id);
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(APPLICATION.to_string()))
            .inspect_err(|e| warn!("get_application {} failed: {}", id, e))
    }

    pub async fn update_application_status(
        &self,
        id: &str,
        update: &UpdateApplicationStatusRequest,
    ) -> AppResult<Application> {
        debug!("update_application_status ({:?}) {} -> {}", self.mode(), id, update.status);

        let application = self
            .repo
            .update_status(id, update)
            .await?
            .ok_or_else(|| AppError::NotFound(APPLICATION.to_string()))
            .inspect_err(|e| warn!("update_application_status {} failed: {}", id, e))?;

        info!("application {} is now {}", application.id, application.status);
        self.event_bus.emit(ApplicationStatusUpdated::new(
            application.id.clone(),
            application.status,
        ));
        Ok(application)
    }

    pub async fn delete_application(&self, id: &str) -> AppResult<()> {
        debug!("delete_application ({:?}) {}", self.mode(), id);

        if !self.repo.delete(id).await? {
            warn!("delete_application {}: not found", id);
            return Err(AppError::NotFound(APPLICATION.to_string()));
        }

        info!("application {} deleted", id);
        self.event_bus.emit(ApplicationDeleted::new(id.to_string()));
        Ok(())
    }

    pub async fn download_resume(&self, id: &str) -> AppResult<BinaryPayload> {
        debug!("download_resume ({:?}) {}", self.mode(), id);
        self.repo
            .download_resume(id)
            .await?
            .ok_or_else(|| AppError::NotFound(APPLICATION.to_string()))
            .inspect_err(|e| warn!("download_resume {} failed: {}", id, e))
    }

    pub async fn export_applications(&self, query: &ExportQuery) -> AppResult<BinaryPayload> {
        debug!("export_applications ({:?}) {:?}", self.mode(), query);

        let payload = self
            .repo
            .export(query)
            .await
            .inspect_err(|e| warn!("export_applications failed: {}", e))?;

        self.event_bus.emit(ApplicationsExported::new(
            payload.file_name.clone(),
            payload.data.len(),
        ));
        Ok(payload)
    }
}
