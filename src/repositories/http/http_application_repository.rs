// src/repositories/http/http_application_repository.rs
//
// Applications stored behind the REST API.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};

use super::found;
use crate::config::DataMode;
use crate::domain::{
    Application, ApplicationPage, ApplicationQuery, BinaryPayload, CreateApplicationRequest,
    ExportQuery, ResumeFile, SubmissionReceipt, UpdateApplicationStatusRequest, UploadedResume,
};
use crate::error::AppResult;
use crate::infrastructure::{export_file_name, CSV_CONTENT_TYPE};
use crate::integrations::ApiClient;
use crate::repositories::ApplicationRepository;

const APPLICATIONS: &str = "applications";
const ADMIN: &str = "admin";

/// Multipart field carrying the resume
pub const RESUME_FIELD: &str = "resume";

pub struct HttpApplicationRepository {
    client: Arc<ApiClient>,
}

impl HttpApplicationRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ApplicationRepository for HttpApplicationRepository {
    fn mode(&self) -> DataMode {
        DataMode::Remote
    }

    async fn upload_resume(&self, file: &ResumeFile) -> AppResult<UploadedResume> {
        let part = Part::bytes(file.data.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part(RESUME_FIELD, part);

        self.client
            .post_multipart(&[APPLICATIONS, "upload-resume"], form, "Upload endpoint")
            .await
    }

    async fn create(&self, request: &CreateApplicationRequest) -> AppResult<SubmissionReceipt> {
        self.client
            .post_json(&[APPLICATIONS], request, "Applications endpoint")
            .await
    }

    async fn list(&self, query: &ApplicationQuery) -> AppResult<ApplicationPage> {
        self.client
            .get_json_with_query(&[ADMIN, APPLICATIONS], query, "Applications endpoint")
            .await
    }

    async fn get(&self, id: &str) -> AppResult<Option<Application>> {
        found(
            self.client
                .get_json(&[ADMIN, APPLICATIONS, id], "Application")
                .await,
        )
    }

    async fn update_status(
        &self,
        id: &str,
        update: &UpdateApplicationStatusRequest,
    ) -> AppResult<Option<Application>> {
        found(
            self.client
                .patch_json(&[ADMIN, APPLICATIONS, id, "status"], update, "Application")
                .await,
        )
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let removed = found(
            self.client
                .delete(&[ADMIN, APPLICATIONS, id], "Application")
                .await,
        )?;
        Ok(removed.is_some())
    }

    async fn download_resume(&self, id: &str) -> AppResult<Option<BinaryPayload>> {
        let response = found(
            self.client
                .get_bytes::<()>(&[ADMIN, APPLICATIONS, id, "resume"], None, "Resume")
                .await,
        )?;

        Ok(response.map(|body| BinaryPayload {
            file_name: body.file_name.unwrap_or_else(|| format!("resume-{}", id)),
            content_type: body
                .content_type
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            data: body.data,
        }))
    }

    async fn export(&self, query: &ExportQuery) -> AppResult<BinaryPayload> {
        let body = self
            .client
            .get_bytes(&[ADMIN, APPLICATIONS, "export"], Some(query), "Export endpoint")
            .await?;

        Ok(BinaryPayload {
            file_name: body
                .file_name
                .unwrap_or_else(|| export_file_name(Utc::now().date_naive())),
            content_type: body
                .content_type
                .unwrap_or_else(|| CSV_CONTENT_TYPE.to_string()),
            data: body.data,
        })
    }
}
