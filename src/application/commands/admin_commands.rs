// src/application/commands/admin_commands.rs
//
// Admin dashboard and applicant detail pages. Every command checks the
// admin guard before touching data.

use log::info;

use crate::application::{dto::*, state::AppState};
use crate::domain::{
    Application, ApplicationQuery, ApplicationStatus, ExportQuery, UpdateApplicationStatusRequest,
};
use crate::error::AppResult;

const DASHBOARD: &str = "/admin/dashboard";

fn applicant_location(id: &str) -> String {
    format!("/admin/applicants/{}", id)
}

pub async fn list_applications(state: &AppState, query: ApplicationQuery) -> AppResult<DashboardView> {
    state.authorize(DASHBOARD)?;

    let page = state.applications.get_applications(&query).await?;
    Ok(DashboardView::from(page))
}

pub async fn get_applicant_detail(state: &AppState, id: &str) -> AppResult<ApplicantDetailView> {
    state.authorize(&applicant_location(id))?;

    let application = state.applications.get_application(id).await?;
    Ok(ApplicantDetailView::from(application))
}

pub async fn update_application_status(
    state: &AppState,
    id: &str,
    dto: StatusUpdateDto,
) -> AppResult<Application> {
    state.authorize(&applicant_location(id))?;

    let update = UpdateApplicationStatusRequest {
        status: dto.status.parse::<ApplicationStatus>()?,
        admin_notes: dto.admin_notes,
    };
    state.applications.update_application_status(id, &update).await
}

pub async fn delete_application(state: &AppState, id: &str) -> AppResult<()> {
    state.authorize(&applicant_location(id))?;
    state.applications.delete_application(id).await
}

/// Fetch the resume and save it into the download directory.
pub async fn download_resume(state: &AppState, id: &str) -> AppResult<SavedFileView> {
    state.authorize(&applicant_location(id))?;

    let payload = state.applications.download_resume(id).await?;
    let path = state.downloads.save(&payload).await?;
    info!("resume for {} saved to {:?}", id, path);

    Ok(SavedFileView::new(path, &payload))
}

pub async fn export_applications(state: &AppState, query: ExportQuery) -> AppResult<SavedFileView> {
    state.authorize(DASHBOARD)?;

    let payload = state.applications.export_applications(&query).await?;
    let path = state.downloads.save(&payload).await?;
    info!("export saved to {:?}", path);

    Ok(SavedFileView::new(path, &payload))
}
