// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// - DTOs are what a page sends in and gets back
// - Simple, serializable structs
// - Conversion into domain types happens in the commands

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{Application, ApplicationPage, ApplicationStatus, BinaryPayload};
use crate::infrastructure::format_file_size;

// ============================================================================
// PUBLIC FORM
// ============================================================================

/// The public application form, with the resume given as a local path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationFormDto {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub linkedin_profile: Option<String>,
    #[serde(default)]
    pub portfolio_website: Option<String>,
    pub job_position: String,
    #[serde(default)]
    pub resume_path: Option<PathBuf>,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

/// Shown after a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessView {
    pub reference_number: Option<String>,
    pub applicant_name: String,
    pub message: String,
}

// ============================================================================
// AUTH
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub email: String,
    pub password: String,
    /// Location that sent the user to the login page
    #[serde(default)]
    pub from: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub redirect_to: String,
    pub display_name: String,
    pub message: String,
}

// ============================================================================
// ADMIN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: ApplicationStatus,
    pub count: usize,
}

/// One dashboard page plus how its rows split by status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    #[serde(flatten)]
    pub page: ApplicationPage,
    pub status_counts: Vec<StatusCount>,
}

impl From<ApplicationPage> for DashboardView {
    fn from(page: ApplicationPage) -> Self {
        let status_counts = ApplicationStatus::ALL
            .iter()
            .map(|&status| StatusCount {
                status,
                count: page
                    .applications
                    .iter()
                    .filter(|a| a.status == status)
                    .count(),
            })
            .collect();

        Self {
            page,
            status_counts,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantDetailView {
    pub application: Application,
    /// Statuses a reviewer can move the application to
    pub available_statuses: Vec<ApplicationStatus>,
}

impl From<Application> for ApplicantDetailView {
    fn from(application: Application) -> Self {
        let available_statuses = ApplicationStatus::ALL
            .into_iter()
            .filter(|s| *s != application.status)
            .collect();

        Self {
            application,
            available_statuses,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateDto {
    pub status: String,
    #[serde(default)]
    pub admin_notes: Option<String>,
}

/// A downloaded file after it was written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFileView {
    pub path: PathBuf,
    pub file_name: String,
    pub content_type: String,
    pub size: String,
}

impl SavedFileView {
    pub fn new(path: PathBuf, payload: &BinaryPayload) -> Self {
        Self {
            path,
            file_name: payload.file_name.clone(),
            content_type: payload.content_type.clone(),
            size: format_file_size(payload.data.len() as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::fixtures::fixture_applications;

    #[test]
    fn test_dashboard_counts_statuses_on_page() {
        let page = ApplicationPage::paginate(fixture_applications(), 1, 10);
        let view = DashboardView::from(page);

        let count = |status| {
            view.status_counts
                .iter()
                .find(|c| c.status == status)
                .map(|c| c.count)
        };
        assert_eq!(count(ApplicationStatus::New), Some(2));
        assert_eq!(count(ApplicationStatus::Reviewed), Some(1));
        assert_eq!(count(ApplicationStatus::Rejected), Some(1));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["total"], 5);
        assert_eq!(json["statusCounts"][0]["status"], "new");
    }

    #[test]
    fn test_detail_offers_other_statuses() {
        let application = fixture_applications().remove(1);
        let view = ApplicantDetailView::from(application);
        assert_eq!(view.available_statuses.len(), 3);
        assert!(!view.available_statuses.contains(&ApplicationStatus::Reviewed));
    }
}
