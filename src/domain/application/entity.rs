use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resume::{ResumeFile, UploadedResume};
use crate::domain::validation::non_empty;
use crate::domain::DomainError;

/// One resume submission as reviewed by admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Store-assigned identifier
    pub id: String,

    pub full_name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_profile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_website: Option<String>,

    /// Position applied for
    pub job_position: String,

    /// Where the resume is stored
    pub resume_url: String,

    /// Resume file name as uploaded
    pub resume_file_name: String,

    pub status: ApplicationStatus,

    /// Notes supplied by the applicant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,

    /// Notes supplied by a reviewer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,

    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review status of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    New,
    Reviewed,
    Shortlisted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::New,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "new",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(ApplicationStatus::New),
            "reviewed" => Ok(ApplicationStatus::Reviewed),
            "shortlisted" => Ok(ApplicationStatus::Shortlisted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl Application {
    /// Build a freshly submitted record. Status starts at `new` and both
    /// timestamps are the submission time.
    pub fn from_request(id: String, request: &CreateApplicationRequest, resume: UploadedResume) -> Self {
        let now = Utc::now();
        Self {
            id,
            full_name: request.full_name.clone(),
            email: request.email.clone(),
            phone_number: request.phone_number.clone(),
            linkedin_profile: request.linkedin_profile.clone(),
            portfolio_website: request.portfolio_website.clone(),
            job_position: request.job_position.clone(),
            resume_url: resume.url,
            resume_file_name: resume.file_name,
            status: ApplicationStatus::New,
            additional_notes: request.additional_notes.clone(),
            admin_notes: None,
            submitted_at: now,
            updated_at: now,
        }
    }

    /// Merge a reviewer's decision into the record.
    ///
    /// Missing or empty notes keep the existing admin notes. `updated_at`
    /// always moves forward, even when the clock has not ticked.
    pub fn apply_status_update(&mut self, update: &UpdateApplicationStatusRequest) {
        self.status = update.status;
        if let Some(notes) = non_empty(&update.admin_notes) {
            self.admin_notes = Some(notes.to_string());
        }

        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::milliseconds(1)
        };
    }

    pub fn resume(&self) -> UploadedResume {
        UploadedResume {
            url: self.resume_url.clone(),
            file_name: self.resume_file_name.clone(),
        }
    }
}

/// What the applicant filled in on the public form.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub linkedin_profile: Option<String>,
    pub portfolio_website: Option<String>,
    pub job_position: String,
    pub resume: Option<ResumeFile>,
    pub additional_notes: Option<String>,
}

impl ApplicationForm {
    /// JSON body for the create call, once the resume has been stored.
    /// Empty optional fields are dropped.
    pub fn to_request(&self, resume: &UploadedResume) -> CreateApplicationRequest {
        let optional = |v: &Option<String>| non_empty(v).map(str::to_string);
        CreateApplicationRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone_number: optional(&self.phone_number),
            linkedin_profile: optional(&self.linkedin_profile),
            portfolio_website: optional(&self.portfolio_website),
            job_position: self.job_position.clone(),
            additional_notes: optional(&self.additional_notes),
            resume_url: Some(resume.url.clone()),
            resume_file_name: Some(resume.file_name.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_website: Option<String>,
    pub job_position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_file_name: Option<String>,
}

impl CreateApplicationRequest {
    /// The stored resume this request references, if both halves are set.
    pub fn resume(&self) -> Option<UploadedResume> {
        match (&self.resume_url, &self.resume_file_name) {
            (Some(url), Some(file_name)) => Some(UploadedResume {
                url: url.clone(),
                file_name: file_name.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationStatusRequest {
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

/// Returned by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}
