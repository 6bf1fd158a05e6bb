use serde::{Deserialize, Serialize};

use super::invariants::{validate_resume_file, FileValidationError};

/// A resume selected by the applicant, held in memory until upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ResumeFile {
    /// Original file name, including extension
    pub file_name: String,

    /// Declared MIME type
    pub mime_type: String,

    /// Raw file contents
    pub data: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn validate(&self) -> Result<(), FileValidationError> {
        validate_resume_file(&self.mime_type, self.size())
    }
}

// Contents are left out; resumes can be megabytes.
impl std::fmt::Debug for ResumeFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.size())
            .finish()
    }
}

/// Where the backend stored an uploaded resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedResume {
    pub url: String,
    pub file_name: String,
}
