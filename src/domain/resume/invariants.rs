use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MIME types accepted for a resume: PDF, legacy Word, Office Open XML Word.
pub const ALLOWED_RESUME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// 10 MiB
pub const MAX_RESUME_SIZE: u64 = 10 * 1024 * 1024;

const FORMAT_MESSAGE: &str = "Please upload a PDF or Word document (.pdf, .doc, .docx)";
const SIZE_MESSAGE: &str = "File size must be less than 10MB";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileValidationErrorKind {
    Size,
    Format,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct FileValidationError {
    #[serde(rename = "type")]
    pub kind: FileValidationErrorKind,
    pub message: String,
}

impl FileValidationError {
    pub fn format() -> Self {
        Self {
            kind: FileValidationErrorKind::Format,
            message: FORMAT_MESSAGE.to_string(),
        }
    }

    pub fn size() -> Self {
        Self {
            kind: FileValidationErrorKind::Size,
            message: SIZE_MESSAGE.to_string(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            kind: FileValidationErrorKind::Unknown,
            message: message.into(),
        }
    }
}

/// Checks a resume's declared MIME type, then its size.
pub fn validate_resume_file(mime_type: &str, size: u64) -> Result<(), FileValidationError> {
    if !ALLOWED_RESUME_TYPES.contains(&mime_type) {
        return Err(FileValidationError::format());
    }

    if size > MAX_RESUME_SIZE {
        return Err(FileValidationError::size());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_allowed_type_at_limit() {
        for mime in ALLOWED_RESUME_TYPES {
            assert!(validate_resume_file(mime, 0).is_ok());
            assert!(validate_resume_file(mime, MAX_RESUME_SIZE).is_ok());
        }
    }

    #[test]
    fn test_rejects_one_byte_over_limit() {
        let err = validate_resume_file("application/pdf", 10_485_761).unwrap_err();
        assert_eq!(err.kind, FileValidationErrorKind::Size);
        assert_eq!(err.message, "File size must be less than 10MB");
    }

    #[test]
    fn test_rejects_other_types() {
        for mime in ["image/png", "text/plain", "", "application/PDF", "application/zip"] {
            let err = validate_resume_file(mime, 1024).unwrap_err();
            assert_eq!(err.kind, FileValidationErrorKind::Format);
        }
    }

    #[test]
    fn test_format_is_checked_before_size() {
        let err = validate_resume_file("image/png", MAX_RESUME_SIZE * 2).unwrap_err();
        assert_eq!(err.kind, FileValidationErrorKind::Format);
    }

    #[test]
    fn test_kind_serializes_as_type_tag() {
        let json = serde_json::to_value(FileValidationError::size()).unwrap();
        assert_eq!(json["type"], "size");
    }
}
