// src/infrastructure/file_utils.rs

use std::path::Path;

use crate::domain::{FileValidationError, ResumeFile};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size with at most two decimals and trailing zeros
/// dropped: 0 -> "0 Bytes", 1536 -> "1.5 KB". Anything past GB stays in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    while unit < SIZE_UNITS.len() - 1 && bytes >= 1024u64.pow(unit as u32 + 1) {
        unit += 1;
    }

    let value = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Text after the last dot; empty when there is none or the name is a
/// dotfile such as `.profile`.
pub fn file_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[idx + 1..],
        _ => "",
    }
}

pub fn mime_type_for_file_name(file_name: &str) -> &'static str {
    match file_extension(file_name).to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "csv" => "text/csv",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Load a resume from disk, declaring its MIME type from the extension.
/// The result is not validated; run the file validator on it.
pub async fn read_resume_file(path: &Path) -> Result<ResumeFile, FileValidationError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| FileValidationError::unknown(format!("Not a file: {}", path.display())))?
        .to_string();

    let data = tokio::fs::read(path).await.map_err(|e| {
        FileValidationError::unknown(format!("Could not read {}: {}", path.display(), e))
    })?;

    let mime_type = mime_type_for_file_name(&file_name);
    Ok(ResumeFile::new(file_name, mime_type, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FileValidationErrorKind;

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(10_485_760), "10 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
        assert_eq!(format_file_size(2 * 1_099_511_627_776), "2048 GB");
    }

    #[test]
    fn test_format_file_size_rounds_to_two_decimals() {
        // 1234567 / 1048576 = 1.1773...
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("resume.pdf"), "pdf");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("README"), "");
        assert_eq!(file_extension(".profile"), "");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn test_mime_type_for_file_name() {
        assert_eq!(mime_type_for_file_name("cv.PDF"), "application/pdf");
        assert_eq!(mime_type_for_file_name("cv.doc"), "application/msword");
        assert_eq!(
            mime_type_for_file_name("cv.docx"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(mime_type_for_file_name("cv.png"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_read_resume_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jane_doe.docx");
        std::fs::write(&path, b"docx bytes").unwrap();

        let resume = read_resume_file(&path).await.unwrap();
        assert_eq!(resume.file_name, "jane_doe.docx");
        assert_eq!(resume.size(), 10);
        assert!(resume.validate().is_ok());
    }

    #[tokio::test]
    async fn test_missing_file_is_unknown_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_resume_file(&dir.path().join("missing.pdf"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, FileValidationErrorKind::Unknown);
    }
}
