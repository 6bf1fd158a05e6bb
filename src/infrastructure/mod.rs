// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Supports the domain without being part of it: file handling on the
// caller's machine and payload rendering. Replaceable.

pub mod downloads;
pub mod export;
pub mod file_utils;

pub use downloads::DownloadWorkspace;
pub use export::{export_file_name, render_applications_csv, CSV_CONTENT_TYPE};
pub use file_utils::{file_extension, format_file_size, mime_type_for_file_name, read_resume_file};
