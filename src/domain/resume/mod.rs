pub mod entity;
pub mod invariants;

pub use entity::{ResumeFile, UploadedResume};
pub use invariants::{
    validate_resume_file, FileValidationError, FileValidationErrorKind, ALLOWED_RESUME_TYPES,
    MAX_RESUME_SIZE,
};
