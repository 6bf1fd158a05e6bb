pub mod entity;
pub mod invariants;

pub use entity::{
    Application, ApplicationForm, ApplicationStatus, CreateApplicationRequest,
    SubmissionReceipt, UpdateApplicationStatusRequest,
};
pub use invariants::{validate_application, validate_application_form};
