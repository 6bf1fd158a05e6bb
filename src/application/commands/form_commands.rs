// src/application/commands/form_commands.rs
//
// Public application form

use log::info;
use tokio_util::sync::CancellationToken;

use crate::application::{dto::*, state::AppState};
use crate::domain::{ApplicationForm, ResumeFile, SubmissionReceipt, UploadedResume, JOB_POSITIONS};
use crate::error::AppResult;
use crate::infrastructure::read_resume_file;

/// Positions offered in the form's dropdown
pub fn job_positions() -> Vec<&'static str> {
    JOB_POSITIONS.to_vec()
}

/// Read the resume, validate, upload, submit.
pub async fn submit_application_form(
    state: &AppState,
    dto: ApplicationFormDto,
    cancel: &CancellationToken,
) -> AppResult<SuccessView> {
    let resume = match &dto.resume_path {
        Some(path) => Some(read_resume_file(path).await?),
        None => None,
    };

    let form = into_form(dto, resume);
    let receipt = state.submissions.submit(&form, cancel).await?;
    info!("application from {} accepted", form.full_name);

    Ok(success_view(form, receipt))
}

/// Finish a partial submission using the resume the backend already
/// holds. Any `resume_path` in the form is ignored.
pub async fn resubmit_application_form(
    state: &AppState,
    dto: ApplicationFormDto,
    uploaded: UploadedResume,
    cancel: &CancellationToken,
) -> AppResult<SuccessView> {
    let form = into_form(dto, None);
    let receipt = state.submissions.resubmit(&form, uploaded, cancel).await?;
    info!("application from {} accepted on resubmission", form.full_name);

    Ok(success_view(form, receipt))
}

fn into_form(dto: ApplicationFormDto, resume: Option<ResumeFile>) -> ApplicationForm {
    ApplicationForm {
        full_name: dto.full_name,
        email: dto.email,
        phone_number: dto.phone_number,
        linkedin_profile: dto.linkedin_profile,
        portfolio_website: dto.portfolio_website,
        job_position: dto.job_position,
        resume,
        additional_notes: dto.additional_notes,
    }
}

fn success_view(form: ApplicationForm, receipt: SubmissionReceipt) -> SuccessView {
    SuccessView {
        reference_number: receipt.reference_number,
        applicant_name: form.full_name,
        message: receipt.message,
    }
}
