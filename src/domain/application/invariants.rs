use super::entity::{Application, ApplicationForm};
use crate::domain::validation::{is_valid_email, is_valid_url, non_empty, ValidationErrors};
use crate::domain::{DomainError, DomainResult};

/// Checks everything the public form requires before anything is sent.
/// All violated fields are reported together.
pub fn validate_application_form(form: &ApplicationForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if form.full_name.chars().count() < 2 {
        errors.push("fullName", "Full name must be at least 2 characters");
    }

    if !is_valid_email(&form.email) {
        errors.push("email", "Please enter a valid email address");
    }

    if let Some(url) = non_empty(&form.linkedin_profile) {
        if !is_valid_url(url) {
            errors.push("linkedinProfile", "Please enter a valid URL");
        }
    }

    if let Some(url) = non_empty(&form.portfolio_website) {
        if !is_valid_url(url) {
            errors.push("portfolioWebsite", "Please enter a valid URL");
        }
    }

    if form.job_position.is_empty() {
        errors.push("jobPosition", "Please select a job position");
    }

    match &form.resume {
        None => errors.push("resume", "Please upload your resume"),
        Some(resume) => {
            if let Err(e) = resume.validate() {
                errors.push("resume", e.message);
            }
        }
    }

    errors.into_result()
}

/// Invariants of a stored record
pub fn validate_application(application: &Application) -> DomainResult<()> {
    if application.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Application id cannot be empty".to_string(),
        ));
    }

    if application.resume_url.is_empty() || application.resume_file_name.is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Application {} has no resume reference",
            application.id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resume::ResumeFile;

    fn valid_form() -> ApplicationForm {
        ApplicationForm {
            full_name: "Alice Johnson".to_string(),
            email: "alice.johnson@email.com".to_string(),
            phone_number: Some("+1-555-0123".to_string()),
            linkedin_profile: Some("https://linkedin.com/in/alice-johnson".to_string()),
            portfolio_website: Some(String::new()),
            job_position: "Frontend Developer".to_string(),
            resume: Some(ResumeFile::new("cv.pdf", "application/pdf", vec![0; 2048])),
            additional_notes: None,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_application_form(&valid_form()).is_ok());
    }

    #[test]
    fn test_phone_format_is_unconstrained() {
        let mut form = valid_form();
        form.phone_number = Some("call me maybe".to_string());
        assert!(validate_application_form(&form).is_ok());
    }

    #[test]
    fn test_reports_every_invalid_field() {
        let form = ApplicationForm {
            full_name: "A".to_string(),
            email: "not-an-email".to_string(),
            linkedin_profile: Some("linkedin/alice".to_string()),
            ..ApplicationForm::default()
        };

        let errors = validate_application_form(&form).unwrap_err();
        assert_eq!(
            errors.field("fullName").unwrap().message,
            "Full name must be at least 2 characters"
        );
        assert!(errors.field("email").is_some());
        assert!(errors.field("linkedinProfile").is_some());
        assert_eq!(errors.field("jobPosition").unwrap().message, "Please select a job position");
        assert_eq!(errors.field("resume").unwrap().message, "Please upload your resume");
        assert!(errors.field("portfolioWebsite").is_none());
    }

    #[test]
    fn test_resume_must_pass_file_validator() {
        let mut form = valid_form();
        form.resume = Some(ResumeFile::new("photo.png", "image/png", vec![1, 2, 3]));

        let errors = validate_application_form(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.field("resume").unwrap().message,
            "Please upload a PDF or Word document (.pdf, .doc, .docx)"
        );
    }

    #[test]
    fn test_two_character_name_is_enough() {
        let mut form = valid_form();
        form.full_name = "Bo".to_string();
        assert!(validate_application_form(&form).is_ok());
    }
}
