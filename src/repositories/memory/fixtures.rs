// src/repositories/memory/fixtures.rs
//
// Seed records for local-data mode.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{Application, ApplicationStatus};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Five applications, one per status plus a second `new`.
pub fn fixture_applications() -> Vec<Application> {
    vec![
        Application {
            id: "1".to_string(),
            full_name: "Alice Johnson".to_string(),
            email: "alice.johnson@email.com".to_string(),
            phone_number: some("+1-555-0123"),
            linkedin_profile: some("https://linkedin.com/in/alice-johnson"),
            portfolio_website: some("https://alice-portfolio.com"),
            job_position: "Frontend Developer".to_string(),
            resume_url: "/files/alice_johnson_resume.pdf".to_string(),
            resume_file_name: "alice_johnson_resume.pdf".to_string(),
            status: ApplicationStatus::New,
            additional_notes: some("Passionate about React and modern web technologies."),
            admin_notes: None,
            submitted_at: at(2024, 1, 15, 10, 30),
            updated_at: at(2024, 1, 15, 10, 30),
        },
        Application {
            id: "2".to_string(),
            full_name: "Bob Smith".to_string(),
            email: "bob.smith@email.com".to_string(),
            phone_number: some("+1-555-0124"),
            linkedin_profile: None,
            portfolio_website: None,
            job_position: "Backend Developer".to_string(),
            resume_url: "/files/bob_smith_resume.pdf".to_string(),
            resume_file_name: "bob_smith_resume.pdf".to_string(),
            status: ApplicationStatus::Reviewed,
            additional_notes: some("5 years of experience with Node.js and Python."),
            admin_notes: some("Strong technical background. Schedule for interview."),
            submitted_at: at(2024, 1, 14, 14, 20),
            updated_at: at(2024, 1, 16, 9, 15),
        },
        Application {
            id: "3".to_string(),
            full_name: "Carol Davis".to_string(),
            email: "carol.davis@email.com".to_string(),
            phone_number: None,
            linkedin_profile: some("https://linkedin.com/in/carol-davis"),
            portfolio_website: None,
            job_position: "UI/UX Designer".to_string(),
            resume_url: "/files/carol_davis_resume.pdf".to_string(),
            resume_file_name: "carol_davis_resume.pdf".to_string(),
            status: ApplicationStatus::Shortlisted,
            additional_notes: some("Portfolio showcases excellent design skills."),
            admin_notes: some("Great portfolio. Moving to final interview round."),
            submitted_at: at(2024, 1, 13, 16, 45),
            updated_at: at(2024, 1, 17, 11, 30),
        },
        Application {
            id: "4".to_string(),
            full_name: "David Wilson".to_string(),
            email: "david.wilson@email.com".to_string(),
            phone_number: some("+1-555-0125"),
            linkedin_profile: None,
            portfolio_website: None,
            job_position: "Data Scientist".to_string(),
            resume_url: "/files/david_wilson_resume.pdf".to_string(),
            resume_file_name: "david_wilson_resume.pdf".to_string(),
            status: ApplicationStatus::Rejected,
            additional_notes: some("PhD in Statistics with machine learning focus."),
            admin_notes: some("Overqualified for this position."),
            submitted_at: at(2024, 1, 12, 9, 10),
            updated_at: at(2024, 1, 18, 13, 45),
        },
        Application {
            id: "5".to_string(),
            full_name: "Emma Brown".to_string(),
            email: "emma.brown@email.com".to_string(),
            phone_number: some("+1-555-0126"),
            linkedin_profile: None,
            portfolio_website: some("https://emmabrown.dev"),
            job_position: "Full Stack Developer".to_string(),
            resume_url: "/files/emma_brown_resume.pdf".to_string(),
            resume_file_name: "emma_brown_resume.pdf".to_string(),
            status: ApplicationStatus::New,
            additional_notes: some("Full stack developer with React and Django experience."),
            admin_notes: None,
            submitted_at: at(2024, 1, 16, 8, 20),
            updated_at: at(2024, 1, 16, 8, 20),
        },
    ]
}
