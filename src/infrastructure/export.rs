// src/infrastructure/export.rs
//
// CSV rendering for application exports.

use chrono::NaiveDate;

use crate::domain::Application;

pub const CSV_CONTENT_TYPE: &str = "text/csv";

const HEADER: [&str; 5] = ["Full Name", "Email", "Job Position", "Status", "Submitted At"];

pub fn render_applications_csv(applications: &[Application]) -> String {
    let mut out = HEADER.join(",");
    for application in applications {
        let submitted_at = application
            .submitted_at
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string();
        let row = [
            csv_field(&application.full_name),
            csv_field(&application.email),
            csv_field(&application.job_position),
            csv_field(application.status.as_str()),
            csv_field(&submitted_at),
        ];
        out.push('\n');
        out.push_str(&row.join(","));
    }
    out
}

/// `applications-2024-01-18.csv`
pub fn export_file_name(on: NaiveDate) -> String {
    format!("applications-{}.csv", on.format("%Y-%m-%d"))
}

/// Quote a field when it holds a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::fixtures::fixture_applications;

    #[test]
    fn test_renders_header_and_rows() {
        let fixture = fixture_applications();
        let csv = render_applications_csv(&fixture[..2]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Full Name,Email,Job Position,Status,Submitted At");
        assert_eq!(
            lines[1],
            "Alice Johnson,alice.johnson@email.com,Frontend Developer,new,2024-01-15T10:30:00.000Z"
        );
        assert_eq!(
            lines[2],
            "Bob Smith,bob.smith@email.com,Backend Developer,reviewed,2024-01-14T14:20:00.000Z"
        );
    }

    #[test]
    fn test_export_file_name() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
        assert_eq!(export_file_name(day), "applications-2024-01-18.csv");
    }

    #[test]
    fn test_quotes_fields_with_delimiters() {
        assert_eq!(csv_field("Smith, Jr."), "\"Smith, Jr.\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("plain"), "plain");
    }
}
