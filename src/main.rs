// src/main.rs
//
// Command-line front end. Each subcommand is one page action; results are
// printed as JSON on stdout, failures as an error response on stderr.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use resume_intake::application::{
    commands, ApplicationFormDto, ErrorResponse, LoginDto, Operation, StatusUpdateDto,
    ToErrorResponse,
};
use resume_intake::domain::{
    ApplicationQuery, ApplicationStatus, ExportQuery, SortKey, SortOrder, UploadedResume,
};
use resume_intake::{AppConfig, AppResult, AppState};

#[derive(Parser)]
#[command(name = "resume-intake", about = "job application intake and admin review")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit an application with a resume file
    Apply {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
        #[arg(long)]
        portfolio: Option<String>,
        #[arg(long)]
        position: String,
        #[arg(long)]
        resume: Option<PathBuf>,
        /// Finish an earlier attempt whose resume was already stored
        #[arg(long, requires = "resume_file_name", conflicts_with = "resume")]
        resume_url: Option<String>,
        #[arg(long, requires = "resume_url")]
        resume_file_name: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List the positions applicants can choose from
    Positions,
    /// Sign in as administrator
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Location to return to after signing in
        #[arg(long)]
        from: Option<String>,
    },
    Logout,
    /// Dashboard listing
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_parser = parse_status)]
        status: Option<ApplicationStatus>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long, value_enum)]
        sort_by: Option<SortArg>,
        #[arg(long, value_enum)]
        sort_order: Option<OrderArg>,
    },
    /// Applicant detail
    Show { id: String },
    /// Change an application's review status
    Status {
        id: String,
        status: String,
        #[arg(long)]
        notes: Option<String>,
    },
    Delete { id: String },
    /// Save an applicant's resume into the download directory
    Download { id: String },
    /// Save a CSV export into the download directory
    Export {
        #[arg(long, value_parser = parse_status)]
        status: Option<ApplicationStatus>,
        #[arg(long)]
        position: Option<String>,
        /// First submission day, YYYY-MM-DD
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last submission day, YYYY-MM-DD
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    SubmittedAt,
    UpdatedAt,
    FullName,
    JobPosition,
    Status,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::SubmittedAt => SortKey::SubmittedAt,
            SortArg::UpdatedAt => SortKey::UpdatedAt,
            SortArg::FullName => SortKey::FullName,
            SortArg::JobPosition => SortKey::JobPosition,
            SortArg::Status => SortKey::Status,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

fn parse_status(value: &str) -> Result<ApplicationStatus, String> {
    value.parse().map_err(|e| format!("{}", e))
}

fn start_of(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn end_of(day: NaiveDate) -> DateTime<Utc> {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    day.and_time(last).and_utc()
}

fn render<T: Serialize>(result: AppResult<T>, operation: Operation) -> Result<Value, ErrorResponse> {
    result
        .and_then(|value| Ok(serde_json::to_value(value)?))
        .to_error_response(operation)
}

async fn run(state: &AppState, command: Command) -> Result<Value, ErrorResponse> {
    match command {
        Command::Apply {
            full_name,
            email,
            phone,
            linkedin,
            portfolio,
            position,
            resume,
            resume_url,
            resume_file_name,
            notes,
        } => {
            let cancel = CancellationToken::new();
            let trigger = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    trigger.cancel();
                }
            });

            let dto = ApplicationFormDto {
                full_name,
                email,
                phone_number: phone,
                linkedin_profile: linkedin,
                portfolio_website: portfolio,
                job_position: position,
                resume_path: resume,
                additional_notes: notes,
            };
            let result = match (resume_url, resume_file_name) {
                (Some(url), Some(file_name)) => {
                    let stored = UploadedResume { url, file_name };
                    commands::resubmit_application_form(state, dto, stored, &cancel).await
                }
                _ => commands::submit_application_form(state, dto, &cancel).await,
            };
            render(result, Operation::SubmitApplication)
        }

        Command::Positions => render(Ok(commands::job_positions()), Operation::LoadApplications),

        Command::Login {
            email,
            password,
            from,
        } => render(
            commands::admin_login(state, LoginDto { email, password, from }).await,
            Operation::Login,
        ),

        Command::Logout => render(commands::admin_logout(state).await, Operation::Logout),

        Command::List {
            page,
            limit,
            search,
            status,
            position,
            sort_by,
            sort_order,
        } => {
            let query = ApplicationQuery {
                page,
                limit,
                search,
                status,
                job_position: position,
                sort_by: sort_by.map(SortKey::from),
                sort_order: sort_order.map(SortOrder::from),
            };
            render(
                commands::list_applications(state, query).await,
                Operation::LoadApplications,
            )
        }

        Command::Show { id } => render(
            commands::get_applicant_detail(state, &id).await,
            Operation::LoadApplication,
        ),

        Command::Status { id, status, notes } => render(
            commands::update_application_status(
                state,
                &id,
                StatusUpdateDto {
                    status,
                    admin_notes: notes,
                },
            )
            .await,
            Operation::UpdateStatus,
        ),

        Command::Delete { id } => render(
            commands::delete_application(state, &id).await,
            Operation::DeleteApplication,
        ),

        Command::Download { id } => render(
            commands::download_resume(state, &id).await,
            Operation::DownloadResume,
        ),

        Command::Export {
            status,
            position,
            from,
            to,
        } => {
            if let (Some(from), Some(to)) = (from, to) {
                if from > to {
                    return Err(ErrorResponse::validation(
                        "The start date must not be after the end date",
                    ));
                }
            }
            let query = ExportQuery {
                status,
                job_position: position,
                start_date: from.map(start_of),
                end_date: to.map(end_of),
            };
            render(
                commands::export_applications(state, query).await,
                Operation::ExportApplications,
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("failed to read INTAKE_* configuration")?;
    let state = AppState::from_config(config).context("failed to initialise services")?;

    let outcome = run(&state, cli.command).await;
    for notice in state.notifications.drain() {
        eprintln!("{:?}: {}", notice.level, notice.message);
    }

    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(response) => {
            eprintln!("{}", serde_json::to_string_pretty(&response)?);
            std::process::exit(1);
        }
    }
}
