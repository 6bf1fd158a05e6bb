// src/domain/query.rs
//
// List, export and download shapes shared by both repository strategies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::application::{Application, ApplicationStatus};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    SubmittedAt,
    UpdatedAt,
    FullName,
    JobPosition,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Filters for the admin list. Every filter that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl ApplicationQuery {
    pub fn with_status(status: ApplicationStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Self::default()
        }
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT).max(1)
    }

    /// Search is a case-insensitive substring match on name, email or
    /// position; status and position must match exactly.
    pub fn matches(&self, application: &Application) -> bool {
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let hit = [
                &application.full_name,
                &application.email,
                &application.job_position,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(status) = self.status {
            if application.status != status {
                return false;
            }
        }

        if let Some(position) = self.job_position.as_deref().filter(|p| !p.is_empty()) {
            if application.job_position != position {
                return false;
            }
        }

        true
    }

    /// Ordering for `sort_by`, or `None` to keep store order.
    pub fn compare(&self, a: &Application, b: &Application) -> Option<Ordering> {
        let key = self.sort_by?;
        let ordering = match key {
            SortKey::SubmittedAt => a.submitted_at.cmp(&b.submitted_at),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortKey::FullName => a.full_name.to_lowercase().cmp(&b.full_name.to_lowercase()),
            SortKey::JobPosition => a.job_position.cmp(&b.job_position),
            SortKey::Status => a.status.cmp(&b.status),
        };
        Some(match self.sort_order.unwrap_or_default() {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        })
    }
}

/// One page of the admin list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPage {
    pub applications: Vec<Application>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl ApplicationPage {
    /// Slice an already filtered and sorted list.
    pub fn paginate(matching: Vec<Application>, page: u32, limit: u32) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let total = matching.len() as u64;
        let total_pages = total.div_ceil(u64::from(limit)) as u32;

        let start = (page as usize - 1).saturating_mul(limit as usize);
        let applications = matching
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .collect();

        Self {
            applications,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

/// Filters for the CSV export. Dates bound `submitted_at`, inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl ExportQuery {
    pub fn matches(&self, application: &Application) -> bool {
        self.status.map_or(true, |s| application.status == s)
            && self
                .job_position
                .as_deref()
                .map_or(true, |p| application.job_position == p)
            && self.start_date.map_or(true, |d| application.submitted_at >= d)
            && self.end_date.map_or(true, |d| application.submitted_at <= d)
    }
}

/// A file handed back for the caller to save.
#[derive(Clone, PartialEq, Eq)]
pub struct BinaryPayload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl std::fmt::Debug for BinaryPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryPayload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}
