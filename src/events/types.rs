// src/events/types.rs
//
// Facts the intake flow publishes once they have happened.
// Events are immutable and carry only what a subscriber needs to react.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ApplicationStatus;

/// Implemented by every event on the bus
pub trait DomainEvent: std::fmt::Debug + Clone {
    fn event_id(&self) -> Uuid;
    fn occurred_at(&self) -> DateTime<Utc>;
    fn event_type(&self) -> &'static str;
}

macro_rules! domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($name) }
        }
    };
}

// ============================================================================
// SUBMISSION EVENTS
// ============================================================================

/// A resume reached storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeUploaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub file_name: String,
    pub url: String,
}

impl ResumeUploaded {
    pub fn new(file_name: String, url: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            file_name,
            url,
        }
    }
}

domain_event!(ResumeUploaded);

/// An application record was created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSubmitted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub application_id: String,
    pub reference_number: Option<String>,
}

impl ApplicationSubmitted {
    pub fn new(application_id: String, reference_number: Option<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            application_id,
            reference_number,
        }
    }
}

domain_event!(ApplicationSubmitted);

/// The resume was stored but the application itself never was
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionAbandoned {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub resume_url: String,
    pub reason: String,
}

impl SubmissionAbandoned {
    pub fn new(resume_url: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            resume_url,
            reason,
        }
    }
}

domain_event!(SubmissionAbandoned);

// ============================================================================
// REVIEW EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationStatusUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub application_id: String,
    pub status: ApplicationStatus,
}

impl ApplicationStatusUpdated {
    pub fn new(application_id: String, status: ApplicationStatus) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            application_id,
            status,
        }
    }
}

domain_event!(ApplicationStatusUpdated);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub application_id: String,
}

impl ApplicationDeleted {
    pub fn new(application_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            application_id,
        }
    }
}

domain_event!(ApplicationDeleted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationsExported {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub file_name: String,
    pub bytes: usize,
}

impl ApplicationsExported {
    pub fn new(file_name: String, bytes: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            file_name,
            bytes,
        }
    }
}

domain_event!(ApplicationsExported);

// ============================================================================
// SESSION EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSignedIn {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub email: String,
}

impl AdminSignedIn {
    pub fn new(email: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            email,
        }
    }
}

domain_event!(AdminSignedIn);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSignedOut {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub email: Option<String>,
}

impl AdminSignedOut {
    pub fn new(email: Option<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            email,
        }
    }
}

domain_event!(AdminSignedOut);
