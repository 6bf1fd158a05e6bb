// src/events/mod.rs
//
// Internal event system - public API

pub mod bus;
pub mod handlers;
pub mod types;

pub use bus::{EventBus, EventLogEntry};
pub use handlers::{
    register_notification_handlers, Notification, NotificationLevel, Notifications,
};
pub use types::{
    AdminSignedIn, AdminSignedOut, ApplicationDeleted, ApplicationStatusUpdated,
    ApplicationSubmitted, ApplicationsExported, DomainEvent, ResumeUploaded,
    SubmissionAbandoned,
};
