// src/events/handlers/notification_handler.rs
//
// Turns domain events into the short notices a page shows after an action.
// Services never build these strings; they only emit facts.

use std::sync::{Arc, PoisonError, RwLock};

use log::info;
use serde::Serialize;

use crate::events::{
    AdminSignedIn, AdminSignedOut, ApplicationDeleted, ApplicationStatusUpdated,
    ApplicationSubmitted, ApplicationsExported, EventBus, SubmissionAbandoned,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }
}

/// Pending notices, oldest first, until a page takes them.
#[derive(Debug, Default)]
pub struct Notifications {
    pending: RwLock<Vec<Notification>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, notification: Notification) {
        info!("[NOTICE] {}", notification.message);
        self.pending
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }

    /// Take every pending notice.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.pending.write().unwrap_or_else(PoisonError::into_inner))
    }
}

// ============================================================================
// HANDLER REGISTRATION
// ============================================================================

pub fn register_notification_handlers(bus: &EventBus, notifications: Arc<Notifications>) {
    let sink = Arc::clone(&notifications);
    bus.subscribe::<ApplicationSubmitted, _>(move |event| {
        let message = match &event.reference_number {
            Some(reference) => format!("Application submitted successfully! Reference {}", reference),
            None => "Application submitted successfully!".to_string(),
        };
        sink.push(Notification::success(message));
    });

    let sink = Arc::clone(&notifications);
    bus.subscribe::<SubmissionAbandoned, _>(move |event| {
        sink.push(Notification::warning(format!(
            "Your resume was saved at {} but the application was not sent",
            event.resume_url
        )));
    });

    let sink = Arc::clone(&notifications);
    bus.subscribe::<ApplicationStatusUpdated, _>(move |event| {
        sink.push(Notification::success(format!(
            "Application {} marked as {}",
            event.application_id, event.status
        )));
    });

    let sink = Arc::clone(&notifications);
    bus.subscribe::<ApplicationDeleted, _>(move |event| {
        sink.push(Notification::success(format!(
            "Application {} deleted",
            event.application_id
        )));
    });

    let sink = Arc::clone(&notifications);
    bus.subscribe::<ApplicationsExported, _>(move |event| {
        sink.push(Notification::success(format!("Exported {}", event.file_name)));
    });

    let sink = Arc::clone(&notifications);
    bus.subscribe::<AdminSignedIn, _>(move |event| {
        sink.push(Notification::success(format!("Welcome back, {}!", event.email)));
    });

    let sink = notifications;
    bus.subscribe::<AdminSignedOut, _>(move |_| {
        sink.push(Notification::success("Logged out successfully"));
    });
}
