pub mod notification_handler;

pub use notification_handler::{
    register_notification_handlers, Notification, NotificationLevel, Notifications,
};
