//! Notification Channel
//!
//! Success/error messages for transient UI feedback (toast renderer).
//! Lives as long as the application context.

use tokio::sync::mpsc;

use shared::Notification;

use crate::events::EventHub;

#[derive(Debug, Default)]
pub struct NotificationChannel {
    hub: EventHub<Notification>,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.emit(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.emit(Notification::error(message));
    }

    pub fn emit(&self, notification: Notification) {
        if notification.is_error() {
            tracing::warn!(message = %notification.message, "notification");
        } else {
            tracing::info!(message = %notification.message, "notification");
        }
        self.hub.publish(notification);
    }

    /// Receive every message emitted from now on, in emission order
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<Notification> {
        self.hub.subscribe()
    }
}
