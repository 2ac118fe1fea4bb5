//! UI-level messages
//!
//! These travel between the controllers and the renderers subscribed to
//! them (toast/snackbar, list views). Nothing here is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Resource;

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient feedback message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NotificationLevel::Success => write!(f, "✔ {}", self.message),
            NotificationLevel::Error => write!(f, "✘ {}", self.message),
        }
    }
}

/// Signal that the list held for `resource` no longer reflects the
/// remote store and should be fetched again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaleSignal {
    pub resource: Resource,
}

impl StaleSignal {
    pub fn new(resource: Resource) -> Self {
        Self { resource }
    }
}
