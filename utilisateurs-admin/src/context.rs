//! Application context
//!
//! The services every controller needs, created once at startup and
//! handed to each controller as `Arc<AppContext>`.

use std::sync::Arc;
use std::time::Duration;

use shared::StaleSignal;

use crate::config::{AdminConfig, DEFAULT_REDIRECT_DELAY_MS};
use crate::events::EventHub;
use crate::feedback::NotificationChannel;
use crate::loading::BusyIndicator;
use crate::navigation::Navigator;

#[derive(Debug)]
pub struct AppContext {
    pub notifications: NotificationChannel,
    pub busy: BusyIndicator,
    /// Lists subscribe here to learn their data changed elsewhere
    pub stale: EventHub<StaleSignal>,
    pub navigator: Navigator,
    /// Wait before leaving a form whose record could not be loaded
    pub redirect_delay: Duration,
}

impl AppContext {
    pub fn new() -> Arc<Self> {
        Self::with_redirect_delay(Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS))
    }

    pub fn from_config(config: &AdminConfig) -> Arc<Self> {
        Self::with_redirect_delay(config.redirect_delay)
    }

    pub fn with_redirect_delay(redirect_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            notifications: NotificationChannel::new(),
            busy: BusyIndicator::new(),
            stale: EventHub::new(),
            navigator: Navigator::default(),
            redirect_delay,
        })
    }
}
