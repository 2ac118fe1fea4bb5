//! Utilisateurs Admin - list and form controllers for the utilisateurs API
//!
//! # Module layout
//!
//! ```text
//! utilisateurs-admin/src/
//! ├── context.rs     # AppContext: notifications, busy gate, stale bus, navigator
//! ├── feedback.rs    # Notification Channel
//! ├── loading.rs     # Busy Indicator
//! ├── navigation.rs  # Routing table and Navigator
//! ├── screens.rs     # Per-entity messages, columns, field binding
//! ├── list.rs        # List Controller
//! ├── form.rs        # Form Controller
//! ├── confirm.rs     # Confirmation prompt seam
//! ├── config.rs      # Environment configuration
//! └── logger.rs      # tracing setup
//! ```

pub mod config;
pub mod confirm;
pub mod context;
pub mod error;
pub mod events;
pub mod feedback;
pub mod form;
pub mod list;
pub mod loading;
pub mod logger;
pub mod navigation;
pub mod screens;

#[cfg(test)]
mod testing;

pub use config::AdminConfig;
pub use confirm::{AssumeYes, ConfirmPrompt, StdinPrompt};
pub use context::AppContext;
pub use error::{AdminError, AdminResult};
pub use events::EventHub;
pub use feedback::NotificationChannel;
pub use form::{FormController, FormMode, Redirect, SubmitOutcome};
pub use list::{DeleteOutcome, ListController, ListState, ListView};
pub use loading::{BusyGuard, BusyIndicator};
pub use logger::{init_logger, init_logger_with_file};
pub use navigation::{Navigator, Route};
pub use screens::{Screen, ScreenText};
