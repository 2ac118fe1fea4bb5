//! Shared types for the utilisateurs workspace
//!
//! Entity records exchanged with the REST API, the resource table,
//! field constraints and the UI-level messages passed between the
//! controllers and whatever renders them.

pub mod message;
pub mod models;
pub mod types;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use message::{Notification, NotificationLevel, StaleSignal};
pub use models::{Enseignant, Entity, Etudiant, Vacataire};
pub use types::{Resource, UnknownResource};
