//! Data models
//!
//! Records exchanged with the REST API. `id` is absent until the remote
//! store assigns it and is never rewritten afterwards.

pub mod enseignant;
pub mod etudiant;
pub mod vacataire;

// Re-exports
pub use enseignant::*;
pub use etudiant::*;
pub use vacataire::*;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::types::Resource;

/// A record type backed by one REST resource
pub trait Entity:
    Clone + fmt::Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Resource this record lives under
    const RESOURCE: Resource;

    fn id(&self) -> Option<i64>;

    /// Replace the identifier (cleared before create, forced before update)
    fn set_id(&mut self, id: Option<i64>);

    fn nom(&self) -> &str;

    fn prenom(&self) -> &str;

    fn display_name(&self) -> String {
        format!("{} {}", self.prenom(), self.nom())
    }
}

fn default_actif() -> bool {
    true
}

/// Legacy rows may carry `null` in text columns
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
