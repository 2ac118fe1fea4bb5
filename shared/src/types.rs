//! Common types for the shared crate
//!
//! The resource table maps each entity kind to its REST segment and its
//! list view path (they share the same name).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// REST resource managed by the admin front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Enseignants,
    Etudiants,
    Vacataires,
}

impl Resource {
    pub const ALL: [Resource; 3] = [
        Resource::Enseignants,
        Resource::Etudiants,
        Resource::Vacataires,
    ];

    /// Path segment, both under the API root and in the view routes
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Enseignants => "enseignants",
            Resource::Etudiants => "etudiants",
            Resource::Vacataires => "vacataires",
        }
    }

    /// Human-readable plural label
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Enseignants => "Enseignants",
            Resource::Etudiants => "Étudiants",
            Resource::Vacataires => "Vacataires",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource: {0}")]
pub struct UnknownResource(pub String);

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enseignants" | "enseignant" => Ok(Resource::Enseignants),
            "etudiants" | "etudiant" => Ok(Resource::Etudiants),
            "vacataires" | "vacataire" => Ok(Resource::Vacataires),
            _ => Err(UnknownResource(s.to_string())),
        }
    }
}
