//! Etudiant Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Entity, null_as_empty};
use crate::types::Resource;

/// Student record
///
/// `actif` is optional: records created before the flag existed omit it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Etudiant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Le nom est obligatoire"))]
    pub nom: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Le prénom est obligatoire"))]
    pub prenom: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        length(min = 1, message = "L'email est obligatoire"),
        email(message = "L'email doit être valide")
    )]
    pub email: String,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub matricule: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actif: Option<bool>,
}

impl Entity for Etudiant {
    const RESOURCE: Resource = Resource::Etudiants;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn nom(&self) -> &str {
        &self.nom
    }

    fn prenom(&self) -> &str {
        &self.prenom
    }
}
