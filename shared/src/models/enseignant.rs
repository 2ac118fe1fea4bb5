//! Enseignant Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Entity, default_actif, null_as_empty};
use crate::types::Resource;

/// Teaching staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Enseignant {
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
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Le téléphone est obligatoire"))]
    pub telephone: String,
    #[serde(default)]
    pub matricule: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default = "default_actif")]
    pub actif: bool,
}

impl Default for Enseignant {
    fn default() -> Self {
        Self {
            id: None,
            nom: String::new(),
            prenom: String::new(),
            email: String::new(),
            telephone: String::new(),
            matricule: None,
            grade: None,
            actif: true,
        }
    }
}

impl Entity for Enseignant {
    const RESOURCE: Resource = Resource::Enseignants;

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
