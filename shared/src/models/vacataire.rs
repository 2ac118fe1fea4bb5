//! Vacataire Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Entity, default_actif, null_as_empty};
use crate::types::Resource;
use crate::validation::PHONE_PATTERN;

/// Part-time instructor
///
/// `actif` only changes through the activate/deactivate endpoints; a
/// generic update sends it back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Vacataire {
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
    #[validate(regex(path = *PHONE_PATTERN, message = "Numéro de téléphone invalide"))]
    pub telephone: String,
    #[serde(default)]
    pub specialite: Option<String>,
    #[serde(default = "default_actif")]
    pub actif: bool,
}

impl Default for Vacataire {
    fn default() -> Self {
        Self {
            id: None,
            nom: String::new(),
            prenom: String::new(),
            email: String::new(),
            telephone: String::new(),
            specialite: None,
            actif: true,
        }
    }
}

impl Entity for Vacataire {
    const RESOURCE: Resource = Resource::Vacataires;

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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vacataire {
        Vacataire {
            nom: "Fall".into(),
            prenom: "Moussa".into(),
            email: "moussa.fall@uasz.sn".into(),
            telephone: "+221771234567".into(),
            specialite: Some("Mathématiques".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_vacataire() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_telephone_must_match_pattern() {
        let mut vac = sample();
        vac.telephone = "12-34".into();
        let errors = vac.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("telephone"));

        // empty is rejected too since it cannot match
        vac.telephone.clear();
        assert!(vac.validate().is_err());
    }

    #[test]
    fn test_inactive_flag_survives_round_trip() {
        let vac: Vacataire = serde_json::from_str(
            r#"{"id":2,"nom":"Ba","prenom":"Ali","email":"ali@uasz.sn","telephone":"771112233","specialite":null,"actif":false}"#,
        )
        .unwrap();
        assert!(!vac.actif);
        let back = serde_json::to_value(&vac).unwrap();
        assert_eq!(back["actif"], false);
        assert_eq!(back["id"], 2);
    }
}
