//! Per-entity screen profiles
//!
//! What differs between the enseignant, etudiant and vacataire screens:
//! messages, columns, field binding, and the two vacataire-only
//! behaviours (redirect on load failure, reload on return).

use async_trait::async_trait;
use validator::Validate;

use shared::{Enseignant, Entity, Etudiant, Vacataire};
use utilisateurs_client::{ClientResult, CrudGateway, VacataireGateway};

use crate::error::{AdminError, AdminResult};

/// User-facing messages of one entity's screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenText {
    pub load_failed: &'static str,
    pub confirm_delete: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
    pub not_loaded: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
}

const CREATE_FAILED: &str = "Erreur lors de la création";
const UPDATE_FAILED: &str = "Erreur lors de la modification";
const DELETE_FAILED: &str = "Erreur lors de la suppression";

#[async_trait]
pub trait Screen: Entity + Validate {
    /// Gateway the screens talk to
    type Gateway: CrudGateway<Self> + ?Sized;

    const TEXT: ScreenText;

    /// Leave the form for the list when the edited record cannot be loaded
    const REDIRECT_ON_LOAD_FAILURE: bool = false;

    /// Reload the list whenever navigation lands on its path again
    const RELOAD_ON_RETURN: bool = false;

    /// Records shown by the list view
    async fn fetch_list(gateway: &Self::Gateway) -> ClientResult<Vec<Self>> {
        gateway.list().await
    }

    /// Bind one text input to the record
    fn set_field(&mut self, field: &str, value: &str) -> AdminResult<()>;

    fn columns() -> &'static [&'static str];

    /// One display cell per column
    fn cells(&self) -> Vec<String>;

    fn unknown_field(field: &str) -> AdminError {
        AdminError::UnknownField {
            resource: Self::RESOURCE,
            field: field.to_string(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_flag(field: &str, value: &str) -> AdminResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "oui" | "o" | "y" => Ok(true),
        "false" | "0" | "no" | "non" | "n" => Ok(false),
        _ => Err(AdminError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

fn id_cell(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn flag_cell(flag: bool) -> String {
    if flag { "oui" } else { "non" }.to_string()
}

impl Screen for Enseignant {
    type Gateway = dyn CrudGateway<Enseignant>;

    const TEXT: ScreenText = ScreenText {
        load_failed: "Erreur chargement enseignants",
        confirm_delete: "Voulez-vous vraiment supprimer cet enseignant ?",
        deleted: "Enseignant supprimé avec succès",
        delete_failed: DELETE_FAILED,
        not_loaded: "Impossible de charger l'enseignant.",
        create_failed: CREATE_FAILED,
        update_failed: UPDATE_FAILED,
    };

    fn set_field(&mut self, field: &str, value: &str) -> AdminResult<()> {
        match field {
            "nom" => self.nom = value.trim().to_string(),
            "prenom" => self.prenom = value.trim().to_string(),
            "email" => self.email = value.trim().to_string(),
            "telephone" => self.telephone = value.trim().to_string(),
            "matricule" => self.matricule = optional(value),
            "grade" => self.grade = optional(value),
            "actif" => self.actif = parse_flag(field, value)?,
            _ => return Err(Self::unknown_field(field)),
        }
        Ok(())
    }

    fn columns() -> &'static [&'static str] {
        &["id", "nom", "prenom", "email", "telephone", "matricule", "grade", "actif"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            id_cell(self.id),
            self.nom.clone(),
            self.prenom.clone(),
            self.email.clone(),
            self.telephone.clone(),
            self.matricule.clone().unwrap_or_default(),
            self.grade.clone().unwrap_or_default(),
            flag_cell(self.actif),
        ]
    }
}

impl Screen for Etudiant {
    type Gateway = dyn CrudGateway<Etudiant>;

    const TEXT: ScreenText = ScreenText {
        load_failed: "Erreur chargement étudiants",
        confirm_delete: "Voulez-vous vraiment supprimer cet étudiant ?",
        deleted: "Étudiant supprimé avec succès",
        delete_failed: DELETE_FAILED,
        not_loaded: "Impossible de charger l'étudiant.",
        create_failed: CREATE_FAILED,
        update_failed: UPDATE_FAILED,
    };

    fn set_field(&mut self, field: &str, value: &str) -> AdminResult<()> {
        match field {
            "nom" => self.nom = value.trim().to_string(),
            "prenom" => self.prenom = value.trim().to_string(),
            "email" => self.email = value.trim().to_string(),
            "telephone" => self.telephone = optional(value),
            "matricule" => self.matricule = optional(value),
            "photo" => self.photo = optional(value),
            "actif" => self.actif = Some(parse_flag(field, value)?),
            _ => return Err(Self::unknown_field(field)),
        }
        Ok(())
    }

    fn columns() -> &'static [&'static str] {
        &["id", "nom", "prenom", "email", "matricule", "photo"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            id_cell(self.id),
            self.nom.clone(),
            self.prenom.clone(),
            self.email.clone(),
            self.matricule.clone().unwrap_or_default(),
            self.photo.clone().unwrap_or_default(),
        ]
    }
}

#[async_trait]
impl Screen for Vacataire {
    type Gateway = dyn VacataireGateway;

    const TEXT: ScreenText = ScreenText {
        load_failed: "Erreur chargement vacataires",
        confirm_delete: "Voulez-vous vraiment supprimer ce vacataire ?",
        deleted: "Vacataire supprimé avec succès",
        delete_failed: DELETE_FAILED,
        not_loaded: "Vacataire introuvable ou supprimé.",
        create_failed: CREATE_FAILED,
        update_failed: UPDATE_FAILED,
    };

    const REDIRECT_ON_LOAD_FAILURE: bool = true;
    const RELOAD_ON_RETURN: bool = true;

    async fn fetch_list(gateway: &Self::Gateway) -> ClientResult<Vec<Self>> {
        gateway.list_including_inactive().await
    }

    fn set_field(&mut self, field: &str, value: &str) -> AdminResult<()> {
        match field {
            "nom" => self.nom = value.trim().to_string(),
            "prenom" => self.prenom = value.trim().to_string(),
            "email" => self.email = value.trim().to_string(),
            "telephone" => self.telephone = value.trim().to_string(),
            "specialite" => self.specialite = optional(value),
            "actif" => self.actif = parse_flag(field, value)?,
            _ => return Err(Self::unknown_field(field)),
        }
        Ok(())
    }

    fn columns() -> &'static [&'static str] {
        &["id", "nom", "prenom", "email", "telephone", "specialite", "actif"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            id_cell(self.id),
            self.nom.clone(),
            self.prenom.clone(),
            self.email.clone(),
            self.telephone.clone(),
            self.specialite.clone().unwrap_or_default(),
            flag_cell(self.actif),
        ]
    }
}
