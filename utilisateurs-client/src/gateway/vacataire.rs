//! Vacataire lifecycle endpoints

use async_trait::async_trait;
use serde_json::json;

use shared::Vacataire;

use super::{CrudGateway, RestGateway, traced};
use crate::ClientResult;
use crate::client::HttpClient;

/// Vacataire gateway: CRUD plus the two state transitions and the
/// unfiltered listing
///
/// `actif` is never flipped through `update`; these endpoints own it.
#[async_trait]
pub trait VacataireGateway: CrudGateway<Vacataire> {
    /// `GET /vacataires/all` (active and inactive)
    async fn list_including_inactive(&self) -> ClientResult<Vec<Vacataire>>;
    /// `POST /vacataires/{id}/reactiver`
    async fn activate(&self, id: i64) -> ClientResult<Vacataire>;
    /// `POST /vacataires/{id}/desactiver`
    async fn deactivate(&self, id: i64) -> ClientResult<Vacataire>;
}

#[async_trait]
impl<H: HttpClient> VacataireGateway for RestGateway<Vacataire, H> {
    async fn list_including_inactive(&self) -> ClientResult<Vec<Vacataire>> {
        let path = format!("{}/all", Self::collection_path());
        traced(self.http().get(&path).await, "GET", &path)
    }

    async fn activate(&self, id: i64) -> ClientResult<Vacataire> {
        let path = format!("{}/reactiver", Self::item_path(id));
        traced(self.http().post(&path, &json!({})).await, "POST", &path)
    }

    async fn deactivate(&self, id: i64) -> ClientResult<Vacataire> {
        let path = format!("{}/desactiver", Self::item_path(id));
        traced(self.http().post(&path, &json!({})).await, "POST", &path)
    }
}
