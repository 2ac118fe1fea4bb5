//! CRUD gateways
//!
//! One gateway per entity type over `{api_root}/{resource}`. Each call is
//! fire-once: no retry, no deduplication, the caller decides what to do
//! with a failure.

mod vacataire;

pub use vacataire::VacataireGateway;

use async_trait::async_trait;
use std::marker::PhantomData;

use shared::{Enseignant, Entity, Etudiant, Vacataire};

use crate::client::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientResult};

/// Typed create/read/update/delete access for one entity type
#[async_trait]
pub trait CrudGateway<E: Entity>: Send + Sync {
    /// `GET /{resource}`
    async fn list(&self) -> ClientResult<Vec<E>>;
    /// `GET /{resource}/{id}`, 404 surfaces as `NotFound`
    async fn get(&self, id: i64) -> ClientResult<E>;
    /// `POST /{resource}`, the id (if any) is stripped from the payload
    async fn create(&self, entity: &E) -> ClientResult<E>;
    /// `PUT /{resource}/{id}`, full replace
    async fn update(&self, id: i64, entity: &E) -> ClientResult<E>;
    /// `DELETE /{resource}/{id}`
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// REST implementation of the gateways over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct RestGateway<E, H> {
    http: H,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, H: HttpClient> RestGateway<E, H> {
    pub fn new(http: H) -> Self {
        Self {
            http,
            _entity: PhantomData,
        }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub(crate) fn collection_path() -> &'static str {
        E::RESOURCE.as_str()
    }

    pub(crate) fn item_path(id: i64) -> String {
        format!("{}/{}", E::RESOURCE.as_str(), id)
    }
}

/// Log the outcome of one gateway call
pub(crate) fn traced<T>(
    result: ClientResult<T>,
    method: &'static str,
    path: &str,
) -> ClientResult<T> {
    match &result {
        Ok(_) => tracing::debug!(method, path, "gateway call succeeded"),
        Err(e) => tracing::warn!(method, path, kind = ?e.kind(), error = %e, "gateway call failed"),
    }
    result
}

#[async_trait]
impl<E: Entity, H: HttpClient> CrudGateway<E> for RestGateway<E, H> {
    async fn list(&self) -> ClientResult<Vec<E>> {
        let path = Self::collection_path();
        traced(self.http.get(path).await, "GET", path)
    }

    async fn get(&self, id: i64) -> ClientResult<E> {
        let path = Self::item_path(id);
        let result = self.http.get(&path).await.map_err(|e| e.for_fetch_by_id());
        traced(result, "GET", &path)
    }

    async fn create(&self, entity: &E) -> ClientResult<E> {
        let path = Self::collection_path();
        let mut payload = entity.clone();
        payload.set_id(None);
        let result = self.http.post(path, &payload).await.map_err(|e| e.for_write());
        traced(result, "POST", path)
    }

    async fn update(&self, id: i64, entity: &E) -> ClientResult<E> {
        let path = Self::item_path(id);
        let result = self.http.put(&path, entity).await.map_err(|e| e.for_write());
        traced(result, "PUT", &path)
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        let path = Self::item_path(id);
        traced(self.http.delete(&path).await, "DELETE", &path)
    }
}

/// The three gateways sharing one transport
#[derive(Debug, Clone)]
pub struct Gateways<H> {
    pub enseignants: RestGateway<Enseignant, H>,
    pub etudiants: RestGateway<Etudiant, H>,
    pub vacataires: RestGateway<Vacataire, H>,
}

impl<H: HttpClient + Clone> Gateways<H> {
    pub fn new(http: H) -> Self {
        Self {
            enseignants: RestGateway::new(http.clone()),
            etudiants: RestGateway::new(http.clone()),
            vacataires: RestGateway::new(http),
        }
    }
}

impl Gateways<NetworkHttpClient> {
    /// Build network gateways from configuration
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        tracing::info!(api = config.api_root(), "Creating REST gateways");
        Ok(Self::new(NetworkHttpClient::new(config)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        assert_eq!(RestGateway::<Enseignant, NetworkHttpClient>::collection_path(), "enseignants");
        assert_eq!(RestGateway::<Etudiant, NetworkHttpClient>::item_path(12), "etudiants/12");
        assert_eq!(RestGateway::<Vacataire, NetworkHttpClient>::item_path(1), "vacataires/1");
    }
}
