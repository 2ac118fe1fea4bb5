//! Utilisateurs Client - REST gateways for the utilisateurs API
//!
//! One typed CRUD gateway per entity over a pluggable HTTP transport.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;

pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use gateway::{CrudGateway, Gateways, RestGateway, VacataireGateway};

// Re-export shared types for convenience
pub use shared::{Enseignant, Entity, Etudiant, Resource, Vacataire};
