//! HTTP transports
//!
//! `NetworkHttpClient` talks to a remote server; `OneshotHttpClient`
//! (feature "in-process") drives an axum Router in memory.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
