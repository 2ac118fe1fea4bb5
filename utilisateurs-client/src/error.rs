//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure or request construction error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response not yet classified by the calling operation
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Record does not exist (404 on a by-id fetch)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Payload rejected by the server (4xx on a write)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure taxonomy seen by callers of a gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure, 5xx, or any status the operation does not map
    Transport,
    NotFound,
    Validation,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::NotFound(_) => ErrorKind::NotFound,
            ClientError::Validation(_) => ErrorKind::Validation,
            _ => ErrorKind::Transport,
        }
    }

    /// Classify for a by-id fetch: 404 means the record is gone
    pub(crate) fn for_fetch_by_id(self) -> Self {
        match self {
            ClientError::Status { status: 404, body } => ClientError::NotFound(body),
            other => other,
        }
    }

    /// Classify for create/update: any 4xx is a rejected payload
    pub(crate) fn for_write(self) -> Self {
        match self {
            ClientError::Status { status, body } if (400..500).contains(&status) => {
                ClientError::Validation(body)
            }
            other => other,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
