//! Admin error types

use thiserror::Error;

use shared::Resource;

/// Errors raised outside the controller boundary: setup, routing and
/// field binding. Gateway failures inside controllers become
/// notifications instead.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Unknown field '{field}' for {resource}")]
    UnknownField { resource: Resource, field: String },

    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidValue { field: String, value: String },

    #[error("Route {0} does not open this form")]
    InvalidRoute(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AdminResult<T> = Result<T, AdminError>;
