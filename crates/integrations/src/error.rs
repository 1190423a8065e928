//! Integration error types.

use thiserror::Error;

/// Errors raised by an external collaborator.
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// The backend has no configuration; the payload names the service.
    #[error("{0} not configured")]
    NotConfigured(&'static str),

    /// The backend was reached but failed.
    #[error("{0}")]
    Backend(String),
}

/// Convenience type alias for integration results.
pub type Result<T> = std::result::Result<T, IntegrationError>;
