// Error taxonomy for the registration service

use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Failures surfaced by the registration service operations.
///
/// Everything except `Internal` is a domain outcome with a fixed client-facing
/// message; `Internal` wraps unexpected faults and is never shown verbatim.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Duplicate identity at account creation
    #[error("User already exists")]
    Conflict,

    /// Unknown login or wrong password, never distinguished
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No user with the given username
    #[error("User not found")]
    UserNotFound,

    /// No event with the given id
    #[error("Event not found")]
    EventNotFound,

    /// Unparseable identifier; reported distinctly, not folded into not-found
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    /// Create a malformed-input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        ServiceError::MalformedInput(msg.into())
    }
}
