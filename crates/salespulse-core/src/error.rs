//! Shared error type across SalesPulse crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Requested entity does not exist.
    NotFound,
    /// Unsupported config/schema version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SalesPulseError>;

/// Unified error type used by core and the API service.
#[derive(Debug, Error)]
pub enum SalesPulseError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SalesPulseError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SalesPulseError::BadRequest(_) => ClientCode::BadRequest,
            SalesPulseError::NotFound(_) => ClientCode::NotFound,
            SalesPulseError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SalesPulseError::Internal(_) => ClientCode::Internal,
        }
    }
}
