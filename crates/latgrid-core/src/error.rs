//! Shared error type across latgrid crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LatGridError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum LatGridError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("dataset: {0}")]
    Dataset(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl LatGridError {
    /// Map internal error to a stable client-facing code.
    ///
    /// Dataset faults are startup-fatal and never reach a client as such;
    /// they fold into `Internal` if one ever does.
    pub fn client_code(&self) -> ClientCode {
        match self {
            LatGridError::BadRequest(_) => ClientCode::BadRequest,
            LatGridError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            LatGridError::Dataset(_) => ClientCode::Internal,
            LatGridError::Internal(_) => ClientCode::Internal,
        }
    }
}
