//! Shared error type across osgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Requester is not allowed to use the gateway.
    AccessDenied,
    /// Query matched a sensitive-data policy category.
    Blocked,
    /// Rate limited.
    RateLimited,
    /// Referenced report does not exist.
    NotFound,
    /// Lookup collaborator reported failure.
    LookupFailed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in user-facing responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::AccessDenied => "ACCESS_DENIED",
            ClientCode::Blocked => "BLOCKED",
            ClientCode::RateLimited => "RATE_LIMITED",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::LookupFailed => "LOOKUP_FAILED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GateError>;

/// Unified error type used by core and gateway.
///
/// Policy blocks, throttling, and report-store misses are NOT errors; they
/// surface as first-class outcome values. This enum covers genuine failures
/// only: malformed configuration, unknown lookup kinds, collaborator failures.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("lookup failed: {0}")]
    LookupFailed(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl GateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            GateError::BadRequest(_) => ClientCode::BadRequest,
            GateError::AccessDenied(_) => ClientCode::AccessDenied,
            GateError::LookupFailed(_) => ClientCode::LookupFailed,
            GateError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            GateError::Internal(_) => ClientCode::Internal,
        }
    }
}
