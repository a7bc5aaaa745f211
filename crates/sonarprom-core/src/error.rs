//! Shared error type across sonarprom crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// The code-quality server could not be listed or queried.
    Upstream,
    /// Unsupported configuration version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Upstream => "UPSTREAM",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SonarPromError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum SonarPromError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("upstream: {0}")]
    Upstream(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SonarPromError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SonarPromError::BadRequest(_) => ClientCode::BadRequest,
            SonarPromError::Upstream(_) => ClientCode::Upstream,
            SonarPromError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SonarPromError::Internal(_) => ClientCode::Internal,
        }
    }
}
