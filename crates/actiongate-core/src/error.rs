//! Shared error type across actiongate crates.

use thiserror::Error;

/// Admin-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCode {
    /// Malformed channel/resource/principal input.
    InvalidInput,
    /// Configuration document failed to parse or validate.
    BadConfig,
    /// Unsupported configuration document version.
    UnsupportedVersion,
    /// No store registered for the agent.
    UnknownAgent,
    /// Internal error.
    Internal,
}

impl AdminCode {
    /// String representation used in tooling output and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            AdminCode::InvalidInput => "INVALID_INPUT",
            AdminCode::BadConfig => "BAD_CONFIG",
            AdminCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            AdminCode::UnknownAgent => "UNKNOWN_AGENT",
            AdminCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GateError>;

/// Unified error type used by core and engine.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("unknown agent: {0}")]
    UnknownAgent(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl GateError {
    /// Map internal error to a stable admin-facing code.
    pub fn admin_code(&self) -> AdminCode {
        match self {
            GateError::InvalidInput(_) => AdminCode::InvalidInput,
            GateError::BadConfig(_) => AdminCode::BadConfig,
            GateError::UnsupportedVersion => AdminCode::UnsupportedVersion,
            GateError::UnknownAgent(_) => AdminCode::UnknownAgent,
            GateError::Internal(_) => AdminCode::Internal,
        }
    }
}
