//! Shared error type across statsbeam crates.

use thiserror::Error;

/// Stable error codes (used by tests and by callers that log failures).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Missing or invalid configuration.
    InvalidConfiguration,
    /// Endpoint resolution or socket setup failed.
    Transport,
    /// Encoded datagram exceeds the packet limit.
    PayloadTooLarge,
    /// Sample cannot be encoded (reserved characters, empty name).
    BadRequest,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfiguration => "INVALID_CONFIGURATION",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::BadRequest => "BAD_REQUEST",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("invalid configuration: {field}")]
    InvalidConfiguration { field: String },
    #[error("transport: {0}")]
    Transport(String),
    #[error("datagram too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: usize, max: usize },
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl StatsError {
    /// Shorthand for a configuration error naming the offending field.
    pub fn invalid_config(field: impl Into<String>) -> Self {
        StatsError::InvalidConfiguration {
            field: field.into(),
        }
    }

    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            StatsError::InvalidConfiguration { .. } => ErrorCode::InvalidConfiguration,
            StatsError::Transport(_) => ErrorCode::Transport,
            StatsError::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
            StatsError::BadRequest(_) => ErrorCode::BadRequest,
        }
    }
}
