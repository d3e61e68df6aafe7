//! # API Error Type
//!
//! What the console writes back when a command line fails.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  stdin line                                                             │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  serde_json::from_str::<Command> ── Err ──► MALFORMED_COMMAND ───┐      │
//! │     │                                                            │      │
//! │     ▼                                                            │      │
//! │  Coordinator::dispatch                                           │      │
//! │     ├── StoreError::Denied ────────────────► DENIED ─────────────┤      │
//! │     ├── StoreError::NotFound ──────────────► NOT_FOUND ──────────┤      │
//! │     ├── StoreError::InvalidInput ──────────► VALIDATION_ERROR ───┤      │
//! │     │                                                            ▼      │
//! │     └── Ok(outcome) ──► {"ok":true,...}      {"ok":false,"error":{...}} │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_core::StoreError;

/// Error body of a failed response.
///
/// ## Serialization
/// ```json
/// {
///   "code": "DENIED",
///   "message": "addProduct denied: role 'user' may not perform this operation"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for console responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The gate rejected the command
    Denied,

    /// Referenced product or cart line does not exist
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The line was not a valid command
    MalformedCommand,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::MalformedCommand, message)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let code = match err {
            StoreError::Denied { .. } => ErrorCode::Denied,
            StoreError::NotFound { .. } => ErrorCode::NotFound,
            StoreError::InvalidInput(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::malformed(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
