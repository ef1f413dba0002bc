//! The response envelope written for every API response.
//!
//! Every body produced by this crate has the same outer shape: a `success`
//! flag, then either `data` (2xx) or `error` (4xx/5xx), plus the per-request
//! `meta` value when upstream middleware provided one.
//!
//! ```json
//! {
//!   "success": false,
//!   "error": {
//!     "code": 400,
//!     "status": "BAD_REQUEST",
//!     "message": "Invalid input",
//!     "details": "The 'name' field is required."
//!   },
//!   "meta": { "requestId": "...", "timestamp": "2025-01-01T00:00:00Z" }
//! }
//! ```

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// Fixed status names used in the `error.status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorStatus {
    // ---
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    InternalServerError,
}

impl ErrorStatus {
    // ---
    /// HTTP status code paired with this error family.
    pub fn status_code(self) -> StatusCode {
        // ---
        match self {
            ErrorStatus::BadRequest => StatusCode::BAD_REQUEST,
            ErrorStatus::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorStatus::Forbidden => StatusCode::FORBIDDEN,
            ErrorStatus::NotFound => StatusCode::NOT_FOUND,
            ErrorStatus::Conflict => StatusCode::CONFLICT,
            ErrorStatus::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The `error` object of a failed response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    // ---
    /// Numeric HTTP status, duplicated in the body for clients that only see JSON.
    pub code: u16,

    pub status: ErrorStatus,

    /// Short, caller-supplied description of the failure.
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    // ---
    pub fn new(status: ErrorStatus, message: String, details: Option<String>) -> Self {
        // ---
        Self {
            code: status.status_code().as_u16(),
            status,
            message,
            details,
        }
    }
}

/// Canonical JSON envelope.
///
/// `data` is tri-state on the wire: `None` omits the field, `Some(Value::Null)`
/// writes an explicit `null` (internal-error and no-content responses).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    // ---
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Envelope {
    // ---
    /// Success-family envelope carrying `data`.
    pub fn ok(data: Value, meta: Option<Value>) -> Self {
        // ---
        Self {
            success: true,
            data: Some(data),
            error: None,
            pagination: None,
            message: None,
            meta,
        }
    }

    /// Error-family envelope without a `data` field.
    pub fn failure(error: ErrorBody, meta: Option<Value>) -> Self {
        // ---
        Self {
            success: false,
            data: None,
            error: Some(error),
            pagination: None,
            message: None,
            meta,
        }
    }
}
