//! Response intents.
//!
//! One variant per kind of response a handler can send. The intent decides
//! the HTTP status and the envelope shape; see [`EnvelopeBuilder`].
//!
//! [`EnvelopeBuilder`]: super::EnvelopeBuilder

use axum::http::StatusCode;
use serde_json::Value;
use std::fmt::Display;

/// Suffix appended to the noun passed to [`Intent::deleted`].
pub const DELETED_SUFFIX: &str = " deleted successfully";

/// Suffix appended to the resource passed to [`Intent::already_exists`].
pub const ALREADY_EXISTS_SUFFIX: &str = " already exists";

/// The semantic category of a response.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    // ---
    BadRequest { message: String, details: String },
    Unauthorized { message: String },
    Forbidden { message: String },
    NotFound { message: String },
    Conflict { message: String, details: String },
    InternalError { message: String, details: String },
    Success { data: Value },
    SuccessWithPagination { data: Value, pagination: Value },
    Created { data: Value },
    Deleted { noun: String },
    NoContent,
}

impl Intent {
    // ---
    pub fn bad_request(message: impl Into<String>, details: impl Into<String>) -> Self {
        Intent::BadRequest {
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Intent::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Intent::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Intent::NotFound {
            message: message.into(),
        }
    }

    /// 409 with the error's text as `details`.
    pub fn conflict(message: impl Into<String>, err: impl Display) -> Self {
        Intent::Conflict {
            message: message.into(),
            details: err.to_string(),
        }
    }

    /// Shorthand for `conflict("<resource> already exists", err)`.
    pub fn already_exists(resource: &str, err: impl Display) -> Self {
        Intent::conflict(format!("{resource}{ALREADY_EXISTS_SUFFIX}"), err)
    }

    /// 500 with the error's text as `details`, subject to the builder's
    /// [`DetailsPolicy`](super::DetailsPolicy).
    pub fn internal_error(message: impl Into<String>, err: impl Display) -> Self {
        Intent::InternalError {
            message: message.into(),
            details: err.to_string(),
        }
    }

    pub fn success(data: Value) -> Self {
        Intent::Success { data }
    }

    pub fn success_with_pagination(data: Value, pagination: Value) -> Self {
        Intent::SuccessWithPagination { data, pagination }
    }

    pub fn created(data: Value) -> Self {
        Intent::Created { data }
    }

    pub fn deleted(noun: impl Into<String>) -> Self {
        Intent::Deleted { noun: noun.into() }
    }

    pub fn no_content() -> Self {
        Intent::NoContent
    }

    /// HTTP status written for this intent.
    pub fn status(&self) -> StatusCode {
        // ---
        match self {
            Intent::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Intent::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Intent::Forbidden { .. } => StatusCode::FORBIDDEN,
            Intent::NotFound { .. } => StatusCode::NOT_FOUND,
            Intent::Conflict { .. } => StatusCode::CONFLICT,
            Intent::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Intent::Success { .. } | Intent::SuccessWithPagination { .. } => StatusCode::OK,
            Intent::Created { .. } => StatusCode::CREATED,
            Intent::Deleted { .. } => StatusCode::OK,
            Intent::NoContent => StatusCode::NO_CONTENT,
        }
    }

    /// Stable label used for logs and metrics.
    pub fn name(&self) -> &'static str {
        // ---
        match self {
            Intent::BadRequest { .. } => "bad_request",
            Intent::Unauthorized { .. } => "unauthorized",
            Intent::Forbidden { .. } => "forbidden",
            Intent::NotFound { .. } => "not_found",
            Intent::Conflict { .. } => "conflict",
            Intent::InternalError { .. } => "internal_error",
            Intent::Success { .. } => "success",
            Intent::SuccessWithPagination { .. } => "success_with_pagination",
            Intent::Created { .. } => "created",
            Intent::Deleted { .. } => "deleted",
            Intent::NoContent => "no_content",
        }
    }

    /// True for the 2xx family.
    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::json;

    #[test]
    fn already_exists_is_a_conflict_on_the_resource() {
        // ---
        let intent = Intent::already_exists("User", "duplicate key");
        assert_eq!(
            intent,
            Intent::Conflict {
                message: "User already exists".to_string(),
                details: "duplicate key".to_string(),
            }
        );
        assert_eq!(intent.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn statuses_match_intents() {
        // ---
        let cases = [
            (Intent::bad_request("m", "d"), 400),
            (Intent::unauthorized("m"), 401),
            (Intent::forbidden("m"), 403),
            (Intent::not_found("m"), 404),
            (Intent::conflict("m", "e"), 409),
            (Intent::internal_error("m", "e"), 500),
            (Intent::success(json!(1)), 200),
            (Intent::success_with_pagination(json!([]), json!({})), 200),
            (Intent::created(json!(1)), 201),
            (Intent::deleted("x"), 200),
            (Intent::no_content(), 204),
        ];

        for (intent, expected) in cases {
            assert_eq!(intent.status().as_u16(), expected, "{}", intent.name());
        }
    }

    #[test]
    fn conflict_takes_any_display_error() {
        // ---
        let err = anyhow::anyhow!("row locked");
        let intent = Intent::conflict("Cannot update", err);
        assert!(matches!(intent, Intent::Conflict { ref details, .. } if details == "row locked"));
    }
}
