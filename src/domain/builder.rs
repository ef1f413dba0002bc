//! Pure mapping from an [`Intent`] and request meta to a status + envelope.

use super::envelope::{Envelope, ErrorBody, ErrorStatus};
use super::intent::{Intent, DELETED_SUFFIX};
use anyhow::anyhow;
use axum::http::StatusCode;
use serde_json::Value;
use std::str::FromStr;

/// Whether 500 responses expose the underlying error text in `error.details`.
///
/// Client-error intents are unaffected: their details are always supplied
/// explicitly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsPolicy {
    // ---
    /// Echo the error text into `error.details`.
    PassThrough,

    /// Omit `error.details` from 500 responses.
    Redact,
}

impl FromStr for DetailsPolicy {
    // ---
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // ---
        match s.trim().to_ascii_lowercase().as_str() {
            "passthrough" | "pass-through" | "pass_through" => Ok(DetailsPolicy::PassThrough),
            "redact" => Ok(DetailsPolicy::Redact),
            other => Err(anyhow!(
                "unknown details policy '{other}' (expected 'redact' or 'passthrough')"
            )),
        }
    }
}

/// A built response: the HTTP status and the envelope to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub envelope: Envelope,
}

/// Builds envelopes. Holds no per-request state.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeBuilder {
    policy: DetailsPolicy,
}

impl EnvelopeBuilder {
    // ---
    pub fn new(policy: DetailsPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DetailsPolicy {
        self.policy
    }

    /// Maps `intent` to its status and envelope, attaching `meta` verbatim.
    pub fn build(&self, intent: Intent, meta: Option<Value>) -> Reply {
        // ---
        let status = intent.status();

        let envelope = match intent {
            Intent::BadRequest { message, details } => Envelope::failure(
                ErrorBody::new(ErrorStatus::BadRequest, message, Some(details)),
                meta,
            ),
            Intent::Unauthorized { message } => Envelope::failure(
                ErrorBody::new(ErrorStatus::Unauthorized, message, None),
                meta,
            ),
            Intent::Forbidden { message } => Envelope::failure(
                ErrorBody::new(ErrorStatus::Forbidden, message, None),
                meta,
            ),
            Intent::NotFound { message } => Envelope::failure(
                ErrorBody::new(ErrorStatus::NotFound, message, None),
                meta,
            ),
            Intent::Conflict { message, details } => Envelope::failure(
                ErrorBody::new(ErrorStatus::Conflict, message, Some(details)),
                meta,
            ),
            Intent::InternalError { message, details } => {
                let details = match self.policy {
                    DetailsPolicy::PassThrough => Some(details),
                    DetailsPolicy::Redact => None,
                };
                let mut envelope = Envelope::failure(
                    ErrorBody::new(ErrorStatus::InternalServerError, message, details),
                    meta,
                );
                envelope.data = Some(Value::Null);
                envelope
            }
            Intent::Success { data } | Intent::Created { data } => Envelope::ok(data, meta),
            Intent::SuccessWithPagination { data, pagination } => {
                let mut envelope = Envelope::ok(data, meta);
                envelope.pagination = Some(pagination);
                envelope
            }
            Intent::Deleted { noun } => Envelope {
                success: true,
                data: None,
                error: None,
                pagination: None,
                message: Some(format!("{noun}{DELETED_SUFFIX}")),
                meta,
            },
            Intent::NoContent => Envelope::ok(Value::Null, meta),
        };

        Reply { status, envelope }
    }
}
