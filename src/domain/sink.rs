use super::envelope::Envelope;
use axum::http::StatusCode;
use serde_json::Value;

/// The transport capability a response is written into.
///
/// Implementations expose exactly two things: the request-scoped meta value
/// (if upstream middleware set one) and a single status + JSON body write.
/// See `AxumSink` for the Axum binding.
pub trait ResponseSink {
    // ---
    /// Correlation metadata for the current request, or `None` if never set.
    fn meta(&self) -> Option<Value>;

    /// Writes the response. Called once per request.
    fn write_json(&mut self, status: StatusCode, envelope: Envelope);
}
