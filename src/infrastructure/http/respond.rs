use super::sink::AxumSink;
use crate::domain::Intent;
use crate::responder::ResponseHelper;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::convert::Infallible;
use std::fmt::Display;

/// Extractor that answers the current request with an envelope.
///
/// Requires `ResponseHelper: FromRef<S>` for the router state. Each method
/// consumes the extractor, so a handler can only respond once:
///
/// ```ignore
/// async fn get_item(respond: Respond, Path(id): Path<String>) -> Response {
///     match lookup(&id) {
///         Some(item) => respond.success(item),
///         None => respond.not_found("Item not found"),
///     }
/// }
/// ```
pub struct Respond {
    // ---
    helper: ResponseHelper,
    sink: AxumSink,
}

impl<S> FromRequestParts<S> for Respond
where
    ResponseHelper: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // ---
        Ok(Respond {
            helper: ResponseHelper::from_ref(state),
            sink: AxumSink::from_parts(parts),
        })
    }
}

impl Respond {
    // ---
    fn finish(mut self, write: impl FnOnce(&ResponseHelper, &mut AxumSink)) -> Response {
        write(&self.helper, &mut self.sink);
        self.sink.into_response()
    }

    /// Responds with an arbitrary [`Intent`].
    pub fn intent(self, intent: Intent) -> Response {
        self.finish(|h, s| h.send(s, intent))
    }

    pub fn bad_request(self, message: impl Into<String>, details: impl Into<String>) -> Response {
        self.finish(|h, s| h.bad_request(s, message, details))
    }

    pub fn unauthorized(self, message: impl Into<String>) -> Response {
        self.finish(|h, s| h.unauthorized(s, message))
    }

    pub fn forbidden(self, message: impl Into<String>) -> Response {
        self.finish(|h, s| h.forbidden(s, message))
    }

    pub fn not_found(self, message: impl Into<String>) -> Response {
        self.finish(|h, s| h.not_found(s, message))
    }

    pub fn conflict(self, message: impl Into<String>, err: impl Display) -> Response {
        self.finish(|h, s| h.conflict(s, message, err))
    }

    pub fn already_exists(self, resource: &str, err: impl Display) -> Response {
        self.finish(|h, s| h.already_exists(s, resource, err))
    }

    pub fn internal_error(self, message: impl Into<String>, err: impl Display) -> Response {
        self.finish(|h, s| h.internal_error(s, message, err))
    }

    pub fn success(self, data: impl Serialize) -> Response {
        self.finish(|h, s| h.success(s, data))
    }

    pub fn success_with_pagination(
        self,
        data: impl Serialize,
        pagination: impl Serialize,
    ) -> Response {
        self.finish(|h, s| h.success_with_pagination(s, data, pagination))
    }

    pub fn created(self, data: impl Serialize) -> Response {
        self.finish(|h, s| h.created(s, data))
    }

    pub fn deleted(self, noun: impl Into<String>) -> Response {
        self.finish(|h, s| h.deleted(s, noun))
    }

    pub fn no_content(self) -> Response {
        self.finish(|h, s| h.no_content(s))
    }
}
