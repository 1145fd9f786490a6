//! Per-request correlation identifier.
//!
//! [`set_request_id`] mints a [`RequestId`] for every inbound request and
//! stores it in the request extensions. The extension slot is keyed by the
//! `RequestId` type itself, and since its constructor is private to this
//! module, nothing outside the pipeline can mint or collide with one.
//!
//! The rest of the pipeline runs inside a `request` tracing span carrying
//! the same `request_id`, so every log line emitted while serving the
//! request is tagged with it.

use std::fmt;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Request};
use axum::http::HeaderValue;
use axum::http::request::Parts;
use tracing::Instrument;
use uuid::Uuid;

use super::{Handler, handler_fn};
use crate::error::ApiError;

/// Response header echoing the request's correlation identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation identifier for one inbound request.
///
/// A random UUID v4 rendered in its canonical hyphenated form. Minted once
/// per request by [`set_request_id`]; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the identifier stored on `req`, if [`set_request_id`] ran.
    #[must_use]
    pub fn of(req: &Request) -> Option<Self> {
        req.extensions().get::<Self>().copied()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Self>().copied().ok_or_else(|| {
            ApiError::Internal("request ID missing; set_request_id is not in the chain".to_string())
        })
    }
}

/// Stage that tags the request with a fresh [`RequestId`].
///
/// Any identifier already present is replaced, so downstream stages see
/// exactly one. The identifier is also returned to the client in the
/// [`REQUEST_ID_HEADER`] response header.
pub fn set_request_id(next: Handler) -> Handler {
    handler_fn(move |mut req: Request| {
        let next = Arc::clone(&next);
        async move {
            let id = RequestId::new();
            tracing::debug!(request_id = %id, "setting request ID");

            let span = tracing::info_span!("request", request_id = %id);
            req.extensions_mut().insert(id);

            let mut response = next(req).instrument(span).await;
            if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
                response.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            response
        }
    })
}
